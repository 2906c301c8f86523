// GraphQL surface: schema assembly, the per-request Actor, and the GraphiQL page.

use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, ErrorExtensions, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension,
    response::{Html, IntoResponse},
};

pub use crate::modules::time_records::use_cases::punch::inbound::graphql::MutationRoot;
pub use crate::modules::time_records::use_cases::query_time_records::inbound::graphql::QueryRoot;
use crate::shared::core::errors::ApplicationError;
use crate::shell::identity::CurrentActor;
pub use crate::shell::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

/// Carries the error kind as the `code` extension.
pub fn gql_error(error: ApplicationError) -> async_graphql::Error {
    let code = error.kind();
    async_graphql::Error::new(error.message()).extend_with(|_, extensions| {
        extensions.set("code", code);
    })
}

pub async fn graphql_handler(
    Extension(schema): Extension<AppSchema>,
    CurrentActor(actor): CurrentActor,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner().data(actor)).await.into()
}

pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
