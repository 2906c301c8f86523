// HTTP surface.
//
// - One route per use case handler, all sharing AppState.
// - ApplicationError maps to a status and a `{ error, message }` body.
// - Malformed JSON bodies are 422.

use axum::{
    Extension, Json, Router,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::modules::time_records::use_cases::admin_corrections::inbound::http as corrections_http;
use crate::modules::time_records::use_cases::punch::inbound::http as punch_http;
use crate::modules::time_records::use_cases::query_time_records::inbound::http as query_http;
use crate::shared::core::errors::ApplicationError;
use crate::shell::graphql;
use crate::shell::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

pub fn status_of(error: &ApplicationError) -> StatusCode {
    match error {
        ApplicationError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        ApplicationError::Conflict(_) => StatusCode::CONFLICT,
        ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
        ApplicationError::PermissionDenied(_) => StatusCode::FORBIDDEN,
        ApplicationError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        (
            status_of(&self),
            Json(ErrorBody::new(self.kind(), self.message())),
        )
            .into_response()
    }
}

pub fn unprocessable(rejection: JsonRejection) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorBody::new("unprocessable_entity", rejection.body_text())),
    )
        .into_response()
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

pub fn router(state: AppState) -> Router {
    let schema = graphql::build_schema(state.clone());
    Router::new()
        .route("/health", get(health))
        .route("/time-records/punch", post(punch_http::handle))
        .route("/time-records/me", get(query_http::list_mine))
        .route("/time-records/me/{date}", get(query_http::find_mine_by_day))
        .route(
            "/time-records",
            get(query_http::list_company).post(corrections_http::create),
        )
        .route(
            "/time-records/{id}",
            get(query_http::find_in_company).delete(corrections_http::delete),
        )
        .route(
            "/time-records/{id}/clock-out",
            patch(corrections_http::set_clock_out),
        )
        .route("/time-records/{id}/breaks", post(corrections_http::add_break))
        .route(
            "/time-records/{id}/breaks/{break_id}",
            patch(corrections_http::edit_break),
        )
        .route(
            "/graphql",
            get(graphql::graphiql).post(graphql::graphql_handler),
        )
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod shell_http_tests {
    use super::*;
    use crate::tests::fixtures::apps::TestApp;
    use crate::tests::fixtures::{ADMIN_A, USER_U};
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use rstest::rstest;
    use tower::ServiceExt;

    #[rstest]
    #[case(ApplicationError::InvalidArgument("x".into()), StatusCode::BAD_REQUEST)]
    #[case(ApplicationError::Conflict("x".into()), StatusCode::CONFLICT)]
    #[case(ApplicationError::NotFound("x".into()), StatusCode::NOT_FOUND)]
    #[case(ApplicationError::PermissionDenied("x".into()), StatusCode::FORBIDDEN)]
    #[case(ApplicationError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR)]
    fn it_should_map_each_error_kind_to_a_status(
        #[case] error: ApplicationError,
        #[case] status: StatusCode,
    ) {
        assert_eq!(error.into_response().status(), status);
    }

    #[tokio::test]
    async fn it_should_answer_health_without_identity() {
        let app = TestApp::seeded().await;
        let response = app
            .router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "ok" }));
    }

    #[rstest]
    #[case(None)]
    #[case(Some("not-a-uuid"))]
    #[case(Some("00000000-0000-0000-0000-00000000ffff"))]
    #[tokio::test]
    async fn it_should_return_401_without_a_known_user(#[case] header: Option<&str>) {
        let app = TestApp::seeded().await;
        let mut request = Request::get("/time-records/me");
        if let Some(header) = header {
            request = request.header("x-user-id", header);
        }
        let response = app
            .router()
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn it_should_return_403_on_admin_routes_for_plain_users() {
        let app = TestApp::seeded().await;
        let response = app
            .router()
            .oneshot(
                Request::get("/time-records")
                    .header("x-user-id", USER_U.to_string())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "permission_denied");
    }

    #[tokio::test]
    async fn it_should_return_400_for_an_unparseable_record_id() {
        let app = TestApp::seeded().await;
        let response = app
            .router()
            .oneshot(
                Request::get("/time-records/not-a-uuid")
                    .header("x-user-id", ADMIN_A.to_string())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
