// Composition root of the time records service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the adapters and wire them into the use case handlers.
// - Expose the HTTP router and the GraphQL schema.

pub mod config;
pub mod graphql;
pub mod http;
pub mod identity;
pub mod state;
