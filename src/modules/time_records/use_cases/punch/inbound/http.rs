use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::modules::time_records::use_cases::query_time_records::projection::TimeRecordView;
use crate::shell::identity::CurrentActor;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, CurrentActor(actor): CurrentActor) -> Response {
    match state.punch_handler.handle(&actor).await {
        Ok(record) => Json(TimeRecordView::from(&record)).into_response(),
        Err(error) => error.into_response(),
    }
}
