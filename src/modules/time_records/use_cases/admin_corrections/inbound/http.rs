// Admin correction endpoints. Timestamps arrive as ISO-8601 strings and are parsed here.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::time_records::use_cases::admin_corrections::commands::{
    AdminAddBreak, AdminCreateRecord, AdminDeleteRecord, AdminEditBreak, AdminSetClockOut,
};
use crate::modules::time_records::use_cases::admin_corrections::handler::{
    CLOCK_OUT_OPERATION, CREATE_OPERATION,
};
use crate::modules::time_records::use_cases::query_time_records::projection::BreakView;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::parse_timestamp;
use crate::shell::http::unprocessable;
use crate::shell::identity::AdminActor;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecordBody {
    pub user_id: Uuid,
    pub clock_in: String,
    pub clock_out: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetClockOutBody {
    pub clock_out: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBreakBody {
    pub started_at: String,
    pub ended_at: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditBreakBody {
    pub started_at: Option<String>,
    pub ended_at: Option<String>,
}

fn parse_optional(input: Option<&str>) -> Result<Option<DateTime<Utc>>, ApplicationError> {
    input.map(parse_timestamp).transpose()
}

pub async fn create(
    State(state): State<AppState>,
    AdminActor(admin): AdminActor,
    body: Result<Json<CreateRecordBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return unprocessable(rejection),
    };
    let command = match (
        parse_timestamp(&body.clock_in),
        parse_optional(body.clock_out.as_deref()),
    ) {
        (Ok(clock_in), Ok(clock_out)) => AdminCreateRecord {
            record_id: Uuid::now_v7(),
            user_id: body.user_id,
            clock_in,
            clock_out,
        },
        (Err(error), _) | (_, Err(error)) => return error.into_response(),
    };

    let result = match state.corrections.create(&admin, command).await {
        Ok(record) => Ok(state
            .queries
            .admin_view_after_write(&record, CREATE_OPERATION)
            .await),
        Err(error) => Err(error),
    };
    match result {
        Ok(view) => (StatusCode::CREATED, Json(view)).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn set_clock_out(
    State(state): State<AppState>,
    AdminActor(admin): AdminActor,
    Path(record_id): Path<Uuid>,
    body: Result<Json<SetClockOutBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return unprocessable(rejection),
    };
    let clock_out = match parse_timestamp(&body.clock_out) {
        Ok(clock_out) => clock_out,
        Err(error) => return error.into_response(),
    };

    let command = AdminSetClockOut {
        record_id,
        clock_out,
    };
    let result = match state.corrections.set_clock_out(&admin, command).await {
        Ok(record) => Ok(state
            .queries
            .admin_view_after_write(&record, CLOCK_OUT_OPERATION)
            .await),
        Err(error) => Err(error),
    };
    match result {
        Ok(view) => Json(view).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn add_break(
    State(state): State<AppState>,
    AdminActor(admin): AdminActor,
    Path(record_id): Path<Uuid>,
    body: Result<Json<AddBreakBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return unprocessable(rejection),
    };
    let command = match (
        parse_timestamp(&body.started_at),
        parse_optional(body.ended_at.as_deref()),
    ) {
        (Ok(started_at), Ok(ended_at)) => AdminAddBreak {
            record_id,
            break_id: Uuid::now_v7(),
            started_at,
            ended_at,
        },
        (Err(error), _) | (_, Err(error)) => return error.into_response(),
    };

    match state.corrections.add_break(&admin, command).await {
        Ok(added) => (StatusCode::CREATED, Json(BreakView::from(&added))).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn edit_break(
    State(state): State<AppState>,
    AdminActor(admin): AdminActor,
    Path((record_id, break_id)): Path<(Uuid, Uuid)>,
    body: Result<Json<EditBreakBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return unprocessable(rejection),
    };
    let command = match (
        parse_optional(body.started_at.as_deref()),
        parse_optional(body.ended_at.as_deref()),
    ) {
        (Ok(started_at), Ok(ended_at)) => AdminEditBreak {
            record_id,
            break_id,
            started_at,
            ended_at,
        },
        (Err(error), _) | (_, Err(error)) => return error.into_response(),
    };

    match state.corrections.edit_break(&admin, command).await {
        Ok(edited) => Json(BreakView::from(&edited)).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    AdminActor(admin): AdminActor,
    Path(record_id): Path<Uuid>,
) -> Response {
    match state
        .corrections
        .delete(&admin, AdminDeleteRecord { record_id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error.into_response(),
    }
}
