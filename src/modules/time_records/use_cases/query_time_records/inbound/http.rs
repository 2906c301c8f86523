use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::modules::time_records::use_cases::query_time_records::projection::TimeRecordView;
use crate::shared::core::primitives::parse_calendar_day;
use crate::shell::identity::{AdminActor, CurrentActor};
use crate::shell::state::AppState;

pub async fn list_mine(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
) -> Response {
    match state.queries.list_mine(&actor).await {
        Ok(records) => Json(
            records
                .iter()
                .map(TimeRecordView::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn find_mine_by_day(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(date): Path<String>,
) -> Response {
    let day = match parse_calendar_day(&date) {
        Ok(day) => day,
        Err(error) => return error.into_response(),
    };
    match state.queries.find_mine_by_day(&actor, day).await {
        Ok(record) => Json(TimeRecordView::from(&record)).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn list_company(
    State(state): State<AppState>,
    AdminActor(admin): AdminActor,
) -> Response {
    match state.queries.list_company(&admin).await {
        Ok(views) => Json(views).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn find_in_company(
    State(state): State<AppState>,
    AdminActor(admin): AdminActor,
    Path(record_id): Path<Uuid>,
) -> Response {
    match state.queries.find_in_company(&admin, record_id).await {
        Ok(view) => Json(view).into_response(),
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod query_time_records_http_inbound_tests {
    use axum::{
        body::{Body, Bytes},
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::modules::time_records::use_cases::query_time_records::projection::{
        AdminTimeRecordView, TimeRecordView,
    };
    use crate::tests::fixtures::apps::TestApp;
    use crate::tests::fixtures::records::TimeRecordBuilder;
    use crate::tests::fixtures::{ADMIN_A, ADMIN_B, COMPANY_B, USER_U, USER_V, day};

    async fn get(app: &TestApp, uri: &str, user_id: Uuid) -> (StatusCode, Bytes) {
        let response = app
            .router()
            .oneshot(
                Request::get(uri)
                    .header("x-user-id", user_id.to_string())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes)
    }

    #[tokio::test]
    async fn it_should_list_my_records_most_recent_first() {
        let app = TestApp::seeded().await;
        app.store(TimeRecordBuilder::new().clock_in(day(2, 9, 0)).build())
            .await;
        app.store(TimeRecordBuilder::new().clock_in(day(4, 9, 0)).build())
            .await;
        app.store(
            TimeRecordBuilder::new()
                .clock_in(day(3, 9, 0))
                .deleted_at(day(3, 18, 0))
                .build(),
        )
        .await;

        let (status, bytes) = get(&app, "/time-records/me", USER_U).await;
        assert_eq!(status, StatusCode::OK);
        let views: Vec<TimeRecordView> = serde_json::from_slice(&bytes).unwrap();
        let dates: Vec<_> = views.iter().map(|view| view.date).collect();
        assert_eq!(dates, vec![day(4, 0, 0), day(2, 0, 0)]);
    }

    #[tokio::test]
    async fn it_should_find_my_record_by_date_only_or_date_time() {
        let app = TestApp::seeded().await;
        let record = TimeRecordBuilder::new().clock_in(day(2, 9, 0)).build();
        app.store(record.clone()).await;

        for uri in [
            "/time-records/me/2024-01-02",
            "/time-records/me/2024-01-02T23:59:00Z",
        ] {
            let (status, bytes) = get(&app, uri, USER_U).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            let view: TimeRecordView = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(view.id, record.id());
        }
    }

    #[tokio::test]
    async fn it_should_answer_404_and_400_for_my_record_by_date() {
        let app = TestApp::seeded().await;
        let (status, _) = get(&app, "/time-records/me/2024-01-05", USER_U).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = get(&app, "/time-records/me/yesterday", USER_U).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_list_only_the_admins_company() {
        let app = TestApp::seeded().await;
        let mine = TimeRecordBuilder::new().build();
        app.store(mine.clone()).await;
        app.store(
            TimeRecordBuilder::new()
                .user_id(USER_V)
                .company_id(COMPANY_B)
                .build(),
        )
        .await;

        let (status, bytes) = get(&app, "/time-records", ADMIN_A).await;
        assert_eq!(status, StatusCode::OK);
        let views: Vec<AdminTimeRecordView> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].record.id, mine.id());
        assert_eq!(views[0].user.as_ref().map(|user| user.id), Some(USER_U));
    }

    #[tokio::test]
    async fn it_should_hide_records_of_other_companies() {
        let app = TestApp::seeded().await;
        let record = TimeRecordBuilder::new()
            .clock_out(day(2, 17, 0))
            .closed_by(ADMIN_A)
            .build();
        app.store(record.clone()).await;
        let uri = format!("/time-records/{}", record.id());

        let (status, bytes) = get(&app, &uri, ADMIN_A).await;
        assert_eq!(status, StatusCode::OK);
        let view: AdminTimeRecordView = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(view.closed_by.map(|closer| closer.id), Some(ADMIN_A));

        let (status, _) = get(&app, &uri, ADMIN_B).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
