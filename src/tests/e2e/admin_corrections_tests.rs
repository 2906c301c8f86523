use uuid::Uuid;

use crate::modules::time_records::use_cases::admin_corrections::commands::{
    AdminAddBreak, AdminCreateRecord, AdminDeleteRecord, AdminEditBreak,
};
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::identity::Actor;
use crate::tests::fixtures::apps::TestApp;
use crate::tests::fixtures::users::UserAccountBuilder;
use crate::tests::fixtures::{ADMIN_A, ADMIN_B, COMPANY_A, COMPANY_B, USER_U, day};

fn admin(id: Uuid, company_id: Uuid) -> Actor {
    UserAccountBuilder::new()
        .id(id)
        .company_id(company_id)
        .admin()
        .actor()
}

#[tokio::test]
async fn refuses_a_record_that_ends_before_it_starts() {
    let app = TestApp::seeded().await;
    let result = app
        .state
        .corrections
        .create(
            &admin(ADMIN_A, COMPANY_A),
            AdminCreateRecord {
                record_id: Uuid::now_v7(),
                user_id: USER_U,
                clock_in: day(2, 9, 0),
                clock_out: Some(day(2, 8, 0)),
            },
        )
        .await;

    assert!(matches!(result, Err(ApplicationError::InvalidArgument(_))));
    assert_eq!(app.records.count_all().await, 0);
}

#[tokio::test]
async fn corrects_a_forgotten_day_and_keeps_tenants_apart() {
    let app = TestApp::seeded().await;
    let admin_a = admin(ADMIN_A, COMPANY_A);
    let admin_b = admin(ADMIN_B, COMPANY_B);
    let corrections = &app.state.corrections;

    let created = corrections
        .create(
            &admin_a,
            AdminCreateRecord {
                record_id: Uuid::now_v7(),
                user_id: USER_U,
                clock_in: day(2, 9, 0),
                clock_out: Some(day(2, 17, 0)),
            },
        )
        .await
        .unwrap();
    let lunch = corrections
        .add_break(
            &admin_a,
            AdminAddBreak {
                record_id: created.id(),
                break_id: Uuid::now_v7(),
                started_at: day(2, 12, 0),
                ended_at: None,
            },
        )
        .await
        .unwrap();
    corrections
        .edit_break(
            &admin_a,
            AdminEditBreak {
                record_id: created.id(),
                break_id: lunch.id,
                started_at: None,
                ended_at: Some(day(2, 12, 30)),
            },
        )
        .await
        .unwrap();

    let view = app
        .state
        .queries
        .find_in_company(&admin_a, created.id())
        .await
        .unwrap();
    assert_eq!(view.record.breaks.len(), 1);
    assert_eq!(view.record.breaks[0].ended_at, Some(day(2, 12, 30)));
    assert_eq!(view.closed_by.map(|closer| closer.name), Some("Ada Admin".into()));

    let foreign = app.state.queries.find_in_company(&admin_b, created.id()).await;
    assert!(matches!(foreign, Err(ApplicationError::NotFound(_))));
    assert!(
        app.state
            .queries
            .list_company(&admin_b)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn lets_the_user_punch_again_after_the_day_was_deleted() {
    let app = TestApp::seeded().await;
    let admin_a = admin(ADMIN_A, COMPANY_A);
    let user = UserAccountBuilder::new()
        .id(USER_U)
        .company_id(COMPANY_A)
        .actor();

    app.clock.set(day(2, 9, 0));
    let first = app.state.punch_handler.handle(&user).await.unwrap();
    app.state
        .corrections
        .delete(&admin_a, AdminDeleteRecord { record_id: first.id() })
        .await
        .unwrap();
    assert!(app.state.queries.list_mine(&user).await.unwrap().is_empty());

    app.clock.set(day(2, 10, 0));
    let second = app.state.punch_handler.handle(&user).await.unwrap();
    assert_ne!(second.id(), first.id());
    assert_eq!(second.record.clock_in, day(2, 10, 0));
    assert_eq!(second.record.clock_out, None);
}
