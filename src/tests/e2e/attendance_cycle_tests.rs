use chrono::Duration;

use crate::modules::time_records::core::state::AttendanceState;
use crate::tests::fixtures::apps::TestApp;
use crate::tests::fixtures::users::UserAccountBuilder;
use crate::tests::fixtures::{COMPANY_A, USER_U, day};

#[tokio::test]
async fn walks_a_full_working_day_through_four_punches() {
    let app = TestApp::seeded().await;
    let user = UserAccountBuilder::new()
        .id(USER_U)
        .company_id(COMPANY_A)
        .actor();
    let punch = &app.state.punch_handler;

    app.clock.set(day(2, 9, 0));
    let record = punch.handle(&user).await.unwrap();
    assert_eq!(record.record.clock_in, day(2, 9, 0));
    assert_eq!(record.record.clock_out, None);

    app.clock.advance(Duration::hours(3));
    let record = punch.handle(&user).await.unwrap();
    assert_eq!(record.record.clock_out, Some(day(2, 12, 0)));
    assert!(record.breaks().is_empty());

    app.clock.advance(Duration::hours(1));
    let record = punch.handle(&user).await.unwrap();
    assert_eq!(record.record.clock_out, Some(day(2, 13, 0)));
    assert_eq!(record.breaks().len(), 1);
    assert_eq!(record.breaks()[0].started_at, day(2, 12, 0));
    assert_eq!(record.breaks()[0].ended_at, None);
    assert_eq!(
        AttendanceState::derive(Some(record.clone())).name(),
        "on_break"
    );

    app.clock.advance(Duration::hours(4));
    let record = punch.handle(&user).await.unwrap();
    assert_eq!(record.record.clock_in, day(2, 9, 0));
    assert_eq!(record.record.clock_out, Some(day(2, 17, 0)));
    assert_eq!(record.breaks().len(), 1);
    assert_eq!(record.breaks()[0].ended_at, Some(day(2, 13, 0)));
    assert!(record.open_break().is_none());

    let mine = app.state.queries.list_mine(&user).await.unwrap();
    assert_eq!(mine, vec![record]);
}

#[tokio::test]
async fn never_holds_more_than_one_open_break() {
    let app = TestApp::seeded().await;
    let user = UserAccountBuilder::new()
        .id(USER_U)
        .company_id(COMPANY_A)
        .actor();

    for step in 0..12 {
        app.clock.set(day(2, 8 + step, 0));
        let record = app.state.punch_handler.handle(&user).await.unwrap();
        let open = record.breaks().iter().filter(|entry| entry.is_open()).count();
        assert!(open <= 1, "{open} open breaks after punch {step}");
    }
}

#[tokio::test]
async fn starts_a_fresh_record_on_the_next_day() {
    let app = TestApp::seeded().await;
    let user = UserAccountBuilder::new()
        .id(USER_U)
        .company_id(COMPANY_A)
        .actor();

    app.clock.set(day(2, 9, 0));
    app.state.punch_handler.handle(&user).await.unwrap();
    app.clock.set(day(3, 9, 0));
    let next = app.state.punch_handler.handle(&user).await.unwrap();

    assert_eq!(next.record.date, day(3, 0, 0));
    assert_eq!(next.record.clock_out, None);
    let mine = app.state.queries.list_mine(&user).await.unwrap();
    let dates: Vec<_> = mine.iter().map(|record| record.record.date).collect();
    assert_eq!(dates, vec![day(3, 0, 0), day(2, 0, 0)]);
}
