//! Listener specs
//!
//! The external runtime invokes listeners with raw JSON; typed listeners
//! receive the registered payload shape.

use crate::prelude::*;
use similar_asserts::assert_eq;
use village_events::{OauthToken, UserSync};

#[tokio::test]
async fn widget_ready_listener_runs_with_no_arguments() {
    let fake = FakeRuntime::new();
    let ready = Recorder::<Signal>::new();

    fake.on_event::<event::WidgetReady, _>(ready.handler())
        .await
        .unwrap();

    // The runtime calls back with nothing, or an empty object or array
    assert_eq!(fake.deliver("village.widget.ready", Value::Null), 1);
    fake.deliver("village.widget.ready", json!({}));
    fake.deliver("village.widget.ready", json!([]));
    assert_eq!(ready.seen(), vec![Signal, Signal, Signal]);
}

#[tokio::test]
async fn user_synced_listener_receives_typed_payload() {
    let fake = FakeRuntime::new();
    let synced = Recorder::<UserSync>::new();

    fake.on_event::<event::UserSynced, _>(synced.handler())
        .await
        .unwrap();
    fake.deliver(
        "village.user.synced",
        json!({ "userId": "abc123", "syncedAt": "2026-03-01T12:00:00Z" }),
    );

    assert_eq!(
        synced.seen(),
        vec![UserSync {
            user_id: "abc123".to_string(),
            synced_at: "2026-03-01T12:00:00Z".to_string(),
        }]
    );
}

#[tokio::test]
async fn malformed_delivery_never_reaches_handler() {
    let fake = FakeRuntime::new();
    let tokens = Recorder::<OauthToken>::new();

    fake.on_event::<event::OauthSuccess, _>(tokens.handler())
        .await
        .unwrap();
    fake.deliver("village.oauth.success", json!({ "error": "nope" }));

    assert!(tokens.seen().is_empty());
}

#[tokio::test]
async fn pattern_listener_sees_decoded_envelopes() {
    let fake = FakeRuntime::new();
    let events = Recorder::<Event>::new();

    let registered = fake
        .on_pattern(&EventPattern::new("village.*.error"), events.handler())
        .await
        .unwrap();
    assert_eq!(registered, vec![EventName::OauthError, EventName::WidgetError]);

    fake.deliver("village.widget.error", json!({ "message": "boom", "source": "App" }));
    fake.deliver("village.widget.ready", Value::Null);

    let seen = events.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].name(), EventName::WidgetError);
}
