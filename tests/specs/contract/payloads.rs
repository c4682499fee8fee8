//! Payload shape specs
//!
//! Payloads cross the boundary as JSON with the widget's camelCase keys.

use crate::prelude::*;
use similar_asserts::assert_eq;
use village_events::{CtaClick, CtaClickData, Introducer, UserSync, WidgetErrorReport};

#[test]
fn cta_click_decodes_from_widget_json() {
    let event = Event::from_wire(
        "village.path.cta.clicked",
        json!({
            "action": "send_intro",
            "data": {
                "introducer": { "name": "Grace", "email": "grace@example.com" },
                "timestamp": "2026-03-01T12:00:00Z",
                "callbackName": "onSendIntro"
            }
        }),
    )
    .unwrap();

    assert_eq!(
        event,
        Event::PathCtaClicked(CtaClick {
            action: "send_intro".to_string(),
            data: CtaClickData {
                introducer: Introducer {
                    name: "Grace".to_string(),
                    email: "grace@example.com".to_string(),
                },
                timestamp: "2026-03-01T12:00:00Z".to_string(),
                callback_name: Some("onSendIntro".to_string()),
            },
        })
    );
}

#[test]
fn user_synced_without_user_id_is_rejected() {
    let err = Event::from_wire("village.user.synced", json!({ "syncedAt": "now" })).unwrap_err();
    assert!(err.to_string().contains("village.user.synced"), "{err}");
}

#[test]
fn user_synced_encodes_wire_keys() {
    let event = Event::new::<event::UserSynced>(UserSync {
        user_id: "abc123".to_string(),
        synced_at: "2026-03-01T12:00:00Z".to_string(),
    });

    assert_eq!(
        event.to_value().unwrap(),
        json!({ "userId": "abc123", "syncedAt": "2026-03-01T12:00:00Z" })
    );
}

#[test]
fn widget_error_keeps_opaque_details() {
    let event = Event::from_wire(
        "village.widget.error",
        json!({ "message": "render failed", "source": "PathList", "details": [1, "two", null] }),
    )
    .unwrap();

    match event {
        Event::WidgetError(WidgetErrorReport { details, .. }) => {
            assert_eq!(details, Some(json!([1, "two", null])));
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn signal_events_carry_no_value() {
    for name in [EventName::OauthStarted, EventName::WidgetReady] {
        let event = Event::decode(name, Value::Null).unwrap();
        assert_eq!(event.to_value().unwrap(), Value::Null);
    }
}
