//! Runtime lifecycle specs
//!
//! The widget runtime arrives asynchronously; until then it is absent and
//! calls are parked in the pending queue.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn runtime_is_absent_until_installed() {
    let slot = RuntimeSlot::new();
    assert!(slot.lookup().is_none());
    assert!(!slot.is_loaded());

    slot.install(Arc::new(FakeRuntime::new()));
    assert!(slot.lookup().is_some());
    assert!(slot.is_loaded());
}

#[test]
fn queued_calls_are_handed_over_on_install() {
    let slot = RuntimeSlot::new();
    slot.enqueue(PendingCall::new(
        RuntimeMethod::Init,
        vec![json!({ "partnerKey": "pk_live" })],
    ))
    .unwrap();
    slot.enqueue(PendingCall::emit(&Event::new::<event::OauthStarted>(Signal)).unwrap())
        .unwrap();

    let queued = slot.install(Arc::new(FakeRuntime::new()));

    assert_eq!(
        serde_json::to_value(&queued).unwrap(),
        json!([
            { "method": "init", "args": [{ "partnerKey": "pk_live" }] },
            { "method": "emit", "args": ["village.oauth.started", null] }
        ])
    );
}

#[tokio::test]
async fn typed_calls_reach_the_installed_runtime() {
    let slot = RuntimeSlot::new();
    let fake = FakeRuntime::new();
    slot.install(Arc::new(TracedRuntime::new(fake.clone())));

    let runtime = slot.require().unwrap();
    runtime.init(vec![json!({ "partnerKey": "pk_live" })]).await.unwrap();
    runtime
        .emit_event::<event::UserSyncFailed>(village_events::SyncFailure {
            reason: "token expired".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(
        fake.calls(),
        vec![
            RuntimeCall::Init {
                args: vec![json!({ "partnerKey": "pk_live" })],
            },
            RuntimeCall::Emit {
                event: "village.user.sync.failed".to_string(),
                data: json!({ "reason": "token expired" }),
            },
        ]
    );
}
