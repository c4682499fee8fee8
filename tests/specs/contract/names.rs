//! Event name specs
//!
//! Wire names are matched by literal string equality in the widget runtime,
//! so they must be reproduced exactly.

use crate::prelude::*;
use similar_asserts::assert_eq;

const EXPECTED: &[(&str, &str)] = &[
    ("pathCtaClicked", "village.path.cta.clicked"),
    ("userSynced", "village.user.synced"),
    ("userSyncFailed", "village.user.sync.failed"),
    ("oauthStarted", "village.oauth.started"),
    ("oauthSuccess", "village.oauth.success"),
    ("oauthError", "village.oauth.error"),
    ("widgetError", "village.widget.error"),
    ("widgetReady", "village.widget.ready"),
];

#[test]
fn registry_matches_published_table() {
    let actual: Vec<(&str, &str)> = EventName::ALL
        .iter()
        .map(|name| (name.identifier(), name.wire_name()))
        .collect();

    assert_eq!(actual, EXPECTED.to_vec());
}

#[test]
fn every_identifier_resolves_to_its_wire_name() {
    for (identifier, wire) in EXPECTED {
        let name = EventName::from_identifier(identifier).unwrap();
        assert_eq!(name.wire_name(), *wire);
        assert_eq!(wire.parse::<EventName>().unwrap(), name);
    }
}

#[test]
fn wire_names_are_injective() {
    for a in EventName::ALL {
        for b in EventName::ALL {
            if a != b {
                assert!(a.wire_name() != b.wire_name(), "{a:?} and {b:?} share a wire name");
            }
        }
    }
}

#[test]
fn wire_names_carry_village_prefix() {
    for name in EventName::ALL {
        assert!(name.wire_name().starts_with("village."));
        assert!(name.wire_name().split('.').count() >= 3);
    }
}

#[test]
fn markers_resolve_through_the_registry() {
    fn wire<E: VillageEvent>() -> &'static str {
        E::NAME.wire_name()
    }

    assert_eq!(wire::<event::PathCtaClicked>(), "village.path.cta.clicked");
    assert_eq!(wire::<event::UserSyncFailed>(), "village.user.sync.failed");
    assert_eq!(wire::<event::WidgetReady>(), "village.widget.ready");
}
