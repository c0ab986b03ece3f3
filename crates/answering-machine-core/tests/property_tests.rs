//! Property-based tests for the composer and list reducers
//!
//! Uses proptest to check the draft validity predicate and the stale
//! response guard over arbitrary inputs.

use answering_machine_core::composer::{self, ComposerEffect, ComposerEvent, ComposerState};
use answering_machine_core::message_list::{self, ListEffect, ListEvent, ListState};
use answering_machine_core::{Message, MessageId, Session};
use chrono::Utc;
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Any string up to 200 characters, including multi-byte ones
fn content_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..200).prop_map(|chars| chars.into_iter().collect())
}

fn edit(content: &str) -> ComposerState {
    composer::reduce(ComposerState::new(), ComposerEvent::Edit(content.to_string())).state
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Submit is enabled exactly when 1 <= length < 100
    #[test]
    fn submit_enabled_iff_length_in_bounds(content in content_strategy()) {
        let len = content.chars().count();
        let state = edit(&content);
        prop_assert_eq!(state.view().submit_enabled, (1..100).contains(&len));
    }

    /// Edits are stored verbatim
    #[test]
    fn edit_is_verbatim(content in content_strategy()) {
        let state = edit(&content);
        prop_assert_eq!(state.content(), content.as_str());
    }

    /// Submitting emits a create effect iff the draft is valid
    #[test]
    fn submit_effect_iff_valid(content in content_strategy()) {
        let state = edit(&content);
        let valid = state.can_submit();
        let t = composer::reduce(state, ComposerEvent::Submit);
        let creates = t.effects.iter()
            .filter(|e| matches!(e, ComposerEffect::CreateMessage { .. }))
            .count();
        prop_assert_eq!(creates, usize::from(valid));
    }

    /// The list shows whatever the latest activation fetched, regardless of
    /// how many earlier activations answer late
    #[test]
    fn only_latest_activation_applies(activations in 1usize..6, late in prop::collection::vec(any::<bool>(), 0..6)) {
        let mut state = ListState::new();
        let mut ids = Vec::new();
        for _ in 0..activations {
            let t = message_list::reduce(state, ListEvent::Activate(Session::authenticated("a")));
            state = t.state;
            for effect in t.effects {
                if let ListEffect::FetchMessages { activation, .. } = effect {
                    ids.push(activation);
                }
            }
        }
        prop_assert_eq!(ids.len(), activations);

        let latest = *ids.last().unwrap();
        for (i, answer) in late.iter().enumerate() {
            let stale = ids[i % ids.len()];
            if stale == latest || !answer {
                continue;
            }
            let msg = Message::new(MessageId::new("stale"), "stale", Utc::now());
            state = message_list::reduce(state, ListEvent::Fetched { activation: stale, result: Ok(vec![msg]) }).state;
        }
        prop_assert!(state.is_loading());

        let msg = Message::new(MessageId::new("fresh"), "fresh", Utc::now());
        state = message_list::reduce(state, ListEvent::Fetched { activation: latest, result: Ok(vec![msg]) }).state;
        prop_assert_eq!(state.messages().len(), 1);
        prop_assert_eq!(state.messages()[0].content(), "fresh");
    }
}
