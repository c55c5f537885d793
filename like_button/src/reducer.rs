// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use like_redux::{Reducer, Store, StoreConfig};

use crate::{LikeAction, LikeState};

/// Pure state transition.
///
/// - No state yet (`None`) means [`LikeState::INIT`] is used.
/// - [`LikeAction::PageLiked`] always yields `{ liked: true }`, whatever the prior value.
/// - Every other action returns the state as it was.
#[must_use]
pub fn transition(maybe_state: Option<&LikeState>, action: &LikeAction) -> LikeState {
    let state = maybe_state.copied().unwrap_or(LikeState::INIT);
    match action {
        LikeAction::PageLiked => LikeState::LIKED,
        LikeAction::Unrecognized(_) => state,
    }
}

/// Hosts [`transition`] in a [`Store`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LikeReducer;

impl Reducer<LikeState, LikeAction> for LikeReducer {
    fn run(&self, action: &LikeAction, state: &LikeState) -> LikeState {
        transition(Some(state), action)
    }
}

pub type LikeStore = Store<LikeState, LikeAction>;

/// A store that starts at [`LikeState::INIT`] with [`LikeReducer`] already added.
#[must_use]
pub fn create_store(config: StoreConfig) -> LikeStore {
    let mut store = LikeStore::new(config);
    store.add_reducer(LikeReducer);
    store
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn other_actions() -> Vec<LikeAction> {
        vec![
            LikeAction::from_tag(Some("ANYTHING")),
            LikeAction::from_tag(Some("BUTTON_CLICKED")),
            LikeAction::from_tag(Some("")),
            LikeAction::from_tag(None),
        ]
    }

    #[test]
    fn test_initializes_with_liked_false() {
        let state = transition(None, &LikeAction::from_tag(Some("ANYTHING")));
        assert_eq!(state, LikeState { liked: false });
    }

    #[test_case(LikeState::INIT ; "from not liked")]
    #[test_case(LikeState::LIKED ; "from liked")]
    fn test_page_liked_sets_liked_true(state: LikeState) {
        assert_eq!(
            transition(Some(&state), &LikeAction::PageLiked),
            LikeState { liked: true }
        );
    }

    #[test]
    fn test_page_liked_without_state_sets_liked_true() {
        assert_eq!(transition(None, &LikeAction::PageLiked), LikeState::LIKED);
    }

    #[test_case(LikeState::INIT ; "from not liked")]
    #[test_case(LikeState::LIKED ; "from liked")]
    fn test_other_actions_leave_state_unchanged(state: LikeState) {
        for action in other_actions() {
            assert_eq!(transition(Some(&state), &action), state, "{action:?}");
        }
    }

    #[test_case(LikeState::INIT ; "from not liked")]
    #[test_case(LikeState::LIKED ; "from liked")]
    fn test_page_liked_is_idempotent(state: LikeState) {
        let once = transition(Some(&state), &LikeAction::PageLiked);
        let twice = transition(Some(&once), &LikeAction::PageLiked);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_input_state_is_not_mutated() {
        let state = LikeState::INIT;
        let next = transition(Some(&state), &LikeAction::PageLiked);
        assert_eq!(state, LikeState::INIT);
        assert_eq!(next, LikeState::LIKED);
    }

    #[test]
    fn test_create_store_hosts_reducer() {
        let mut store = create_store(StoreConfig::default());
        assert_eq!(store.get_state(), LikeState::INIT);

        assert!(!store.dispatch(&LikeAction::from_tag(Some("ANYTHING"))));
        assert_eq!(store.get_state(), LikeState::INIT);

        assert!(store.dispatch(&LikeAction::page_liked()));
        assert!(!store.dispatch(&LikeAction::page_liked()));
        assert_eq!(store.get_state(), LikeState::LIKED);
        assert_eq!(store.get_history(), vec![LikeState::INIT, LikeState::LIKED]);
    }
}
