// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::VecDeque,
          fmt::{Debug, Formatter}};

use crate::{Reducer, ReducerVec, Subscriber, SubscriberVec};

/// Store settings.
///
/// - `max_history_size`: The maximum number of states kept in the history. When the
///   history is full, the oldest state is dropped. `0` disables history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    pub max_history_size: usize,
}

pub const DEFAULT_MAX_HISTORY_SIZE: usize = 16;

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_history_size: DEFAULT_MAX_HISTORY_SIZE,
        }
    }
}

/// Synchronous Redux store. The state is owned exclusively by the store and is only
/// ever replaced (never mutated in place) by [`Store::dispatch`].
pub struct Store<S, A> {
    state: S,
    history: VecDeque<S>,
    config: StoreConfig,
    reducer_vec: ReducerVec<S, A>,
    subscriber_vec: SubscriberVec<S>,
}

impl<S, A> Debug for Store<S, A>
where
    S: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("history", &self.history)
            .field("config", &self.config)
            .field("reducer_vec.len", &self.reducer_vec.len())
            .field("subscriber_vec.len", &self.subscriber_vec.len())
            .finish()
    }
}

impl<S, A> Default for Store<S, A>
where
    S: Default,
{
    fn default() -> Self { Self::new(StoreConfig::default()) }
}

// Handle subscriber & reducer management.
impl<S, A> Store<S, A>
where
    S: Default,
{
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self {
            state: S::default(),
            history: VecDeque::new(),
            config,
            reducer_vec: vec![],
            subscriber_vec: vec![],
        }
    }

    pub fn add_subscriber(
        &mut self,
        subscriber: impl Subscriber<S> + Send + Sync + 'static,
    ) -> &mut Self {
        self.subscriber_vec.push(Box::new(subscriber));
        self
    }

    pub fn clear_subscribers(&mut self) -> &mut Self {
        self.subscriber_vec.clear();
        self
    }

    pub fn add_reducer(
        &mut self,
        reducer: impl Reducer<S, A> + Send + Sync + 'static,
    ) -> &mut Self {
        self.reducer_vec.push(Box::new(reducer));
        self
    }

    pub fn clear_reducers(&mut self) -> &mut Self {
        self.reducer_vec.clear();
        self
    }
}

// Handle dispatch & history.
impl<S, A> Store<S, A>
where
    S: Clone + PartialEq + Debug,
{
    #[must_use]
    pub fn get_state(&self) -> S { self.state.clone() }

    /// Oldest first. This is a copy, later dispatches don't change it.
    #[must_use]
    pub fn get_history(&self) -> Vec<S> { self.history.iter().cloned().collect() }

    #[must_use]
    pub fn get_config(&self) -> StoreConfig { self.config }

    /// Run the reducers (in sequence), then the subscribers (only if the state changed).
    /// Returns `true` if the state changed.
    pub fn dispatch(&mut self, action: &A) -> bool {
        if self.reducer_vec.is_empty() {
            return false;
        }

        let new_state = self.run_reducers(action);
        let state_changed = new_state != self.state;
        self.state = new_state;
        self.update_history();

        if state_changed {
            self.run_subscribers();
        }

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "dispatch",
            state_changed = %state_changed,
            state = ?self.state,
            history_len = %self.history.len()
        );

        state_changed
    }

    fn run_reducers(&self, action: &A) -> S {
        self.reducer_vec
            .iter()
            .fold(self.state.clone(), |state, reducer| reducer.run(action, &state))
    }

    fn run_subscribers(&mut self) {
        let state = &self.state;
        for subscriber in &mut self.subscriber_vec {
            subscriber.run(state);
        }
    }

    fn update_history(&mut self) {
        let max_size = self.config.max_history_size;
        if max_size == 0 {
            return;
        }

        if self.history.back() == Some(&self.state) {
            return;
        }

        self.history.push_back(self.state.clone());
        while self.history.len() > max_size {
            self.history.pop_front();
        }
    }
}
