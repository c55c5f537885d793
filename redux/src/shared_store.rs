// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::Store;

/// A [`Store`] that can be handed to [`tokio`] tasks.
pub type SharedStore<S, A> = Arc<RwLock<Store<S, A>>>;

/// Move the given store into a [`SharedStore`].
#[must_use]
pub fn into_shared_store<S, A>(store: Store<S, A>) -> SharedStore<S, A> {
    Arc::new(RwLock::new(store))
}

/// Dispatch an action to a [`SharedStore`] from a new [`tokio`] task. Evaluates to the
/// task's [`tokio::task::JoinHandle`], which resolves to `true` if the state changed.
#[macro_export]
macro_rules! spawn_dispatch_action {
    ($store: expr, $action: expr) => {{
        let store_copy = $store.clone();
        let action = $action;
        $crate::tokio::spawn(async move { store_copy.write().await.dispatch(&action) })
    }};
}
