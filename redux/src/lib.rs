// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A small Redux store.
//!
//! 1. A [`Store`] owns exactly one state value. The only way to change it is to
//!    [`Store::dispatch`] an action.
//! 2. Reducers ([`Reducer`]) are pure functions `(&A, &S) -> S`. They run in the order
//!    they were added, and each one sees the output of the previous one. The old state is
//!    never mutated in place, it is replaced.
//! 3. Subscribers ([`Subscriber`]) run after a dispatch, but only if the new state is not
//!    equal (by value) to the previous one.
//! 4. History is kept per [`StoreConfig`], consecutive duplicates are not recorded.
//!
//! Everything is synchronous. If you need to dispatch from inside a [`tokio`] task, wrap
//! the store in a [`SharedStore`] and use [`spawn_dispatch_action!`].

// https://github.com/rust-lang/rust-clippy/blob/master/clippy_lints/src/unwrap_in_result.rs
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod reducer;
pub mod shared_store;
pub mod store;
pub mod subscriber;

// Re-export.
pub use reducer::*;
// So that `spawn_dispatch_action!` works in crates that don't depend on tokio.
pub use tokio;
pub use shared_store::*;
pub use store::*;
pub use subscriber::*;
