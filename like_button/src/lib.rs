// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! State for a "Like this post on Fakebook!" button.
//!
//! When the button is clicked:
//! 1. A like request is sent to Fakebook (any [`LikeService`]).
//! 2. Only if that request succeeds, [`LikeAction::PageLiked`] is dispatched, and the
//!    [`LikeState`] records that the page was liked.
//!
//! There are two pieces with real behavior:
//! - [`transition`]: the pure reducer. Hosted in a [`like_redux::Store`] via
//!   [`LikeReducer`] (see [`create_store`]).
//! - [`LikeButton`]: the click handler. Its collaborators (the like service and the
//!   notify callback) are passed in, so tests hand it the doubles in [`test_fixtures`]
//!   instead of patching anything global.

// https://github.com/rust-lang/rust-clippy/blob/master/clippy_lints/src/unwrap_in_result.rs
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod action;
pub mod config;
pub mod error;
pub mod fakebook;
pub mod log;
pub mod reducer;
pub mod session;
pub mod state;
pub mod test_fixtures;
pub mod trigger;

// Re-export.
pub use action::*;
pub use config::*;
pub use error::*;
pub use fakebook::*;
pub use log::*;
pub use reducer::*;
pub use session::*;
pub use state::*;
pub use trigger::*;
