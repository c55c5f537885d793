// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Test doubles for the collaborators of [`crate::LikeButton`]. They are passed into the
//! button, so there is nothing to restore after a test.

// Attach sources.
pub mod spy_notifier;
pub mod stub_like_service;

// Re-export.
pub use spy_notifier::*;
pub use stub_like_service::*;
