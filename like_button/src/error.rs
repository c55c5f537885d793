// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// A fault raised by a [`crate::LikeService`]. This is different from the service
/// declining the like, which is `Ok(false)`.
#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, PartialEq, Eq)]
pub enum LikeServiceError {
    #[error("🌐 Could not reach the like service: {reason}")]
    #[diagnostic(code(like_button::service::unreachable))]
    Unreachable { reason: String },

    #[error("💥 The like service failed: {reason}")]
    #[diagnostic(code(like_button::service::failed))]
    Failed { reason: String },
}

/// What [`crate::LikeButton`] surfaces to its caller.
#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, PartialEq, Eq)]
pub enum LikeButtonError {
    #[error("👎 Like request faulted, the page was not marked as liked")]
    #[diagnostic(
        code(like_button::trigger::service_fault),
        help("The click can be retried, nothing was dispatched.")
    )]
    ServiceFault {
        #[source]
        source: LikeServiceError,
    },
}
