// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The click handler for the like button, and the contracts of its two collaborators.
//!
//! ```text
//! Idle ──(click, service ok(true))──▶ Notified
//!  ▲ │
//!  └─┘ (click, service ok(false) or err)
//! ```
//!
//! `Notified` is terminal. Later clicks still go through the service, and notify again
//! on success, but the phase never goes back to `Idle`.

use async_trait::async_trait;
use like_redux::Store;

use crate::{LikeAction, LikeButtonError, LikeServiceError, LikeState};

pub const LIKE_BUTTON_LABEL: &str = "Like this post on Fakebook!";

/// The external like operation. `Ok(true)` means the like went through, `Ok(false)` means
/// it was declined.
pub trait LikeService {
    /// # Errors
    ///
    /// Returns an error if the service faulted, as opposed to declining.
    fn attempt_like(&self) -> Result<bool, LikeServiceError>;
}

/// Plain `Fn() -> bool` closures never fault.
impl<F> LikeService for F
where
    F: Fn() -> bool,
{
    fn attempt_like(&self) -> Result<bool, LikeServiceError> { Ok(self()) }
}

/// Same contract as [`LikeService`], for a service that has to be awaited.
#[async_trait]
pub trait AsyncLikeService {
    /// # Errors
    ///
    /// Returns an error if the service faulted, as opposed to declining.
    async fn attempt_like(&self) -> Result<bool, LikeServiceError>;
}

/// Callback invoked once per successful like.
pub trait NotifyLiked {
    fn notify_liked(&mut self);
}

impl<F> NotifyLiked for F
where
    F: FnMut(),
{
    fn notify_liked(&mut self) { self(); }
}

/// Dispatches [`LikeAction::PageLiked`] into a [`Store`].
#[derive(Debug)]
pub struct StoreNotifier<'a> {
    pub store: &'a mut Store<LikeState, LikeAction>,
}

impl NotifyLiked for StoreNotifier<'_> {
    fn notify_liked(&mut self) { self.store.dispatch(&LikeAction::page_liked()); }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonPhase {
    #[default]
    Idle,
    Notified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The service said yes and the callback was invoked.
    Notified,
    /// The service said no. Nothing else happened.
    Declined,
}

#[derive(Debug)]
pub struct LikeButton<L, N> {
    service: L,
    notifier: N,
    phase: ButtonPhase,
}

impl<L, N> LikeButton<L, N>
where
    N: NotifyLiked,
{
    pub fn new(service: L, notifier: N) -> Self {
        Self {
            service,
            notifier,
            phase: ButtonPhase::Idle,
        }
    }

    #[must_use]
    pub fn phase(&self) -> ButtonPhase { self.phase }

    #[must_use]
    pub fn label(&self) -> &'static str { LIKE_BUTTON_LABEL }

    /// Give the collaborators back, eg: to inspect the store after the clicks.
    pub fn into_parts(self) -> (L, N) { (self.service, self.notifier) }

    fn apply(
        &mut self,
        result: Result<bool, LikeServiceError>,
    ) -> Result<ClickOutcome, LikeButtonError> {
        match result {
            Ok(true) => {
                self.notifier.notify_liked();
                self.phase = ButtonPhase::Notified;
                // % is Display, ? is Debug.
                tracing::debug!(message = "like accepted", phase = ?self.phase);
                Ok(ClickOutcome::Notified)
            }
            Ok(false) => {
                tracing::debug!(message = "like declined", phase = ?self.phase);
                Ok(ClickOutcome::Declined)
            }
            Err(source) => {
                tracing::warn!(message = "like service faulted", error = %source);
                Err(LikeButtonError::ServiceFault { source })
            }
        }
    }
}

impl<L, N> LikeButton<L, N>
where
    L: LikeService,
    N: NotifyLiked,
{
    /// Call the service exactly once. Invoke the callback exactly once if (and only if)
    /// it returned `Ok(true)`.
    ///
    /// # Errors
    ///
    /// Returns [`LikeButtonError::ServiceFault`] if the service faulted. The callback is
    /// not invoked in that case.
    pub fn on_click(&mut self) -> Result<ClickOutcome, LikeButtonError> {
        let result = self.service.attempt_like();
        self.apply(result)
    }
}

impl<L, N> LikeButton<L, N>
where
    L: AsyncLikeService + Sync,
    N: NotifyLiked + Send,
{
    /// Same as [`LikeButton::on_click`], with the service awaited. Since this takes
    /// `&mut self`, a second click can't start while one is pending.
    ///
    /// # Errors
    ///
    /// Returns [`LikeButtonError::ServiceFault`] if the service faulted.
    pub async fn on_click_async(&mut self) -> Result<ClickOutcome, LikeButtonError> {
        let result = self.service.attempt_like().await;
        self.apply(result)
    }
}
