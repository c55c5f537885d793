// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::{AsyncLikeService, LikeService, LikeServiceError};

/// In process stand-in for the Fakebook like endpoint. It either accepts every like (and
/// counts it), or declines every like. It never faults.
#[derive(Debug, Default)]
pub struct FakebookClient {
    pub accept_likes: bool,
    like_count: AtomicUsize,
}

impl FakebookClient {
    #[must_use]
    pub fn new(accept_likes: bool) -> Self {
        Self {
            accept_likes,
            like_count: AtomicUsize::new(0),
        }
    }

    /// Likes accepted so far.
    #[must_use]
    pub fn like_count(&self) -> usize { self.like_count.load(Ordering::SeqCst) }

    fn like(&self) -> bool {
        if self.accept_likes {
            self.like_count.fetch_add(1, Ordering::SeqCst);
        }
        // % is Display, ? is Debug.
        tracing::info!(
            message = "fakebook like",
            accepted = %self.accept_likes,
            like_count = %self.like_count()
        );
        self.accept_likes
    }
}

impl LikeService for FakebookClient {
    fn attempt_like(&self) -> Result<bool, LikeServiceError> { Ok(self.like()) }
}

#[async_trait]
impl AsyncLikeService for FakebookClient {
    async fn attempt_like(&self) -> Result<bool, LikeServiceError> { Ok(self.like()) }
}
