// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::VecDeque,
          sync::{Arc, Mutex, PoisonError,
                 atomic::{AtomicUsize, Ordering}}};

use async_trait::async_trait;

use crate::{AsyncLikeService, LikeService, LikeServiceError};

pub type LikeResult = Result<bool, LikeServiceError>;

/// A like service that never leaves the process. It answers from a script (one entry per
/// call, in order), and once the script runs out it keeps answering `fallback`. Clones
/// share the script and the call counter.
#[derive(Debug, Clone)]
pub struct StubLikeService {
    script: Arc<Mutex<VecDeque<LikeResult>>>,
    fallback: LikeResult,
    call_count: Arc<AtomicUsize>,
}

impl StubLikeService {
    /// Always answer `result`.
    #[must_use]
    pub fn returns(result: bool) -> Self { Self::scripted(vec![], Ok(result)) }

    #[must_use]
    pub fn scripted(script: Vec<LikeResult>, fallback: LikeResult) -> Self {
        Self {
            script: Arc::new(Mutex::new(script.into())),
            fallback,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    #[must_use]
    pub fn call_count(&self) -> usize { self.call_count.load(Ordering::SeqCst) }

    fn next_result(&self) -> LikeResult {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

impl LikeService for StubLikeService {
    fn attempt_like(&self) -> LikeResult { self.next_result() }
}

#[async_trait]
impl AsyncLikeService for StubLikeService {
    async fn attempt_like(&self) -> LikeResult {
        tokio::task::yield_now().await;
        self.next_result()
    }
}

/// A like service that always faults.
#[derive(Debug, Clone, Default)]
pub struct FaultyLikeService {
    call_count: Arc<AtomicUsize>,
}

impl FaultyLikeService {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn call_count(&self) -> usize { self.call_count.load(Ordering::SeqCst) }

    fn fault(&self) -> LikeResult {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        Err(LikeServiceError::Unreachable {
            reason: "connection refused".to_string(),
        })
    }
}

impl LikeService for FaultyLikeService {
    fn attempt_like(&self) -> LikeResult { self.fault() }
}

#[async_trait]
impl AsyncLikeService for FaultyLikeService {
    async fn attempt_like(&self) -> LikeResult { self.fault() }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_scripted_then_fallback() {
        let stub = StubLikeService::scripted(
            vec![
                Ok(false),
                Err(LikeServiceError::Failed {
                    reason: "500".to_string(),
                }),
            ],
            Ok(true),
        );
        let copy = stub.clone();

        assert_eq!(LikeService::attempt_like(&stub), Ok(false));
        assert!(LikeService::attempt_like(&copy).is_err());
        assert_eq!(LikeService::attempt_like(&stub), Ok(true));
        assert_eq!(LikeService::attempt_like(&stub), Ok(true));
        assert_eq!(stub.call_count(), 4);
    }
}
