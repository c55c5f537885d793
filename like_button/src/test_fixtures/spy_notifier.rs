// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::{Arc,
                atomic::{AtomicUsize, Ordering}};

use crate::NotifyLiked;

/// Records how many times it was notified. Clones share the same counter, so hand one
/// clone to the button and keep the other for assertions.
#[derive(Debug, Clone, Default)]
pub struct SpyNotifier {
    call_count: Arc<AtomicUsize>,
}

impl SpyNotifier {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn call_count(&self) -> usize { self.call_count.load(Ordering::SeqCst) }

    #[must_use]
    pub fn was_called(&self) -> bool { self.call_count() > 0 }
}

impl NotifyLiked for SpyNotifier {
    fn notify_liked(&mut self) { self.call_count.fetch_add(1, Ordering::SeqCst); }
}
