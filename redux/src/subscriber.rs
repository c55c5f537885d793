// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Formatter};

/// Subscribers are told about the new state after a dispatch, only if the state
/// actually changed.
pub trait Subscriber<S> {
    fn run(&mut self, state: &S);
}

pub type SubscriberItem<S> = Box<dyn Subscriber<S> + Send + Sync>;
pub type SubscriberVec<S> = Vec<SubscriberItem<S>>;

/// Subscriber function.
pub type SubscriberFn<S> = dyn FnMut(&S) + Sync + Send + 'static;

/// Wrap a closure so it can be added to a [`crate::Store`] as a [`Subscriber`].
pub struct SubscriberFnWrapper<S> {
    fn_mut: Box<SubscriberFn<S>>,
}

impl<S> Debug for SubscriberFnWrapper<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "SubscriberFnWrapper")
    }
}

impl<S> SubscriberFnWrapper<S> {
    pub fn from(fn_mut: impl FnMut(&S) + Send + Sync + 'static) -> Self {
        Self {
            fn_mut: Box::new(fn_mut),
        }
    }
}

impl<S> Subscriber<S> for SubscriberFnWrapper<S> {
    fn run(&mut self, state: &S) { (self.fn_mut)(state); }
}
