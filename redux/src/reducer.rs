// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter},
          sync::Arc};

/// A reducer is a pure function that takes the current state and an action, and returns
/// the next state. It must not have side effects, and it must not panic.
pub trait Reducer<S, A> {
    fn run(&self, action: &A, state: &S) -> S;
}

pub type ReducerItem<S, A> = Box<dyn Reducer<S, A> + Send + Sync>;
pub type ReducerVec<S, A> = Vec<ReducerItem<S, A>>;

/// Reducer function.
pub type ReducerFn<S, A> = dyn Fn(&S, &A) -> S + Sync + Send + 'static;

/// Wrap a closure so it can be added to a [`crate::Store`] as a [`Reducer`].
#[derive(Clone)]
pub struct ReducerFnWrapper<S, A> {
    fn_ref: Arc<ReducerFn<S, A>>,
}

impl<S, A> Debug for ReducerFnWrapper<S, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ReducerFnWrapper")
    }
}

impl<S, A> ReducerFnWrapper<S, A> {
    pub fn from(fn_ref: impl Fn(&S, &A) -> S + Send + Sync + 'static) -> Self {
        Self {
            fn_ref: Arc::new(fn_ref),
        }
    }

    #[must_use]
    pub fn invoke(&self, state: &S, action: &A) -> S { (self.fn_ref)(state, action) }
}

impl<S, A> Reducer<S, A> for ReducerFnWrapper<S, A> {
    fn run(&self, action: &A, state: &S) -> S { self.invoke(state, action) }
}
