// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::{Arc, Mutex};

use like_redux::{Reducer, Store, StoreConfig, Subscriber};
use pretty_assertions::assert_eq;

/// ╭──────────────────────────────────────────────────────╮
/// │ Action enum.                                         │
/// ╰──────────────────────────────────────────────────────╯
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Action {
    Push(i32),
    AddPop(i32),
    Clear,
    Noop,
}

/// ╭──────────────────────────────────────────────────────╮
/// │ State struct.                                        │
/// ╰──────────────────────────────────────────────────────╯
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct State {
    pub stack: Vec<i32>,
}

/// ╭──────────────────────────────────────────────────────╮
/// │ Reducer.                                             │
/// ╰──────────────────────────────────────────────────────╯
#[derive(Default)]
struct StackReducer;

impl Reducer<State, Action> for StackReducer {
    fn run(&self, action: &Action, state: &State) -> State {
        let mut stack = state.stack.clone();
        match action {
            Action::Push(arg) => stack.push(*arg),
            Action::AddPop(arg) => {
                let top = stack.pop().unwrap_or_default();
                stack.push(top + arg);
            }
            Action::Clear => stack.clear(),
            Action::Noop => {}
        }
        State { stack }
    }
}

/// ╭──────────────────────────────────────────────────────╮
/// │ Subscriber.                                          │
/// ╰──────────────────────────────────────────────────────╯
struct LastTopSubscriber {
    shared_object_ref: Arc<Mutex<Vec<i32>>>,
}

impl Subscriber<State> for LastTopSubscriber {
    fn run(&mut self, state: &State) {
        if let Some(top) = state.stack.last() {
            self.shared_object_ref.lock().unwrap().push(*top);
        }
    }
}

/// ╭──────────────────────────────────────────────────────╮
/// │ Main test runner.                                    │
/// ╰──────────────────────────────────────────────────────╯
#[test]
fn test_redux_store_works_for_main_use_cases() {
    // This shared object is used to collect results from the subscriber & test it later.
    let shared_object_ref = Arc::new(Mutex::new(Vec::<i32>::new()));

    let mut store = Store::<State, Action>::new(StoreConfig {
        max_history_size: 3,
    });
    store
        .add_reducer(StackReducer)
        .add_subscriber(LastTopSubscriber {
            shared_object_ref: shared_object_ref.clone(),
        });

    store.dispatch(&Action::Push(1));
    store.dispatch(&Action::AddPop(2));
    assert_eq!(shared_object_ref.lock().unwrap().pop(), Some(3));

    // No state change, so the subscriber is not called.
    store.dispatch(&Action::Noop);
    assert_eq!(shared_object_ref.lock().unwrap().pop(), Some(1));
    assert_eq!(shared_object_ref.lock().unwrap().pop(), None);

    store.dispatch(&Action::Clear);
    assert_eq!(store.get_state(), State::default());

    // History is bounded to the last 3 distinct states.
    assert_eq!(
        store.get_history(),
        vec![
            State { stack: vec![1] },
            State { stack: vec![3] },
            State { stack: vec![] },
        ]
    );
}

#[test]
fn test_dispatch_replaces_state_without_touching_previous_value() {
    let mut store = Store::<State, Action>::default();
    store.add_reducer(StackReducer);

    store.dispatch(&Action::Push(7));
    let before = store.get_state();
    store.dispatch(&Action::Push(8));

    assert_eq!(before, State { stack: vec![7] });
    assert_eq!(store.get_state(), State { stack: vec![7, 8] });
}
