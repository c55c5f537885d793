// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use like_redux::{ReducerFnWrapper, Store, StoreConfig, into_shared_store,
                 spawn_dispatch_action};
use pretty_assertions::assert_eq;

/// The macro resolves `tokio` through `like_redux`, so nothing is imported from tokio
/// here except the test attribute.
#[tokio::test]
async fn test_spawn_dispatch_action_from_another_crate() {
    let mut store = Store::<Vec<char>, char>::new(StoreConfig::default());
    store.add_reducer(ReducerFnWrapper::from(|state: &Vec<char>, action: &char| {
        let mut next = state.clone();
        next.push(*action);
        next
    }));
    let shared_store = into_shared_store(store);

    let changed = spawn_dispatch_action!(shared_store, 'a').await.unwrap();
    assert!(changed);

    let changed = spawn_dispatch_action!(shared_store, 'b').await.unwrap();
    assert!(changed);

    assert_eq!(shared_store.read().await.get_state(), vec!['a', 'b']);
    assert_eq!(shared_store.read().await.get_history().len(), 2);
}
