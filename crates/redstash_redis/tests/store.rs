// Copyright (c) Redstash Project Authors.
// Licensed under the MIT License.

//! Integration tests for `RedisStore`.
//!
//! Tests that talk to a live server are `#[ignore]`d by default; run them
//! with `cargo test -- --ignored` against a disposable local Redis. They
//! flush the current database.

use redstash_redis::RedisStore;
use redstash_store::KeyValueStore;

#[tokio::test]
async fn connect_rejects_malformed_url() {
    let result = RedisStore::connect("not-a-redis-url").await;
    assert!(result.is_err());
}

#[tokio::test]
#[ignore = "requires a running redis server"]
async fn set_then_get_round_trips() {
    let store = RedisStore::connect_default().await.expect("connect");
    store.flush().await.expect("flush");

    store.set("key", b"value".to_vec()).await.expect("set");
    assert_eq!(store.get("key").await.expect("get"), Some(b"value".to_vec()));
}

#[tokio::test]
#[ignore = "requires a running redis server"]
async fn get_missing_key_is_none() {
    let store = RedisStore::connect_default().await.expect("connect");
    store.flush().await.expect("flush");

    assert_eq!(store.get("missing").await.expect("get"), None);
}

#[tokio::test]
#[ignore = "requires a running redis server"]
async fn increment_and_lists_match_store_semantics() {
    let store = RedisStore::connect_default().await.expect("connect");
    store.flush().await.expect("flush");

    assert_eq!(store.increment("counter").await.expect("incr"), 1);
    assert_eq!(store.increment("counter").await.expect("incr"), 2);

    assert_eq!(store.push("history", b"a".to_vec()).await.expect("push"), 1);
    assert_eq!(store.push("history", b"b".to_vec()).await.expect("push"), 2);
    assert_eq!(
        store.list("history").await.expect("list"),
        vec![b"a".to_vec(), b"b".to_vec()]
    );
    assert!(store.list("no-such-list").await.expect("list").is_empty());
}
