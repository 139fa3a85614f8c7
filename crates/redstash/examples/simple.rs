// Copyright (c) Redstash Project Authors.

//! Simple Facade Example
//!
//! Demonstrates basic facade operations: store, typed retrieval, and the
//! absent-key sentinel.

use redstash::{Cache, Key, Result};

fn main() -> Result<()> {
    futures::executor::block_on(async {
        // Build a facade over in-memory storage. Building flushes the
        // backend's current database.
        let cache = Cache::builder().memory().build().await?;

        // Store values of different shapes; each gets a fresh key.
        let greeting = cache.store("hello").await?;
        let answer = cache.store(42_i64).await?;
        let raw = cache.store(vec![1_u8, 2, 3]).await?;

        // Read them back with typed converters.
        assert_eq!(cache.get_str(&greeting).await?, Some("hello".to_string()));
        assert_eq!(cache.get_int(&answer).await?, Some(42));
        assert_eq!(cache.get_bytes(&raw).await?, Some(vec![1, 2, 3]));

        // A key never produced by store yields the absent sentinel.
        let missing = Key::from("never-stored");
        assert_eq!(cache.get_bytes(&missing).await?, None);

        println!("stored {greeting}, {answer}, {raw}");
        Ok(())
    })
}
