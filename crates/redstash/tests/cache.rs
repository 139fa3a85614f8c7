// Copyright (c) Redstash Project Authors.
// Licensed under the MIT License.

//! Integration tests for the `Cache` facade public API.

use redstash::{Cache, Error, Key, KeyValueStore};

type TestResult = Result<(), Error>;

fn block_on<F: std::future::Future>(f: F) -> F::Output {
    futures::executor::block_on(f)
}

#[test]
fn store_then_get_round_trips_text() -> TestResult {
    block_on(async {
        let cache = Cache::builder().memory().build().await?;

        let key = cache.store("hello").await?;
        assert_eq!(cache.get_str(&key).await?, Some("hello".to_string()));
        Ok(())
    })
}

#[test]
fn store_then_get_round_trips_integer() -> TestResult {
    block_on(async {
        let cache = Cache::builder().memory().build().await?;

        let key = cache.store(42_i64).await?;
        assert_eq!(cache.get_int(&key).await?, Some(42));
        // The stored representation is the decimal rendering.
        assert_eq!(cache.get_str(&key).await?, Some("42".to_string()));
        Ok(())
    })
}

#[test]
fn store_then_get_round_trips_binary() -> TestResult {
    block_on(async {
        let cache = Cache::builder().memory().build().await?;

        let payload = vec![0_u8, 159, 146, 150];
        let key = cache.store(payload.clone()).await?;
        assert_eq!(cache.get_bytes(&key).await?, Some(payload));
        Ok(())
    })
}

#[test]
fn store_then_get_round_trips_float() -> TestResult {
    block_on(async {
        let cache = Cache::builder().memory().build().await?;

        let key = cache.store(3.5_f64).await?;
        assert_eq!(cache.get_str(&key).await?, Some("3.5".to_string()));
        Ok(())
    })
}

#[test]
fn every_store_generates_a_fresh_key() -> TestResult {
    block_on(async {
        let cache = Cache::builder().memory().build().await?;

        let a = cache.store("same").await?;
        let b = cache.store("same").await?;
        assert_ne!(a, b);
        Ok(())
    })
}

#[test]
fn get_on_absent_key_is_none() -> TestResult {
    block_on(async {
        let cache = Cache::builder().memory().build().await?;

        let missing = Key::from("never-stored");
        assert_eq!(cache.get_bytes(&missing).await?, None);
        assert_eq!(cache.get_str(&missing).await?, None);
        assert_eq!(cache.get_int(&missing).await?, None);
        Ok(())
    })
}

#[test]
fn get_str_on_invalid_utf8_errors() -> TestResult {
    block_on(async {
        let cache = Cache::builder().memory().build().await?;

        let key = cache.store(vec![0xff_u8, 0xfe]).await?;
        assert!(cache.get_str(&key).await.is_err());
        Ok(())
    })
}

#[test]
fn get_int_on_non_numeric_text_errors() -> TestResult {
    block_on(async {
        let cache = Cache::builder().memory().build().await?;

        let key = cache.store("not a number").await?;
        assert!(cache.get_int(&key).await.is_err());
        Ok(())
    })
}

#[test]
fn build_erases_existing_backend_data() -> TestResult {
    block_on(async {
        let store = redstash::InMemoryStore::new();
        store.set("leftover", b"stale".to_vec()).await?;

        let cache = Cache::builder().storage(store.clone()).build().await?;

        assert_eq!(store.get("leftover").await?, None);
        assert_eq!(cache.get_bytes(&Key::from("leftover")).await?, None);
        Ok(())
    })
}

#[test]
fn three_stores_on_a_fresh_facade_count_three() -> TestResult {
    block_on(async {
        let cache = Cache::builder().memory().build().await?;

        let foo = cache.store("foo").await?;
        let bar = cache.store("bar").await?;
        let answer = cache.store(42_i64).await?;

        // Counter lives at the operation's fully-qualified name.
        assert_eq!(
            cache.inner().get(redstash::STORE_OP).await?,
            Some(b"3".to_vec())
        );

        // Each recorded output is the key returned by the paired call.
        let outputs = cache.inner().list(&redstash::outputs_key(redstash::STORE_OP)).await?;
        assert_eq!(
            outputs,
            vec![
                foo.as_str().as_bytes().to_vec(),
                bar.as_str().as_bytes().to_vec(),
                answer.as_str().as_bytes().to_vec(),
            ]
        );

        // And the keys still resolve to the stored representations.
        assert_eq!(cache.get_str(&foo).await?, Some("foo".to_string()));
        assert_eq!(cache.get_str(&bar).await?, Some("bar".to_string()));
        assert_eq!(cache.get_int(&answer).await?, Some(42));
        Ok(())
    })
}
