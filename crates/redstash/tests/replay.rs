// Copyright (c) Redstash Project Authors.
// Licensed under the MIT License.

//! Integration tests for the replay renderer.

use redstash::{Cache, Error, KeyValueStore, replay};
use redstash_store::testing::MockStore;

type TestResult = Result<(), Error>;

fn block_on<F: std::future::Future>(f: F) -> F::Output {
    futures::executor::block_on(f)
}

#[test]
fn replay_on_a_fresh_facade_reports_zero_calls() -> TestResult {
    block_on(async {
        let cache = Cache::builder().memory().build().await?;

        let report = cache.replay_store().await?;
        assert_eq!(report, "Cache::store was called 0 times:\n");
        Ok(())
    })
}

#[test]
fn replay_pairs_inputs_and_outputs_in_invocation_order() -> TestResult {
    block_on(async {
        let cache = Cache::builder().memory().build().await?;

        let foo = cache.store("foo").await?;
        let bar = cache.store("bar").await?;
        let answer = cache.store(42_i64).await?;

        let report = cache.replay_store().await?;
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Cache::store was called 3 times:");
        assert_eq!(lines[1], format!("Cache::store(foo) -> {foo}"));
        assert_eq!(lines[2], format!("Cache::store(bar) -> {bar}"));
        assert_eq!(lines[3], format!("Cache::store(42) -> {answer}"));
        Ok(())
    })
}

#[test]
fn replay_pairs_to_the_shorter_list_when_histories_diverge() -> TestResult {
    block_on(async {
        let mock = MockStore::new();
        mock.increment("op").await?;
        mock.increment("op").await?;
        mock.push("op:inputs", b"a".to_vec()).await?;
        mock.push("op:inputs", b"b".to_vec()).await?;
        mock.push("op:outputs", b"1".to_vec()).await?;

        let report = replay(&mock, "op").await?;
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines, vec!["op was called 2 times:", "op(a) -> 1"]);
        Ok(())
    })
}

#[test]
fn replay_on_a_non_numeric_counter_errors() -> TestResult {
    block_on(async {
        let mock = MockStore::new();
        mock.set("op", b"not a number".to_vec()).await?;

        assert!(replay(&mock, "op").await.is_err());
        Ok(())
    })
}
