// Copyright (c) Redstash Project Authors.

//! Replay Example
//!
//! Stores a few values, then prints the recorded call count and history of
//! the facade's store operation.

use redstash::{Cache, Result};

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    futures::executor::block_on(async {
        let cache = Cache::builder().memory().build().await?;

        cache.store("foo").await?;
        cache.store("bar").await?;
        cache.store(42_i64).await?;

        // Prints one header line and one line per recorded call:
        //
        //   Cache::store was called 3 times:
        //   Cache::store(foo) -> <key>
        //   Cache::store(bar) -> <key>
        //   Cache::store(42) -> <key>
        print!("{}", cache.replay_store().await?);
        Ok(())
    })
}
