// Copyright (c) Redstash Project Authors.

//! Redis store implementation.

use std::fmt;

use redis::{AsyncCommands, aio::ConnectionManager};
use tracing::debug;

use redstash_store::{Error, KeyValueStore, Result};

/// The default connection URL, targeting a local server on the standard port.
pub const DEFAULT_URL: &str = "redis://127.0.0.1/";

/// A Redis-backed key-value store.
///
/// The handle wraps a connection manager that multiplexes commands over a
/// single server connection and reconnects on failure between commands.
/// Cloning the handle shares that connection.
///
/// Connectivity failures surface as [`Error`] values with the underlying
/// redis error retained as the source; no retry is performed here.
#[derive(Clone)]
pub struct RedisStore {
    manager: ConnectionManager,
}

impl fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisStore").finish_non_exhaustive()
    }
}

impl RedisStore {
    /// Connects to the server at `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse or the initial connection
    /// cannot be established.
    pub async fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(Error::caused_by)?;
        let manager = client.get_connection_manager().await.map_err(Error::caused_by)?;
        debug!(url, "connected to redis");
        Ok(Self { manager })
    }

    /// Connects to a local server using [`DEFAULT_URL`].
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    pub async fn connect_default() -> Result<Self> {
        Self::connect(DEFAULT_URL).await
    }

    fn connection(&self) -> ConnectionManager {
        self.manager.clone()
    }
}

impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.connection();
        conn.get(key).await.map_err(Error::caused_by)
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        let mut conn = self.connection();
        conn.set(key, value).await.map_err(Error::caused_by)
    }

    async fn increment(&self, key: &str) -> Result<i64> {
        let mut conn = self.connection();
        conn.incr(key, 1_i64).await.map_err(Error::caused_by)
    }

    async fn push(&self, key: &str, element: Vec<u8>) -> Result<u64> {
        let mut conn = self.connection();
        conn.rpush(key, element).await.map_err(Error::caused_by)
    }

    async fn list(&self, key: &str) -> Result<Vec<Vec<u8>>> {
        let mut conn = self.connection();
        conn.lrange(key, 0, -1).await.map_err(Error::caused_by)
    }

    async fn flush(&self) -> Result<()> {
        let mut conn = self.connection();
        debug!("flushing current redis database");
        let () = redis::cmd("FLUSHDB")
            .query_async(&mut conn)
            .await
            .map_err(Error::caused_by)?;
        Ok(())
    }
}
