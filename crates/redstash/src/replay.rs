// Copyright (c) Redstash Project Authors.
// Licensed under the MIT License.

//! Renders recorded instrumentation data as human-readable text.

use redstash_store::{Error, KeyValueStore, Result};

use crate::{
    instrument::{inputs_key, outputs_key},
    operation::OpName,
};

/// Renders the recorded call count and history of the operation `name`.
///
/// The report has one header line with the invocation count (an absent
/// counter reads as zero), followed by one line per recorded call pairing
/// the input and output representations in invocation order. If the lists
/// have diverged, pairing stops at the shorter one.
///
/// ```text
/// Cache::store was called 2 times:
/// Cache::store(foo) -> 8b3f9a74-5f2c-4b38-9c52-0f6e5b3f2d11
/// Cache::store(42) -> 1d0a6c2e-7e51-49d5-b1a7-3c8f2e9a4d60
/// ```
///
/// # Errors
///
/// Returns an error if a backend read fails or the recorded counter is
/// not numeric.
pub async fn replay<S>(store: &S, name: OpName) -> Result<String>
where
    S: KeyValueStore,
{
    let count = match store.get(name).await? {
        Some(raw) => std::str::from_utf8(&raw)
            .map_err(Error::caused_by)?
            .parse::<i64>()
            .map_err(Error::caused_by)?,
        None => 0,
    };

    let inputs = store.list(&inputs_key(name)).await?;
    let outputs = store.list(&outputs_key(name)).await?;

    let mut report = format!("{name} was called {count} times:\n");
    for (input, output) in inputs.iter().zip(outputs.iter()) {
        let input = String::from_utf8_lossy(input);
        let output = String::from_utf8_lossy(output);
        report.push_str(&format!("{name}({input}) -> {output}\n"));
    }
    Ok(report)
}
