//! JSON result contract for the calling automation
//!
//! Success prints the outcome object; failure prints `{"failed": true, "msg": ...}`.
//! There is no partial result.

use crate::error::{Result, WatchError};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Failure<'a> {
    failed: bool,
    msg: &'a str,
}

/// Serialize a successful outcome
pub fn render_success<T: Serialize>(outcome: &T) -> Result<String> {
    Ok(serde_json::to_string(outcome)?)
}

/// Serialize a failure report for `err`
pub fn render_failure(err: &WatchError) -> String {
    let msg = err.to_string();
    serde_json::to_string(&Failure {
        failed: true,
        msg: &msg,
    })
    .unwrap_or_else(|_| r#"{"failed":true,"msg":"unserializable error"}"#.to_string())
}
