//! Decoding of GraphQL responses.
//!
//! Each parser accepts the full response envelope (`{"data": ..., "errors": ...}`),
//! the bare `data` object, or the bare rows, so that saved API output can be
//! fed in however it was captured.

use serde_json::Value;
use tracing::debug;

use crate::error::{DashboardError, Result};
use crate::types::{AuditRatio, Transaction, UserProfile};

/// Strip the GraphQL envelope, turning a non-empty `errors` array into an error.
fn unwrap_envelope(value: Value) -> Result<Value> {
    if let Some(errors) = value.get("errors").and_then(Value::as_array) {
        if let Some(first) = errors.first() {
            let message = first
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("GraphQL query failed");
            return Err(DashboardError::GraphQl(message.to_string()));
        }
    }

    match value {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) => Ok(data),
            None => Ok(Value::Object(map)),
        },
        other => Ok(other),
    }
}

/// The first row of a `user` query, if any.
fn first_user(value: Value) -> Option<Value> {
    match value {
        Value::Object(mut map) => match map.remove("user") {
            Some(Value::Array(rows)) => rows.into_iter().next(),
            Some(Value::Object(row)) => Some(Value::Object(row)),
            Some(_) => None,
            None if map.is_empty() => None,
            None => Some(Value::Object(map)),
        },
        Value::Array(rows) => rows.into_iter().next(),
        _ => None,
    }
}

/// Decode XP transactions. A missing or null `transaction` field yields no
/// transactions.
pub fn parse_transactions(json: &str) -> Result<Vec<Transaction>> {
    let value = unwrap_envelope(serde_json::from_str(json)?)?;
    let rows = match value {
        Value::Object(mut map) => map.remove("transaction").unwrap_or(Value::Null),
        other => other,
    };
    if rows.is_null() {
        return Ok(Vec::new());
    }

    let transactions: Vec<Transaction> = serde_json::from_value(rows)?;
    debug!(count = transactions.len(), "decoded transactions");
    Ok(transactions)
}

/// Decode audit totals. A response without a user row yields all zeros.
pub fn parse_audit(json: &str) -> Result<AuditRatio> {
    let value = unwrap_envelope(serde_json::from_str(json)?)?;
    match first_user(value) {
        Some(row) => Ok(serde_json::from_value(row)?),
        None => Ok(AuditRatio::default()),
    }
}

/// Decode the signed-in user's profile.
pub fn parse_profile(json: &str) -> Result<UserProfile> {
    let value = unwrap_envelope(serde_json::from_str(json)?)?;
    let row = first_user(value).ok_or(DashboardError::MissingUser)?;
    Ok(serde_json::from_value(row)?)
}
