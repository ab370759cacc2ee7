// src/domain/audit/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ledger-assigned primary key of an audit record.
///
/// The ledger hands these out either as integers (serial columns) or as
/// strings, so both are accepted. Any other JSON type is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuditCode {
    Integer(i64),
    Text(String),
}

impl fmt::Display for AuditCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditCode::Integer(value) => write!(f, "{value}"),
            AuditCode::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for AuditCode {
    fn from(value: i64) -> Self {
        AuditCode::Integer(value)
    }
}

impl From<&str> for AuditCode {
    fn from(value: &str) -> Self {
        AuditCode::Text(value.to_string())
    }
}

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%d %H:%M:%S%.f%#z"];
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Point in time stamped by the ledger.
///
/// Keeps the text exactly as the ledger sent it, since the viewer renders it
/// verbatim, along with the parsed instant. Unparseable text is rejected at
/// decode time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LedgerTimestamp {
    raw: String,
    instant: DateTime<Utc>,
}

impl LedgerTimestamp {
    pub fn parse(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        let instant = parse_instant(&raw).ok_or_else(|| {
            DomainError::Malformed(format!("unrecognised ledger timestamp: {raw:?}"))
        })?;
        Ok(Self { raw, instant })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    // Flask's jsonify emits datetimes in RFC 1123 form.
    if let Ok(parsed) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    // Postgres text output carries a numeric offset such as `+00`.
    if let Some(parsed) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(trimmed, fmt).ok())
    {
        return Some(parsed.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|naive| naive.and_utc())
}

impl TryFrom<String> for LedgerTimestamp {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<LedgerTimestamp> for String {
    fn from(value: LedgerTimestamp) -> Self {
        value.raw
    }
}

impl fmt::Display for LedgerTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
