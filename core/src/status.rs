use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Health of a monitored subsystem, as precomputed by the collector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum HealthStatus {
    #[default]
    Unknown,
    #[serde(rename = "OK")]
    Ok,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized health status {0:?}")]
pub struct ParseStatusError(String);

impl FromStr for HealthStatus {
    type Err = ParseStatusError;

    /// Exact, case-sensitive match on `Unknown`, `OK`, `Warning` or `Error`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Unknown" => Ok(HealthStatus::Unknown),
            "OK" => Ok(HealthStatus::Ok),
            "Warning" => Ok(HealthStatus::Warning),
            "Error" => Ok(HealthStatus::Error),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthStatus::Unknown => write!(f, "Unknown"),
            HealthStatus::Ok => write!(f, "OK"),
            HealthStatus::Warning => write!(f, "Warning"),
            HealthStatus::Error => write!(f, "Error"),
        }
    }
}
