//! The collector's report envelope and host identity.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::bag::ReportBag;
use crate::dates::parse_report_time;
use crate::error::ReportError;

/// Longest accepted host name or domain.
pub const MAX_IDENTITY_LEN: usize = 100;

/// A raw report as produced by a collector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServerReport {
    #[serde(default)]
    pub server: Option<String>,
    #[serde(default)]
    pub domain_workgroup: Option<String>,
    #[serde(default)]
    pub report_date_time: Option<String>,
    /// Precomputed scalars: counts and health statuses.
    #[serde(default)]
    pub aggregate_data: ReportBag,
    /// Per-entity sections.
    #[serde(default)]
    pub data: ReportBag,
}

/// Who sent a report, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostIdentity {
    pub name: String,
    pub domain: String,
    pub reported_at: DateTime<FixedOffset>,
}

impl HostIdentity {
    /// Validate and extract the identity fields of a report.
    pub fn from_report(report: &ServerReport) -> Result<Self, ReportError> {
        let name = report
            .server
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(ReportError::MissingHostName)?;
        let domain = report.domain_workgroup.as_deref().unwrap_or_default().trim();

        check_len("host name", name)?;
        check_len("domain", domain)?;

        let raw_time = report
            .report_date_time
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or(ReportError::MissingTimestamp)?;
        let reported_at = parse_report_time(raw_time)
            .ok_or_else(|| ReportError::InvalidTimestamp(raw_time.to_string()))?;

        Ok(Self {
            name: name.to_string(),
            domain: domain.to_string(),
            reported_at,
        })
    }
}

fn check_len(field: &'static str, value: &str) -> Result<(), ReportError> {
    if value.chars().count() > MAX_IDENTITY_LEN {
        return Err(ReportError::FieldTooLong {
            field,
            max: MAX_IDENTITY_LEN,
        });
    }
    Ok(())
}
