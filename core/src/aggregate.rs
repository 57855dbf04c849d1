//! Aggregate scalars precomputed by the collector.

use std::str::FromStr;

use serde::Serialize;

use crate::bag::ReportBag;
use crate::error::SectionError;
use crate::status::HealthStatus;

const PENDING_UPDATE_COUNT: &[&str] = &["PendingUpdateCount"];
const WEBSITE_COUNT: &[&str] = &["WebsiteCount"];
const WEBSITE_STATUS: &[&str] = &["WebsiteStatus"];
const SQL_SERVER_STATUS: &[&str] = &["SqlServerInfoStatus"];
const SQL_DATABASE_STATUS: &[&str] = &["SqlDatabaseInfoStatus"];
// Older collectors file the disk and drive statuses under the section name.
const DISK_STATUS: &[&str] = &["DiskInfoStatus", "DiskInfo"];
const DRIVE_STATUS: &[&str] = &["DriveInfoStatus", "DriveInfo"];
const SERVICE_STATUS: &[&str] = &["ServiceStatus"];

const INTEGER: &str = "integer";
const STATUS: &str = "health status";

/// Counts and per-subsystem health read from the aggregate bag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregateFields {
    pub pending_update_count: i32,
    pub website_count: i32,
    pub website_status: HealthStatus,
    pub sql_server_status: HealthStatus,
    pub sql_database_status: HealthStatus,
    pub disk_status: HealthStatus,
    pub drive_status: HealthStatus,
    pub service_status: HealthStatus,
}

/// Resolve every aggregate field. A value that fails to parse leaves its
/// field at the default and is reported; other fields are unaffected.
pub fn resolve_aggregates(bag: &ReportBag) -> (AggregateFields, Vec<SectionError>) {
    let mut errors = Vec::new();

    let fields = AggregateFields {
        pending_update_count: scalar(bag, PENDING_UPDATE_COUNT, INTEGER, &mut errors),
        website_count: scalar(bag, WEBSITE_COUNT, INTEGER, &mut errors),
        website_status: scalar(bag, WEBSITE_STATUS, STATUS, &mut errors),
        sql_server_status: scalar(bag, SQL_SERVER_STATUS, STATUS, &mut errors),
        sql_database_status: scalar(bag, SQL_DATABASE_STATUS, STATUS, &mut errors),
        disk_status: scalar(bag, DISK_STATUS, STATUS, &mut errors),
        drive_status: scalar(bag, DRIVE_STATUS, STATUS, &mut errors),
        service_status: scalar(bag, SERVICE_STATUS, STATUS, &mut errors),
    };

    (fields, errors)
}

/// Parse the first non-blank value among `keys`.
fn scalar<T: FromStr + Default>(
    bag: &ReportBag,
    keys: &[&str],
    expected: &'static str,
    errors: &mut Vec<SectionError>,
) -> T {
    let Some((key, raw)) = keys
        .iter()
        .find_map(|key| bag.payload(key).map(|raw| (*key, raw)))
    else {
        return T::default();
    };

    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            errors.push(SectionError::InvalidScalar {
                key: key.to_string(),
                value: raw.to_string(),
                expected,
            });
            T::default()
        }
    }
}
