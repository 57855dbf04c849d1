//! SQL Server instances and databases.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::units::format_size;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawSqlServerInfo {
    pub name: Option<String>,
    pub start_mode: Option<String>,
    pub state: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SqlServerInfo {
    pub name: String,
    pub start_mode: String,
    pub state: String,
    pub status: String,
}

pub fn normalize_server(raw: RawSqlServerInfo) -> SqlServerInfo {
    SqlServerInfo {
        name: raw.name.unwrap_or_default(),
        start_mode: raw.start_mode.unwrap_or_default(),
        state: raw.state.unwrap_or_default(),
        status: raw.status.unwrap_or_default(),
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawSqlDatabaseInfo {
    pub name: Option<String>,
    pub instance_name: Option<String>,
    pub is_system_object: Option<bool>,
    #[serde(default, deserialize_with = "dates::deserialize_naive")]
    pub last_backup_date: Option<NaiveDateTime>,
    #[serde(rename = "SizeInMB")]
    pub size_in_mb: Option<f64>,
    #[serde(rename = "SpaceAvailableInKB")]
    pub space_available_in_kb: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SqlDatabaseInfo {
    pub name: String,
    pub instance_name: String,
    pub is_system_object: bool,
    /// `None` when the database has never been backed up.
    pub last_backup_date: Option<NaiveDateTime>,
    pub size_in_bytes: i64,
    pub size: String,
    pub space_available_in_bytes: i64,
    pub space_available: String,
}

pub fn normalize_database(raw: RawSqlDatabaseInfo, precision: usize) -> SqlDatabaseInfo {
    let size_in_bytes = to_bytes(raw.size_in_mb, 1024.0 * 1024.0);
    let space_available_in_bytes = to_bytes(raw.space_available_in_kb, 1024.0);

    SqlDatabaseInfo {
        name: raw.name.unwrap_or_default(),
        instance_name: raw.instance_name.unwrap_or_default(),
        is_system_object: raw.is_system_object.unwrap_or_default(),
        last_backup_date: raw.last_backup_date.filter(|dt| !dates::is_unset(dt)),
        size_in_bytes,
        size: format_size(size_in_bytes, precision),
        space_available_in_bytes,
        space_available: format_size(space_available_in_bytes, precision),
    }
}

// Whole bytes; the `as` cast saturates on overflow.
fn to_bytes(value: Option<f64>, factor: f64) -> i64 {
    (value.unwrap_or_default() * factor) as i64
}
