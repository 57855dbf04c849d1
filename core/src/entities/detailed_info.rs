use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::timespan;
use crate::units::format_size;

/// Host hardware and OS summary.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawDetailedInfo {
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub system_type: Option<String>,
    pub processors: Option<i32>,
    pub logical_processors: Option<i32>,
    #[serde(rename = "TotalPhysicalMemoryInMB")]
    pub total_physical_memory_in_mb: Option<i64>,
    pub windows_version: Option<String>,
    pub windows_version_name: Option<String>,
    #[serde(default, deserialize_with = "timespan::deserialize_opt")]
    pub host_uptime: Option<Duration>,
}

/// Normalized host summary. The default value stands in for a report
/// without a `DetailedInfo` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetailedInfo {
    pub manufacturer: String,
    pub model: String,
    pub system_type: String,
    pub processors: i32,
    pub logical_processors: i32,
    pub total_physical_memory: String,
    pub windows_version: String,
    pub windows_version_name: String,
    #[serde(serialize_with = "timespan::serialize_human")]
    pub host_uptime: Duration,
}

pub fn normalize(raw: RawDetailedInfo, precision: usize) -> DetailedInfo {
    let memory_bytes = raw
        .total_physical_memory_in_mb
        .unwrap_or_default()
        .saturating_mul(1024 * 1024);

    DetailedInfo {
        manufacturer: raw.manufacturer.unwrap_or_default(),
        model: raw.model.unwrap_or_default(),
        system_type: raw.system_type.unwrap_or_default(),
        processors: raw.processors.unwrap_or_default(),
        logical_processors: raw.logical_processors.unwrap_or_default(),
        total_physical_memory: format_size(memory_bytes, precision),
        windows_version: raw.windows_version.unwrap_or_default(),
        windows_version_name: raw.windows_version_name.unwrap_or_default(),
        host_uptime: raw.host_uptime.unwrap_or_default(),
    }
}
