use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::timespan;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawProcessInfo {
    pub process_name: Option<String>,
    #[serde(rename = "CPUTime", default, deserialize_with = "timespan::deserialize_opt")]
    pub cpu_time: Option<Duration>,
    #[serde(rename = "WorkingSetInMB")]
    pub working_set_in_mb: Option<f64>,
}

/// One entry of the top-CPU or top-memory process lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProcessInfo {
    pub process_name: String,
    #[serde(serialize_with = "timespan::serialize_human")]
    pub cpu_time: Duration,
    pub working_set_in_mb: f64,
}

pub fn normalize(raw: RawProcessInfo) -> ProcessInfo {
    ProcessInfo {
        process_name: raw.process_name.unwrap_or_default(),
        cpu_time: raw.cpu_time.unwrap_or_default(),
        working_set_in_mb: raw.working_set_in_mb.unwrap_or_default(),
    }
}
