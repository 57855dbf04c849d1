use serde::{Deserialize, Serialize};

/// Logical disk as reported by the collector.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawDiskInfo {
    pub volume_name: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "SizeInGB")]
    pub size_in_gb: Option<f64>,
    #[serde(rename = "FreeSpaceInGB")]
    pub free_space_in_gb: Option<f64>,
    pub percent_free: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiskInfo {
    pub volume_name: String,
    pub name: String,
    pub size_in_gb: f64,
    pub free_space_in_gb: f64,
    pub percent_free: f64,
}

pub fn normalize(raw: RawDiskInfo) -> DiskInfo {
    DiskInfo {
        volume_name: raw.volume_name.unwrap_or_default(),
        name: raw.name.unwrap_or_default(),
        size_in_gb: raw.size_in_gb.unwrap_or_default(),
        free_space_in_gb: raw.free_space_in_gb.unwrap_or_default(),
        percent_free: raw.percent_free.unwrap_or_default(),
    }
}
