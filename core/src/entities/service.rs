use serde::{Deserialize, Serialize};

/// Windows service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawServiceInfo {
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub state: Option<String>,
    pub start_mode: Option<String>,
    /// Set when the service is on the collector's watch list.
    pub is_watched_item: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServiceInfo {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub status: String,
    pub state: String,
    pub start_mode: String,
    pub is_watched_item: bool,
}

pub fn normalize(raw: RawServiceInfo) -> ServiceInfo {
    ServiceInfo {
        name: raw.name.unwrap_or_default(),
        display_name: raw.display_name.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        status: raw.status.unwrap_or_default(),
        state: raw.state.unwrap_or_default(),
        start_mode: raw.start_mode.unwrap_or_default(),
        is_watched_item: raw.is_watched_item.unwrap_or_default(),
    }
}
