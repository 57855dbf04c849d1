use serde::{Deserialize, Serialize};

/// IIS application pool. The collector keeps IIS's camelCase attribute names
/// for the pool settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawAppPoolInfo {
    pub name: Option<String>,
    pub state: Option<String>,
    #[serde(rename = "managedPipelineMode")]
    pub managed_pipeline_mode: Option<String>,
    #[serde(rename = "managedRuntimeVersion")]
    pub managed_runtime_version: Option<String>,
    #[serde(rename = "enable32BitAppOnWin64")]
    pub enable_32bit_app_on_win64: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppPoolInfo {
    pub name: String,
    pub state: String,
    pub managed_pipeline_mode: String,
    pub managed_runtime_version: String,
    pub enable_32bit_app_on_win64: bool,
}

pub fn normalize(raw: RawAppPoolInfo) -> AppPoolInfo {
    AppPoolInfo {
        name: raw.name.unwrap_or_default(),
        state: raw.state.unwrap_or_default(),
        managed_pipeline_mode: raw.managed_pipeline_mode.unwrap_or_default(),
        managed_runtime_version: raw.managed_runtime_version.unwrap_or_default(),
        enable_32bit_app_on_win64: raw.enable_32bit_app_on_win64.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_iis_attribute_names() {
        let raw: RawAppPoolInfo = serde_json::from_value(json!({
            "Name": "DefaultAppPool",
            "State": "Started",
            "managedPipelineMode": "Integrated",
            "managedRuntimeVersion": "v4.0",
            "enable32BitAppOnWin64": true
        }))
        .unwrap();
        let pool = normalize(raw);
        assert_eq!(pool.name, "DefaultAppPool");
        assert_eq!(pool.managed_pipeline_mode, "Integrated");
        assert_eq!(pool.managed_runtime_version, "v4.0");
        assert!(pool.enable_32bit_app_on_win64);
    }
}
