use serde::{Deserialize, Serialize};

/// IIS site.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawWebsiteInfo {
    pub name: Option<String>,
    pub physical_path: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WebsiteInfo {
    pub name: String,
    pub physical_path: String,
    pub state: String,
}

pub fn normalize(raw: RawWebsiteInfo) -> WebsiteInfo {
    WebsiteInfo {
        name: raw.name.unwrap_or_default(),
        physical_path: raw.physical_path.unwrap_or_default(),
        state: raw.state.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_site_copied() {
        let raw: RawWebsiteInfo = serde_json::from_value(json!({
            "Name": "Default Web Site",
            "PhysicalPath": "%SystemDrive%\\inetpub\\wwwroot",
            "State": "Started"
        }))
        .unwrap();
        let site = normalize(raw);
        assert_eq!(site.name, "Default Web Site");
        assert_eq!(site.physical_path, "%SystemDrive%\\inetpub\\wwwroot");
        assert_eq!(site.state, "Started");
    }
}
