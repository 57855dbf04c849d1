use serde::{Deserialize, Serialize};

/// WMI reports the adapter index as a number; some collectors quote it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawAdapterIndex {
    Number(i64),
    Text(String),
}

impl From<RawAdapterIndex> for String {
    fn from(raw: RawAdapterIndex) -> Self {
        match raw {
            RawAdapterIndex::Number(n) => n.to_string(),
            RawAdapterIndex::Text(text) => text,
        }
    }
}

/// Network adapter configuration (WMI `Win32_NetworkAdapterConfiguration`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawNetworkInfo {
    pub index: Option<RawAdapterIndex>,
    pub description: Option<String>,
    pub caption: Option<String>,
    #[serde(rename = "MACAddress")]
    pub mac_address: Option<String>,
    #[serde(rename = "IPAddress")]
    pub ip_address: Option<String>,
    #[serde(rename = "IPSubnet")]
    pub ip_subnet: Option<String>,
    #[serde(rename = "DHCPEnabled")]
    pub dhcp_enabled: Option<bool>,
    #[serde(rename = "DNSDomain")]
    pub dns_domain: Option<String>,
    #[serde(rename = "DNSHostName")]
    pub dns_host_name: Option<String>,
    #[serde(rename = "IPEnabled")]
    pub ip_enabled: Option<bool>,
    #[serde(rename = "DefaultIPGateway")]
    pub default_ip_gateway: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NetworkInfo {
    pub index: String,
    pub description: String,
    pub caption: String,
    pub mac_address: String,
    pub ip_address: String,
    pub ip_subnet: String,
    pub dhcp_enabled: bool,
    pub dns_domain: String,
    pub dns_host_name: String,
    pub ip_enabled: bool,
    pub default_ip_gateway: String,
}

pub fn normalize(raw: RawNetworkInfo) -> NetworkInfo {
    NetworkInfo {
        index: raw.index.map(String::from).unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        caption: raw.caption.unwrap_or_default(),
        mac_address: raw.mac_address.unwrap_or_default(),
        ip_address: raw.ip_address.unwrap_or_default(),
        ip_subnet: raw.ip_subnet.unwrap_or_default(),
        dhcp_enabled: raw.dhcp_enabled.unwrap_or_default(),
        dns_domain: raw.dns_domain.unwrap_or_default(),
        dns_host_name: raw.dns_host_name.unwrap_or_default(),
        ip_enabled: raw.ip_enabled.unwrap_or_default(),
        default_ip_gateway: raw.default_ip_gateway.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_acronym_field_names() {
        let raw: RawNetworkInfo = serde_json::from_value(json!({
            "Index": "7",
            "Description": "Intel(R) Ethernet Connection I219-LM",
            "MACAddress": "00:1A:2B:3C:4D:5E",
            "IPAddress": "10.0.0.12",
            "IPSubnet": "255.255.255.0",
            "DHCPEnabled": true,
            "DNSHostName": "web01",
            "IPEnabled": true,
            "DefaultIPGateway": "10.0.0.1"
        }))
        .unwrap();
        let nic = normalize(raw);
        assert_eq!(nic.index, "7");
        assert_eq!(nic.mac_address, "00:1A:2B:3C:4D:5E");
        assert_eq!(nic.ip_address, "10.0.0.12");
        assert!(nic.dhcp_enabled);
        assert!(nic.ip_enabled);
        assert_eq!(nic.default_ip_gateway, "10.0.0.1");
        assert_eq!(nic.dns_domain, "");
    }

    #[test]
    fn test_numeric_index() {
        let raw: RawNetworkInfo =
            serde_json::from_value(json!({"Index": 7, "IPAddress": "10.0.0.1"})).unwrap();
        let nic = normalize(raw);
        assert_eq!(nic.index, "7");
        assert_eq!(nic.ip_address, "10.0.0.1");
    }

    #[test]
    fn test_missing_index_is_empty() {
        let raw: RawNetworkInfo = serde_json::from_value(json!({"Index": null})).unwrap();
        assert_eq!(normalize(raw).index, "");
    }
}
