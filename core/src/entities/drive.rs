use serde::{Deserialize, Serialize};

use crate::units::format_size;

/// Physical drive status, in the order the collector numbers it (WMI
/// `Win32_DiskDrive.Status`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum DriveStatus {
    #[default]
    Unknown,
    #[serde(rename = "OK")]
    Ok,
    Degraded,
    Error,
    #[serde(rename = "Pred Fail")]
    PredFail,
    Starting,
    Stopping,
    Service,
    Stressed,
    NonRecover,
    #[serde(rename = "No Contact")]
    NoContact,
    #[serde(rename = "Lost Comm")]
    LostComm,
}

const DRIVE_STATUSES: [(DriveStatus, &str); 12] = [
    (DriveStatus::Unknown, "Unknown"),
    (DriveStatus::Ok, "OK"),
    (DriveStatus::Degraded, "Degraded"),
    (DriveStatus::Error, "Error"),
    (DriveStatus::PredFail, "Pred Fail"),
    (DriveStatus::Starting, "Starting"),
    (DriveStatus::Stopping, "Stopping"),
    (DriveStatus::Service, "Service"),
    (DriveStatus::Stressed, "Stressed"),
    (DriveStatus::NonRecover, "NonRecover"),
    (DriveStatus::NoContact, "No Contact"),
    (DriveStatus::LostComm, "Lost Comm"),
];

impl DriveStatus {
    /// Map the collector's numeric code. Out-of-range codes are `Unknown`.
    pub fn from_code(code: i64) -> Self {
        usize::try_from(code)
            .ok()
            .and_then(|i| DRIVE_STATUSES.get(i))
            .map(|(status, _)| *status)
            .unwrap_or_default()
    }

    /// Map a WMI status string, ignoring case. Unrecognized names are `Unknown`.
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        DRIVE_STATUSES
            .iter()
            .find(|(_, label)| label.eq_ignore_ascii_case(name))
            .map(|(status, _)| *status)
            .unwrap_or_default()
    }
}

/// The collector sends the status either as an enum index or as its name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawDriveStatus {
    Code(i64),
    Name(String),
}

impl From<RawDriveStatus> for DriveStatus {
    fn from(raw: RawDriveStatus) -> Self {
        match raw {
            RawDriveStatus::Code(code) => DriveStatus::from_code(code),
            RawDriveStatus::Name(name) => DriveStatus::from_name(&name),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawDriveInfo {
    #[serde(rename = "DeviceID")]
    pub device_id: Option<String>,
    pub status: Option<RawDriveStatus>,
    pub status_info: Option<String>,
    pub partitions: Option<i32>,
    /// Bytes.
    pub size: Option<i64>,
    pub capability_descriptions: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DriveInfo {
    pub device_id: String,
    pub status: DriveStatus,
    pub status_info: String,
    pub partitions: i32,
    pub size_in_bytes: i64,
    /// `size_in_bytes` formatted for display.
    pub size: String,
    pub capability_descriptions: String,
    pub model: String,
    pub serial_number: String,
}

pub fn normalize(raw: RawDriveInfo, precision: usize) -> DriveInfo {
    let size_in_bytes = raw.size.unwrap_or_default();
    DriveInfo {
        device_id: raw.device_id.unwrap_or_default(),
        status: raw.status.map(DriveStatus::from).unwrap_or_default(),
        status_info: raw.status_info.unwrap_or_default(),
        partitions: raw.partitions.unwrap_or_default(),
        size_in_bytes,
        size: format_size(size_in_bytes, precision),
        capability_descriptions: raw.capability_descriptions.unwrap_or_default(),
        model: raw.model.unwrap_or_default(),
        serial_number: raw.serial_number.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> DriveInfo {
        normalize(serde_json::from_value(value).unwrap(), 2)
    }

    #[test]
    fn test_size_is_formatted() {
        let drive = decode(json!({
            "DeviceID": "\\\\.\\PHYSICALDRIVE0",
            "Status": "OK",
            "Partitions": 3,
            "Size": 500_107_862_016_i64,
            "Model": "Samsung SSD 860 EVO 500GB",
            "SerialNumber": "S3Z1NB0K123456"
        }));
        assert_eq!(drive.device_id, "\\\\.\\PHYSICALDRIVE0");
        assert_eq!(drive.status, DriveStatus::Ok);
        assert_eq!(drive.partitions, 3);
        assert_eq!(drive.size_in_bytes, 500_107_862_016);
        assert_eq!(drive.size, "465.76 GB");
    }

    #[test]
    fn test_status_from_code_or_name() {
        assert_eq!(decode(json!({"Status": 4})).status, DriveStatus::PredFail);
        assert_eq!(decode(json!({"Status": "pred fail"})).status, DriveStatus::PredFail);
        assert_eq!(decode(json!({"Status": "Lost Comm"})).status, DriveStatus::LostComm);
    }

    #[test]
    fn test_unrecognized_status_is_unknown() {
        assert_eq!(decode(json!({"Status": 99})).status, DriveStatus::Unknown);
        assert_eq!(decode(json!({"Status": -1})).status, DriveStatus::Unknown);
        assert_eq!(decode(json!({"Status": "Melting"})).status, DriveStatus::Unknown);
        assert_eq!(decode(json!({"Status": null})).status, DriveStatus::Unknown);
    }

    #[test]
    fn test_missing_size_is_zero_bytes() {
        let drive = decode(json!({}));
        assert_eq!(drive.size_in_bytes, 0);
        assert_eq!(drive.size, "0.00 B");
    }
}
