//! Report bags and section decoding.
//!
//! A bag is the collector's list of `{ "DataKey", "Data" }` pairs. Each
//! `Data` value is its own JSON document (an object or a list of objects),
//! so a broken payload only ever affects its own key.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SectionError;

/// One keyed entry of a report bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawData {
    pub data_key: String,
    #[serde(default)]
    pub data: Option<String>,
}

/// Keyed payloads from one half of a report (aggregate or detail).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReportBag {
    entries: Vec<RawData>,
}

// A collector may send `null` instead of an empty list.
impl<'de> Deserialize<'de> for ReportBag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Option::<Vec<RawData>>::deserialize(deserializer)?.unwrap_or_default();
        Ok(Self { entries })
    }
}

impl<K, V> FromIterator<(K, V)> for ReportBag
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, data)| RawData {
                    data_key: key.into(),
                    data: Some(data.into()),
                })
                .collect(),
        }
    }
}

impl ReportBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Lookups return the first entry for a key.
    pub fn insert(&mut self, key: impl Into<String>, data: impl Into<String>) {
        self.entries.push(RawData {
            data_key: key.into(),
            data: Some(data.into()),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Payload stored under `key`, or `None` when the key is missing or the
    /// payload is empty/whitespace.
    pub fn payload(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.data_key == key)
            .and_then(|entry| entry.data.as_deref())
            .filter(|data| !data.trim().is_empty())
    }
}

/// Decode the section under `key` as a single object.
///
/// Returns `Ok(None)` when the section is absent or the payload is JSON `null`.
pub fn decode_object<T: DeserializeOwned>(
    bag: &ReportBag,
    key: &str,
) -> Result<Option<T>, SectionError> {
    let Some(payload) = bag.payload(key) else {
        return Ok(None);
    };
    serde_json::from_str::<Option<T>>(payload).map_err(|e| SectionError::malformed(key, &e))
}

/// Decode the section under `key` as a list of objects.
///
/// `null` elements are dropped. Returns `Ok(None)` when the section is absent
/// or the payload is JSON `null`.
pub fn decode_list<T: DeserializeOwned>(
    bag: &ReportBag,
    key: &str,
) -> Result<Option<Vec<T>>, SectionError> {
    let Some(payload) = bag.payload(key) else {
        return Ok(None);
    };
    let items = serde_json::from_str::<Option<Vec<Option<T>>>>(payload)
        .map_err(|e| SectionError::malformed(key, &e))?;
    Ok(items.map(|items| items.into_iter().flatten().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    struct Item {
        name: Option<String>,
    }

    fn bag(key: &str, data: &str) -> ReportBag {
        [(key, data)].into_iter().collect()
    }

    #[test]
    fn test_missing_key_is_absent() {
        let bag = bag("Other", "[]");
        assert_eq!(bag.payload("DiskInfo"), None);
        assert_eq!(decode_list::<Item>(&bag, "DiskInfo").unwrap(), None);
    }

    #[test]
    fn test_blank_payload_is_absent() {
        let bag = bag("DiskInfo", "  \t\n");
        assert_eq!(bag.payload("DiskInfo"), None);
        assert_eq!(decode_object::<Item>(&bag, "DiskInfo").unwrap(), None);
    }

    #[test]
    fn test_null_data_is_absent() {
        let bag: ReportBag = serde_json::from_value(json!([
            {"DataKey": "DiskInfo", "Data": null}
        ]))
        .unwrap();
        assert_eq!(bag.payload("DiskInfo"), None);
    }

    #[test]
    fn test_first_entry_wins() {
        let mut bag = bag("DiskInfo", "");
        bag.insert("DiskInfo", "[]");
        assert_eq!(bag.len(), 2);
        // The first entry is blank, so the key reads as absent.
        assert_eq!(bag.payload("DiskInfo"), None);
    }

    #[test]
    fn test_null_bag_deserializes_empty() {
        let bag: ReportBag = serde_json::from_value(json!(null)).unwrap();
        assert!(bag.is_empty());
    }

    #[test]
    fn test_decode_list_skips_null_elements() {
        let payload = json!([{"Name": "a"}, null, {"Name": "b"}]).to_string();
        let bag = bag("WebsiteInfo", &payload);
        let items = decode_list::<Item>(&bag, "WebsiteInfo").unwrap().unwrap();
        assert_eq!(
            items,
            vec![
                Item {
                    name: Some("a".to_string())
                },
                Item {
                    name: Some("b".to_string())
                },
            ]
        );
    }

    #[test]
    fn test_decode_null_payload_is_absent() {
        let bag = bag("WebsiteInfo", "null");
        assert_eq!(decode_list::<Item>(&bag, "WebsiteInfo").unwrap(), None);
        assert_eq!(decode_object::<Item>(&bag, "WebsiteInfo").unwrap(), None);
    }

    #[test]
    fn test_malformed_payload_reports_key() {
        let bag = bag("DiskInfo", "[{\"Name\": ");
        let err = decode_list::<Item>(&bag, "DiskInfo").unwrap_err();
        assert_eq!(err.key(), "DiskInfo");
        assert!(matches!(err, SectionError::Malformed { .. }));
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        let bag = bag("DiskInfo", r#"{"Name": "C:"}"#);
        assert!(decode_list::<Item>(&bag, "DiskInfo").is_err());
    }
}
