use serde::{Deserialize, Serialize};

use crate::units::format_size_range;

/// Windows Update entry that has not been installed yet.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawPendingUpdate {
    pub title: Option<String>,
    pub is_downloaded: Option<bool>,
    /// Integer flag; any nonzero value means automatic download.
    pub auto_download: Option<i64>,
    pub min_download_size: Option<i64>,
    pub max_download_size: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PendingUpdate {
    pub title: String,
    pub is_downloaded: bool,
    pub auto_download: bool,
    pub min_download_size: i64,
    pub max_download_size: i64,
    /// One size, or `"<min>-<max>"` when the bounds differ.
    pub download_size: String,
}

pub fn normalize(raw: RawPendingUpdate, precision: usize) -> PendingUpdate {
    let min_download_size = raw.min_download_size.unwrap_or_default();
    let max_download_size = raw.max_download_size.unwrap_or_default();

    PendingUpdate {
        title: raw.title.unwrap_or_default(),
        is_downloaded: raw.is_downloaded.unwrap_or_default(),
        auto_download: raw.auto_download.is_some_and(|flag| flag != 0),
        min_download_size,
        max_download_size,
        download_size: format_size_range(min_download_size, max_download_size, precision),
    }
}
