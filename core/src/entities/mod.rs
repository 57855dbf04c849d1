//! Raw collector entities and their normalized forms.
//!
//! Every raw type mirrors the collector's JSON (PascalCase keys with its own
//! acronym spellings) and makes every field optional. The matching
//! `normalize` function fills gaps with type defaults and computes derived
//! fields, so it cannot fail.

pub mod app_pool;
pub mod detailed_info;
pub mod disk;
pub mod drive;
pub mod network;
pub mod process;
pub mod service;
pub mod sql;
pub mod update;
pub mod website;

pub use app_pool::AppPoolInfo;
pub use detailed_info::DetailedInfo;
pub use disk::DiskInfo;
pub use drive::{DriveInfo, DriveStatus};
pub use network::NetworkInfo;
pub use process::ProcessInfo;
pub use service::ServiceInfo;
pub use sql::{SqlDatabaseInfo, SqlServerInfo};
pub use update::PendingUpdate;
pub use website::WebsiteInfo;
