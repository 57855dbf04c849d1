//! servermon core: report normalization engine.
//!
//! A collector ships one report per host: identity fields plus two key/value
//! bags whose values are independently JSON-encoded. This crate turns such a
//! report into a fully populated [`HostSnapshot`]:
//! - aggregate scalars (counts, health statuses) via [`aggregate`]
//! - per-entity detail sections via [`bag`] decoding and [`entities`] normalizers
//! - byte counts rendered with [`units::format_size`]
//!
//! Section failures never abort the pass; they are returned next to the
//! snapshot in [`NormalizedReport::errors`].

pub mod aggregate;
pub mod bag;
pub mod config;
pub mod dates;
pub mod entities;
pub mod error;
pub mod report;
pub mod snapshot;
pub mod status;
pub mod timespan;
pub mod units;

pub use bag::{RawData, ReportBag};
pub use config::DisplaySettings;
pub use error::{ReportError, SectionError};
pub use report::{HostIdentity, ServerReport};
pub use snapshot::{normalize, HostSnapshot, NormalizedReport};
pub use status::HealthStatus;
