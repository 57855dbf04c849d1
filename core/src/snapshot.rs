//! Snapshot assembly: one pass over the report, driven by a section table.

use chrono::{DateTime, FixedOffset};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::aggregate::{resolve_aggregates, AggregateFields};
use crate::bag::{decode_list, decode_object, ReportBag};
use crate::config::DisplaySettings;
use crate::entities::{
    app_pool, detailed_info, disk, drive, network, process, service, sql, update, website,
    AppPoolInfo, DetailedInfo, DiskInfo, DriveInfo, NetworkInfo, PendingUpdate, ProcessInfo,
    ServiceInfo, SqlDatabaseInfo, SqlServerInfo, WebsiteInfo,
};
use crate::error::{ReportError, SectionError};
use crate::report::{HostIdentity, ServerReport};

/// Normalized view of one host report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostSnapshot {
    pub name: String,
    pub domain: String,
    pub reported_at: DateTime<FixedOffset>,
    #[serde(flatten)]
    pub aggregates: AggregateFields,
    pub detailed_info: DetailedInfo,
    pub pending_updates: Vec<PendingUpdate>,
    pub disks: Vec<DiskInfo>,
    pub drives: Vec<DriveInfo>,
    pub networks: Vec<NetworkInfo>,
    pub cpu_processes: Vec<ProcessInfo>,
    pub memory_processes: Vec<ProcessInfo>,
    pub websites: Vec<WebsiteInfo>,
    pub app_pools: Vec<AppPoolInfo>,
    pub sql_servers: Vec<SqlServerInfo>,
    pub sql_databases: Vec<SqlDatabaseInfo>,
    pub services: Vec<ServiceInfo>,
}

/// A snapshot plus every recoverable problem met while building it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedReport {
    pub snapshot: HostSnapshot,
    pub errors: Vec<SectionError>,
}

/// Detail fields collected while walking the sections.
#[derive(Default)]
struct SnapshotBuilder {
    detailed_info: DetailedInfo,
    pending_updates: Vec<PendingUpdate>,
    disks: Vec<DiskInfo>,
    drives: Vec<DriveInfo>,
    networks: Vec<NetworkInfo>,
    cpu_processes: Vec<ProcessInfo>,
    memory_processes: Vec<ProcessInfo>,
    websites: Vec<WebsiteInfo>,
    app_pools: Vec<AppPoolInfo>,
    sql_servers: Vec<SqlServerInfo>,
    sql_databases: Vec<SqlDatabaseInfo>,
    services: Vec<ServiceInfo>,
}

impl SnapshotBuilder {
    fn build(self, identity: HostIdentity, aggregates: AggregateFields) -> HostSnapshot {
        HostSnapshot {
            name: identity.name,
            domain: identity.domain,
            reported_at: identity.reported_at,
            aggregates,
            detailed_info: self.detailed_info,
            pending_updates: self.pending_updates,
            disks: self.disks,
            drives: self.drives,
            networks: self.networks,
            cpu_processes: self.cpu_processes,
            memory_processes: self.memory_processes,
            websites: self.websites,
            app_pools: self.app_pools,
            sql_servers: self.sql_servers,
            sql_databases: self.sql_databases,
            services: self.services,
        }
    }
}

/// Decodes the section under a key into the builder; returns the number of
/// entities stored.
type ApplyFn =
    fn(&str, &ReportBag, &DisplaySettings, &mut SnapshotBuilder) -> Result<usize, SectionError>;

/// A detail section: its bag key and how its payload lands in the snapshot.
pub struct DetailSection {
    pub key: &'static str,
    apply: ApplyFn,
}

/// Every detail section understood by the normalizer. Sections are
/// independent, so order only affects log output.
pub const DETAIL_SECTIONS: &[DetailSection] = &[
    DetailSection {
        key: "DetailedInfo",
        apply: |key, bag, settings, b| {
            fill_object(key, bag, &mut b.detailed_info, |raw| {
                detailed_info::normalize(raw, settings.precision())
            })
        },
    },
    DetailSection {
        key: "PendingUpdateInfo",
        apply: |key, bag, settings, b| {
            fill_list(key, bag, &mut b.pending_updates, |raw| {
                update::normalize(raw, settings.precision())
            })
        },
    },
    DetailSection {
        key: "DiskInfo",
        apply: |key, bag, _, b| fill_list(key, bag, &mut b.disks, disk::normalize),
    },
    DetailSection {
        key: "DriveInfo",
        apply: |key, bag, settings, b| {
            fill_list(key, bag, &mut b.drives, |raw| {
                drive::normalize(raw, settings.precision())
            })
        },
    },
    DetailSection {
        key: "NetworkInfo",
        apply: |key, bag, _, b| fill_list(key, bag, &mut b.networks, network::normalize),
    },
    DetailSection {
        key: "TopCpuProcesses",
        apply: |key, bag, _, b| fill_list(key, bag, &mut b.cpu_processes, process::normalize),
    },
    DetailSection {
        key: "TopMemoryProcesses",
        apply: |key, bag, _, b| fill_list(key, bag, &mut b.memory_processes, process::normalize),
    },
    DetailSection {
        key: "WebsiteInfo",
        apply: |key, bag, _, b| fill_list(key, bag, &mut b.websites, website::normalize),
    },
    DetailSection {
        key: "AppPoolInfo",
        apply: |key, bag, _, b| fill_list(key, bag, &mut b.app_pools, app_pool::normalize),
    },
    DetailSection {
        key: "SqlServerInfo",
        apply: |key, bag, _, b| fill_list(key, bag, &mut b.sql_servers, sql::normalize_server),
    },
    DetailSection {
        key: "SqlDatabaseInfo",
        apply: |key, bag, settings, b| {
            fill_list(key, bag, &mut b.sql_databases, |raw| {
                sql::normalize_database(raw, settings.precision())
            })
        },
    },
    DetailSection {
        key: "ServiceInfo",
        apply: |key, bag, _, b| fill_list(key, bag, &mut b.services, service::normalize),
    },
];

fn fill_object<R, N>(
    key: &str,
    bag: &ReportBag,
    target: &mut N,
    normalize: impl FnOnce(R) -> N,
) -> Result<usize, SectionError>
where
    R: DeserializeOwned,
{
    match decode_object::<R>(bag, key)? {
        Some(raw) => {
            *target = normalize(raw);
            Ok(1)
        }
        None => Ok(0),
    }
}

fn fill_list<R, N>(
    key: &str,
    bag: &ReportBag,
    target: &mut Vec<N>,
    normalize: impl FnMut(R) -> N,
) -> Result<usize, SectionError>
where
    R: DeserializeOwned,
{
    let Some(raw) = decode_list::<R>(bag, key)? else {
        return Ok(0);
    };
    let before = target.len();
    target.extend(raw.into_iter().map(normalize));
    Ok(target.len() - before)
}

/// Normalize one report.
///
/// Only a report without usable identity fails outright. Malformed sections
/// and aggregate values leave their fields at the default and are listed in
/// [`NormalizedReport::errors`].
pub fn normalize(
    report: &ServerReport,
    settings: &DisplaySettings,
) -> Result<NormalizedReport, ReportError> {
    let identity = HostIdentity::from_report(report)?;

    let (aggregates, mut errors) = resolve_aggregates(&report.aggregate_data);
    for err in &errors {
        warn!(host = %identity.name, key = err.key(), "Aggregate value ignored: {err}");
    }

    let mut builder = SnapshotBuilder::default();
    for section in DETAIL_SECTIONS {
        match (section.apply)(section.key, &report.data, settings, &mut builder) {
            Ok(count) => {
                debug!(host = %identity.name, section = section.key, count, "Section normalized");
            }
            Err(err) => {
                warn!(host = %identity.name, section = section.key, "Section skipped: {err}");
                errors.push(err);
            }
        }
    }

    Ok(NormalizedReport {
        snapshot: builder.build(identity, aggregates),
        errors,
    })
}
