//! Catalog record types.
//!
//! DESIGN
//! ======
//! Records are flat and immutable once generated. Cross-references are plain
//! string ids; nothing enforces referential integrity beyond the lookups in
//! [`crate::snapshot::Catalog`]. Timestamps are milliseconds since the Unix
//! epoch.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::icons::Icon;

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

/// Catalog category of an [`Asset`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Tables,
    Columns,
    Formulas,
    Reports,
    Dashboards,
    DataSources,
    CacheTables,
}

impl AssetKind {
    /// Every kind, in display order.
    pub const ALL: [Self; 7] = [
        Self::Tables,
        Self::Columns,
        Self::Formulas,
        Self::Reports,
        Self::Dashboards,
        Self::DataSources,
        Self::CacheTables,
    ];

    /// Display label, also the value matched by the type filter.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Tables => "Tables",
            Self::Columns => "Columns",
            Self::Formulas => "Formulas",
            Self::Reports => "Reports",
            Self::Dashboards => "Dashboards",
            Self::DataSources => "Data Sources",
            Self::CacheTables => "Cache Tables",
        }
    }

    /// Parse a display label, ignoring ASCII case and surrounding whitespace.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(label))
    }

    /// Whether assets of this kind carry a column schema.
    #[must_use]
    pub fn has_columns(self) -> bool {
        matches!(self, Self::Tables | Self::DataSources | Self::CacheTables)
    }
}

/// Any cataloged item shown in the search/browse views.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub kind: AssetKind,
    pub created_at: i64,
    pub created_by: String,
    pub shared_users_count: u32,
    pub data_sources_count: u32,
    pub downstream_assets_count: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub icon: Icon,
}

/// Vendor behind a [`DataSourceTile`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vendor {
    Postgres,
    Snowflake,
    MySql,
    BigQuery,
    Salesforce,
    HubSpot,
    Stripe,
    Segment,
    Kafka,
}

impl Vendor {
    pub const ALL: [Self; 9] = [
        Self::Postgres,
        Self::Snowflake,
        Self::MySql,
        Self::BigQuery,
        Self::Salesforce,
        Self::HubSpot,
        Self::Stripe,
        Self::Segment,
        Self::Kafka,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Postgres => "PostgreSQL",
            Self::Snowflake => "Snowflake",
            Self::MySql => "MySQL",
            Self::BigQuery => "BigQuery",
            Self::Salesforce => "Salesforce",
            Self::HubSpot => "HubSpot",
            Self::Stripe => "Stripe",
            Self::Segment => "Segment",
            Self::Kafka => "Kafka",
        }
    }

    /// Source category, which decides the tile's item-list shape.
    #[must_use]
    pub fn category(self) -> SourceCategory {
        match self {
            Self::Postgres | Self::Snowflake | Self::MySql | Self::BigQuery => SourceCategory::Database,
            Self::Salesforce | Self::HubSpot | Self::Stripe => SourceCategory::Application,
            Self::Segment | Self::Kafka => SourceCategory::EventStream,
        }
    }
}

/// Broad family of a data source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceCategory {
    Database,
    Application,
    EventStream,
}

impl SourceCategory {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Database => "Database",
            Self::Application => "Application",
            Self::EventStream => "Event Stream",
        }
    }
}

/// The nested item list of a data source. Exactly one shape per tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", content = "items", rename_all = "snake_case")]
pub enum SourceItems {
    Tables(Vec<String>),
    Connections(Vec<String>),
    Clients(Vec<String>),
}

impl SourceItems {
    #[must_use]
    pub fn names(&self) -> &[String] {
        match self {
            Self::Tables(names) | Self::Connections(names) | Self::Clients(names) => names,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names().is_empty()
    }

    /// Plural noun for the item list, e.g. `"tables"`.
    #[must_use]
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Tables(_) => "tables",
            Self::Connections(_) => "connections",
            Self::Clients(_) => "clients",
        }
    }
}

/// Connection health shown on a data source tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceStatus {
    Connected,
    Syncing,
    Error,
    Paused,
}

impl SourceStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Connected => "Connected",
            Self::Syncing => "Syncing",
            Self::Error => "Error",
            Self::Paused => "Paused",
        }
    }
}

/// An external system entry with its nested tables, connections or clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSourceTile {
    pub id: String,
    pub name: String,
    pub icon: Icon,
    pub vendor: Vendor,
    pub items: SourceItems,
    pub last_sync: Option<i64>,
    pub status: SourceStatus,
}

impl DataSourceTile {
    #[must_use]
    pub fn category(&self) -> SourceCategory {
        self.vendor.category()
    }
}

/// Query engine a cache table is materialized into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Engine {
    Snowflake,
    BigQuery,
    Redshift,
    Databricks,
}

impl Engine {
    pub const ALL: [Self; 4] = [Self::Snowflake, Self::BigQuery, Self::Redshift, Self::Databricks];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Snowflake => "Snowflake",
            Self::BigQuery => "BigQuery",
            Self::Redshift => "Redshift",
            Self::Databricks => "Databricks",
        }
    }
}

/// Sync status label. Display only; nothing is actually synchronized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncState {
    Synced,
    Pending,
    Failed,
    Stale,
}

impl SyncState {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Synced => "Synced",
            Self::Pending => "Pending",
            Self::Failed => "Failed",
            Self::Stale => "Stale",
        }
    }
}

/// A precomputed aggregate table with mock compute statistics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheTable {
    pub id: String,
    pub name: String,
    pub base_table_name: String,
    pub cache_row_count: u64,
    pub base_row_count: u64,
    pub last_computed: i64,
    #[serde(default)]
    pub dimensions: Vec<String>,
    #[serde(default)]
    pub aggregates: Vec<String>,
    #[serde(default)]
    pub sync_status: BTreeMap<Engine, SyncState>,
}

impl CacheTable {
    /// Base rows per cached row. `None` for an empty cache.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compression_ratio(&self) -> Option<f64> {
        if self.cache_row_count == 0 {
            return None;
        }
        Some(self.base_row_count as f64 / self.cache_row_count as f64)
    }
}

/// Category of an [`AuditEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditCategory {
    Access,
    Edit,
    Share,
    Schema,
    Sync,
}

impl AuditCategory {
    pub const ALL: [Self; 5] = [Self::Access, Self::Edit, Self::Share, Self::Schema, Self::Sync];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Access => "Access",
            Self::Edit => "Edit",
            Self::Share => "Share",
            Self::Schema => "Schema",
            Self::Sync => "Sync",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    pub id: String,
    pub at: i64,
    pub actor: String,
    pub category: AuditCategory,
    pub action: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    pub version: u32,
    pub at: i64,
    pub author: String,
    pub summary: String,
}

/// One mock refresh of a cache table into an engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncEvent {
    pub id: String,
    pub cache_table_id: String,
    pub engine: Engine,
    pub started_at: i64,
    pub duration_ms: u64,
    pub rows_written: u64,
    pub status: SyncState,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub data_type: String,
    pub nullable: bool,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineageNode {
    pub asset_id: String,
    pub name: String,
    pub kind: AssetKind,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineage {
    #[serde(default)]
    pub upstream: Vec<LineageNode>,
    #[serde(default)]
    pub downstream: Vec<LineageNode>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Owner,
    Editor,
    Viewer,
}

impl UserRole {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::Editor => "Editor",
            Self::Viewer => "Viewer",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetUser {
    pub name: String,
    pub role: UserRole,
    pub last_access: i64,
}

/// Everything the detail panel renders for one asset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDetail {
    pub asset_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub lineage: Lineage,
    #[serde(default)]
    pub users: Vec<AssetUser>,
    #[serde(default)]
    pub audit: Vec<AuditEvent>,
    #[serde(default)]
    pub versions: Vec<VersionRecord>,
}
