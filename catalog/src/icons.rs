//! Icon table for asset kinds and data source vendors.
//!
//! Icons are resolved through exhaustive matches, so adding an [`AssetKind`]
//! or [`Vendor`] without an icon fails to compile. Free-form string keys (as
//! found in imported records) go through [`Icon::from_key`], which falls back
//! to [`Icon::Fallback`]. Deserialization goes through the same lookup, so a
//! record carrying an unknown icon still loads.

use serde::{Deserialize, Serialize};

use crate::model::{AssetKind, Vendor};

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Icon {
    Table,
    Column,
    Formula,
    Report,
    Dashboard,
    DataSource,
    CacheTable,
    Postgres,
    Snowflake,
    MySql,
    BigQuery,
    Salesforce,
    HubSpot,
    Stripe,
    Segment,
    Kafka,
    #[default]
    Fallback,
}

impl From<String> for Icon {
    fn from(key: String) -> Self {
        Self::from_key(&key)
    }
}

impl Icon {
    #[must_use]
    pub fn for_kind(kind: AssetKind) -> Self {
        match kind {
            AssetKind::Tables => Self::Table,
            AssetKind::Columns => Self::Column,
            AssetKind::Formulas => Self::Formula,
            AssetKind::Reports => Self::Report,
            AssetKind::Dashboards => Self::Dashboard,
            AssetKind::DataSources => Self::DataSource,
            AssetKind::CacheTables => Self::CacheTable,
        }
    }

    #[must_use]
    pub fn for_vendor(vendor: Vendor) -> Self {
        match vendor {
            Vendor::Postgres => Self::Postgres,
            Vendor::Snowflake => Self::Snowflake,
            Vendor::MySql => Self::MySql,
            Vendor::BigQuery => Self::BigQuery,
            Vendor::Salesforce => Self::Salesforce,
            Vendor::HubSpot => Self::HubSpot,
            Vendor::Stripe => Self::Stripe,
            Vendor::Segment => Self::Segment,
            Vendor::Kafka => Self::Kafka,
        }
    }

    /// Resolve a legacy string key. Unknown keys map to [`Icon::Fallback`].
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "table" | "tables" => Self::Table,
            "column" | "columns" => Self::Column,
            "formula" | "formulas" => Self::Formula,
            "report" | "reports" => Self::Report,
            "dashboard" | "dashboards" => Self::Dashboard,
            "datasource" | "data_source" | "data sources" => Self::DataSource,
            "cachetable" | "cache_table" | "cache tables" => Self::CacheTable,
            "postgres" | "postgresql" => Self::Postgres,
            "snowflake" => Self::Snowflake,
            "mysql" | "my_sql" => Self::MySql,
            "bigquery" | "big_query" => Self::BigQuery,
            "salesforce" => Self::Salesforce,
            "hubspot" | "hub_spot" => Self::HubSpot,
            "stripe" => Self::Stripe,
            "segment" => Self::Segment,
            "kafka" => Self::Kafka,
            _ => Self::Fallback,
        }
    }

    /// Short text glyph for terminal and compact rendering.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Table => "▦",
            Self::Column => "▥",
            Self::Formula => "ƒ",
            Self::Report => "▤",
            Self::Dashboard => "◫",
            Self::DataSource => "⛁",
            Self::CacheTable => "⚡",
            Self::Postgres => "PG",
            Self::Snowflake => "❄",
            Self::MySql => "My",
            Self::BigQuery => "BQ",
            Self::Salesforce => "SF",
            Self::HubSpot => "HS",
            Self::Stripe => "St",
            Self::Segment => "Sg",
            Self::Kafka => "Kf",
            Self::Fallback => "•",
        }
    }

    /// BEM modifier class, e.g. `"icon icon--table"`.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Table => "icon icon--table",
            Self::Column => "icon icon--column",
            Self::Formula => "icon icon--formula",
            Self::Report => "icon icon--report",
            Self::Dashboard => "icon icon--dashboard",
            Self::DataSource => "icon icon--data-source",
            Self::CacheTable => "icon icon--cache-table",
            Self::Postgres => "icon icon--postgres",
            Self::Snowflake => "icon icon--snowflake",
            Self::MySql => "icon icon--mysql",
            Self::BigQuery => "icon icon--bigquery",
            Self::Salesforce => "icon icon--salesforce",
            Self::HubSpot => "icon icon--hubspot",
            Self::Stripe => "icon icon--stripe",
            Self::Segment => "icon icon--segment",
            Self::Kafka => "icon icon--kafka",
            Self::Fallback => "icon icon--fallback",
        }
    }
}
