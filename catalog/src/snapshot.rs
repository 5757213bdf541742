//! In-memory catalog snapshot and its lookups.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, EntityKind};
use crate::model::{Asset, AssetDetail, AuditEvent, CacheTable, DataSourceTile, SyncEvent};

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

/// One workspace's worth of catalog data. Read-only after generation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub workspace: String,
    /// Seed that reproduces this snapshot.
    pub seed: u64,
    /// Reference "now" the generated dates are anchored to.
    pub generated_at: i64,
    #[serde(default)]
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub data_sources: Vec<DataSourceTile>,
    #[serde(default)]
    pub cache_tables: Vec<CacheTable>,
    #[serde(default)]
    pub sync_events: Vec<SyncEvent>,
    #[serde(default)]
    pub audit_log: Vec<AuditEvent>,
    #[serde(default)]
    pub details: BTreeMap<String, AssetDetail>,
}

impl Catalog {
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no asset has this id.
    pub fn asset(&self, id: &str) -> Result<&Asset, CatalogError> {
        self.assets
            .iter()
            .find(|asset| asset.id == id)
            .ok_or_else(|| not_found(EntityKind::Asset, id))
    }

    /// First asset whose name matches, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no asset has this name.
    pub fn asset_by_name(&self, name: &str) -> Result<&Asset, CatalogError> {
        let wanted = name.to_lowercase();
        self.assets
            .iter()
            .find(|asset| asset.name.to_lowercase() == wanted)
            .ok_or_else(|| not_found(EntityKind::Asset, name))
    }

    /// Look up by id, falling back to a case-insensitive name match.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when neither matches.
    pub fn resolve(&self, id_or_name: &str) -> Result<&Asset, CatalogError> {
        self.asset(id_or_name)
            .or_else(|_| self.asset_by_name(id_or_name))
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when the asset has no detail record.
    pub fn detail(&self, asset_id: &str) -> Result<&AssetDetail, CatalogError> {
        self.details
            .get(asset_id)
            .ok_or_else(|| not_found(EntityKind::AssetDetail, asset_id))
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no data source has this id.
    pub fn data_source(&self, id: &str) -> Result<&DataSourceTile, CatalogError> {
        self.data_sources
            .iter()
            .find(|source| source.id == id)
            .ok_or_else(|| not_found(EntityKind::DataSource, id))
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no cache table has this id.
    pub fn cache_table(&self, id: &str) -> Result<&CacheTable, CatalogError> {
        self.cache_tables
            .iter()
            .find(|table| table.id == id)
            .ok_or_else(|| not_found(EntityKind::CacheTable, id))
    }

    /// Sync events of one cache table, newest first. A table with no events
    /// yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when the cache table does not exist.
    pub fn sync_history(&self, cache_table_id: &str) -> Result<Vec<&SyncEvent>, CatalogError> {
        let table = self.cache_table(cache_table_id)?;
        let mut events = self
            .sync_events
            .iter()
            .filter(|event| event.cache_table_id == table.id)
            .collect::<Vec<_>>();
        events.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        Ok(events)
    }
}

fn not_found(kind: EntityKind, id: &str) -> CatalogError {
    tracing::debug!(%kind, id, "catalog lookup missed");
    CatalogError::not_found(kind, id)
}
