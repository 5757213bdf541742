//! Error type shared by catalog lookups and UI state transitions.

use std::fmt;

/// Entity family named in a [`CatalogError::NotFound`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Asset,
    AssetDetail,
    DataSource,
    CacheTable,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Asset => "asset",
            Self::AssetDetail => "asset detail",
            Self::DataSource => "data source",
            Self::CacheTable => "cache table",
        };
        f.write_str(label)
    }
}

/// Error returned by catalog lookups and [`crate::ui::CatalogView::apply`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// No entity with the requested id (or name) exists in the catalog.
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },
    /// A tab id that the active tab set does not declare.
    #[error("unknown tab `{0}`")]
    UnknownTab(String),
    /// A tab set was declared with no tabs.
    #[error("tab set must declare at least one tab")]
    EmptyTabSet,
    /// A tab selection arrived while no detail panel was open.
    #[error("no detail panel is open")]
    NoOpenDetail,
}

impl CatalogError {
    pub(crate) fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFound { kind, id: id.into() }
    }
}
