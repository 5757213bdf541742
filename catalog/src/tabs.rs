//! Tab state machine for detail panels.
//!
//! A [`TabSet`] holds a fixed, ordered list of tab ids and the active one.
//! The first declared tab is the initial state; selecting an undeclared id is
//! rejected and leaves the state unchanged.

use crate::error::CatalogError;
use crate::model::AssetKind;

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabSet {
    tabs: Vec<&'static str>,
    active: usize,
}

impl TabSet {
    /// Declare a tab set.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyTabSet`] when `tabs` is empty.
    pub fn new(tabs: impl IntoIterator<Item = &'static str>) -> Result<Self, CatalogError> {
        let tabs = tabs.into_iter().collect::<Vec<_>>();
        if tabs.is_empty() {
            return Err(CatalogError::EmptyTabSet);
        }
        Ok(Self { tabs, active: 0 })
    }

    /// Declare a tab set from a guaranteed first tab.
    #[must_use]
    pub fn with_first(first: &'static str, rest: impl IntoIterator<Item = &'static str>) -> Self {
        let mut tabs = vec![first];
        tabs.extend(rest);
        Self { tabs, active: 0 }
    }

    #[must_use]
    pub fn active(&self) -> &'static str {
        self.tabs[self.active]
    }

    #[must_use]
    pub fn tabs(&self) -> &[&'static str] {
        &self.tabs
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.tabs.contains(&id)
    }

    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.active() == id
    }

    /// Activate the tab declared as `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownTab`] when `id` is not declared.
    pub fn select(&mut self, id: &str) -> Result<(), CatalogError> {
        let Some(index) = self.tabs.iter().position(|tab| *tab == id) else {
            tracing::debug!(tab = id, declared = ?self.tabs, "rejected undeclared tab");
            return Err(CatalogError::UnknownTab(id.to_owned()));
        };
        self.active = index;
        Ok(())
    }

    /// Return to the first declared tab.
    pub fn reset(&mut self) {
        self.active = 0;
    }
}

/// Tabs of the asset detail panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailTab {
    Overview,
    Columns,
    Lineage,
    Users,
    Audit,
    Versions,
}

impl DetailTab {
    pub const ALL: [Self; 6] = [
        Self::Overview,
        Self::Columns,
        Self::Lineage,
        Self::Users,
        Self::Audit,
        Self::Versions,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Columns => "columns",
            Self::Lineage => "lineage",
            Self::Users => "users",
            Self::Audit => "audit",
            Self::Versions => "versions",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Columns => "Columns",
            Self::Lineage => "Lineage",
            Self::Users => "Users",
            Self::Audit => "Audit Log",
            Self::Versions => "Version History",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.id() == id)
    }

    /// Tabs declared for an asset of `kind`. Only column-bearing kinds get
    /// the columns tab.
    #[must_use]
    pub fn for_kind(kind: AssetKind) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|tab| *tab != Self::Columns || kind.has_columns())
            .collect()
    }

    #[must_use]
    pub fn tab_set(kind: AssetKind) -> TabSet {
        TabSet::with_first(
            Self::Overview.id(),
            Self::for_kind(kind)
                .into_iter()
                .skip(1)
                .map(Self::id),
        )
    }
}

/// Tabs of the cache table panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheTab {
    Overview,
    Dimensions,
    Aggregates,
    SyncHistory,
}

impl CacheTab {
    pub const ALL: [Self; 4] = [Self::Overview, Self::Dimensions, Self::Aggregates, Self::SyncHistory];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Dimensions => "dimensions",
            Self::Aggregates => "aggregates",
            Self::SyncHistory => "sync-history",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Dimensions => "Dimensions",
            Self::Aggregates => "Aggregates",
            Self::SyncHistory => "Sync History",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.id() == id)
    }

    #[must_use]
    pub fn tab_set() -> TabSet {
        TabSet::with_first(Self::Overview.id(), Self::ALL.into_iter().skip(1).map(Self::id))
    }
}
