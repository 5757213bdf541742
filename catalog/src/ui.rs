//! Dashboard view state as one value driven by explicit actions.
//!
//! DESIGN
//! ======
//! Filters, the open detail panels and the breadcrumb live in a single
//! [`CatalogView`] so every transition goes through [`CatalogView::apply`]
//! and can be tested without a rendering framework. Open detail panels form
//! a stack that is kept the same depth as the breadcrumb's frame stack.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::filter::{AssetFilter, SearchFields};
use crate::model::Asset;
use crate::navigation::Breadcrumb;
use crate::snapshot::Catalog;
use crate::tabs::{CacheTab, DetailTab, TabSet};
use crate::tally::{Tally, tally_kinds, tally_tags};

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Top-level screens of the workspace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    #[default]
    Assets,
    DataSources,
    CacheTables,
    SyncHistory,
    Audit,
}

impl Section {
    pub const ALL: [Self; 5] = [
        Self::Assets,
        Self::DataSources,
        Self::CacheTables,
        Self::SyncHistory,
        Self::Audit,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Assets => "Assets",
            Self::DataSources => "Data Sources",
            Self::CacheTables => "Cache Tables",
            Self::SyncHistory => "Sync History",
            Self::Audit => "Audit Log",
        }
    }

    /// Client route path.
    #[must_use]
    pub fn route(self) -> &'static str {
        match self {
            Self::Assets => "/",
            Self::DataSources => "/sources",
            Self::CacheTables => "/cache",
            Self::SyncHistory => "/history",
            Self::Audit => "/audit",
        }
    }

    /// The audit screen also matches the acting user.
    #[must_use]
    pub fn search_fields(self) -> SearchFields {
        match self {
            Self::Audit => SearchFields::NameKindAndCreator,
            _ => SearchFields::NameAndKind,
        }
    }
}

/// What a detail panel is showing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailTarget {
    Asset(String),
    CacheTable(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenDetail {
    pub target: DetailTarget,
    pub tabs: TabSet,
}

impl OpenDetail {
    /// The active asset tab. `None` for cache-table panels.
    #[must_use]
    pub fn active_detail_tab(&self) -> Option<DetailTab> {
        match self.target {
            DetailTarget::Asset(_) => DetailTab::from_id(self.tabs.active()),
            DetailTarget::CacheTable(_) => None,
        }
    }

    /// The active cache-table tab. `None` for asset panels.
    #[must_use]
    pub fn active_cache_tab(&self) -> Option<CacheTab> {
        match self.target {
            DetailTarget::CacheTable(_) => CacheTab::from_id(self.tabs.active()),
            DetailTarget::Asset(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiAction {
    SetQuery(String),
    ToggleKind(String),
    ToggleTag(String),
    ClearFilters,
    EnterSection(Section),
    OpenAsset { id: String },
    OpenCacheTable { id: String },
    CloseDetail,
    SelectTab(String),
    /// Breadcrumb click: keep only the first `depth` open panels.
    NavigateTo { depth: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogView {
    section: Section,
    filter: AssetFilter,
    breadcrumb: Breadcrumb,
    details: Vec<OpenDetail>,
}

impl CatalogView {
    /// Start on the assets screen of `workspace`.
    #[must_use]
    pub fn new(workspace: impl Into<String>) -> Self {
        let section = Section::default();
        let mut breadcrumb = Breadcrumb::new(workspace);
        breadcrumb.enter_section(section.label());
        Self {
            section,
            filter: AssetFilter::new(section.search_fields()),
            breadcrumb,
            details: Vec::new(),
        }
    }

    #[must_use]
    pub fn section(&self) -> Section {
        self.section
    }

    #[must_use]
    pub fn filter(&self) -> &AssetFilter {
        &self.filter
    }

    #[must_use]
    pub fn breadcrumb(&self) -> &Breadcrumb {
        &self.breadcrumb
    }

    /// The topmost open detail panel.
    #[must_use]
    pub fn detail(&self) -> Option<&OpenDetail> {
        self.details.last()
    }

    #[must_use]
    pub fn detail_depth(&self) -> usize {
        self.details.len()
    }

    /// Apply one UI action.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NotFound`] when opening an id the catalog lacks.
    /// - [`CatalogError::UnknownTab`] when selecting a tab the open panel
    ///   does not declare.
    /// - [`CatalogError::NoOpenDetail`] when selecting a tab with no panel open.
    ///
    /// A failed action leaves the view unchanged.
    pub fn apply(&mut self, catalog: &Catalog, action: UiAction) -> Result<(), CatalogError> {
        match action {
            UiAction::SetQuery(query) => self.filter.set_query(query),
            UiAction::ToggleKind(kind) => self.filter.toggle_kind(&kind),
            UiAction::ToggleTag(tag) => self.filter.toggle_tag(&tag),
            UiAction::ClearFilters => self.filter.clear(),
            UiAction::EnterSection(section) => self.enter_section(section),
            UiAction::OpenAsset { id } => {
                let asset = catalog.asset(&id)?;
                self.push_detail(&asset.name, DetailTarget::Asset(asset.id.clone()), DetailTab::tab_set(asset.kind));
            }
            UiAction::OpenCacheTable { id } => {
                let table = catalog.cache_table(&id)?;
                self.push_detail(&table.name, DetailTarget::CacheTable(table.id.clone()), CacheTab::tab_set());
            }
            UiAction::CloseDetail => {
                if self.details.pop().is_some() {
                    self.breadcrumb.close();
                }
            }
            UiAction::SelectTab(id) => {
                let detail = self.details.last_mut().ok_or(CatalogError::NoOpenDetail)?;
                detail.tabs.select(&id)?;
            }
            UiAction::NavigateTo { depth } => {
                self.details.truncate(depth);
                self.breadcrumb.truncate_to(depth);
            }
        }
        Ok(())
    }

    /// Assets matching the current filter, in catalog order.
    #[must_use]
    pub fn visible_assets<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Asset> {
        self.filter.apply(&catalog.assets)
    }

    /// Kind chip counts over all assets, independent of the filter.
    #[must_use]
    pub fn kind_counts(catalog: &Catalog) -> Tally {
        tally_kinds(&catalog.assets)
    }

    /// Tag chip counts over all assets, independent of the filter.
    #[must_use]
    pub fn tag_counts(catalog: &Catalog) -> Tally {
        tally_tags(&catalog.assets)
    }

    fn enter_section(&mut self, section: Section) {
        self.section = section;
        self.filter = AssetFilter::new(section.search_fields());
        self.details.clear();
        self.breadcrumb.enter_section(section.label());
    }

    fn push_detail(&mut self, label: &str, target: DetailTarget, tabs: TabSet) {
        self.breadcrumb.open(label);
        self.details.push(OpenDetail { target, tabs });
    }
}
