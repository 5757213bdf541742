//! Data-catalog core: records, filtering, tallies, navigation and mock data.
//!
//! This crate is UI-framework agnostic so the Leptos client and the CLI can
//! share one implementation of every view-state transition. Nothing here does
//! I/O; a [`Catalog`] is generated once from a seed and then read-only.

pub mod error;
pub mod filter;
pub mod format;
pub mod generator;
pub mod icons;
pub mod model;
pub mod navigation;
pub mod snapshot;
pub mod tabs;
pub mod tags;
pub mod tally;
pub mod ui;

pub use error::{CatalogError, EntityKind};
pub use filter::{AssetFilter, SearchFields, Searchable};
pub use generator::{
    CatalogSource, DEFAULT_NOW_MS, DEFAULT_SEED, DEFAULT_WORKSPACE, GenerateOptions, MockGenerator,
    generate_catalog,
};
pub use icons::Icon;
pub use navigation::{Breadcrumb, Crumb, DETAILS_LABEL, NavFrame};
pub use snapshot::Catalog;
pub use tabs::{CacheTab, DetailTab, TabSet};
pub use tags::{TagStyle, tag_style};
pub use tally::{Tally, sorted_by_count, tally_kinds, tally_tags};
pub use ui::{CatalogView, DetailTarget, OpenDetail, Section, UiAction};
