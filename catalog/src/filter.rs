//! Free-text, type and tag filtering over in-memory entity lists.
//!
//! DESIGN
//! ======
//! Filtering is a pure linear scan with no index: lists are small (at most a
//! few hundred entries) and are re-filtered on every input change. Output
//! keeps the input's relative order, so applying a filter to its own output is
//! a no-op.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::{Asset, AuditEvent, CacheTable, DataSourceTile};

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Fields an entity exposes to [`AssetFilter`].
pub trait Searchable {
    fn name(&self) -> &str;

    /// Value matched by the exact type filter and by the free-text query.
    fn kind_label(&self) -> &str;

    fn tags(&self) -> &[String];

    /// Author or actor, matched only with [`SearchFields::NameKindAndCreator`].
    fn created_by(&self) -> Option<&str> {
        None
    }
}

impl Searchable for Asset {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind_label(&self) -> &str {
        self.kind.label()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn created_by(&self) -> Option<&str> {
        Some(&self.created_by)
    }
}

impl Searchable for DataSourceTile {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind_label(&self) -> &str {
        self.category().label()
    }

    fn tags(&self) -> &[String] {
        &[]
    }
}

impl Searchable for CacheTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind_label(&self) -> &str {
        "Cache Tables"
    }

    fn tags(&self) -> &[String] {
        &[]
    }
}

impl Searchable for AuditEvent {
    fn name(&self) -> &str {
        &self.action
    }

    fn kind_label(&self) -> &str {
        self.category.label()
    }

    fn tags(&self) -> &[String] {
        &[]
    }

    fn created_by(&self) -> Option<&str> {
        Some(&self.actor)
    }
}

/// Which text fields the free-text query is matched against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchFields {
    #[default]
    NameAndKind,
    NameKindAndCreator,
}

/// UI filter controls: query text, an optional exact type, required tags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetFilter {
    query: String,
    kind: Option<String>,
    tags: BTreeSet<String>,
    fields: SearchFields,
}

impl AssetFilter {
    #[must_use]
    pub fn new(fields: SearchFields) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.set_query(query);
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.set_kind(Some(kind.into()));
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    #[must_use]
    pub fn fields(&self) -> SearchFields {
        self.fields
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_kind(&mut self, kind: Option<String>) {
        self.kind = kind;
    }

    /// Select `kind`, or clear the type filter when `kind` is already selected.
    pub fn toggle_kind(&mut self, kind: &str) {
        if self.kind.as_deref() == Some(kind) {
            self.kind = None;
        } else {
            self.kind = Some(kind.to_owned());
        }
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.tags.remove(tag) {
            self.tags.insert(tag.to_owned());
        }
    }

    /// Reset query, type and tags. The search field set is kept.
    pub fn clear(&mut self) {
        self.query.clear();
        self.kind = None;
        self.tags.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.kind.is_none() && self.tags.is_empty()
    }

    #[must_use]
    pub fn matches<T: Searchable + ?Sized>(&self, item: &T) -> bool {
        self.matches_needle(&self.query.to_lowercase(), item)
    }

    /// The matching entries of `items`, in their original order.
    #[must_use]
    pub fn apply<'a, T: Searchable>(&self, items: &'a [T]) -> Vec<&'a T> {
        let needle = self.query.to_lowercase();
        items
            .iter()
            .filter(|item| self.matches_needle(&needle, *item))
            .collect()
    }

    /// Like [`AssetFilter::apply`], cloning the matches.
    #[must_use]
    pub fn apply_cloned<T: Searchable + Clone>(&self, items: &[T]) -> Vec<T> {
        self.apply(items).into_iter().cloned().collect()
    }

    fn matches_needle<T: Searchable + ?Sized>(&self, needle: &str, item: &T) -> bool {
        self.text_matches(needle, item) && self.kind_matches(item) && self.tags_match(item)
    }

    fn text_matches<T: Searchable + ?Sized>(&self, needle: &str, item: &T) -> bool {
        if needle.is_empty() {
            return true;
        }
        let contains = |haystack: &str| haystack.to_lowercase().contains(needle);
        if contains(item.name()) || contains(item.kind_label()) {
            return true;
        }
        self.fields == SearchFields::NameKindAndCreator && item.created_by().is_some_and(contains)
    }

    fn kind_matches<T: Searchable + ?Sized>(&self, item: &T) -> bool {
        self.kind
            .as_deref()
            .map_or(true, |kind| item.kind_label() == kind)
    }

    fn tags_match<T: Searchable + ?Sized>(&self, item: &T) -> bool {
        let tags = item.tags();
        self.tags.iter().all(|required| tags.contains(required))
    }
}
