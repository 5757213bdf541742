//! Seedable mock data generator.
//!
//! DESIGN
//! ======
//! [`CatalogSource`] is the seam a real backend would plug into; the only
//! implementation here is [`MockGenerator`], which composes names from fixed
//! word lists and draws counts, dates and categorical picks from a seeded
//! `StdRng`. Ids are UUIDs built from RNG bytes, so a seed reproduces every
//! field. Dates are offsets back from [`GenerateOptions::now_ms`] rather than
//! the wall clock.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::icons::Icon;
use crate::model::{
    Asset, AssetDetail, AssetKind, AssetUser, AuditCategory, AuditEvent, CacheTable, Column, DataSourceTile, Engine,
    Lineage, LineageNode, SourceCategory, SourceItems, SourceStatus, SyncEvent, SyncState, UserRole, Vendor,
    VersionRecord,
};
use crate::snapshot::Catalog;

#[cfg(test)]
#[path = "generator_test.rs"]
mod generator_test;

/// Seed used when a caller needs a stable catalog without choosing one.
pub const DEFAULT_SEED: u64 = 20_240_601;
/// 2024-06-01T00:00:00Z.
pub const DEFAULT_NOW_MS: i64 = 1_717_200_000_000;
pub const DEFAULT_WORKSPACE: &str = "Acme Analytics";
pub const MAX_ASSETS: usize = 200;

const DAY_MS: i64 = 24 * 60 * 60 * 1_000;

const SUBJECTS: &[&str] = &[
    "Sales", "Orders", "Customers", "Revenue", "Inventory", "Marketing", "Churn", "Pipeline", "Billing", "Support",
    "Shipments", "Payroll", "Campaigns", "Products", "Forecast", "Accounts",
];
const TABLE_SUFFIXES: &[&str] = &["raw", "daily", "fact", "dim", "snapshot", "staging", "history"];
const COLUMN_FIELDS: &[&str] = &[
    "id", "amount", "created_at", "updated_at", "status", "region", "email", "quantity", "price", "owner_id",
    "currency", "segment",
];
const FORMULA_NAMES: &[&str] = &["Growth Rate", "Margin", "YoY Delta", "Run Rate", "Conversion", "Retention"];
const REPORT_SUFFIXES: &[&str] = &["Report", "Summary", "Breakdown", "Weekly Digest"];
const DASHBOARD_SUFFIXES: &[&str] = &["Overview", "Dashboard", "Scorecard", "Health"];
const SOURCE_ENVS: &[&str] = &["Production", "Warehouse", "Replica", "Analytics"];
const PEOPLE: &[&str] = &[
    "Ada Park", "Ben Ortiz", "Chen Wei", "Dana Cole", "Eli Novak", "Farah Aziz", "Gus Lind", "Hana Ito", "Ivan Roux",
    "Jo Mensah",
];
const TAGS: &[&str] = &[
    "pii", "certified", "deprecated", "finance", "marketing", "sales", "draft", "sensitive", "core", "experimental",
];
const DIMENSIONS: &[&str] = &["region", "product_id", "customer_segment", "order_date", "channel", "country", "plan"];
const AGGREGATES: &[&str] = &[
    "sum(amount)", "count(*)", "avg(price)", "max(updated_at)", "count_distinct(customer_id)", "min(created_at)",
];
const DATA_TYPES: &[&str] = &["VARCHAR", "INTEGER", "BIGINT", "DECIMAL(18,2)", "BOOLEAN", "TIMESTAMP", "DATE", "JSON"];
const CONNECTION_OBJECTS: &[&str] = &[
    "Accounts", "Contacts", "Leads", "Opportunities", "Invoices", "Subscriptions", "Charges", "Deals", "Tickets",
];
const CLIENTS: &[&str] = &["web", "ios", "android", "backend", "partner-api", "kiosk"];
const VERSION_SUMMARIES: &[&str] = &[
    "Renamed columns", "Added filters", "Updated owner", "Changed refresh schedule", "Fixed join condition",
    "Added description",
];

/// Knobs for a generated catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateOptions {
    pub workspace: String,
    /// Clamped to `1..=MAX_ASSETS`.
    pub asset_count: usize,
    pub cache_table_count: usize,
    pub sync_events_per_table: usize,
    pub audit_events: usize,
    pub now_ms: i64,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            workspace: DEFAULT_WORKSPACE.to_owned(),
            asset_count: 120,
            cache_table_count: 12,
            sync_events_per_table: 8,
            audit_events: 40,
            now_ms: DEFAULT_NOW_MS,
        }
    }
}

/// Anything that can produce a full catalog snapshot.
pub trait CatalogSource {
    fn generate(&mut self, options: &GenerateOptions) -> Catalog;
}

/// Random catalog generator driven by a seeded `StdRng`.
pub struct MockGenerator {
    seed: u64,
    rng: StdRng,
}

impl MockGenerator {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A generator with a freshly drawn seed, so every load differs. The seed
    /// is still recorded on the generated [`Catalog`].
    #[cfg(feature = "entropy")]
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn asset(&mut self, now: i64) -> Asset {
        let kind = self.pick(&AssetKind::ALL);
        let tag_count = self.rng.random_range(0..=3);
        let tags = TAGS
            .choose_multiple(&mut self.rng, tag_count)
            .map(|tag| (*tag).to_owned())
            .collect();
        Asset {
            id: self.id(),
            name: self.asset_name(kind),
            kind,
            created_at: self.past(now, 720),
            created_by: self.pick(PEOPLE).to_owned(),
            shared_users_count: self.rng.random_range(0..40),
            data_sources_count: self.rng.random_range(1..6),
            downstream_assets_count: self.rng.random_range(0..25),
            tags,
            icon: Icon::for_kind(kind),
        }
    }

    #[must_use]
    pub fn assets(&mut self, count: usize, now: i64) -> Vec<Asset> {
        (0..count).map(|_| self.asset(now)).collect()
    }

    /// One tile per known vendor.
    #[must_use]
    pub fn data_sources(&mut self, now: i64) -> Vec<DataSourceTile> {
        Vendor::ALL
            .into_iter()
            .map(|vendor| self.data_source(vendor, now))
            .collect()
    }

    #[must_use]
    pub fn data_source(&mut self, vendor: Vendor, now: i64) -> DataSourceTile {
        let items = match vendor.category() {
            SourceCategory::Database => SourceItems::Tables(self.table_names(3..=10)),
            SourceCategory::Application => SourceItems::Connections(self.sample(CONNECTION_OBJECTS, 2..=6)),
            SourceCategory::EventStream => SourceItems::Clients(self.sample(CLIENTS, 1..=5)),
        };
        let status = self.weighted(&[
            (SourceStatus::Connected, 70),
            (SourceStatus::Syncing, 15),
            (SourceStatus::Error, 10),
            (SourceStatus::Paused, 5),
        ]);
        let last_sync = if status == SourceStatus::Paused && self.rng.random_bool(0.5) {
            None
        } else {
            Some(self.past(now, 3))
        };
        DataSourceTile {
            id: self.id(),
            name: format!("{} {}", vendor.label(), self.pick(SOURCE_ENVS)),
            icon: Icon::for_vendor(vendor),
            vendor,
            items,
            last_sync,
            status,
        }
    }

    /// A cache table; the cache never holds more rows than its base table.
    #[must_use]
    pub fn cache_table(&mut self, now: i64) -> CacheTable {
        let base_table_name = self.table_name();
        let base_row_count = self.rng.random_range(10_000..50_000_000_u64);
        let ratio = self.rng.random_range(2..500_u64);
        let cache_row_count = (base_row_count / ratio).max(1);

        let mut sync_status = BTreeMap::new();
        for engine in Engine::ALL {
            if self.rng.random_bool(0.75) {
                let state = self.sync_state();
                sync_status.insert(engine, state);
            }
        }
        if sync_status.is_empty() {
            let engine = self.pick(&Engine::ALL);
            sync_status.insert(engine, SyncState::Pending);
        }

        CacheTable {
            id: self.id(),
            name: format!("{base_table_name}_cache"),
            base_table_name,
            cache_row_count,
            base_row_count,
            last_computed: self.past(now, 7),
            dimensions: self.sample(DIMENSIONS, 1..=4),
            aggregates: self.sample(AGGREGATES, 1..=4),
            sync_status,
        }
    }

    /// `count` refreshes of `table` into its engines, newest first.
    #[must_use]
    pub fn sync_events(&mut self, table: &CacheTable, count: usize, now: i64) -> Vec<SyncEvent> {
        let mut engines = table.sync_status.keys().copied().collect::<Vec<_>>();
        if engines.is_empty() {
            engines.extend(Engine::ALL);
        }
        let mut events = (0..count)
            .map(|_| {
                let status = self.sync_state();
                let rows_written = if status == SyncState::Failed {
                    0
                } else {
                    self.rng.random_range(0..=table.cache_row_count)
                };
                SyncEvent {
                    id: self.id(),
                    cache_table_id: table.id.clone(),
                    engine: self.pick(&engines),
                    started_at: self.past(now, 14),
                    duration_ms: self.rng.random_range(200..600_000),
                    rows_written,
                    status,
                }
            })
            .collect::<Vec<_>>();
        events.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        events
    }

    /// Workspace-wide audit events about random assets, newest first.
    #[must_use]
    pub fn audit_events(&mut self, count: usize, subjects: &[Asset], now: i64) -> Vec<AuditEvent> {
        let mut events = (0..count)
            .map(|_| {
                let subject = subjects
                    .choose(&mut self.rng)
                    .map_or("workspace", |asset| asset.name.as_str());
                self.audit_event(subject, now)
            })
            .collect::<Vec<_>>();
        events.sort_by(|a, b| b.at.cmp(&a.at));
        events
    }

    /// `count` versions, highest version (and newest date) first.
    #[must_use]
    pub fn versions(&mut self, count: usize, now: i64) -> Vec<VersionRecord> {
        let mut times = (0..count).map(|_| self.past(now, 365)).collect::<Vec<_>>();
        times.sort_unstable_by(|a, b| b.cmp(a));
        times
            .into_iter()
            .enumerate()
            .map(|(index, at)| {
                let version = u32::try_from(count - index).unwrap_or(u32::MAX);
                let summary = if version == 1 {
                    "Initial version"
                } else {
                    self.pick(VERSION_SUMMARIES)
                };
                VersionRecord {
                    version,
                    at,
                    author: self.pick(PEOPLE).to_owned(),
                    summary: summary.to_owned(),
                }
            })
            .collect()
    }

    /// Column schema; empty for kinds without columns.
    #[must_use]
    pub fn columns(&mut self, kind: AssetKind) -> Vec<Column> {
        if !kind.has_columns() {
            return Vec::new();
        }
        self.sample(COLUMN_FIELDS, 3..=10)
            .into_iter()
            .map(|name| Column {
                data_type: self.pick(DATA_TYPES).to_owned(),
                nullable: name != "id" && self.rng.random_bool(0.3),
                description: describe_column(&name).to_owned(),
                name,
            })
            .collect()
    }

    /// Upstream and downstream neighbours drawn from `pool`, never `asset`.
    #[must_use]
    pub fn lineage(&mut self, asset: &Asset, pool: &[Asset]) -> Lineage {
        let candidates = pool
            .iter()
            .filter(|candidate| candidate.id != asset.id)
            .collect::<Vec<_>>();
        let upstream_count = self.rng.random_range(0..=3_usize).min(candidates.len());
        let downstream_count = usize::try_from(asset.downstream_assets_count)
            .unwrap_or(usize::MAX)
            .min(5)
            .min(candidates.len());
        let upstream = candidates
            .choose_multiple(&mut self.rng, upstream_count)
            .map(|node| lineage_node(node))
            .collect();
        let downstream = candidates
            .choose_multiple(&mut self.rng, downstream_count)
            .map(|node| lineage_node(node))
            .collect();
        Lineage { upstream, downstream }
    }

    /// The owner first, then up to seven collaborators.
    #[must_use]
    pub fn users(&mut self, asset: &Asset, now: i64) -> Vec<AssetUser> {
        let collaborators = PEOPLE
            .iter()
            .copied()
            .filter(|person| *person != asset.created_by)
            .collect::<Vec<_>>();
        let count = usize::try_from(asset.shared_users_count.clamp(1, 8)).unwrap_or(1);
        let mut users = vec![AssetUser {
            name: asset.created_by.clone(),
            role: UserRole::Owner,
            last_access: self.past(now, 2),
        }];
        let picked = collaborators
            .choose_multiple(&mut self.rng, count - 1)
            .copied()
            .collect::<Vec<_>>();
        for name in picked {
            let role = if self.rng.random_bool(0.3) {
                UserRole::Editor
            } else {
                UserRole::Viewer
            };
            users.push(AssetUser {
                name: name.to_owned(),
                role,
                last_access: self.past(now, 30),
            });
        }
        users
    }

    #[must_use]
    pub fn asset_detail(&mut self, asset: &Asset, pool: &[Asset], now: i64) -> AssetDetail {
        let audit_count = self.rng.random_range(5..=12);
        let mut audit = (0..audit_count)
            .map(|_| self.audit_event(&asset.name, now))
            .collect::<Vec<_>>();
        audit.sort_by(|a, b| b.at.cmp(&a.at));
        let version_count = self.rng.random_range(1..=6);
        AssetDetail {
            asset_id: asset.id.clone(),
            description: format!("{} `{}` owned by {}.", kind_noun(asset.kind), asset.name, asset.created_by),
            columns: self.columns(asset.kind),
            lineage: self.lineage(asset, pool),
            users: self.users(asset, now),
            audit,
            versions: self.versions(version_count, now),
        }
    }

    fn audit_event(&mut self, subject: &str, now: i64) -> AuditEvent {
        let category = self.pick(&AuditCategory::ALL);
        let action = match category {
            AuditCategory::Access => format!("viewed {subject}"),
            AuditCategory::Edit => format!("edited {subject}"),
            AuditCategory::Share => format!("shared {subject} with {}", self.pick(PEOPLE)),
            AuditCategory::Schema => format!("added column {} to {subject}", self.pick(COLUMN_FIELDS)),
            AuditCategory::Sync => format!("refreshed {subject}"),
        };
        AuditEvent {
            id: self.id(),
            at: self.past(now, 60),
            actor: self.pick(PEOPLE).to_owned(),
            category,
            action,
        }
    }

    fn asset_name(&mut self, kind: AssetKind) -> String {
        let subject = self.pick(SUBJECTS);
        let snake = subject.to_lowercase();
        match kind {
            AssetKind::Tables => format!("{snake}_{}", self.pick(TABLE_SUFFIXES)),
            AssetKind::Columns => format!("{snake}.{}", self.pick(COLUMN_FIELDS)),
            AssetKind::Formulas => format!("{subject} {}", self.pick(FORMULA_NAMES)),
            AssetKind::Reports => format!("{subject} {}", self.pick(REPORT_SUFFIXES)),
            AssetKind::Dashboards => format!("{subject} {}", self.pick(DASHBOARD_SUFFIXES)),
            AssetKind::DataSources => format!("{} {}", self.pick(&Vendor::ALL).label(), self.pick(SOURCE_ENVS)),
            AssetKind::CacheTables => format!("{snake}_{}_cache", self.pick(TABLE_SUFFIXES)),
        }
    }

    fn table_name(&mut self) -> String {
        let subject = self.pick(SUBJECTS).to_lowercase();
        format!("{subject}_{}", self.pick(TABLE_SUFFIXES))
    }

    /// Distinct table names, sorted.
    fn table_names(&mut self, count: RangeInclusive<usize>) -> Vec<String> {
        let count = self.rng.random_range(count);
        (0..count)
            .map(|_| self.table_name())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Between `count` distinct entries of `items`, in random order.
    fn sample(&mut self, items: &[&str], count: RangeInclusive<usize>) -> Vec<String> {
        let count = self.rng.random_range(count).min(items.len());
        items
            .choose_multiple(&mut self.rng, count)
            .map(|item| (*item).to_owned())
            .collect()
    }

    fn sync_state(&mut self) -> SyncState {
        self.weighted(&[
            (SyncState::Synced, 65),
            (SyncState::Pending, 15),
            (SyncState::Stale, 12),
            (SyncState::Failed, 8),
        ])
    }

    /// Uniform pick from a non-empty constant list.
    fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.rng.random_range(0..items.len())]
    }

    fn weighted<T: Copy>(&mut self, choices: &[(T, u32)]) -> T {
        let total = choices.iter().map(|(_, weight)| weight).sum::<u32>();
        let mut roll = self.rng.random_range(0..total);
        for (choice, weight) in choices {
            if roll < *weight {
                return *choice;
            }
            roll -= weight;
        }
        choices[choices.len() - 1].0
    }

    fn past(&mut self, now: i64, max_days: i64) -> i64 {
        now.saturating_sub(self.rng.random_range(0..max_days * DAY_MS))
    }

    fn id(&mut self) -> String {
        uuid::Builder::from_random_bytes(self.rng.random())
            .into_uuid()
            .to_string()
    }
}

impl CatalogSource for MockGenerator {
    /// Generation restarts from the seed, so the result depends only on the
    /// seed and `options`.
    fn generate(&mut self, options: &GenerateOptions) -> Catalog {
        self.rng = StdRng::seed_from_u64(self.seed);
        let now = options.now_ms;

        let assets = self.assets(options.asset_count.clamp(1, MAX_ASSETS), now);
        let details = assets
            .iter()
            .map(|asset| (asset.id.clone(), self.asset_detail(asset, &assets, now)))
            .collect::<BTreeMap<_, _>>();
        let data_sources = self.data_sources(now);
        let cache_tables = (0..options.cache_table_count)
            .map(|_| self.cache_table(now))
            .collect::<Vec<_>>();
        let mut sync_events = Vec::new();
        for table in &cache_tables {
            sync_events.extend(self.sync_events(table, options.sync_events_per_table, now));
        }
        sync_events.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        let audit_log = self.audit_events(options.audit_events, &assets, now);

        tracing::debug!(
            seed = self.seed,
            assets = assets.len(),
            data_sources = data_sources.len(),
            cache_tables = cache_tables.len(),
            sync_events = sync_events.len(),
            "generated mock catalog"
        );

        Catalog {
            workspace: options.workspace.clone(),
            seed: self.seed,
            generated_at: now,
            assets,
            data_sources,
            cache_tables,
            sync_events,
            audit_log,
            details,
        }
    }
}

/// Generate a catalog from `seed` in one call.
#[must_use]
pub fn generate_catalog(seed: u64, options: &GenerateOptions) -> Catalog {
    MockGenerator::seeded(seed).generate(options)
}

fn lineage_node(asset: &Asset) -> LineageNode {
    LineageNode {
        asset_id: asset.id.clone(),
        name: asset.name.clone(),
        kind: asset.kind,
    }
}

fn kind_noun(kind: AssetKind) -> &'static str {
    match kind {
        AssetKind::Tables => "Table",
        AssetKind::Columns => "Column",
        AssetKind::Formulas => "Formula",
        AssetKind::Reports => "Report",
        AssetKind::Dashboards => "Dashboard",
        AssetKind::DataSources => "Data source",
        AssetKind::CacheTables => "Cache table",
    }
}

fn describe_column(name: &str) -> &'static str {
    match name {
        "id" => "Primary key",
        "created_at" => "Row creation time",
        "updated_at" => "Last modification time",
        "amount" | "price" => "Monetary value in account currency",
        "owner_id" => "Owning user",
        "email" => "Contact address (PII)",
        _ => "",
    }
}
