use super::*;

fn small_options() -> GenerateOptions {
    GenerateOptions {
        asset_count: 40,
        cache_table_count: 5,
        sync_events_per_table: 4,
        audit_events: 15,
        ..GenerateOptions::default()
    }
}

#[test]
fn same_seed_same_catalog() {
    let a = generate_catalog(7, &small_options());
    let b = generate_catalog(7, &small_options());
    assert_eq!(a, b);
}

#[test]
fn different_seeds_differ() {
    let a = generate_catalog(7, &small_options());
    let b = generate_catalog(8, &small_options());
    assert_ne!(a.assets, b.assets);
}

#[test]
fn generate_restarts_from_seed() {
    let mut generator = MockGenerator::seeded(11);
    let _ = generator.asset(DEFAULT_NOW_MS);
    let first = generator.generate(&small_options());
    let second = generator.generate(&small_options());
    assert_eq!(first, second);
    assert_eq!(first.seed, 11);
}

#[test]
fn counts_follow_options() {
    let options = small_options();
    let catalog = generate_catalog(3, &options);
    assert_eq!(catalog.workspace, DEFAULT_WORKSPACE);
    assert_eq!(catalog.assets.len(), 40);
    assert_eq!(catalog.details.len(), 40);
    assert_eq!(catalog.data_sources.len(), Vendor::ALL.len());
    assert_eq!(catalog.cache_tables.len(), 5);
    assert_eq!(catalog.sync_events.len(), 20);
    assert_eq!(catalog.audit_log.len(), 15);
    assert_eq!(catalog.generated_at, DEFAULT_NOW_MS);
}

#[test]
fn asset_count_is_clamped() {
    let zero = GenerateOptions {
        asset_count: 0,
        ..small_options()
    };
    assert_eq!(generate_catalog(1, &zero).assets.len(), 1);

    let huge = GenerateOptions {
        asset_count: 10_000,
        cache_table_count: 0,
        sync_events_per_table: 0,
        audit_events: 0,
        ..GenerateOptions::default()
    };
    assert_eq!(generate_catalog(1, &huge).assets.len(), MAX_ASSETS);
}

#[test]
fn generated_ids_are_unique_uuids() {
    let catalog = generate_catalog(5, &small_options());
    let ids = catalog.assets.iter().map(|a| a.id.as_str()).collect::<BTreeSet<_>>();
    assert_eq!(ids.len(), catalog.assets.len());
    assert!(catalog.assets.iter().all(|a| uuid::Uuid::parse_str(&a.id).is_ok()));
}

#[test]
fn assets_carry_distinct_tags_and_kind_icon() {
    let catalog = generate_catalog(9, &small_options());
    for asset in &catalog.assets {
        let distinct = asset.tags.iter().collect::<BTreeSet<_>>();
        assert_eq!(distinct.len(), asset.tags.len());
        assert!(asset.tags.len() <= 3);
        assert_eq!(asset.icon, Icon::for_kind(asset.kind));
        assert!(asset.created_at <= DEFAULT_NOW_MS);
    }
}

#[test]
fn data_source_item_shape_follows_category() {
    let catalog = generate_catalog(2, &small_options());
    for source in &catalog.data_sources {
        let shape_ok = matches!(
            (source.category(), &source.items),
            (SourceCategory::Database, SourceItems::Tables(_))
                | (SourceCategory::Application, SourceItems::Connections(_))
                | (SourceCategory::EventStream, SourceItems::Clients(_))
        );
        assert!(shape_ok, "{source:?}");
        assert!(!source.items.is_empty());
        assert_eq!(source.icon, Icon::for_vendor(source.vendor));
    }
}

#[test]
fn cache_tables_never_exceed_base_rows() {
    for seed in 0..20 {
        let catalog = generate_catalog(seed, &small_options());
        for table in &catalog.cache_tables {
            assert!(table.cache_row_count <= table.base_row_count);
            assert!(table.cache_row_count >= 1);
            assert!(!table.sync_status.is_empty());
            assert!(!table.dimensions.is_empty());
            assert!(!table.aggregates.is_empty());
        }
    }
}

#[test]
fn sync_events_use_the_tables_engines() {
    let catalog = generate_catalog(4, &small_options());
    for event in &catalog.sync_events {
        let table = catalog.cache_table(&event.cache_table_id).unwrap();
        assert!(table.sync_status.contains_key(&event.engine));
        assert!(event.rows_written <= table.cache_row_count);
        if event.status == SyncState::Failed {
            assert_eq!(event.rows_written, 0);
        }
    }
    assert!(catalog.sync_events.windows(2).all(|w| w[0].started_at >= w[1].started_at));
}

#[test]
fn details_are_consistent_with_their_asset() {
    let catalog = generate_catalog(6, &small_options());
    for asset in &catalog.assets {
        let detail = catalog.detail(&asset.id).unwrap();
        assert_eq!(detail.columns.is_empty(), !asset.kind.has_columns());
        assert_eq!(detail.users[0].name, asset.created_by);
        assert_eq!(detail.users[0].role, UserRole::Owner);
        assert!(detail.lineage.upstream.iter().all(|n| n.asset_id != asset.id));
        assert!(detail.lineage.downstream.iter().all(|n| n.asset_id != asset.id));
        assert!(!detail.versions.is_empty());
        assert_eq!(detail.versions.last().map(|v| v.version), Some(1));
        assert!(detail.audit.windows(2).all(|w| w[0].at >= w[1].at));
    }
}

#[test]
fn versions_count_down_to_initial() {
    let mut generator = MockGenerator::seeded(1);
    let versions = generator.versions(4, DEFAULT_NOW_MS);
    let numbers = versions.iter().map(|v| v.version).collect::<Vec<_>>();
    assert_eq!(numbers, vec![4, 3, 2, 1]);
    assert_eq!(versions[3].summary, "Initial version");
    assert!(versions.windows(2).all(|w| w[0].at >= w[1].at));
}

#[test]
fn audit_events_without_subjects_mention_workspace() {
    let mut generator = MockGenerator::seeded(1);
    let events = generator.audit_events(5, &[], DEFAULT_NOW_MS);
    assert_eq!(events.len(), 5);
    assert!(events.iter().all(|e| e.action.contains("workspace")));
}

#[test]
fn columns_only_for_tabular_kinds() {
    let mut generator = MockGenerator::seeded(1);
    assert!(generator.columns(AssetKind::Reports).is_empty());
    let columns = generator.columns(AssetKind::Tables);
    assert!((3..=10).contains(&columns.len()));
    assert!(columns.iter().filter(|c| c.name == "id").all(|c| !c.nullable));
}

#[test]
fn extreme_reference_times_do_not_overflow() {
    for now_ms in [i64::MIN, 0, i64::MAX] {
        let options = GenerateOptions {
            asset_count: 3,
            cache_table_count: 2,
            sync_events_per_table: 2,
            audit_events: 3,
            now_ms,
            ..GenerateOptions::default()
        };
        let catalog = generate_catalog(1, &options);
        assert!(catalog.assets.iter().all(|a| a.created_at <= now_ms));
        assert!(catalog.audit_log.iter().all(|e| e.at <= now_ms));
        if now_ms == i64::MIN {
            assert!(catalog.assets.iter().all(|a| a.created_at == i64::MIN));
        }
    }
}
