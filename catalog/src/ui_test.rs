use super::*;
use crate::generator::{GenerateOptions, generate_catalog};
use crate::model::AssetKind;

fn catalog() -> Catalog {
    generate_catalog(
        99,
        &GenerateOptions {
            workspace: "WS".to_owned(),
            asset_count: 60,
            cache_table_count: 3,
            sync_events_per_table: 2,
            audit_events: 5,
            ..GenerateOptions::default()
        },
    )
}

fn path(view: &CatalogView) -> Vec<String> {
    view.breadcrumb().path()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn new_view_starts_on_assets_with_empty_filter() {
    let view = CatalogView::new("WS");
    assert_eq!(view.section(), Section::Assets);
    assert!(view.filter().is_empty());
    assert!(view.detail().is_none());
    assert_eq!(path(&view), vec!["WS", "Assets"]);
}

// =============================================================
// Open / close
// =============================================================

#[test]
fn open_and_close_asset_keep_breadcrumb_paired() {
    let catalog = catalog();
    let mut view = CatalogView::new("WS");
    let first = catalog.assets[0].clone();
    let second = catalog.assets[1].clone();

    view.apply(&catalog, UiAction::OpenAsset { id: first.id.clone() }).unwrap();
    assert_eq!(path(&view), vec!["WS".to_owned(), "Assets".to_owned(), first.name.clone(), "Details".to_owned()]);
    assert_eq!(view.detail().map(|d| d.tabs.active()), Some("overview"));

    view.apply(&catalog, UiAction::OpenAsset { id: second.id.clone() }).unwrap();
    assert_eq!(view.detail_depth(), 2);
    assert_eq!(view.breadcrumb().depth(), 2);
    assert_eq!(view.detail().map(|d| d.target.clone()), Some(DetailTarget::Asset(second.id)));

    view.apply(&catalog, UiAction::CloseDetail).unwrap();
    assert_eq!(view.detail().map(|d| d.target.clone()), Some(DetailTarget::Asset(first.id)));

    view.apply(&catalog, UiAction::CloseDetail).unwrap();
    assert_eq!(path(&view), vec!["WS", "Assets"]);

    view.apply(&catalog, UiAction::CloseDetail).unwrap();
    assert_eq!(path(&view), vec!["WS", "Assets"]);
}

#[test]
fn opening_unknown_asset_is_not_found_and_changes_nothing() {
    let catalog = catalog();
    let mut view = CatalogView::new("WS");
    let before = view.clone();
    let err = view
        .apply(&catalog, UiAction::OpenAsset { id: "missing".to_owned() })
        .unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { .. }));
    assert_eq!(view, before);
}

#[test]
fn navigate_to_truncates_panels_and_frames_together() {
    let catalog = catalog();
    let mut view = CatalogView::new("WS");
    for asset in catalog.assets.iter().take(3) {
        view.apply(&catalog, UiAction::OpenAsset { id: asset.id.clone() }).unwrap();
    }
    view.apply(&catalog, UiAction::NavigateTo { depth: 1 }).unwrap();
    assert_eq!(view.detail_depth(), 1);
    assert_eq!(view.breadcrumb().depth(), 1);

    view.apply(&catalog, UiAction::NavigateTo { depth: 0 }).unwrap();
    assert!(view.detail().is_none());
    assert!(view.breadcrumb().is_root());
}

// =============================================================
// Tabs
// =============================================================

#[test]
fn select_tab_switches_and_rejects_undeclared() {
    let catalog = catalog();
    let table = catalog
        .assets
        .iter()
        .find(|a| a.kind == AssetKind::Tables)
        .cloned()
        .unwrap();
    let mut view = CatalogView::new("WS");
    view.apply(&catalog, UiAction::OpenAsset { id: table.id }).unwrap();

    view.apply(&catalog, UiAction::SelectTab("columns".to_owned())).unwrap();
    assert_eq!(view.detail().map(|d| d.tabs.active()), Some("columns"));

    let err = view
        .apply(&catalog, UiAction::SelectTab("settings".to_owned()))
        .unwrap_err();
    assert_eq!(err, CatalogError::UnknownTab("settings".to_owned()));
    assert_eq!(view.detail().map(|d| d.tabs.active()), Some("columns"));
}

#[test]
fn select_tab_without_panel_is_rejected() {
    let catalog = catalog();
    let mut view = CatalogView::new("WS");
    assert_eq!(
        view.apply(&catalog, UiAction::SelectTab("overview".to_owned())),
        Err(CatalogError::NoOpenDetail)
    );
}

#[test]
fn reopening_mounts_a_fresh_tab_set() {
    let catalog = catalog();
    let id = catalog.assets[0].id.clone();
    let mut view = CatalogView::new("WS");
    view.apply(&catalog, UiAction::OpenAsset { id: id.clone() }).unwrap();
    view.apply(&catalog, UiAction::SelectTab("audit".to_owned())).unwrap();
    view.apply(&catalog, UiAction::CloseDetail).unwrap();
    view.apply(&catalog, UiAction::OpenAsset { id }).unwrap();
    assert_eq!(view.detail().map(|d| d.tabs.active()), Some("overview"));
}

#[test]
fn cache_table_panel_uses_cache_tabs() {
    let catalog = catalog();
    let table = catalog.cache_tables[0].clone();
    let mut view = CatalogView::new("WS");
    view.apply(&catalog, UiAction::EnterSection(Section::CacheTables)).unwrap();
    view.apply(&catalog, UiAction::OpenCacheTable { id: table.id.clone() }).unwrap();
    assert_eq!(path(&view), vec!["WS".to_owned(), "Cache Tables".to_owned(), table.name, "Details".to_owned()]);
    view.apply(&catalog, UiAction::SelectTab("sync-history".to_owned())).unwrap();
    assert!(view.apply(&catalog, UiAction::SelectTab("columns".to_owned())).is_err());
}

// =============================================================
// Filters and sections
// =============================================================

#[test]
fn filters_narrow_visible_assets_but_not_counts() {
    let catalog = catalog();
    let mut view = CatalogView::new("WS");
    let counts_before = CatalogView::kind_counts(&catalog);
    view.apply(&catalog, UiAction::ToggleKind("Reports".to_owned())).unwrap();

    let visible = view.visible_assets(&catalog);
    assert!(visible.iter().all(|a| a.kind == AssetKind::Reports));
    assert_eq!(visible.len(), counts_before.get("Reports").copied().unwrap_or(0));
    assert_eq!(CatalogView::kind_counts(&catalog), counts_before);
}

#[test]
fn entering_section_resets_filter_and_panels() {
    let catalog = catalog();
    let mut view = CatalogView::new("WS");
    view.apply(&catalog, UiAction::SetQuery("sales".to_owned())).unwrap();
    view.apply(&catalog, UiAction::ToggleTag("pii".to_owned())).unwrap();
    view.apply(&catalog, UiAction::OpenAsset { id: catalog.assets[0].id.clone() }).unwrap();

    view.apply(&catalog, UiAction::EnterSection(Section::Audit)).unwrap();
    assert_eq!(view.section(), Section::Audit);
    assert!(view.filter().is_empty());
    assert_eq!(view.filter().fields(), SearchFields::NameKindAndCreator);
    assert!(view.detail().is_none());
    assert_eq!(path(&view), vec!["WS", "Audit Log"]);
}

#[test]
fn clear_filters_restores_full_list() {
    let catalog = catalog();
    let mut view = CatalogView::new("WS");
    view.apply(&catalog, UiAction::SetQuery("zzz-no-match".to_owned())).unwrap();
    assert!(view.visible_assets(&catalog).is_empty());
    view.apply(&catalog, UiAction::ClearFilters).unwrap();
    assert_eq!(view.visible_assets(&catalog).len(), catalog.assets.len());
}

#[test]
fn section_routes_are_distinct() {
    let routes = Section::ALL.iter().map(|s| s.route()).collect::<std::collections::BTreeSet<_>>();
    assert_eq!(routes.len(), Section::ALL.len());
}

#[test]
fn open_detail_decodes_its_own_tab_kind() {
    let catalog = catalog();
    let mut view = CatalogView::new("WS");
    view.apply(&catalog, UiAction::OpenAsset { id: catalog.assets[0].id.clone() }).unwrap();
    view.apply(&catalog, UiAction::SelectTab("lineage".to_owned())).unwrap();
    let detail = view.detail().unwrap();
    assert_eq!(detail.active_detail_tab(), Some(DetailTab::Lineage));
    assert_eq!(detail.active_cache_tab(), None);

    view.apply(&catalog, UiAction::OpenCacheTable { id: catalog.cache_tables[0].id.clone() }).unwrap();
    let detail = view.detail().unwrap();
    assert_eq!(detail.active_cache_tab(), Some(CacheTab::Overview));
    assert_eq!(detail.active_detail_tab(), None);
}
