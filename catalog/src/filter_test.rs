use super::*;
use crate::icons::Icon;
use crate::model::AssetKind;

fn asset(name: &str, kind: AssetKind, tags: &[&str], created_by: &str) -> Asset {
    Asset {
        id: format!("id-{name}"),
        name: name.to_owned(),
        kind,
        created_at: 0,
        created_by: created_by.to_owned(),
        shared_users_count: 0,
        data_sources_count: 0,
        downstream_assets_count: 0,
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        icon: Icon::for_kind(kind),
    }
}

fn sales_and_orders() -> Vec<Asset> {
    vec![
        asset("Sales", AssetKind::Tables, &["pii"], "Ada Park"),
        asset("Orders", AssetKind::Reports, &[], "Sam Reed"),
    ]
}

fn names(items: &[&Asset]) -> Vec<String> {
    items.iter().map(|a| a.name.clone()).collect()
}

// =============================================================
// Example scenarios
// =============================================================

#[test]
fn query_matches_name_case_insensitively() {
    let items = sales_and_orders();
    let filter = AssetFilter::default().with_query("sa");
    assert_eq!(names(&filter.apply(&items)), vec!["Sales"]);
}

#[test]
fn kind_filter_is_exact_match() {
    let items = sales_and_orders();
    let filter = AssetFilter::default().with_kind("Reports");
    assert_eq!(names(&filter.apply(&items)), vec!["Orders"]);

    let partial = AssetFilter::default().with_kind("Report");
    assert!(partial.apply(&items).is_empty());
}

#[test]
fn query_also_matches_kind_label() {
    let items = sales_and_orders();
    let filter = AssetFilter::default().with_query("REPORT");
    assert_eq!(names(&filter.apply(&items)), vec!["Orders"]);
}

// =============================================================
// Edge cases
// =============================================================

#[test]
fn empty_filter_matches_everything_in_order() {
    let items = sales_and_orders();
    let filter = AssetFilter::default();
    assert!(filter.is_empty());
    assert_eq!(names(&filter.apply(&items)), vec!["Sales", "Orders"]);
}

#[test]
fn every_required_tag_must_be_present() {
    let items = vec![
        asset("a", AssetKind::Tables, &["pii", "finance"], "x"),
        asset("b", AssetKind::Tables, &["pii"], "x"),
        asset("c", AssetKind::Tables, &["finance"], "x"),
    ];
    let filter = AssetFilter::default().with_tag("pii").with_tag("finance");
    assert_eq!(names(&filter.apply(&items)), vec!["a"]);
}

#[test]
fn creator_is_only_searched_when_enabled() {
    let items = sales_and_orders();
    let default_fields = AssetFilter::default().with_query("reed");
    assert!(default_fields.apply(&items).is_empty());

    let with_creator = AssetFilter::new(SearchFields::NameKindAndCreator).with_query("reed");
    assert_eq!(names(&with_creator.apply(&items)), vec!["Orders"]);
}

#[test]
fn query_is_not_trimmed() {
    let items = vec![asset("Net Revenue", AssetKind::Formulas, &[], "x"), asset("Churn", AssetKind::Formulas, &[], "x")];
    let filter = AssetFilter::default().with_query(" ");
    assert_eq!(names(&filter.apply(&items)), vec!["Net Revenue"]);
}

#[test]
fn apply_is_idempotent() {
    let items = vec![
        asset("Sales daily", AssetKind::Tables, &["pii"], "x"),
        asset("Sales report", AssetKind::Reports, &["pii"], "x"),
        asset("Orders", AssetKind::Tables, &["pii"], "x"),
        asset("Sales weekly", AssetKind::Tables, &[], "x"),
    ];
    let filter = AssetFilter::default().with_query("sales").with_kind("Tables").with_tag("pii");
    let once = filter.apply_cloned(&items);
    let twice = filter.apply_cloned(&once);
    assert_eq!(once, twice);
    assert_eq!(once.len(), 1);
}

// =============================================================
// Mutators
// =============================================================

#[test]
fn toggle_kind_selects_then_clears() {
    let mut filter = AssetFilter::default();
    filter.toggle_kind("Tables");
    assert_eq!(filter.kind(), Some("Tables"));
    filter.toggle_kind("Reports");
    assert_eq!(filter.kind(), Some("Reports"));
    filter.toggle_kind("Reports");
    assert_eq!(filter.kind(), None);
}

#[test]
fn toggle_tag_adds_then_removes() {
    let mut filter = AssetFilter::default();
    filter.toggle_tag("pii");
    assert!(filter.has_tag("pii"));
    assert_eq!(filter.tags().collect::<Vec<_>>(), vec!["pii"]);
    filter.toggle_tag("pii");
    assert!(!filter.has_tag("pii"));
    assert!(filter.is_empty());
}

#[test]
fn clear_keeps_search_fields() {
    let mut filter = AssetFilter::new(SearchFields::NameKindAndCreator)
        .with_query("x")
        .with_kind("Tables")
        .with_tag("pii");
    filter.clear();
    assert!(filter.is_empty());
    assert_eq!(filter.fields(), SearchFields::NameKindAndCreator);
}

// =============================================================
// Other searchable entities
// =============================================================

#[test]
fn audit_events_search_actor_with_creator_fields() {
    let events = vec![
        AuditEvent {
            id: "e1".to_owned(),
            at: 0,
            actor: "Chen Wei".to_owned(),
            category: crate::model::AuditCategory::Edit,
            action: "edited Sales".to_owned(),
        },
        AuditEvent {
            id: "e2".to_owned(),
            at: 0,
            actor: "Dana Cole".to_owned(),
            category: crate::model::AuditCategory::Share,
            action: "shared Orders".to_owned(),
        },
    ];
    let filter = AssetFilter::new(SearchFields::NameKindAndCreator).with_query("chen");
    assert_eq!(filter.apply(&events).len(), 1);

    let by_category = AssetFilter::default().with_kind("Share");
    assert_eq!(by_category.apply(&events)[0].id, "e2");
}
