//! Properties of the canonical query contract.

use contact_directory::domain::facet::{FacetCatalog, FacetKey};
use contact_directory::domain::query::{ALL_SENTINEL, build};
use contact_directory::domain::selection::SelectionState;
use contact_directory::domain::sort::SortColumn;
use contact_directory::domain::types::{FacetValue, PageSize, SearchTerm};

fn value(s: &str) -> FacetValue {
    FacetValue::new(s).unwrap()
}

fn catalog() -> FacetCatalog {
    let mut catalog = FacetCatalog::new();
    catalog.replace_values(
        FacetKey::City,
        vec![value("Austin"), value("Dallas"), value("Houston")],
    );
    catalog.replace_values(FacetKey::ZipCode, vec![value("73301"), value("75201")]);
    catalog.replace_values(FacetKey::AreaCode, vec![value("512"), value("214")]);
    catalog.replace_values(FacetKey::Category, vec![value("Vendor"), value("Customer")]);
    catalog
}

#[test]
fn equivalent_selections_build_identical_contracts() {
    let catalog = catalog();

    let unrestricted = SelectionState::new();
    let mut everything = SelectionState::new();
    for city in ["Austin", "Dallas", "Houston"] {
        everything
            .choose_value(&catalog, FacetKey::City, value(city))
            .unwrap();
    }

    let a = build(&unrestricted, &catalog);
    let b = build(&everything, &catalog);
    assert_eq!(a, b);
    assert_eq!(
        a.as_query_string().unwrap(),
        b.as_query_string().unwrap()
    );
    assert_eq!(a.city, ALL_SENTINEL);
}

#[test]
fn page_size_change_always_lands_on_page_one() {
    let catalog = catalog();
    let mut selection = SelectionState::new();
    selection.set_page(9).unwrap();

    selection.set_page_size(PageSize::new(100).unwrap());

    let contract = build(&selection, &catalog);
    assert_eq!(contract.page, 1);
    assert_eq!(contract.limit, 100);
}

#[test]
fn page_only_change_keeps_every_other_field() {
    let catalog = catalog();
    let mut selection = SelectionState::new();
    selection
        .choose_value(&catalog, FacetKey::Category, value("Vendor"))
        .unwrap();
    selection.set_search(SearchTerm::new("ray"));
    selection.sort_by(SortColumn::City);

    let before = build(&selection, &catalog);
    selection.set_page(5).unwrap();
    let after = build(&selection, &catalog);

    assert_eq!(after.page, 5);
    assert_eq!(after.export(), before.export());
}

#[test]
fn restriction_changes_reset_the_page() {
    let catalog = catalog();
    let mut selection = SelectionState::new();

    selection.set_page(6).unwrap();
    selection
        .choose_value(&catalog, FacetKey::AreaCode, value("512"))
        .unwrap();
    assert_eq!(build(&selection, &catalog).page, 1);

    selection.set_page(6).unwrap();
    selection.set_search(SearchTerm::new("smith"));
    assert_eq!(build(&selection, &catalog).page, 1);

    selection.set_page(6).unwrap();
    selection.sort_by(SortColumn::Email);
    assert_eq!(build(&selection, &catalog).page, 1);
}

#[test]
fn chosen_cities_serialize_in_catalog_order() {
    let catalog = catalog();
    let mut selection = SelectionState::new();

    // Click order is Dallas first, Austin second.
    selection
        .choose_value(&catalog, FacetKey::City, value("Dallas"))
        .unwrap();
    selection
        .choose_value(&catalog, FacetKey::City, value("Austin"))
        .unwrap();

    assert_eq!(build(&selection, &catalog).city, "Austin,Dallas");
}

#[test]
fn sort_clicks_toggle_deterministically() {
    let catalog = catalog();
    let mut selection = SelectionState::new();

    selection.set_page(3).unwrap();
    selection.sort_by(SortColumn::FullName);
    let first = build(&selection, &catalog);
    assert_eq!(first.sort_column, Some("full_name".to_string()));
    assert_eq!(first.sort_order, Some("asc".to_string()));
    assert_eq!(first.page, 1);

    selection.set_page(3).unwrap();
    selection.sort_by(SortColumn::FullName);
    let second = build(&selection, &catalog);
    assert_eq!(second.sort_order, Some("desc".to_string()));
    assert_eq!(second.page, 1);

    selection.sort_by(SortColumn::FullName);
    let third = build(&selection, &catalog);
    assert_eq!(third.sort_order, Some("asc".to_string()));
}

#[test]
fn unsorted_contract_omits_sort_keys_entirely() {
    let catalog = catalog();
    let rendered = build(&SelectionState::new(), &catalog)
        .as_query_string()
        .unwrap();
    assert!(rendered.contains("page=1"));
    assert!(rendered.contains(&format!("city={ALL_SENTINEL}")));
    assert!(!rendered.contains("sortColumn"));
    assert!(!rendered.contains("sortOrder"));
    assert!(!rendered.contains("search"));
}

#[test]
fn search_term_is_carried_raw_and_encoded_at_the_boundary() {
    let catalog = catalog();
    let mut selection = SelectionState::new();
    selection.set_search(SearchTerm::new("  maria lopez "));

    let contract = build(&selection, &catalog);
    assert_eq!(contract.search, Some("maria lopez".to_string()));
    // The space appears encoded only in the rendered query string.
    assert!(
        contract
            .as_query_string()
            .unwrap()
            .contains("search=maria+lopez")
    );
}
