use super::*;

#[test]
fn catalog_has_three_listings_in_order() {
    let titles: Vec<&str> = catalog().iter().map(|l| l.title).collect();
    assert_eq!(titles, vec!["Software Engineer", "Data Analyst", "Product Manager"]);
}

#[test]
fn every_listing_has_details() {
    for listing in catalog() {
        assert!(details(listing.id).is_some(), "missing details for {}", listing.id);
    }
}

#[test]
fn select_merges_summary_and_details() {
    let selected = select(2).unwrap();
    assert_eq!(selected.listing.company, "Data Corp");
    let details = selected.details.unwrap();
    assert_eq!(details.salary, "$80,000");
    assert_eq!(details.location, "New York");
}

#[test]
fn select_unknown_id_is_none() {
    assert_eq!(select(0), None);
    assert_eq!(select(99), None);
}
