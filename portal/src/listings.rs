//! Featured job listings shown to visitors.
//!
//! Summaries and details are kept in separate tables keyed by id; selecting a
//! listing merges the two.

#[cfg(test)]
#[path = "listings_test.rs"]
mod listings_test;

/// Summary row in the listing grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Listing {
    pub id: u32,
    pub title: &'static str,
    pub company: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListingDetails {
    pub description: &'static str,
    pub salary: &'static str,
    pub location: &'static str,
}

/// A listing joined with its details.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectedListing {
    pub listing: Listing,
    pub details: Option<ListingDetails>,
}

const CATALOG: &[Listing] = &[
    Listing { id: 1, title: "Software Engineer", company: "Tech Co" },
    Listing { id: 2, title: "Data Analyst", company: "Data Corp" },
    Listing { id: 3, title: "Product Manager", company: "Product Inc" },
];

const DETAILS: &[(u32, ListingDetails)] = &[
    (
        1,
        ListingDetails {
            description: "Develop web applications",
            salary: "$100,000",
            location: "San Francisco",
        },
    ),
    (
        2,
        ListingDetails { description: "Analyze business data", salary: "$80,000", location: "New York" },
    ),
    (
        3,
        ListingDetails {
            description: "Manage product lifecycle",
            salary: "$120,000",
            location: "Seattle",
        },
    ),
];

/// All featured listings in display order.
#[must_use]
pub fn catalog() -> &'static [Listing] {
    CATALOG
}

#[must_use]
pub fn details(id: u32) -> Option<ListingDetails> {
    DETAILS.iter().find(|(key, _)| *key == id).map(|(_, d)| *d)
}

/// Look up a listing and attach its details. Unknown ids yield `None`.
#[must_use]
pub fn select(id: u32) -> Option<SelectedListing> {
    let listing = *CATALOG.iter().find(|l| l.id == id)?;
    Some(SelectedListing { listing, details: details(id) })
}
