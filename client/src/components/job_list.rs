//! Featured listings grid with a details panel.
//!
//! DESIGN
//! ======
//! Listing data is static and lives in `portal::listings`; the only state here
//! is which listing is selected.

use leptos::prelude::*;
use portal::listings::{self, SelectedListing};

#[component]
pub fn JobList() -> impl IntoView {
    let selected = RwSignal::new(None::<SelectedListing>);

    view! {
        <section class="job-list">
            <h2>"Job Listings"</h2>
            <div class="job-list__items">
                {listings::catalog()
                    .iter()
                    .map(|listing| {
                        let id = listing.id;
                        view! {
                            <div
                                class="job-list__item"
                                class:job-list__item--selected=move || {
                                    selected.get().is_some_and(|s| s.listing.id == id)
                                }
                                on:click=move |_| selected.set(listings::select(id))
                            >
                                <h3>{listing.title}</h3>
                                <p>{listing.company}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            {move || selected.get().map(|s| view! { <ListingDetailsPanel selected=s/> })}
        </section>
    }
}

#[component]
fn ListingDetailsPanel(selected: SelectedListing) -> impl IntoView {
    view! {
        <div class="job-details">
            <h2>{selected.listing.title}</h2>
            <h3>{selected.listing.company}</h3>
            {selected
                .details
                .map(|d| {
                    view! {
                        <p><strong>"Description:"</strong>" "{d.description}</p>
                        <p><strong>"Salary:"</strong>" "{d.salary}</p>
                        <p><strong>"Location:"</strong>" "{d.location}</p>
                    }
                })}
        </div>
    }
}
