//! Job seeker dashboard: search stub and CV builder tabs.

use leptos::prelude::*;

use crate::components::cv_builder::CvBuilder;
use crate::state::ui::SeekerTab;

/// Two-tab dashboard. Switching tabs only swaps the visible panel.
#[component]
pub fn JobSeekerDashboard() -> impl IntoView {
    let tab = RwSignal::new(SeekerTab::default());

    view! {
        <div class="seeker-dashboard">
            <div class="tabs">
                {SeekerTab::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <div
                                class="tabs__tab"
                                class:tabs__tab--active=move || tab.get() == option
                                on:click=move |_| tab.set(option)
                            >
                                {option.label()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            {move || match tab.get() {
                SeekerTab::Search => view! { <SearchPanel/> }.into_any(),
                SeekerTab::Cv => view! { <CvBuilder/> }.into_any(),
            }}
        </div>
    }
}

/// Search input and button are not wired to anything yet.
#[component]
fn SearchPanel() -> impl IntoView {
    view! {
        <div class="search-panel">
            <h2>"Job Search"</h2>
            <input class="search-panel__input" type="text" placeholder="Search for jobs"/>
            <button class="btn">"Search"</button>
            <h2>"Your Applications"</h2>
            <p>"No applications yet."</p>
        </div>
    }
}
