//! Landing page for signed-out visitors.

use leptos::prelude::*;

use crate::components::job_list::JobList;
use crate::state::ui::UiState;

const HERO_IMAGE: &str = "https://images.pexels.com/photos/372787/pexels-photo-372787.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="home-page">
            <div class="home-page__hero">
                <div class="home-page__copy">
                    <h1 class="home-page__heading">"Find Your Dream Job Today"</h1>
                    <p class="home-page__subheading">
                        "Connect with top employers and discover exciting career opportunities."
                    </p>
                    <button
                        class="btn btn--large"
                        on:click=move |_| ui.update(UiState::open_registration)
                    >
                        "Get Started"
                    </button>
                </div>
                <div class="home-page__art">
                    <img class="home-page__image" src=HERO_IMAGE alt="Job Search Illustration"/>
                </div>
            </div>
            <JobList/>
        </div>
    }
}
