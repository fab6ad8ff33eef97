//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use portal::{Screen, SessionStore};

use crate::components::{
    footer::Footer, header::Header, login_form::LoginForm, modal::Modal,
    registration_form::RegistrationForm,
};
use crate::pages::{
    employer_dashboard::EmployerDashboard, home::HomePage, seeker_dashboard::JobSeekerDashboard,
};
use crate::state::ui::UiState;

/// Product name shown in the header and the document title.
pub const BRAND: &str = "Job Platform";

/// Root application component.
///
/// Owns the session store and modal state and provides both as context. The
/// main area is chosen from the session on every login/logout; dashboards
/// keep their own local state and lose it when they unmount.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(SessionStore::new());
    let ui = RwSignal::new(UiState::default());
    provide_context(auth);
    provide_context(ui);

    // Memoized so registrations do not remount the current dashboard.
    let screen = Memo::new(move |_| auth.with(|store| Screen::for_session(store.current())));

    let close_login = Callback::new(move |()| ui.update(UiState::close_login));
    let close_registration = Callback::new(move |()| ui.update(UiState::close_registration));

    view! {
        <Title text=BRAND/>

        <div class="app">
            <Header/>

            <main class="app__main">
                {move || match screen.get() {
                    Screen::Landing => view! { <HomePage/> }.into_any(),
                    Screen::EmployerDashboard => view! { <EmployerDashboard/> }.into_any(),
                    Screen::JobSeekerDashboard => view! { <JobSeekerDashboard/> }.into_any(),
                }}
            </main>

            <Footer/>

            <Modal open=Signal::derive(move || ui.get().login_open) on_close=close_login>
                <LoginForm on_success=close_login/>
                <p class="modal__switch">
                    "Don't have an account? "
                    <button
                        class="btn btn--link"
                        on:click=move |_| ui.update(UiState::switch_to_registration)
                    >
                        "Register"
                    </button>
                </p>
            </Modal>

            <Modal
                open=Signal::derive(move || ui.get().registration_open)
                on_close=close_registration
            >
                <RegistrationForm on_registered=close_registration/>
            </Modal>
        </div>
    }
}
