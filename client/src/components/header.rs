//! Site header with navigation and session controls.

use leptos::prelude::*;
use portal::SessionStore;

use crate::app::BRAND;
use crate::state::auth::{shows_cv_tools, welcome_line};
use crate::state::ui::UiState;

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionStore>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_login = move |_| ui.update(UiState::open_login);
    let on_logout = move |_| auth.update(SessionStore::logout);

    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <h1 class="site-header__brand">{BRAND}</h1>
                <nav class="site-header__nav">
                    <button class="btn">"Home"</button>
                    <button class="btn">"Jobs"</button>
                    <Show when=move || auth.with(shows_cv_tools)>
                        <button class="btn">"CV Tools"</button>
                    </Show>
                    <Show
                        when=move || auth.with(SessionStore::is_signed_in)
                        fallback=move || view! { <button class="btn" on:click=on_login>"Login"</button> }
                    >
                        <span class="site-header__welcome">
                            {move || auth.with(welcome_line).unwrap_or_default()}
                        </span>
                        <button class="btn" on:click=on_logout>"Logout"</button>
                    </Show>
                </nav>
            </div>
        </header>
    }
}
