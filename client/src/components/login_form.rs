//! Email + password sign-in form.

use leptos::prelude::*;
use portal::SessionStore;

/// Sign-in form checked against the in-memory account list.
///
/// A rejected login keeps the form open and shows the error text under it.
#[component]
pub fn LoginForm(on_success: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionStore>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        match auth.try_update(|store| store.login(&email_value, &password_value).map(|_| ())) {
            Some(Ok(())) => {
                message.set(None);
                on_success.run(());
            }
            Some(Err(err)) => message.set(Some(err.to_string())),
            None => {}
        }
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h2>"Login"</h2>
            <input
                class="auth-form__input"
                type="email"
                placeholder="Email"
                required=true
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <input
                class="auth-form__input"
                type="password"
                placeholder="Password"
                required=true
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <button class="btn" type="submit">"Login"</button>
            <Show when=move || message.get().is_some()>
                <p class="form-message form-message--error">
                    {move || message.get().unwrap_or_default()}
                </p>
            </Show>
        </form>
    }
}
