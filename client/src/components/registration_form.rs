//! New-account form.

#[cfg(test)]
#[path = "registration_form_test.rs"]
mod registration_form_test;

use leptos::prelude::*;
use portal::{Account, Role, SessionStore};

/// Role picked from the `<select>`, keeping `current` for unknown values.
fn parse_role_choice(value: &str, current: Role) -> Role {
    value.parse().unwrap_or(current)
}

/// Registration form. Submitting always adds the account; it does not sign
/// the user in.
#[component]
pub fn RegistrationForm(on_registered: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<SessionStore>>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let account = Account::new(
            name.get_untracked(),
            email.get_untracked(),
            password.get_untracked(),
            role.get_untracked(),
        );
        auth.update(|store| store.register(account));
        on_registered.run(());
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h2>"Register"</h2>
            <input
                class="auth-form__input"
                type="text"
                placeholder="Name"
                required=true
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
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
            <select
                class="auth-form__input"
                on:change=move |ev| {
                    let next = parse_role_choice(&event_target_value(&ev), role.get_untracked());
                    role.set(next);
                }
            >
                {Role::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <option value=option.as_str() selected=move || role.get() == option>
                                {option.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <button class="btn" type="submit">"Register"</button>
        </form>
    }
}
