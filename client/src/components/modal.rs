//! Generic overlay used for the login and registration forms.

use leptos::prelude::*;

/// Renders `children` over a dimmed backdrop while `open` is true.
///
/// Closing is entirely up to the caller: the close button only runs
/// `on_close`. There is no escape-key or backdrop-click handling.
#[component]
pub fn Modal(open: Signal<bool>, on_close: Callback<()>, children: ChildrenFn) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal__backdrop">
                <div class="modal" role="dialog">
                    <button class="modal__close" on:click=move |_| on_close.run(()) title="Close">
                        "X"
                    </button>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
