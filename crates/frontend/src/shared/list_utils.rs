/// Search box shared by the POS product search and the analysis table filter
use contracts::shared::config::SEARCH_DEBOUNCE_MS;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Text input that reports its value only after the user stops typing.
///
/// A pending report is cancelled by every keystroke; clearing reports the
/// empty string immediately.
#[component]
pub fn SearchInput(
    /// Callback receiving the settled value
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
    /// DOM id, so keyboard shortcuts can focus the field
    #[prop(optional, into)]
    input_id: String,
    /// Value shown on first render
    #[prop(optional, into)]
    initial: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(initial);

    // Dropping the pending Timeout cancels it
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            on_change.run(new_value);
        });
        pending.set_value(Some(timeout));
    };

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                id=input_id
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    handle_input_change(event_target_value(&ev));
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button class="search-input__clear" on:click=clear_filter title="Clear">
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
