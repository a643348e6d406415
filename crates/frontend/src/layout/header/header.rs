use crate::shared::icons::icon;
use contracts::shared::config::APP_NAME;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">{APP_NAME}</span>
                <nav class="header__nav">
                    <A href="/billing/pos/" attr:class="header__link">
                        {icon("cart")}
                        <span>"POS"</span>
                    </A>
                    <A href="/reports/profit-analysis/" attr:class="header__link">
                        {icon("chart")}
                        <span>"Profit Analysis"</span>
                    </A>
                </nav>
            </div>
        </header>
    }
}
