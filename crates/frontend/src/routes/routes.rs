use crate::dashboards::d400_profit_analysis::ui::ProfitAnalysisDashboard;
use crate::domain::a001_cart::ui::PosPage;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--custom">
            <h1 class="page__title">"Page not found"</h1>
            <a href="/billing/pos/">"Back to POS"</a>
        </div>
    }
}

/// Each page owns its own state; nothing is shared between routes.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/billing/pos") view=PosPage />
                    <Route path=path!("/reports/profit-analysis") view=ProfitAnalysisDashboard />
                </Routes>
            </Shell>
        </Router>
    }
}
