use crate::layout::NotificationService;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Toasts are shared by every page
    provide_context(NotificationService::new());

    view! {
        <AppRoutes />
    }
}
