pub mod header;
pub mod notification_service;

use leptos::prelude::*;

pub use notification_service::{
    use_notifications, NotificationHost, NotificationKind, NotificationService,
};

/// Page chrome shared by the POS and the reports.
///
/// ```text
/// +------------------------------------------+
/// |              Header                      |
/// +------------------------------------------+
/// |              Page content                |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />

            <div class="app-body">
                <main class="app-main">
                    {children()}
                </main>
            </div>

            // Toasts float above the page
            <NotificationHost />
        </div>
    }
}
