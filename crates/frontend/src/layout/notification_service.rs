use contracts::shared::config::NOTIFICATION_TIMEOUT_MS;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Error,
}

impl NotificationKind {
    fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification notification--success",
            NotificationKind::Info => "notification notification--info",
            NotificationKind::Error => "notification notification--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: u64,
    kind: NotificationKind,
    message: String,
}

/// Transient toasts; each one disappears on its own after a few seconds.
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn show(&self, kind: NotificationKind, message: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        let message = message.into();
        log::debug!("notification #{} ({:?}): {}", id, kind, message);
        self.items.update(|items| items.push(Notification { id, kind, message }));

        let items = self.items;
        spawn_local(async move {
            TimeoutFuture::new(NOTIFICATION_TIMEOUT_MS).await;
            items.try_update(|items| items.retain(|n| n.id != id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(NotificationKind::Success, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(NotificationKind::Info, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(NotificationKind::Error, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="notification-stack">
            <For
                each=move || service.items.get()
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    view! {
                        <div class=n.kind.class() on:click=move |_| service.dismiss(id)>
                            {n.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
