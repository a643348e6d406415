use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Overlay with a titled surface and a close button.
///
/// Closes on a click that both starts and ends on the overlay, so selecting
/// text inside the surface and releasing outside keeps it open.
#[component]
pub fn ModalFrame(
    /// Called when the modal should close
    on_close: Callback<()>,
    #[prop(into)]
    title: Signal<String>,
    /// Extra class for the modal surface (`div.modal`).
    #[prop(optional)]
    modal_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    let close_deferred = move || {
        // Next tick: the overlay must not be removed during its own click dispatch
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_close.run(());
        });
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            close_deferred();
        }
    };

    let surface_class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=move |ev: ev::MouseEvent| overlay_mouse_down.set(is_direct_overlay_event(&ev))
            on:click=handle_overlay_click
        >
            <div class=surface_class on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal__header">
                    <h3 class="modal__title">{move || title.get()}</h3>
                    <button class="modal__close" title="Close" on:click=move |_| close_deferred()>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal__body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
