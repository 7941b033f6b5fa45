use dioxus::prelude::*;

use crate::components::dialog::{
    DialogContent, DialogDescription, DialogHeader, DialogRoot, DialogTitle,
};

/// Calls `on_close` when a dialog reports that it should no longer be open.
///
/// Reports of `true` are ignored: opening is owned by whoever passes `is_open`.
pub fn forward_open_change(open: bool, on_close: impl FnOnce()) {
    if !open {
        on_close();
    }
}

/// Overlay dialog with a title, description and optional body content.
///
/// Visibility is owned by the caller through `is_open`; the modal never hides
/// itself. Every dismissal gesture (backdrop click, Escape, close button) is
/// forwarded to `on_close` once, and the caller decides whether to flip
/// `is_open` on its next render.
#[component]
pub fn Modal(
    title: String,
    description: String,
    is_open: bool,
    on_close: EventHandler<()>,
    children: Option<Element>,
) -> Element {
    let dismissed_title = title.clone();
    let on_open_change = move |open: bool| {
        forward_open_change(open, || {
            log::debug!("Modal dismissed: {}", dismissed_title);
            on_close.call(());
        });
    };

    rsx! {
        DialogRoot {
            open: is_open,
            on_open_change,
            DialogContent {
                DialogHeader {
                    DialogTitle { "{title}" }
                    DialogDescription { "{description}" }
                }
                div {
                    class: "text-sm",
                    "data-slot": "modal-body",
                    {children}
                }
            }
        }
    }
}
