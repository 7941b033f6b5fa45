//! Styled dialog slots
//!
//! Thin wrappers over `dioxus_primitives::dialog` with the app's theme classes.
//! The primitive owns the backdrop, Escape handling, aria ids and conditional
//! rendering; these wrappers add styling, a header region and a close button.

use dioxus::prelude::*;
use dioxus_primitives::dialog::{
    self, DialogContentProps, DialogDescriptionProps, DialogRootProps, DialogTitleProps,
};

/// Dismiss handle shared from `DialogRoot` with the slots below it
#[derive(Clone, Copy)]
pub struct DialogDismiss(EventHandler<bool>);

impl DialogDismiss {
    /// Report a dismissal gesture to the owner of the dialog.
    pub fn dismiss(&self) {
        self.0.call(false);
    }
}

#[component]
pub fn DialogRoot(props: DialogRootProps) -> Element {
    use_context_provider(|| DialogDismiss(props.on_open_change));

    rsx! {
        dialog::DialogRoot {
            class: "fixed inset-0 bg-black/50 z-50 flex items-center justify-center p-4",
            id: props.id,
            is_modal: props.is_modal,
            open: props.open,
            default_open: props.default_open,
            on_open_change: props.on_open_change,
            attributes: props.attributes,
            {props.children}
        }
    }
}

/// Dialog surface. Always carries a close button in the top right corner.
#[component]
pub fn DialogContent(props: DialogContentProps) -> Element {
    rsx! {
        dialog::DialogContent {
            class: "relative bg-card border border-border rounded-xl max-w-lg w-full p-6 shadow-xl",
            id: props.id,
            attributes: props.attributes,
            {props.children}
            DialogClose {}
        }
    }
}

#[component]
pub fn DialogClose() -> Element {
    let handle = use_context::<DialogDismiss>();

    rsx! {
        button {
            class: "absolute top-4 right-4 p-1 rounded hover:bg-accent transition",
            r#type: "button",
            "aria-label": "Close dialog",
            onclick: move |_| handle.dismiss(),
            "\u{2715}"
        }
    }
}

#[component]
pub fn DialogHeader(children: Element) -> Element {
    rsx! {
        div {
            class: "flex flex-col gap-1.5 mb-4 pr-6",
            {children}
        }
    }
}

#[component]
pub fn DialogTitle(props: DialogTitleProps) -> Element {
    rsx! {
        dialog::DialogTitle {
            class: "text-lg font-bold",
            id: props.id,
            attributes: props.attributes,
            {props.children}
        }
    }
}

#[component]
pub fn DialogDescription(props: DialogDescriptionProps) -> Element {
    rsx! {
        dialog::DialogDescription {
            class: "text-sm text-muted-foreground",
            id: props.id,
            attributes: props.attributes,
            {props.children}
        }
    }
}
