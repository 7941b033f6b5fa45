use dioxus::prelude::*;

/// Destructive action button for use inside a modal body
#[component]
pub fn ConfirmButton(
    label: String,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        button {
            class: "px-4 py-2 bg-destructive text-destructive-foreground rounded-lg hover:bg-destructive/90 transition",
            r#type: "button",
            onclick: move |_| on_confirm.call(()),
            "{label}"
        }
    }
}
