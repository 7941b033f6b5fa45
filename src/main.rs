#![allow(non_snake_case)]

use dioxus::prelude::*;
use overlay_modal::components::{ConfirmButton, Modal};

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting overlay modal demo");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut is_open = use_signal(|| false);
    let mut deleted = use_signal(|| 0u32);

    rsx! {
        div {
            class: "min-h-screen flex flex-col items-center justify-center gap-4",

            button {
                class: "px-4 py-2 rounded-lg border border-border hover:bg-accent transition",
                onclick: move |_| is_open.set(true),
                "Delete item"
            }

            p {
                class: "text-muted-foreground",
                "Deleted: {deleted}"
            }

            Modal {
                title: "Delete item",
                description: "This cannot be undone.",
                is_open: is_open(),
                on_close: move |_| is_open.set(false),
                ConfirmButton {
                    label: "Delete",
                    on_confirm: move |_| {
                        *deleted.write() += 1;
                        log::info!("Item deleted");
                        is_open.set(false);
                    },
                }
            }
        }
    }
}
