use dioxus::prelude::*;

/// Pulsing grey block shown while content is loading.
#[component]
pub fn Skeleton(#[props(default = "".to_string())] class: String) -> Element {
    rsx! {
        div {
            class: "skeleton {class}",
            aria_hidden: "true",
        }
    }
}
