use dioxus::prelude::*;

/// Heading and one-line description for a page whose content lives elsewhere.
#[component]
pub fn PagePlaceholder(title: String, description: String) -> Element {
    rsx! {
        div {
            class: "page-placeholder",
            h2 { class: "page-placeholder-title", "{title}" }
            p { class: "page-placeholder-description", "{description}" }
        }
    }
}
