use crate::utils::use_theme;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    let theme = use_theme();

    rsx! {
        div {
            class: "container mx-auto p-4",
            h1 {
                class: if theme.read().is_dark {
                    "text-2xl font-bold mb-4 text-white"
                } else {
                    "text-2xl font-bold mb-4"
                },
                "Welcome to StayEasy"
            }
            p {
                class: if theme.read().is_dark {
                    "text-gray-300"
                } else {
                    "text-gray-600"
                },
                "Browse our rooms and find the perfect place to stay."
            }
        }
    }
}
