use crate::utils::use_theme;
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let theme = use_theme();

    rsx! {
        footer {
            class: if theme.read().is_dark {
                "bg-dark-primary text-gray-300 py-6 mt-8 transition-colors duration-200"
            } else {
                "bg-gray-100 text-gray-600 py-6 mt-8 transition-colors duration-200"
            },
            div {
                class: "container mx-auto px-4 flex justify-between items-center",
                span { "StayEasy" }
                span { class: "text-sm", "Discover the best hotel rooms" }
            }
        }
    }
}
