use crate::utils::use_theme;
use dioxus::prelude::*;
use crate:: {
    routes::Route,
};
const HEADER_CSS: Asset = asset!("/assets/styling/header.css");

#[component(no_case_check)]
pub fn Header() -> Element {
    let mut theme = use_theme();

    rsx! {
        div {
            document::Link { rel: "stylesheet", href: HEADER_CSS }

            nav {
                class: if theme.read().is_dark {
                    "bg-dark-primary shadow-lg transition-colors duration-200"
                } else {
                    "bg-white shadow-lg transition-colors duration-200"
                },
                div {
                    id: "header",
                    class: "container mx-auto px-4 py-3 flex justify-between items-center",
                    div {
                        class: "flex items-center space-x-6",
                        Link {
                            class: if theme.read().is_dark {
                                "text-white hover:text-primary transition-colors font-bold"
                            } else {
                                "text-gray-800 hover:text-primary transition-colors font-bold"
                            },
                            to: Route::Home,
                            "StayEasy"
                        }
                        Link {
                            class: if theme.read().is_dark {
                                "text-white hover:text-primary transition-colors"
                            } else {
                                "text-gray-800 hover:text-primary transition-colors"
                            },
                            to: Route::Home,
                            "Home"
                        }
                    }
                    button {
                        class: if theme.read().is_dark {
                            "p-2 rounded-lg bg-gray-700 hover:bg-gray-600 transition-colors"
                        } else {
                            "p-2 rounded-lg bg-gray-200 hover:bg-gray-300 transition-colors"
                        },
                        onclick: move |_| {
                            let next = theme.read().toggled();
                            next.save();
                            theme.set(next);
                        },
                        if theme.read().is_dark {
                            "🌞"
                        } else {
                            "🌙"
                        }
                    }
                }
            }
        }
    }
}
