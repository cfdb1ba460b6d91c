use dioxus::prelude::*;
use crate::routes::Route;
use crate::views::{ Footer, Header };

/// Root composition: header, routed page content, footer.
#[component]
pub fn Shell() -> Element {
    rsx! {
        main {
            class: "font-normal",
            Header {}
            Outlet::<Route> {}
            Footer {}
        }
    }
}
