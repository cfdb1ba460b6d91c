use dioxus::prelude::*;
use crate::views::{ Home, Shell };

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home,
}
