use dioxus::prelude::*;

use crate::Route;

const LOGO: Asset = asset!("/assets/logo.svg");

#[component]
pub fn PageHeader() -> Element {
    rsx! {
        header {
            img { src: LOGO, alt: "Ecoleta" }
            Link { to: Route::Home {},
                span { class: "back-arrow", "←" }
                "Voltar para Home"
            }
        }
    }
}
