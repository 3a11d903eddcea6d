use dioxus::prelude::*;

use crate::Route;

const LOGO: Asset = asset!("/assets/logo.svg");

#[component]
pub fn Home() -> Element {
    rsx! {
        div { id: "page-home",
            div { class: "content",
                header {
                    img { src: LOGO, alt: "Ecoleta" }
                }
                main {
                    h1 { "Seu marketplace de coleta de resíduos." }
                    p { "Ajudamos pessoas a encontrarem pontos de coleta de forma eficiente." }
                    Link { to: Route::CreatePoint {},
                        span { "+" }
                        strong { "Cadastre um ponto de coleta" }
                    }
                }
            }
        }
    }
}
