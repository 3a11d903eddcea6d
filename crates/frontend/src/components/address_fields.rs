use dioxus::prelude::*;
use ecoleta_shared::form::{select_options, PointForm};

/// State (UF) and city selectors. Both lead with the "nothing selected" option.
#[component]
pub fn AddressFields(form: Signal<PointForm>, ufs: Vec<String>, cities: Vec<String>) -> Element {
    let current_uf = form.read().uf.clone();
    let current_city = form.read().city.clone();
    let uf_options = select_options("Selecione uma UF", &ufs);
    let city_options = select_options("Selecione uma cidade", &cities);

    rsx! {
        div { class: "field-group",
            div { class: "field",
                label { r#for: "uf", "Estado (UF)" }
                select {
                    name: "uf",
                    id: "uf",
                    value: "{current_uf}",
                    onchange: move |evt: Event<FormData>| {
                        form.write().select_region(evt.value());
                    },
                    for opt in uf_options {
                        option {
                            key: "{opt.value}",
                            value: "{opt.value}",
                            selected: current_uf == opt.value,
                            "{opt.label}"
                        }
                    }
                }
            }
            div { class: "field",
                label { r#for: "city", "Cidade" }
                select {
                    name: "city",
                    id: "city",
                    value: "{current_city}",
                    onchange: move |evt: Event<FormData>| {
                        form.write().select_city(evt.value());
                    },
                    for opt in city_options {
                        option {
                            key: "{opt.value}",
                            value: "{opt.value}",
                            selected: current_city == opt.value,
                            "{opt.label}"
                        }
                    }
                }
            }
        }
    }
}
