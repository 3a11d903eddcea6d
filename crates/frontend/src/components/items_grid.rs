use dioxus::prelude::*;
use ecoleta_shared::form::PointForm;
use ecoleta_shared::models::Item;

#[component]
fn ItemCard(item: Item, selected: bool, on_toggle: EventHandler<u32>) -> Element {
    let id = item.id;
    rsx! {
        li {
            class: if selected { "selected" } else { "" },
            onclick: move |_| on_toggle.call(id),
            img { src: "{item.image_url}", alt: "{item.title}" }
            span { "{item.title}" }
        }
    }
}

#[component]
pub fn ItemsGrid(form: Signal<PointForm>, items: Vec<Item>) -> Element {
    rsx! {
        fieldset {
            legend {
                h2 { "Ítens de coleta" }
                span { "Selecione um ou mais ítens abaixo" }
            }
            ul { class: "items-grid",
                for item in items.iter() {
                    ItemCard {
                        key: "{item.id}",
                        selected: form.read().selected_items.contains(item.id),
                        item: item.clone(),
                        on_toggle: move |id: u32| {
                            form.write().toggle_item(id);
                        },
                    }
                }
            }
        }
    }
}
