use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing;
use dioxus::prelude::*;
use ecoleta_shared::form::{CityLoader, PointForm};
use ecoleta_shared::geo::LatLng;
use ecoleta_shared::models::Item;

use crate::api;
use crate::components::address_fields::AddressFields;
use crate::components::contact_fields::ContactFields;
use crate::components::items_grid::ItemsGrid;
use crate::components::map_view::MapView;
use crate::components::page_header::PageHeader;
use crate::geolocation;
use crate::submit::{submit_point, BrowserSubmitter};

/// Registration form for a new collection point.
///
/// Every loader below is a resource owned by this component, so pending
/// requests are cancelled when the page goes away instead of writing into
/// dropped state.
#[component]
pub fn CreatePoint() -> Element {
    let mut form = use_signal(PointForm::default);
    let mut cities = use_signal(Vec::<String>::new);
    let navigator = use_navigator();

    // Data resources, loaded once
    let items_resource = use_resource(|| async {
        api::fetch_items()
            .await
            .inspect_err(|e| tracing::warn!("Failed to load item catalog: {e}"))
    });
    let ufs_resource = use_resource(|| async {
        api::fetch_ufs()
            .await
            .inspect_err(|e| tracing::warn!("Failed to load states: {e}"))
    });

    let _locate = use_resource(move || async move {
        match geolocation::current_position().await {
            Ok(here) => form
                .write()
                .apply_current_position(here.latitude, here.longitude),
            Err(e) => tracing::info!("Device position unavailable: {e}"),
        }
    });

    // Reload cities whenever the selected state changes. A restart drops the
    // request for the previous state. Returning to the placeholder keeps the
    // last list.
    let city_loader = use_hook(|| Rc::new(RefCell::new(CityLoader::default())));
    let selected_uf = use_memo(move || form.read().uf.clone());
    let _city_loader = use_resource(move || {
        let uf = selected_uf.read().clone();
        let loader = city_loader.clone();
        let request = loader.borrow_mut().request_for(&uf);
        async move {
            let Some(url) = request else {
                return;
            };
            match api::fetch_cities(&url).await {
                Ok(list) => {
                    let accepted = {
                        let mut loader = loader.borrow_mut();
                        loader.receive(&uf, list).then(|| loader.cities().to_vec())
                    };
                    if let Some(list) = accepted {
                        cities.set(list);
                    }
                }
                Err(e) => tracing::warn!("Failed to load cities for {uf}: {e}"),
            }
        }
    });

    let center = use_memo(move || form.read().initial_position);
    let marker = use_memo(move || form.read().selected_position);

    let items: Vec<Item> = match &*items_resource.read() {
        Some(Ok(i)) => i.clone(),
        _ => vec![],
    };
    let ufs: Vec<String> = match &*ufs_resource.read() {
        Some(Ok(u)) => u.clone(),
        _ => vec![],
    };

    rsx! {
        div { id: "page-create-point",
            PageHeader {}
            form {
                onsubmit: move |evt: Event<FormData>| {
                    evt.prevent_default();
                    let payload = form.read().payload();
                    spawn(async move {
                        let submitter = BrowserSubmitter { navigator };
                        // No feedback in the page; the form simply stays put.
                        if let Err(e) = submit_point(&submitter, payload).await {
                            tracing::warn!("Failed to create collection point: {e}");
                        }
                    });
                },
                h1 { "Cadastro do " br {} " ponto de coleta" }

                ContactFields { form }

                fieldset {
                    legend {
                        h2 { "Endereço" }
                        span { "Selecione o endereço no mapa" }
                    }
                    MapView {
                        center,
                        marker,
                        on_pick: move |at: LatLng| {
                            form.write().set_marker_position(at.latitude, at.longitude);
                        },
                    }
                    AddressFields { form, ufs, cities: cities.read().clone() }
                }

                ItemsGrid { form, items }

                button { r#type: "submit", "Cadastrar ponto de coleta" }
            }
        }
    }
}
