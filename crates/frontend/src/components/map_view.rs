use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing;
use dioxus::prelude::*;
use ecoleta_shared::geo::LatLng;

use crate::leaflet::PointMap;

const MAP_CONTAINER_ID: &str = "point-map-container";

/// Leaflet map with a single marker.
///
/// The map is created once the container is mounted and torn down with the
/// component. `center` re-centres the view; `marker` only moves the marker.
#[component]
pub fn MapView(center: Memo<LatLng>, marker: Memo<LatLng>, on_pick: EventHandler<LatLng>) -> Element {
    // Held outside the signal system so teardown does not depend on signal lifetimes.
    let map = use_hook(|| Rc::new(RefCell::new(None::<PointMap>)));
    // Written from the Leaflet click callback, forwarded to `on_pick` inside the runtime.
    let mut picked = use_signal(|| None::<LatLng>);

    // Before mount these find no map; `PointMap::mount` starts from the current values.
    let for_center = map.clone();
    use_effect(move || {
        let c = *center.read();
        if let Some(m) = for_center.borrow().as_ref() {
            m.recenter(c);
        }
    });

    let for_marker = map.clone();
    use_effect(move || {
        let p = *marker.read();
        if let Some(m) = for_marker.borrow().as_ref() {
            m.move_marker(p);
        }
    });

    use_effect(move || {
        if let Some(at) = *picked.read() {
            on_pick.call(at);
        }
    });

    let for_drop = map.clone();
    use_drop(move || {
        if let Some(m) = for_drop.borrow_mut().take() {
            m.destroy();
        }
    });

    rsx! {
        div {
            id: MAP_CONTAINER_ID,
            class: "map",
            onmounted: move |_| {
                if map.borrow().is_some() {
                    return;
                }
                let mounted = PointMap::mount(
                    MAP_CONTAINER_ID,
                    *center.peek(),
                    *marker.peek(),
                    move |at| picked.set(Some(at)),
                );
                match mounted {
                    Ok(m) => *map.borrow_mut() = Some(m),
                    Err(e) => tracing::warn!("Failed to create map: {:?}", e),
                }
            },
        }
    }
}
