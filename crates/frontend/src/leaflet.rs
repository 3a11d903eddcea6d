//! Minimal bindings to the global Leaflet `L` object loaded from the CDN.
use ecoleta_shared::geo::{self, LatLng};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    pub type Map;
    pub type TileLayer;
    pub type Marker;
    pub type LeafletLatLng;
    pub type MouseEvent;

    #[wasm_bindgen(js_namespace = L, js_name = map, catch)]
    fn new_map(container_id: &str) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &Map, center: &JsValue, zoom: f64) -> Map;

    #[wasm_bindgen(method)]
    fn on(this: &Map, event: &str, handler: &js_sys::Function) -> Map;

    #[wasm_bindgen(method)]
    fn remove(this: &Map) -> Map;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn new_tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_layer_to(this: &TileLayer, map: &Map) -> TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn new_marker(position: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_marker_to(this: &Marker, map: &Map) -> Marker;

    #[wasm_bindgen(method, js_name = setLatLng)]
    fn set_lat_lng(this: &Marker, position: &JsValue) -> Marker;

    #[wasm_bindgen(method, getter)]
    fn latlng(this: &MouseEvent) -> LeafletLatLng;

    #[wasm_bindgen(method, getter)]
    fn lat(this: &LeafletLatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    fn lng(this: &LeafletLatLng) -> f64;
}

fn to_js(p: LatLng) -> JsValue {
    js_sys::Array::of2(&JsValue::from_f64(p.latitude), &JsValue::from_f64(p.longitude)).into()
}

/// A live Leaflet map with one marker. Dropping it does not remove the map;
/// call [`PointMap::destroy`] first.
pub struct PointMap {
    map: Map,
    marker: Marker,
    _on_click: Closure<dyn FnMut(MouseEvent)>,
}

impl PointMap {
    /// Mount a map into the element with `container_id`, centred on `center`
    /// with the marker at `marker`. Every map click is passed to `on_click`.
    /// Fails when Leaflet is not loaded or the container is missing.
    pub fn mount(
        container_id: &str,
        center: LatLng,
        marker: LatLng,
        mut on_click: impl FnMut(LatLng) + 'static,
    ) -> Result<Self, JsValue> {
        let map = new_map(container_id)?;
        map.set_view(&to_js(center), geo::MAP_ZOOM);

        let options = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &options,
            &JsValue::from_str("attribution"),
            &JsValue::from_str(geo::TILE_ATTRIBUTION),
        );
        new_tile_layer(geo::TILE_URL, &options).add_layer_to(&map);

        let marker = new_marker(&to_js(marker)).add_marker_to(&map);

        let handler = Closure::<dyn FnMut(MouseEvent)>::new(move |evt: MouseEvent| {
            let at = evt.latlng();
            on_click(LatLng::new(at.lat(), at.lng()));
        });
        map.on("click", handler.as_ref().unchecked_ref());

        Ok(PointMap {
            map,
            marker,
            _on_click: handler,
        })
    }

    pub fn recenter(&self, center: LatLng) {
        self.map.set_view(&to_js(center), geo::MAP_ZOOM);
    }

    pub fn move_marker(&self, position: LatLng) {
        self.marker.set_lat_lng(&to_js(position));
    }

    /// Tear down the Leaflet instance. The click closure is freed afterwards.
    pub fn destroy(self) {
        self.map.remove();
    }
}
