use std::collections::BTreeSet;

use crate::geo::{self, LatLng};
use crate::models::{CreatePointRequest, UNSELECTED};

/// Free-text contact fields, addressed by their input `name` attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
}

impl ContactFields {
    /// Replace the field called `field`, leaving the others untouched.
    /// Returns `false` for names that are not contact fields.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "whatsapp" => &mut self.whatsapp,
            _ => return false,
        };
        *slot = value.into();
        true
    }
}

/// Identifiers of the item categories the point accepts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectedItems(BTreeSet<u32>);

impl SelectedItems {
    /// Add `id` if absent, remove it if present. Returns whether it is now selected.
    pub fn toggle(&mut self, id: u32) -> bool {
        if self.0.remove(&id) {
            false
        } else {
            self.0.insert(id);
            true
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.0.contains(&id)
    }

    pub fn to_vec(&self) -> Vec<u32> {
        self.0.iter().copied().collect()
    }
}

/// Everything the create-point page accumulates before submission.
#[derive(Debug, Clone, PartialEq)]
pub struct PointForm {
    pub contact: ContactFields,
    pub uf: String,
    pub city: String,
    /// Where the map is centred. Only the device position moves it.
    pub initial_position: LatLng,
    /// Where the marker sits, i.e. the coordinate that gets submitted.
    pub selected_position: LatLng,
    pub selected_items: SelectedItems,
}

impl Default for PointForm {
    fn default() -> Self {
        PointForm {
            contact: ContactFields::default(),
            uf: UNSELECTED.to_string(),
            city: UNSELECTED.to_string(),
            initial_position: LatLng::default(),
            selected_position: LatLng::default(),
            selected_items: SelectedItems::default(),
        }
    }
}

impl PointForm {
    pub fn select_region(&mut self, uf: impl Into<String>) {
        self.uf = uf.into();
    }

    pub fn select_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }

    pub fn update_field(&mut self, field: &str, value: impl Into<String>) -> bool {
        self.contact.set(field, value)
    }

    pub fn toggle_item(&mut self, id: u32) -> bool {
        self.selected_items.toggle(id)
    }

    pub fn set_marker_position(&mut self, latitude: f64, longitude: f64) {
        self.selected_position = LatLng::new(latitude, longitude);
    }

    /// The device reported where it is: centre the map there and drop the marker on it.
    pub fn apply_current_position(&mut self, latitude: f64, longitude: f64) {
        let here = LatLng::new(latitude, longitude);
        self.initial_position = here;
        self.selected_position = here;
    }

    /// Assemble the `POST /points` body. Nothing is validated; an untouched
    /// form yields empty strings, sentinel selections and `(0, 0)`.
    pub fn payload(&self) -> CreatePointRequest {
        CreatePointRequest {
            name: self.contact.name.clone(),
            email: self.contact.email.clone(),
            whatsapp: self.contact.whatsapp.clone(),
            uf: self.uf.clone(),
            city: self.city.clone(),
            latitude: self.selected_position.latitude,
            longitude: self.selected_position.longitude,
            items: self.selected_items.to_vec(),
        }
    }
}

/// One `<option>` of a selector.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Options for a region or city selector: the sentinel placeholder first, then
/// one option per value, labelled by the value itself.
pub fn select_options(placeholder: &str, values: &[String]) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        value: UNSELECTED.to_string(),
        label: placeholder.to_string(),
    })
    .chain(values.iter().map(|v| SelectOption {
        value: v.clone(),
        label: v.clone(),
    }))
    .collect()
}

/// Decides when the city list has to be fetched again and holds the last
/// list that arrived.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityLoader {
    last_uf: Option<String>,
    cities: Vec<String>,
}

impl CityLoader {
    /// Record that the selected region is now `uf`. Returns the URL to fetch
    /// when `uf` differs from the previous region and is not the sentinel.
    pub fn request_for(&mut self, uf: &str) -> Option<String> {
        if self.last_uf.as_deref() == Some(uf) {
            return None;
        }
        self.last_uf = Some(uf.to_string());
        geo::cities_url(uf)
    }

    /// Store a fetched list. Answers for a region that is no longer selected
    /// are dropped and `false` is returned.
    pub fn receive(&mut self, uf: &str, cities: Vec<String>) -> bool {
        if self.last_uf.as_deref() != Some(uf) {
            return false;
        }
        self.cities = cities;
        true
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }
}
