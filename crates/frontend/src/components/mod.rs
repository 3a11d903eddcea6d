pub mod address_fields;
pub mod contact_fields;
pub mod items_grid;
pub mod map_view;
pub mod page_header;
