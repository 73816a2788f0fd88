pub mod create_event_form;
pub mod event_card;
pub mod location_search;
pub mod map_component;
pub mod marker_layer;
pub mod navigation;
pub mod popup;
pub mod route_overlay;
