pub mod config;
pub mod coordinate;
pub mod event;
pub mod geocoding;
pub mod geodesy;
pub mod geolocation;
pub mod interest;
pub mod lifecycle;
pub mod markup;
pub mod routing;
pub mod search;
