pub mod explore;
pub mod home;
pub mod not_found;
