/// Page components for each route of the site

pub mod auth;
pub mod dashboard;
pub mod home;
pub mod marketing;
pub mod not_found;
