//! Application routes.

pub mod home;

pub use home::home;
