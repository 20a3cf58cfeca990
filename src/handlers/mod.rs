//! HTTP handlers for the landing page and cafe CRUD.

pub mod cafe;
pub mod home;
pub use cafe::*;
pub use home::home;
