pub mod api_key;
pub mod cafe_form;

pub use api_key::ApiKey;
pub use cafe_form::CafeForm;
