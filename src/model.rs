//! Cafe record and typed request decoding.

use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// One row of the `cafe` table. Serializes every column by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Cafe {
    pub id: i64,
    pub name: String,
    pub map_url: Option<String>,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

/// Field values for an insert. The store assigns `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCafe {
    pub name: String,
    pub map_url: Option<String>,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

/// Form body of `POST /add`. Every key is optional until `into_new_cafe` checks presence.
#[derive(Debug, Default)]
pub struct AddCafeForm {
    pub name: Option<String>,
    pub map_url: Option<String>,
    pub img_url: Option<String>,
    pub loc: Option<String>,
    pub seats: Option<String>,
    pub toilet: Option<String>,
    pub wifi: Option<String>,
    pub sockets: Option<String>,
    pub calls: Option<String>,
    pub price: Option<String>,
}

/// Boolean form fields are true iff the key was submitted with a non-empty value.
///
/// The value itself is never parsed: `"false"`, `"0"` and `"no"` are all true.
/// Clients rely on this, so it must not be "fixed" into literal parsing.
pub fn form_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// First value submitted for `key`. Later repeats of a key are ignored.
pub fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    value.ok_or_else(|| AppError::BadRequest(format!("missing field: {}", field)))
}

impl AddCafeForm {
    /// Build from decoded form fields, urlencoded or multipart. Unknown keys are ignored.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let get = |key: &str| first_value(pairs, key);
        Self {
            name: get("name"),
            map_url: get("map_url"),
            img_url: get("img_url"),
            loc: get("loc"),
            seats: get("seats"),
            toilet: get("toilet"),
            wifi: get("wifi"),
            sockets: get("sockets"),
            calls: get("calls"),
            price: get("price"),
        }
    }

    pub fn into_new_cafe(self) -> Result<NewCafe, AppError> {
        Ok(NewCafe {
            has_toilet: form_flag(self.toilet.as_deref()),
            has_wifi: form_flag(self.wifi.as_deref()),
            has_sockets: form_flag(self.sockets.as_deref()),
            can_take_calls: form_flag(self.calls.as_deref()),
            name: required(self.name, "name")?,
            map_url: self.map_url,
            img_url: required(self.img_url, "img_url")?,
            location: required(self.loc, "loc")?,
            seats: required(self.seats, "seats")?,
            coffee_price: self.price,
        })
    }
}

/// Query of `GET /search`.
#[derive(Debug)]
pub struct SearchParams {
    pub loc: Option<String>,
}

impl SearchParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            loc: first_value(pairs, "loc"),
        }
    }
}

/// Query of `PATCH /update/:id`. An absent `new_price` clears the price.
#[derive(Debug)]
pub struct UpdatePriceParams {
    pub new_price: Option<String>,
}

impl UpdatePriceParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            new_price: first_value(pairs, "new_price"),
        }
    }
}
