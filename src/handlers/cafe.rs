//! Cafe handlers: random, list, search, add, update price, delete.

use crate::error::AppError;
use crate::extractors::{ApiKey, CafeForm};
use crate::model::{SearchParams, UpdatePriceParams};
use crate::response::{cafe_many, cafe_one, success_message};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};

/// Raw query pairs in order; repeated keys are resolved by the param structs.
type QueryPairs = Query<Vec<(String, String)>>;

/// Path ids that are not integers cannot name a stored cafe.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::CafeNotFound(id_str.to_string()))
}

/// GET /random
pub async fn random(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let cafe = state.store.get_random().await?;
    Ok(cafe_one(cafe))
}

/// GET /all
pub async fn list_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let cafes = state.store.list_all().await?;
    Ok(cafe_many(cafes))
}

/// GET /search?loc=..
pub async fn search(
    State(state): State<AppState>,
    Query(pairs): QueryPairs,
) -> Result<impl IntoResponse, AppError> {
    let params = SearchParams::from_pairs(&pairs);
    let loc = params.loc.ok_or_else(|| AppError::NoMatches(String::new()))?;
    let cafes = state.store.find_by_location(&loc).await?;
    if cafes.is_empty() {
        return Err(AppError::NoMatches(loc));
    }
    Ok(cafe_one(cafes))
}

/// POST /add (urlencoded or multipart form)
pub async fn add(
    State(state): State<AppState>,
    CafeForm(form): CafeForm,
) -> Result<impl IntoResponse, AppError> {
    let new_cafe = form.into_new_cafe()?;
    let cafe = state.store.insert(&new_cafe).await?;
    tracing::info!(cafe_id = cafe.id, name = %cafe.name, "cafe added");
    Ok(success_message("success", "Successfully added the new cafe."))
}

/// PATCH /update/:id?new_price=..
pub async fn update_price(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Query(pairs): QueryPairs,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdatePriceParams::from_pairs(&pairs);
    let id = parse_id(&id_str)?;
    let cafe = state
        .store
        .update_price(id, params.new_price.as_deref())
        .await?;
    tracing::info!(cafe_id = cafe.id, price = ?cafe.coffee_price, "cafe price updated");
    Ok(success_message("success", "Successfully updated the price."))
}

/// DELETE /delete/:id?api_key=..
///
/// The key is checked before the store is touched.
pub async fn delete(
    State(state): State<AppState>,
    api_key: ApiKey,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !api_key.matches(&state.delete_key) {
        tracing::warn!(cafe_id = %id_str, "delete rejected: bad api key");
        return Err(AppError::Forbidden);
    }
    let id = parse_id(&id_str)?;
    state.store.delete(id).await?;
    tracing::info!(cafe_id = id, "cafe deleted");
    Ok(success_message(
        "Success",
        "Successfully deleted the cafe from the database.",
    ))
}
