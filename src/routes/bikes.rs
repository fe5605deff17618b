//! Bike list and selection routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Json, Redirect};
use axum_extra::extract::Form;
use client::net::types::{Bike, BikeList};
use serde::Deserialize;

use crate::services::bike::{BikeError, BikeRow};
use crate::state::AppState;

/// Body of the modal's form. Each checked box contributes one
/// `selected_bikes` value.
#[derive(Debug, Default, Deserialize)]
pub struct AddBikesForm {
    #[serde(default)]
    pub selected_bikes: Vec<i64>,
}

fn to_bike(row: BikeRow) -> Bike {
    Bike { id: row.id, name: row.name }
}

pub(crate) fn bike_error_to_status(err: BikeError) -> StatusCode {
    match err {
        BikeError::NotFound(_) => StatusCode::NOT_FOUND,
        BikeError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `GET /get_bikes` — list all bikes for the bike modal.
pub async fn get_bikes(State(state): State<AppState>) -> Result<Json<BikeList>, StatusCode> {
    let rows = state.bikes.list_bikes().await.map_err(|e| {
        tracing::error!(error = %e, "bike list failed");
        bike_error_to_status(e)
    })?;

    tracing::debug!(count = rows.len(), tracked = rows.iter().filter(|b| b.tracked).count(), "bike list served");
    Ok(Json(BikeList::new(rows.into_iter().map(to_bike).collect())))
}

/// `POST /add_bikes` — mark the selected bikes as tracked, then return to the
/// garage page.
pub async fn add_bikes(State(state): State<AppState>, Form(form): Form<AddBikesForm>) -> Result<Redirect, StatusCode> {
    if form.selected_bikes.is_empty() {
        return Ok(Redirect::to("/"));
    }

    let marked = state
        .bikes
        .mark_tracked(&form.selected_bikes)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, selected = ?form.selected_bikes, "add bikes failed");
            bike_error_to_status(e)
        })?;

    tracing::info!(marked, "bikes added");
    Ok(Redirect::to("/"))
}

#[cfg(test)]
#[path = "bikes_test.rs"]
mod tests;
