use axum::{extract::State, http::StatusCode, response::Json};

use crate::{
    dto::ErrorResponse, handlers::error_response, models::settings::AppSettings,
    services::settings::SettingsService, AppState,
};

/// Current application settings, with hardcoded defaults when none are
/// stored. Booleans come back as real JSON booleans.
pub async fn get_app_settings(
    State(state): State<AppState>,
) -> Result<Json<AppSettings>, (StatusCode, Json<ErrorResponse>)> {
    match SettingsService::get_app_settings(&state.db).await {
        Ok(settings) => Ok(Json(settings)),
        Err(e) => Err(error_response(e)),
    }
}

/// Merge the submitted settings over the stored ones and persist. The
/// rewrite is not atomic; see `SettingsService::update_app_settings`.
pub async fn update_app_settings(
    State(state): State<AppState>,
    Json(incoming): Json<AppSettings>,
) -> Result<Json<AppSettings>, (StatusCode, Json<ErrorResponse>)> {
    match SettingsService::update_app_settings(&state.db, incoming).await {
        Ok(settings) => Ok(Json(settings)),
        Err(e) => Err(error_response(e)),
    }
}
