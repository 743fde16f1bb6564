//! Talent check handler
//!
//! Validates raw form input against a talent's factor weights and returns
//! the computed effective value.

use axum::extract::{Path, RawQuery, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::app;
use crate::domain::CalculationInputs;
use crate::error::AppError;
use crate::i18n::Lang;
use crate::AppState;

/// Request body for POST /api/talents/:id/check
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub inputs: CalculationInputs,
}

/// Response body with the computed value.
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    #[serde(rename = "talentId")]
    pub talent_id: String,
    #[serde(rename = "effectiveValue")]
    pub effective_value: f64,
}

/// POST /api/talents/:id/check
///
/// Coerces the five raw inputs (validation messages follow `lang`) and
/// applies the talent's factor weights to them.
pub async fn check_talent(
    State(state): State<AppState>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
    Json(body): Json<CheckRequest>,
) -> Result<Json<CheckResponse>, AppError> {
    let lang = lang_from_query(query.as_deref());

    let talent = state
        .talents
        .find_talent(&id)
        .ok_or_else(|| AppError::NotFound(format!("Talent {} not found", id)))?;

    let values = app::coerce_inputs(&body.inputs, lang).map_err(AppError::Validation)?;

    Ok(Json(CheckResponse {
        talent_id: talent.id.clone(),
        effective_value: app::effective_value(talent, &values),
    }))
}

fn lang_from_query(query: Option<&str>) -> Lang {
    let value = query.and_then(|q| {
        q.split('&')
            .find_map(|pair| pair.strip_prefix("lang="))
    });
    Lang::from_param(value)
}
