use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::JsonApiError;
use crate::routes::AppState;
use models::brand;
use service::brand_service;

/// Brand create payload. Wire names are Spanish; storage names are English.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateBrandInput {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "pais_origen")]
    pub country_of_origin: String,
    #[serde(rename = "anio_fundacion")]
    pub founding_year: i32,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BrandResponse {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "pais_origen")]
    pub country_of_origin: String,
    #[serde(rename = "anio_fundacion")]
    pub founding_year: i32,
}

impl From<brand::Model> for BrandResponse {
    fn from(m: brand::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            country_of_origin: m.country_of_origin,
            founding_year: m.founding_year,
        }
    }
}

#[utoipa::path(
    post, path = "/marcas/", tag = "marcas",
    request_body = CreateBrandInput,
    responses(
        (status = 200, description = "Created", body = BrandResponse),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBrandInput>,
) -> Result<Json<BrandResponse>, JsonApiError> {
    let created =
        brand_service::create_brand(&state.db, &input.name, &input.country_of_origin, input.founding_year)
            .await?;
    info!(id = created.id, name = %created.name, "created brand");
    Ok(Json(created.into()))
}
