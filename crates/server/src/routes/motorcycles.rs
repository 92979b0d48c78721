use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::JsonApiError;
use crate::routes::brands::BrandResponse;
use crate::routes::AppState;
use models::motorcycle;
use service::motorcycle_service::{self, MotorcycleUpdate, NewMotorcycle};
use service::pagination::{Page, MAX_LIMIT};

#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateMotorcycleInput {
    #[serde(rename = "modelo")]
    pub model: String,
    #[serde(rename = "cilindrada")]
    pub displacement_cc: i32,
    #[serde(rename = "potencia")]
    pub power_hp: i32,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "anio")]
    pub year: i32,
    #[serde(rename = "marca_id")]
    pub brand_id: i32,
}

/// Patch payload; absent fields leave the stored values unchanged.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct UpdateMotorcycleInput {
    #[serde(rename = "modelo")]
    pub model: Option<String>,
    #[serde(rename = "cilindrada")]
    pub displacement_cc: Option<i32>,
    #[serde(rename = "potencia")]
    pub power_hp: Option<i32>,
    #[serde(rename = "precio")]
    pub price: Option<f64>,
    #[serde(rename = "anio")]
    pub year: Option<i32>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListQuery {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
    pub marca_id: Option<i32>,
    /// Accepted for compatibility with existing clients; there is no
    /// backing column, so the value is ignored.
    pub tipo: Option<String>,
}

fn default_limit() -> u64 {
    MAX_LIMIT
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MotorcycleResponse {
    pub id: i32,
    #[serde(rename = "modelo")]
    pub model: String,
    #[serde(rename = "cilindrada")]
    pub displacement_cc: i32,
    #[serde(rename = "potencia")]
    pub power_hp: i32,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "anio")]
    pub year: i32,
    #[serde(rename = "marca_id")]
    pub brand_id: i32,
}

impl From<motorcycle::Model> for MotorcycleResponse {
    fn from(m: motorcycle::Model) -> Self {
        Self {
            id: m.id,
            model: m.model,
            displacement_cc: m.displacement_cc,
            power_hp: m.power_hp,
            price: m.price,
            year: m.year,
            brand_id: m.brand_id,
        }
    }
}

/// Motorcycle joined with its brand, for the single-item read.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MotorcycleWithBrandResponse {
    #[serde(flatten)]
    pub motorcycle: MotorcycleResponse,
    #[serde(rename = "marca")]
    pub brand: Option<BrandResponse>,
}

#[utoipa::path(
    post, path = "/motos/", tag = "motos",
    request_body = CreateMotorcycleInput,
    responses(
        (status = 200, description = "Created", body = MotorcycleResponse),
        (status = 404, description = "Brand Not Found"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMotorcycleInput>,
) -> Result<Json<MotorcycleResponse>, JsonApiError> {
    let created = motorcycle_service::create_motorcycle(
        &state.db,
        NewMotorcycle {
            model: input.model,
            displacement_cc: input.displacement_cc,
            power_hp: input.power_hp,
            price: input.price,
            year: input.year,
            brand_id: input.brand_id,
        },
    )
    .await?;
    info!(id = created.id, model = %created.model, brand_id = created.brand_id, "created motorcycle");
    Ok(Json(created.into()))
}

#[utoipa::path(
    get, path = "/motos/", tag = "motos",
    params(ListQuery),
    responses((status = 200, description = "List OK", body = [MotorcycleResponse]))
)]
pub async fn list(
    State(state): State<AppState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<MotorcycleResponse>>, JsonApiError> {
    let page = Page { skip: q.skip, limit: q.limit };
    let rows = motorcycle_service::list_motorcycles(&state.db, page, q.marca_id).await?;
    info!(count = rows.len(), "list motorcycles");
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get, path = "/motos/{id}", tag = "motos",
    params(("id" = i32, Path, description = "Motorcycle ID")),
    responses(
        (status = 200, description = "OK", body = MotorcycleWithBrandResponse),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MotorcycleWithBrandResponse>, JsonApiError> {
    let found = motorcycle_service::get_motorcycle_with_brand(&state.db, id)
        .await?
        .ok_or_else(|| service::errors::ServiceError::not_found("motorcycle", id))?;
    let (moto, brand) = found;
    Ok(Json(MotorcycleWithBrandResponse {
        motorcycle: moto.into(),
        brand: brand.map(Into::into),
    }))
}

#[utoipa::path(
    patch, path = "/motos/{id}", tag = "motos",
    params(("id" = i32, Path, description = "Motorcycle ID")),
    request_body = UpdateMotorcycleInput,
    responses(
        (status = 200, description = "Updated", body = MotorcycleResponse),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateMotorcycleInput>,
) -> Result<Json<MotorcycleResponse>, JsonApiError> {
    let updated = motorcycle_service::update_motorcycle(
        &state.db,
        id,
        MotorcycleUpdate {
            model: input.model,
            displacement_cc: input.displacement_cc,
            power_hp: input.power_hp,
            price: input.price,
            year: input.year,
        },
    )
    .await?;
    info!(id = updated.id, "updated motorcycle");
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete, path = "/motos/{id}", tag = "motos",
    params(("id" = i32, Path, description = "Motorcycle ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    let deleted = motorcycle_service::delete_motorcycle(&state.db, id).await?;
    if !deleted {
        return Err(service::errors::ServiceError::not_found("motorcycle", id).into());
    }
    info!(id, "deleted motorcycle");
    Ok(Json(serde_json::json!({"ok": true})))
}
