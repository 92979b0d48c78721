use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::JsonApiError;
use crate::routes::AppState;
use models::specification;
use service::specification_service;

#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateSpecificationInput {
    #[serde(rename = "tipo_motor")]
    pub engine_type: String,
    #[serde(rename = "refrigeracion")]
    pub cooling_type: String,
    #[serde(rename = "transmision")]
    pub transmission: i32,
    #[serde(rename = "capacidad_tanque")]
    pub tank_capacity_liters: f64,
    #[serde(rename = "id_moto")]
    pub motorcycle_id: i32,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SpecificationResponse {
    pub id: i32,
    #[serde(rename = "tipo_motor")]
    pub engine_type: String,
    #[serde(rename = "refrigeracion")]
    pub cooling_type: String,
    #[serde(rename = "transmision")]
    pub transmission: i32,
    #[serde(rename = "capacidad_tanque")]
    pub tank_capacity_liters: f64,
    #[serde(rename = "id_moto")]
    pub motorcycle_id: i32,
}

impl From<specification::Model> for SpecificationResponse {
    fn from(m: specification::Model) -> Self {
        Self {
            id: m.id,
            engine_type: m.engine_type,
            cooling_type: m.cooling_type,
            transmission: m.transmission,
            tank_capacity_liters: m.tank_capacity_liters,
            motorcycle_id: m.motorcycle_id,
        }
    }
}

#[utoipa::path(
    post, path = "/especificaciones/", tag = "especificaciones",
    request_body = CreateSpecificationInput,
    responses(
        (status = 200, description = "Created", body = SpecificationResponse),
        (status = 400, description = "Motorcycle Already Has A Specification"),
        (status = 404, description = "Motorcycle Not Found"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSpecificationInput>,
) -> Result<Json<SpecificationResponse>, JsonApiError> {
    let created = specification_service::create_specification(
        &state.db,
        input.motorcycle_id,
        &input.engine_type,
        &input.cooling_type,
        input.transmission,
        input.tank_capacity_liters,
    )
    .await?;
    info!(id = created.id, motorcycle_id = created.motorcycle_id, "created specification");
    Ok(Json(created.into()))
}
