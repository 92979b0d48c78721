use utoipa::OpenApi;

use crate::routes::brands::{BrandResponse, CreateBrandInput};
use crate::routes::motorcycles::{
    CreateMotorcycleInput, MotorcycleResponse, MotorcycleWithBrandResponse, UpdateMotorcycleInput,
};
use crate::routes::specifications::{CreateSpecificationInput, SpecificationResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::brands::create,
        crate::routes::motorcycles::list,
        crate::routes::motorcycles::create,
        crate::routes::motorcycles::get,
        crate::routes::motorcycles::update,
        crate::routes::motorcycles::delete,
        crate::routes::specifications::create,
    ),
    components(
        schemas(
            CreateBrandInput,
            BrandResponse,
            CreateMotorcycleInput,
            UpdateMotorcycleInput,
            MotorcycleResponse,
            MotorcycleWithBrandResponse,
            CreateSpecificationInput,
            SpecificationResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "marcas"),
        (name = "motos"),
        (name = "especificaciones")
    )
)]
pub struct ApiDoc;
