use sea_orm::{DatabaseConnection, EntityTrait};

use crate::errors::ServiceError;
use models::brand;

/// Create a new brand. Duplicate names are permitted.
pub async fn create_brand(
    db: &DatabaseConnection,
    name: &str,
    country_of_origin: &str,
    founding_year: i32,
) -> Result<brand::Model, ServiceError> {
    let created = brand::create(db, name, country_of_origin, founding_year).await?;
    Ok(created)
}

/// Get a brand by id.
pub async fn get_brand(db: &DatabaseConnection, id: i32) -> Result<Option<brand::Model>, ServiceError> {
    let found = brand::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(found)
}
