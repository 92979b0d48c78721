use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

use crate::errors::ServiceError;
use crate::pagination::Page;
use models::{brand, motorcycle, specification};

/// Fields of a motorcycle create request.
#[derive(Clone, Debug)]
pub struct NewMotorcycle {
    pub model: String,
    pub displacement_cc: i32,
    pub power_hp: i32,
    pub price: f64,
    pub year: i32,
    pub brand_id: i32,
}

/// Partial update payload; `None` leaves the stored value unchanged.
/// `brand_id` is deliberately absent: a motorcycle cannot move brands.
#[derive(Clone, Debug, Default)]
pub struct MotorcycleUpdate {
    pub model: Option<String>,
    pub displacement_cc: Option<i32>,
    pub power_hp: Option<i32>,
    pub price: Option<f64>,
    pub year: Option<i32>,
}

impl MotorcycleUpdate {
    pub fn is_empty(&self) -> bool {
        self.model.is_none()
            && self.displacement_cc.is_none()
            && self.power_hp.is_none()
            && self.price.is_none()
            && self.year.is_none()
    }
}

/// Create a motorcycle. Fails with NotFound when the brand does not exist;
/// nothing is persisted in that case.
pub async fn create_motorcycle(
    db: &DatabaseConnection,
    input: NewMotorcycle,
) -> Result<motorcycle::Model, ServiceError> {
    let brand = brand::Entity::find_by_id(input.brand_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if brand.is_none() {
        return Err(ServiceError::not_found("brand", input.brand_id));
    }

    let created = motorcycle::create(
        db,
        input.brand_id,
        &input.model,
        input.displacement_cc,
        input.power_hp,
        input.price,
        input.year,
    )
    .await?;
    Ok(created)
}

/// List motorcycles, optionally filtered by brand. The limit is clamped to
/// 100 regardless of the requested value.
pub async fn list_motorcycles(
    db: &DatabaseConnection,
    page: Page,
    brand_id: Option<i32>,
) -> Result<Vec<motorcycle::Model>, ServiceError> {
    let (skip, limit) = page.normalize();
    let mut finder = motorcycle::Entity::find();
    if let Some(bid) = brand_id {
        finder = finder.filter(motorcycle::Column::BrandId.eq(bid));
    }
    let rows = finder
        .order_by_asc(motorcycle::Column::Id)
        .offset(skip)
        .limit(limit)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}

/// Get a motorcycle joined with its brand.
pub async fn get_motorcycle_with_brand(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<(motorcycle::Model, Option<brand::Model>)>, ServiceError> {
    let found = motorcycle::Entity::find_by_id(id)
        .find_also_related(brand::Entity)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(found)
}

/// Apply a partial update; only fields present in `changes` are touched.
pub async fn update_motorcycle(
    db: &DatabaseConnection,
    id: i32,
    changes: MotorcycleUpdate,
) -> Result<motorcycle::Model, ServiceError> {
    let existing = motorcycle::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("motorcycle", id))?;

    // An empty partial is a no-op; SeaORM treats an update without any
    // Set column as RecordNotUpdated, so answer with the stored row.
    if changes.is_empty() {
        return Ok(existing);
    }

    let mut am: motorcycle::ActiveModel = existing.into();
    if let Some(m) = changes.model {
        motorcycle::validate_model(&m)?;
        am.model = Set(m);
    }
    if let Some(cc) = changes.displacement_cc {
        motorcycle::validate_displacement_cc(cc)?;
        am.displacement_cc = Set(cc);
    }
    if let Some(hp) = changes.power_hp {
        motorcycle::validate_power_hp(hp)?;
        am.power_hp = Set(hp);
    }
    if let Some(p) = changes.price {
        motorcycle::validate_price(p)?;
        am.price = Set(p);
    }
    if let Some(y) = changes.year {
        motorcycle::validate_year(y)?;
        am.year = Set(y);
    }
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Delete a motorcycle and, in the same transaction, its specification
/// when one exists (the schema configures no automatic cascade). Returns
/// false when the motorcycle does not exist.
pub async fn delete_motorcycle(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let existing = motorcycle::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if existing.is_none() {
        return Ok(false);
    }

    // Both deletes commit together; a failure after the specification
    // delete must not leave the motorcycle behind without it.
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    if let Some(spec) = specification::Entity::find()
        .filter(specification::Column::MotorcycleId.eq(id))
        .one(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
    {
        specification::Entity::delete_by_id(spec.id)
            .exec(&txn)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
    }
    motorcycle::Entity::delete_by_id(id)
        .exec(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(true)
}
