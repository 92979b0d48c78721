use sea_orm::{entity::prelude::*, DatabaseConnection, Set, SqlErr};
use serde::{Deserialize, Serialize};

use crate::{errors, motorcycle};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "specification")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub engine_type: String,
    pub cooling_type: String,
    pub transmission: i32,
    pub tank_capacity_liters: f64,
    #[sea_orm(unique)]
    pub motorcycle_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Motorcycle,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Motorcycle => Entity::belongs_to(motorcycle::Entity)
                .from(Column::MotorcycleId)
                .to(motorcycle::Column::Id)
                .into(),
        }
    }
}

impl Related<motorcycle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Motorcycle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_engine_type(engine_type: &str) -> Result<(), errors::ModelError> {
    if engine_type.trim().is_empty() {
        return Err(errors::ModelError::Validation("engine_type required".into()));
    }
    if engine_type.chars().count() > 30 {
        return Err(errors::ModelError::Validation("engine_type must be at most 30 characters".into()));
    }
    Ok(())
}

pub fn validate_cooling_type(cooling_type: &str) -> Result<(), errors::ModelError> {
    if cooling_type.trim().is_empty() {
        return Err(errors::ModelError::Validation("cooling_type required".into()));
    }
    if cooling_type.chars().count() > 20 {
        return Err(errors::ModelError::Validation("cooling_type must be at most 20 characters".into()));
    }
    Ok(())
}

pub fn validate_tank_capacity(liters: f64) -> Result<(), errors::ModelError> {
    if !liters.is_finite() || liters < 0.0 {
        return Err(errors::ModelError::Validation("tank_capacity_liters must be >= 0".into()));
    }
    Ok(())
}

/// Look up the specification attached to a motorcycle, if any.
pub async fn find_by_motorcycle(
    db: &DatabaseConnection,
    motorcycle_id: i32,
) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::MotorcycleId.eq(motorcycle_id))
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Insert a specification after validating its fields.
///
/// The unique constraint on `motorcycle_id` is the authoritative one-to-one
/// guard: two concurrent creates can both pass the service pre-check, and
/// the loser surfaces here as a unique violation mapped to `Conflict`.
pub async fn create(
    db: &DatabaseConnection,
    motorcycle_id: i32,
    engine_type: &str,
    cooling_type: &str,
    transmission: i32,
    tank_capacity_liters: f64,
) -> Result<Model, errors::ModelError> {
    validate_engine_type(engine_type)?;
    validate_cooling_type(cooling_type)?;
    validate_tank_capacity(tank_capacity_liters)?;

    let am = ActiveModel {
        engine_type: Set(engine_type.to_string()),
        cooling_type: Set(cooling_type.to_string()),
        transmission: Set(transmission),
        tank_capacity_liters: Set(tank_capacity_liters),
        motorcycle_id: Set(motorcycle_id),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => errors::ModelError::Conflict(format!(
            "motorcycle {motorcycle_id} already has a specification"
        )),
        _ => errors::ModelError::Db(e.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_type_length_is_bounded() {
        assert!(validate_engine_type("inline-4").is_ok());
        assert!(validate_engine_type("").is_err());
        assert!(validate_engine_type(&"v".repeat(31)).is_err());
    }

    #[test]
    fn cooling_type_length_is_bounded() {
        assert!(validate_cooling_type("liquid").is_ok());
        assert!(validate_cooling_type(&"a".repeat(21)).is_err());
    }

    #[test]
    fn tank_capacity_non_negative() {
        assert!(validate_tank_capacity(17.0).is_ok());
        assert!(validate_tank_capacity(-0.5).is_err());
    }
}
