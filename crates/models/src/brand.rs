use chrono::{Datelike, Utc};
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "brand")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub country_of_origin: String,
    pub founding_year: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Motorcycle,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Motorcycle => Entity::has_many(super::motorcycle::Entity).into(),
        }
    }
}

impl Related<super::motorcycle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Motorcycle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name required".into()));
    }
    if name.chars().count() > 50 {
        return Err(errors::ModelError::Validation("name must be at most 50 characters".into()));
    }
    Ok(())
}

pub fn validate_country_of_origin(country: &str) -> Result<(), errors::ModelError> {
    if country.trim().is_empty() {
        return Err(errors::ModelError::Validation("country_of_origin required".into()));
    }
    if country.chars().count() > 30 {
        return Err(errors::ModelError::Validation("country_of_origin must be at most 30 characters".into()));
    }
    Ok(())
}

pub fn validate_founding_year(year: i32) -> Result<(), errors::ModelError> {
    let current = Utc::now().year();
    if year < 1800 || year > current {
        return Err(errors::ModelError::Validation(format!(
            "founding_year must be between 1800 and {current}"
        )));
    }
    Ok(())
}

/// Insert a brand after validating its fields. Duplicate names are permitted.
pub async fn create(
    db: &DatabaseConnection,
    name: &str,
    country_of_origin: &str,
    founding_year: i32,
) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    validate_country_of_origin(country_of_origin)?;
    validate_founding_year(founding_year)?;

    let am = ActiveModel {
        name: Set(name.to_string()),
        country_of_origin: Set(country_of_origin.to_string()),
        founding_year: Set(founding_year),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
