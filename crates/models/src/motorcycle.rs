use chrono::{Datelike, Utc};
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::{brand, errors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "motorcycle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub model: String,
    pub displacement_cc: i32,
    pub power_hp: i32,
    pub price: f64,
    pub year: i32,
    pub brand_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Brand,
    Specification,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Brand => Entity::belongs_to(brand::Entity)
                .from(Column::BrandId)
                .to(brand::Column::Id)
                .into(),
            Relation::Specification => Entity::has_one(super::specification::Entity).into(),
        }
    }
}

impl Related<brand::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Brand.def()
    }
}

impl Related<super::specification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Specification.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_model(model: &str) -> Result<(), errors::ModelError> {
    if model.trim().is_empty() {
        return Err(errors::ModelError::Validation("model required".into()));
    }
    if model.chars().count() > 50 {
        return Err(errors::ModelError::Validation("model must be at most 50 characters".into()));
    }
    Ok(())
}

pub fn validate_displacement_cc(cc: i32) -> Result<(), errors::ModelError> {
    if !(50..=3000).contains(&cc) {
        return Err(errors::ModelError::Validation("displacement_cc must be between 50 and 3000".into()));
    }
    Ok(())
}

pub fn validate_power_hp(hp: i32) -> Result<(), errors::ModelError> {
    if !(5..=500).contains(&hp) {
        return Err(errors::ModelError::Validation("power_hp must be between 5 and 500".into()));
    }
    Ok(())
}

pub fn validate_price(price: f64) -> Result<(), errors::ModelError> {
    if !price.is_finite() || price < 0.0 {
        return Err(errors::ModelError::Validation("price must be >= 0".into()));
    }
    Ok(())
}

/// Model year may run one year ahead of the calendar.
pub fn validate_year(year: i32) -> Result<(), errors::ModelError> {
    let max = Utc::now().year() + 1;
    if year < 1900 || year > max {
        return Err(errors::ModelError::Validation(format!(
            "year must be between 1900 and {max}"
        )));
    }
    Ok(())
}

/// Insert a motorcycle after validating its fields. The caller is expected
/// to have checked that `brand_id` references an existing brand.
pub async fn create(
    db: &DatabaseConnection,
    brand_id: i32,
    model: &str,
    displacement_cc: i32,
    power_hp: i32,
    price: f64,
    year: i32,
) -> Result<Model, errors::ModelError> {
    validate_model(model)?;
    validate_displacement_cc(displacement_cc)?;
    validate_power_hp(power_hp)?;
    validate_price(price)?;
    validate_year(year)?;

    let am = ActiveModel {
        model: Set(model.to_string()),
        displacement_cc: Set(displacement_cc),
        power_hp: Set(power_hp),
        price: Set(price),
        year: Set(year),
        brand_id: Set(brand_id),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displacement_bounds() {
        assert!(validate_displacement_cc(500).is_ok());
        assert!(validate_displacement_cc(49).is_err());
        assert!(validate_displacement_cc(3001).is_err());
    }

    #[test]
    fn power_bounds() {
        assert!(validate_power_hp(47).is_ok());
        assert!(validate_power_hp(4).is_err());
        assert!(validate_power_hp(501).is_err());
    }

    #[test]
    fn price_must_be_non_negative() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(7000.0).is_ok());
        assert!(validate_price(-1.0).is_err());
        assert!(validate_price(f64::NAN).is_err());
    }

    #[test]
    fn year_allows_next_model_year() {
        let next = Utc::now().year() + 1;
        assert!(validate_year(next).is_ok());
        assert!(validate_year(next + 1).is_err());
        assert!(validate_year(1899).is_err());
    }
}
