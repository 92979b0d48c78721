use sea_orm::{DatabaseConnection, EntityTrait};

use crate::errors::ServiceError;
use models::{motorcycle, specification};

/// Create a specification for a motorcycle.
///
/// Fails with NotFound when the motorcycle does not exist and with Conflict
/// when it already has a specification. The existence pre-check gives the
/// friendlier error; the unique constraint on `motorcycle_id` remains the
/// authoritative guard if two creates race.
pub async fn create_specification(
    db: &DatabaseConnection,
    motorcycle_id: i32,
    engine_type: &str,
    cooling_type: &str,
    transmission: i32,
    tank_capacity_liters: f64,
) -> Result<specification::Model, ServiceError> {
    let moto = motorcycle::Entity::find_by_id(motorcycle_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if moto.is_none() {
        return Err(ServiceError::not_found("motorcycle", motorcycle_id));
    }

    if specification::find_by_motorcycle(db, motorcycle_id).await?.is_some() {
        return Err(ServiceError::Conflict(format!(
            "motorcycle {motorcycle_id} already has a specification"
        )));
    }

    let created = specification::create(
        db,
        motorcycle_id,
        engine_type,
        cooling_type,
        transmission,
        tank_capacity_liters,
    )
    .await?;
    Ok(created)
}

/// Get the specification attached to a motorcycle, if any.
pub async fn get_for_motorcycle(
    db: &DatabaseConnection,
    motorcycle_id: i32,
) -> Result<Option<specification::Model>, ServiceError> {
    let found = specification::find_by_motorcycle(db, motorcycle_id).await?;
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motorcycle_service::{self, NewMotorcycle};
    use crate::test_support::{get_db, skip_db_tests};
    use models::brand;

    #[tokio::test]
    async fn second_specification_for_same_motorcycle_conflicts() -> Result<(), anyhow::Error> {
        if skip_db_tests() {
            return Ok(());
        }
        let db = get_db().await?;

        let b = brand::create(&db, "Honda", "Japan", 1948).await?;
        let m = motorcycle_service::create_motorcycle(
            &db,
            NewMotorcycle {
                model: "CB500".into(),
                displacement_cc: 500,
                power_hp: 47,
                price: 7000.0,
                year: 2023,
                brand_id: b.id,
            },
        )
        .await?;

        let s = create_specification(&db, m.id, "inline-4", "liquid", 6, 17.0).await?;
        assert!(s.id > 0);
        assert_eq!(s.motorcycle_id, m.id);

        let err = create_specification(&db, m.id, "v-twin", "air", 5, 12.0).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));

        let found = get_for_motorcycle(&db, m.id).await?.unwrap();
        assert_eq!(found.id, s.id);
        assert_eq!(found.engine_type, "inline-4");

        assert!(motorcycle_service::delete_motorcycle(&db, m.id).await?);
        brand::Entity::delete_by_id(b.id).exec(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn specification_for_missing_motorcycle_is_not_found() -> Result<(), anyhow::Error> {
        if skip_db_tests() {
            return Ok(());
        }
        let db = get_db().await?;

        let err = create_specification(&db, i32::MAX, "inline-4", "liquid", 6, 17.0)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }
}
