use async_trait::async_trait;
use chrono::Utc;
use models::dish::{self, Entity as DishEntity};
use models::errors::ModelError;
use sea_orm::{prelude::DateTimeWithTimeZone, ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use crate::dish::domain::{Dish, DishPatch, NewDish};
use crate::dish::repository::DishRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository over the `dish` table.
pub struct SeaOrmDishRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmDishRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn db_err(e: sea_orm::DbErr) -> ServiceError {
    ModelError::from_db(e).into()
}

fn active_from_new(id: Uuid, d: NewDish, now: DateTimeWithTimeZone) -> dish::ActiveModel {
    dish::ActiveModel {
        id: Set(id),
        name: Set(d.name),
        ingredients: Set(d.ingredients.into()),
        preparation_steps: Set(d.preparation_steps.into()),
        cooking_time: Set(d.cooking_time),
        origin: Set(d.origin),
        spice_level: Set(d.spice_level),
        servings: Set(d.servings),
        difficulty: Set(d.difficulty),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

#[async_trait]
impl DishRepository for SeaOrmDishRepository {
    async fn list_all(&self) -> Result<Vec<Dish>, ServiceError> {
        let rows = dish::list_ordered(&self.db).await?;
        Ok(rows.into_iter().map(Dish::from).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Dish>, ServiceError> {
        Ok(dish::find_by_name(&self.db, name).await?.map(Dish::from))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Dish>, ServiceError> {
        let found = DishEntity::find_by_id(id).one(&self.db).await.map_err(db_err)?;
        Ok(found.map(Dish::from))
    }

    async fn insert(&self, d: NewDish) -> Result<Dish, ServiceError> {
        let am = active_from_new(Uuid::new_v4(), d, Utc::now().into());
        let created = am.insert(&self.db).await.map_err(db_err)?;
        Ok(created.into())
    }

    async fn update_by_id(&self, id: Uuid, patch: DishPatch) -> Result<Option<Dish>, ServiceError> {
        let current = DishEntity::find_by_id(id).one(&self.db).await.map_err(db_err)?;
        let Some(existing) = current else { return Ok(None) };
        let mut am: dish::ActiveModel = existing.into();
        if let Some(v) = patch.name { am.name = Set(v); }
        if let Some(v) = patch.ingredients { am.ingredients = Set(v.into()); }
        if let Some(v) = patch.preparation_steps { am.preparation_steps = Set(v.into()); }
        if let Some(v) = patch.cooking_time { am.cooking_time = Set(v); }
        if let Some(v) = patch.origin { am.origin = Set(v); }
        if let Some(v) = patch.spice_level { am.spice_level = Set(v); }
        if let Some(v) = patch.servings { am.servings = Set(v); }
        if let Some(v) = patch.difficulty { am.difficulty = Set(v); }
        am.updated_at = Set(Utc::now().into());
        let updated = am.update(&self.db).await.map_err(db_err)?;
        Ok(Some(updated.into()))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<Dish>, ServiceError> {
        let current = DishEntity::find_by_id(id).one(&self.db).await.map_err(db_err)?;
        let Some(existing) = current else { return Ok(None) };
        let res = DishEntity::delete_by_id(id).exec(&self.db).await.map_err(db_err)?;
        if res.rows_affected == 0 {
            // removed concurrently between the read and the delete
            return Ok(None);
        }
        Ok(Some(existing.into()))
    }

    async fn delete_all(&self) -> Result<u64, ServiceError> {
        let res = DishEntity::delete_many().exec(&self.db).await.map_err(db_err)?;
        Ok(res.rows_affected)
    }

    async fn insert_many(&self, dishes: Vec<NewDish>) -> Result<Vec<Dish>, ServiceError> {
        if dishes.is_empty() {
            return Ok(Vec::new());
        }
        let now: DateTimeWithTimeZone = Utc::now().into();
        let mut created = Vec::with_capacity(dishes.len());
        let mut rows = Vec::with_capacity(dishes.len());
        for d in dishes {
            let id = Uuid::new_v4();
            created.push(d.clone().into_dish(id));
            rows.push(active_from_new(id, d, now));
        }
        // a single multi-row INSERT keeps `seq` in batch order
        DishEntity::insert_many(rows).exec(&self.db).await.map_err(db_err)?;
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn sample(name: &str) -> NewDish {
        NewDish {
            name: name.into(),
            ingredients: vec!["Tortillas".into(), "Beef".into()],
            preparation_steps: vec!["Cook beef".into(), "Assemble tacos".into()],
            cooking_time: 30,
            origin: "Mexico".into(),
            spice_level: "High".into(),
            servings: 4,
            difficulty: "Medium".into(),
        }
    }

    #[tokio::test]
    async fn dish_crud_repository() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmDishRepository::new(db);

        let name = format!("svc_dish_{}", Uuid::new_v4());
        let created = repo.insert(sample(&name)).await?;
        assert_eq!(created.name, name);

        let dup = repo.insert(sample(&name)).await.unwrap_err();
        assert!(matches!(dup, ServiceError::DuplicateName(_)));

        let by_name = repo.find_by_name(&name).await?.expect("by name");
        assert_eq!(by_name.id, created.id);

        let patch = DishPatch { cooking_time: Some(45), ..Default::default() };
        let updated = repo.update_by_id(created.id, patch).await?.expect("updated");
        assert_eq!(updated.cooking_time, 45);
        assert_eq!(updated.ingredients, created.ingredients);
        assert_eq!(updated.origin, created.origin);

        assert!(repo.update_by_id(Uuid::new_v4(), DishPatch::default()).await?.is_none());

        let deleted = repo.delete_by_id(created.id).await?.expect("deleted");
        assert_eq!(deleted.id, created.id);
        assert!(repo.find_by_id(created.id).await?.is_none());
        assert!(repo.delete_by_id(created.id).await?.is_none());
        Ok(())
    }
}
