//! In-process dish store, used for tests and `memory://` runs.

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::dish::domain::{Dish, DishPatch, NewDish};
use crate::dish::repository::DishRepository;
use crate::errors::ServiceError;

/// Insertion-ordered store. The write lock makes the duplicate check and the
/// insert a single step, so concurrent inserts of one name cannot both land.
#[derive(Default)]
pub struct InMemoryDishRepository {
    dishes: RwLock<Vec<Dish>>,
}

impl InMemoryDishRepository {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl DishRepository for InMemoryDishRepository {
    async fn list_all(&self) -> Result<Vec<Dish>, ServiceError> {
        Ok(self.dishes.read().await.clone())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Dish>, ServiceError> {
        Ok(self.dishes.read().await.iter().find(|d| d.name == name).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Dish>, ServiceError> {
        Ok(self.dishes.read().await.iter().find(|d| d.id == id).cloned())
    }

    async fn insert(&self, dish: NewDish) -> Result<Dish, ServiceError> {
        let mut dishes = self.dishes.write().await;
        if dishes.iter().any(|d| d.name == dish.name) {
            return Err(ServiceError::DuplicateName(dish.name));
        }
        let created = dish.into_dish(Uuid::new_v4());
        dishes.push(created.clone());
        Ok(created)
    }

    async fn update_by_id(&self, id: Uuid, patch: DishPatch) -> Result<Option<Dish>, ServiceError> {
        let mut dishes = self.dishes.write().await;
        let Some(pos) = dishes.iter().position(|d| d.id == id) else { return Ok(None) };
        if let Some(name) = &patch.name {
            if dishes.iter().any(|d| d.id != id && &d.name == name) {
                return Err(ServiceError::DuplicateName(name.clone()));
            }
        }
        let existing = &mut dishes[pos];
        patch.apply_to(existing);
        Ok(Some(existing.clone()))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<Dish>, ServiceError> {
        let mut dishes = self.dishes.write().await;
        let Some(pos) = dishes.iter().position(|d| d.id == id) else { return Ok(None) };
        Ok(Some(dishes.remove(pos)))
    }

    async fn delete_all(&self) -> Result<u64, ServiceError> {
        let mut dishes = self.dishes.write().await;
        let removed = dishes.len() as u64;
        dishes.clear();
        Ok(removed)
    }

    async fn insert_many(&self, batch: Vec<NewDish>) -> Result<Vec<Dish>, ServiceError> {
        let mut dishes = self.dishes.write().await;
        let mut names: HashSet<&str> = dishes.iter().map(|d| d.name.as_str()).collect();
        for d in &batch {
            if !names.insert(d.name.as_str()) {
                return Err(ServiceError::DuplicateName(d.name.clone()));
            }
        }
        let created: Vec<Dish> = batch.into_iter().map(|d| d.into_dish(Uuid::new_v4())).collect();
        dishes.extend(created.iter().cloned());
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str) -> NewDish {
        NewDish {
            name: name.into(),
            ingredients: vec!["Beef".into()],
            preparation_steps: vec!["Cook".into()],
            cooking_time: 10,
            origin: "Test".into(),
            spice_level: "Low".into(),
            servings: 4,
            difficulty: "Easy".into(),
        }
    }

    #[tokio::test]
    async fn keeps_insertion_order() -> Result<(), anyhow::Error> {
        let repo = InMemoryDishRepository::new();
        let mut ids = Vec::new();
        for n in ["c", "a", "b"] {
            ids.push(repo.insert(sample(n)).await?.id);
        }
        assert_eq!(repo.find_by_id(ids[1]).await?.map(|d| d.name), Some("a".to_string()));
        assert!(repo.find_by_id(Uuid::new_v4()).await?.is_none());
        let names: Vec<String> = repo.list_all().await?.into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
        Ok(())
    }

    #[tokio::test]
    async fn rename_onto_existing_name_is_rejected() -> Result<(), anyhow::Error> {
        let repo = InMemoryDishRepository::new();
        repo.insert(sample("Sushi")).await?;
        let tacos = repo.insert(sample("Tacos")).await?;
        let patch = DishPatch { name: Some("Sushi".into()), ..Default::default() };
        let err = repo.update_by_id(tacos.id, patch).await.unwrap_err();
        assert!(matches!(err, ServiceError::DuplicateName(_)));

        // renaming to its own name is fine
        let patch = DishPatch { name: Some("Tacos".into()), ..Default::default() };
        assert!(repo.update_by_id(tacos.id, patch).await?.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_absent_even_with_taken_name() -> Result<(), anyhow::Error> {
        let repo = InMemoryDishRepository::new();
        repo.insert(sample("Sushi")).await?;
        let patch = DishPatch { name: Some("Sushi".into()), ..Default::default() };
        assert!(repo.update_by_id(Uuid::new_v4(), patch).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn insert_many_rejects_duplicates_in_batch() -> Result<(), anyhow::Error> {
        let repo = InMemoryDishRepository::new();
        let err = repo.insert_many(vec![sample("x"), sample("x")]).await.unwrap_err();
        assert!(matches!(err, ServiceError::DuplicateName(_)));
        assert!(repo.list_all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn delete_all_reports_count() -> Result<(), anyhow::Error> {
        let repo = InMemoryDishRepository::new();
        repo.insert_many(vec![sample("x"), sample("y")]).await?;
        assert_eq!(repo.delete_all().await?, 2);
        assert_eq!(repo.delete_all().await?, 0);
        Ok(())
    }
}
