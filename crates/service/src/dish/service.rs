use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::domain::{Dish, DishPatch, NewDish};
use super::repository::DishRepository;
use crate::errors::ServiceError;

/// Application service for dishes, independent of the web framework.
///
/// Works over any [`DishRepository`], including `dyn DishRepository`.
pub struct DishService<R: DishRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: DishRepository + ?Sized> DishService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<Dish>, ServiceError> {
        self.repo.list_all().await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Dish, ServiceError> {
        self.repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| ServiceError::not_found("dish"))
    }

    /// Create a dish after checking that the name is free.
    ///
    /// # Examples
    /// ```
    /// use service::dish::{DishService, NewDish, repo::memory::InMemoryDishRepository};
    /// use std::sync::Arc;
    /// let svc = DishService::new(Arc::new(InMemoryDishRepository::new()));
    /// let input = NewDish {
    ///     name: "Tacos".into(), ingredients: vec!["Tortillas".into()],
    ///     preparation_steps: vec!["Assemble".into()], cooking_time: 30, origin: "Mexico".into(),
    ///     spice_level: "High".into(), servings: 4, difficulty: "Medium".into(),
    /// };
    /// let dish = tokio_test::block_on(svc.create(input.clone())).unwrap();
    /// assert_eq!(dish.name, "Tacos");
    /// assert!(tokio_test::block_on(svc.create(input)).is_err());
    /// ```
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: NewDish) -> Result<Dish, ServiceError> {
        input.validate()?;
        if let Some(existing) = self.repo.find_by_name(&input.name).await? {
            debug!(id = %existing.id, "dish name taken");
            return Err(ServiceError::DuplicateName(input.name));
        }
        let dish = self.repo.insert(input).await?;
        info!(id = %dish.id, name = %dish.name, "dish_created");
        Ok(dish)
    }

    /// Merge `patch` into the dish with `raw_id`. An id that cannot exist reads as not found.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, raw_id: &str, patch: DishPatch) -> Result<Dish, ServiceError> {
        let Ok(id) = parse_id(raw_id) else { return Err(ServiceError::not_found("dish")) };
        patch.validate()?;
        let dish = self
            .repo
            .update_by_id(id, patch)
            .await?
            .ok_or_else(|| ServiceError::not_found("dish"))?;
        info!(id = %dish.id, "dish_updated");
        Ok(dish)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, raw_id: &str) -> Result<Dish, ServiceError> {
        let id = parse_id(raw_id)?;
        let dish = self
            .repo
            .delete_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("dish"))?;
        info!(id = %dish.id, name = %dish.name, "dish_deleted");
        Ok(dish)
    }

    /// Drop every stored dish and insert `dishes` in order.
    pub async fn replace_all(&self, dishes: Vec<NewDish>) -> Result<Vec<Dish>, ServiceError> {
        for d in &dishes {
            d.validate()?;
        }
        let removed = self.repo.delete_all().await?;
        let inserted = self.repo.insert_many(dishes).await?;
        info!(removed, inserted = inserted.len(), "dishes_replaced");
        Ok(inserted)
    }
}

impl<R: DishRepository + ?Sized> Clone for DishService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

/// Parse a path identifier into a dish id.
pub fn parse_id(raw: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ServiceError::InvalidIdentifier(raw.to_string()))
}
