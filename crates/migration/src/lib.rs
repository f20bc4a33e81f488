//! Migrator for the dish schema.
pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_dish;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240601_000001_create_dish::Migration)]
    }
}
