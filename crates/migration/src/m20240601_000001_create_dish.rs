//! Create `dish` table.
//!
//! One row per recipe. `seq` records insertion order for listing; `name` is unique.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dish::Table)
                    .if_not_exists()
                    .col(uuid(Dish::Id).primary_key())
                    .col(big_integer(Dish::Seq).auto_increment())
                    .col(text(Dish::Name))
                    .col(json_binary(Dish::Ingredients))
                    .col(json_binary(Dish::PreparationSteps))
                    .col(integer(Dish::CookingTime))
                    .col(text(Dish::Origin))
                    .col(string_len(Dish::SpiceLevel, 64).default("Medium"))
                    .col(integer(Dish::Servings).default(4))
                    .col(string_len(Dish::Difficulty, 64).default("Medium"))
                    .col(timestamp_with_time_zone(Dish::CreatedAt))
                    .col(timestamp_with_time_zone(Dish::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uniq_dish_name")
                    .table(Dish::Table)
                    .col(Dish::Name)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_dish_seq")
                    .table(Dish::Table)
                    .col(Dish::Seq)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Dish::Table).if_exists().to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Dish {
    Table,
    Id,
    Seq,
    Name,
    Ingredients,
    PreparationSteps,
    CookingTime,
    Origin,
    SpiceLevel,
    Servings,
    Difficulty,
    CreatedAt,
    UpdatedAt,
}
