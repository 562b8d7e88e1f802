//! Create `customers` table.
//!
//! Integer auto-assigned primary key; all other columns are bounded text.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(pk_auto(Customers::Id))
                    .col(string_len(Customers::Firstname, 100).not_null())
                    .col(string_len(Customers::Lastname, 100).not_null())
                    .col(string_len(Customers::Street, 100).not_null())
                    .col(string_len(Customers::Postcode, 10).not_null())
                    .col(string_len(Customers::City, 100).not_null())
                    .col(string_len(Customers::Country, 2).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Customers::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Customers { Table, Id, Firstname, Lastname, Street, Postcode, City, Country }
