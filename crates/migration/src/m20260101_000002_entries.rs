use sea_orm_migration::prelude::*;

use super::m20260101_000001_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Entries::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Entries::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Entries::Description).string().not_null())
                    .col(ColumnDef::new(Entries::Month).integer().not_null())
                    .col(ColumnDef::new(Entries::Year).integer().not_null())
                    .col(ColumnDef::new(Entries::ValueMinor).big_integer().not_null())
                    .col(ColumnDef::new(Entries::EntryType).string().not_null())
                    .col(ColumnDef::new(Entries::Status).string().not_null())
                    .col(ColumnDef::new(Entries::UserId).uuid().not_null())
                    .col(ColumnDef::new(Entries::RegistrationDate).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-entries-user_id")
                            .from(Entries::Table, Entries::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-entries-user_id-entry_type")
                    .table(Entries::Table)
                    .col(Entries::UserId)
                    .col(Entries::EntryType)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Entries::Table).to_owned())
            .await
    }
}

/// Learn more at https://docs.rs/sea-query#iden
#[derive(Iden)]
enum Entries {
    Table,
    Id,
    Description,
    Month,
    Year,
    ValueMinor,
    EntryType,
    Status,
    UserId,
    RegistrationDate,
}
