use sea_orm_migration::{prelude::*, schema::*};

use super::m20240101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ItemRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(ItemRequest::Id))
                    .col(string(ItemRequest::Description))
                    .col(
                        timestamp_with_time_zone(ItemRequest::Created)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(integer(ItemRequest::CreatorId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_requests_creator_id")
                            .from(ItemRequest::Table, ItemRequest::CreatorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ItemRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ItemRequest {
    #[sea_orm(iden = "requests")]
    Table,
    Id,
    Description,
    Created,
    CreatorId,
}
