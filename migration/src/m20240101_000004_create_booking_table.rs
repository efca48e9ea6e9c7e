use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240101_000001_create_user_table::User, m20240101_000003_create_item_table::Item,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer(Booking::ItemId))
                    .col(integer(Booking::BookerId))
                    .col(timestamp_with_time_zone(Booking::StartAt))
                    .col(timestamp_with_time_zone(Booking::EndAt))
                    .col(string_len(Booking::Status, 16))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_item_id")
                            .from(Booking::Table, Booking::ItemId)
                            .to(Item::Table, Item::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_booker_id")
                            .from(Booking::Table, Booking::BookerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_booker_start")
                    .table(Booking::Table)
                    .col(Booking::BookerId)
                    .col(Booking::StartAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    #[sea_orm(iden = "bookings")]
    Table,
    Id,
    ItemId,
    BookerId,
    StartAt,
    EndAt,
    Status,
}
