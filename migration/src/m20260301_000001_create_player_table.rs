use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(string_len(Player::Name, 100))
                    .col(string_len(Player::Team, 100))
                    .col(string_len(Player::Position, 2))
                    .col(double(Player::Ppg).default(0.0))
                    .col(integer(Player::Years).default(0))
                    .col(string_len(Player::ImageUrl, 500).default(""))
                    .col(
                        timestamp_with_time_zone(Player::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_player_position")
                    .table(Player::Table)
                    .col(Player::Position)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    Name,
    Team,
    Position,
    Ppg,
    Years,
    ImageUrl,
    CreatedAt,
}
