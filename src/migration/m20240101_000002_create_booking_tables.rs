use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_catalog_tables::{AstronomyShow, PlanetariumDome};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShowSession::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ShowSession::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ShowSession::AstronomyShowId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ShowSession::PlanetariumDomeId).integer().null())
                    .col(
                        ColumnDef::new(ShowSession::ShowTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_show_session_show")
                            .from(ShowSession::Table, ShowSession::AstronomyShowId)
                            .to(AstronomyShow::Table, AstronomyShow::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_show_session_dome")
                            .from(ShowSession::Table, ShowSession::PlanetariumDomeId)
                            .to(PlanetariumDome::Table, PlanetariumDome::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Serves the conflict lookup: same show, same dome, time window.
        manager
            .create_index(
                Index::create()
                    .name("idx_show_session_schedule")
                    .table(ShowSession::Table)
                    .col(ShowSession::AstronomyShowId)
                    .col(ShowSession::PlanetariumDomeId)
                    .col(ShowSession::ShowTime)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reservation::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reservation::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(Reservation::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Ticket::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Ticket::Row)
                            .integer()
                            .not_null()
                            .check(Expr::col(Ticket::Row).gt(0)),
                    )
                    .col(
                        ColumnDef::new(Ticket::Seat)
                            .integer()
                            .not_null()
                            .check(Expr::col(Ticket::Seat).gt(0)),
                    )
                    .col(ColumnDef::new(Ticket::ShowSessionId).integer().not_null())
                    .col(ColumnDef::new(Ticket::ReservationId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_show_session")
                            .from(Ticket::Table, Ticket::ShowSessionId)
                            .to(ShowSession::Table, ShowSession::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_reservation")
                            .from(Ticket::Table, Ticket::ReservationId)
                            .to(Reservation::Table, Reservation::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One ticket per seat per session, enforced atomically by the database.
        manager
            .create_index(
                Index::create()
                    .name("idx_ticket_unique_seat")
                    .table(Ticket::Table)
                    .col(Ticket::ShowSessionId)
                    .col(Ticket::Row)
                    .col(Ticket::Seat)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ShowSession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ShowSession {
    Table,
    Id,
    AstronomyShowId,
    PlanetariumDomeId,
    ShowTime,
}

#[derive(DeriveIden)]
enum Reservation {
    Table,
    Id,
    UserId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Ticket {
    Table,
    Id,
    Row,
    Seat,
    ShowSessionId,
    ReservationId,
}
