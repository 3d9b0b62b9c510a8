//! Ticket entity model for Sea-ORM database interaction.

use sea_orm::entity::prelude::*;

/// Sea-ORM entity model representing one claimed seat.
///
/// # Database Schema
///
/// | Column          | Type              | Description                          |
/// |-----------------|-------------------|--------------------------------------|
/// | id              | INTEGER (Primary) | Ticket identifier                    |
/// | row             | INTEGER           | 1-based row in the dome              |
/// | seat            | INTEGER           | 1-based seat in the row              |
/// | show_session_id | INTEGER           | Session, cascades on delete          |
/// | reservation_id  | INTEGER           | Owning reservation, cascades on delete |
///
/// The unique index `idx_ticket_unique_seat` over
/// `(show_session_id, row, seat)` is what guarantees one ticket per seat per
/// session. Concurrent inserts for the same seat are settled by the database:
/// the losing insert fails and is reported as
/// [`SeatError::DuplicateSeat`](crate::SeatError::DuplicateSeat).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ticket")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub row: i32,
    pub seat: i32,
    pub show_session_id: i32,
    pub reservation_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::show_session::Entity",
        from = "Column::ShowSessionId",
        to = "super::show_session::Column::Id",
        on_delete = "Cascade"
    )]
    ShowSession,
    #[sea_orm(
        belongs_to = "super::reservation::Entity",
        from = "Column::ReservationId",
        to = "super::reservation::Column::Id",
        on_delete = "Cascade"
    )]
    Reservation,
}

impl Related<super::show_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShowSession.def()
    }
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
