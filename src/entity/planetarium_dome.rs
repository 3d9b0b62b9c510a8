//! Dome entity model for Sea-ORM database interaction.

use sea_orm::entity::prelude::*;

use crate::domain::DomeLayout;

/// Sea-ORM entity model representing a planetarium dome.
///
/// # Database Schema
///
/// | Column       | Type               | Description                   |
/// |--------------|--------------------|-------------------------------|
/// | id           | INTEGER (Primary)  | Dome identifier               |
/// | name         | VARCHAR (Unique)   | Display name                  |
/// | rows         | INTEGER            | Number of seat rows           |
/// | seats_in_row | INTEGER            | Seats in every row            |
///
/// Both dimensions are positive; [`BookingStore::create_dome`] rejects
/// anything else before it reaches the table.
///
/// [`BookingStore::create_dome`]: crate::BookingStore::create_dome
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planetarium_dome")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
}

impl Model {
    /// The seating grid of this dome.
    pub fn layout(&self) -> DomeLayout {
        DomeLayout::new(self.rows, self.seats_in_row)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::show_session::Entity")]
    ShowSession,
}

impl Related<super::show_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShowSession.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
