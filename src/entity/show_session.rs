//! Show session entity model for Sea-ORM database interaction.

use sea_orm::entity::prelude::*;

use crate::domain::ScheduledSession;

/// Sea-ORM entity model representing a scheduled screening.
///
/// # Database Schema
///
/// | Column              | Type              | Description                          |
/// |---------------------|-------------------|--------------------------------------|
/// | id                  | INTEGER (Primary) | Session identifier                   |
/// | astronomy_show_id   | INTEGER           | Screened show, cascades on delete    |
/// | planetarium_dome_id | INTEGER NULL      | Hosting dome, set null on delete     |
/// | show_time           | TIMESTAMPTZ       | Start of the screening (UTC)         |
///
/// Rows are only written after the scheduling rules accepted the candidate,
/// see [`ShowTimeValidator`](crate::ShowTimeValidator).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "show_session")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub astronomy_show_id: i32,
    pub planetarium_dome_id: Option<i32>,
    pub show_time: DateTimeUtc,
}

impl From<Model> for ScheduledSession {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            show_id: model.astronomy_show_id,
            dome_id: model.planetarium_dome_id,
            show_time: model.show_time,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::astronomy_show::Entity",
        from = "Column::AstronomyShowId",
        to = "super::astronomy_show::Column::Id",
        on_delete = "Cascade"
    )]
    AstronomyShow,
    #[sea_orm(
        belongs_to = "super::planetarium_dome::Entity",
        from = "Column::PlanetariumDomeId",
        to = "super::planetarium_dome::Column::Id",
        on_delete = "SetNull"
    )]
    PlanetariumDome,
    #[sea_orm(has_many = "super::ticket::Entity")]
    Ticket,
}

impl Related<super::astronomy_show::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AstronomyShow.def()
    }
}

impl Related<super::planetarium_dome::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanetariumDome.def()
    }
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ticket.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
