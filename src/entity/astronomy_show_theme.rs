use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "astronomy_show_theme")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub astronomy_show_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub show_theme_id: i32,
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
        belongs_to = "super::show_theme::Entity",
        from = "Column::ShowThemeId",
        to = "super::show_theme::Column::Id",
        on_delete = "Cascade"
    )]
    ShowTheme,
}

impl Related<super::astronomy_show::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AstronomyShow.def()
    }
}

impl Related<super::show_theme::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShowTheme.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
