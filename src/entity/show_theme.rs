use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "show_theme")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::astronomy_show_theme::Entity")]
    AstronomyShowTheme,
}

impl Related<super::astronomy_show_theme::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AstronomyShowTheme.def()
    }
}

impl Related<super::astronomy_show::Entity> for Entity {
    fn to() -> RelationDef {
        super::astronomy_show_theme::Relation::AstronomyShow.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::astronomy_show_theme::Relation::ShowTheme.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
