use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShowTheme::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ShowTheme::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ShowTheme::Name).string_len(100).not_null())
                    .col(ColumnDef::new(ShowTheme::Description).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AstronomyShow::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AstronomyShow::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AstronomyShow::Title).string_len(255).not_null())
                    .col(ColumnDef::new(AstronomyShow::Description).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AstronomyShowTheme::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AstronomyShowTheme::AstronomyShowId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AstronomyShowTheme::ShowThemeId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(AstronomyShowTheme::AstronomyShowId)
                            .col(AstronomyShowTheme::ShowThemeId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_astronomy_show_theme_show")
                            .from(AstronomyShowTheme::Table, AstronomyShowTheme::AstronomyShowId)
                            .to(AstronomyShow::Table, AstronomyShow::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_astronomy_show_theme_theme")
                            .from(AstronomyShowTheme::Table, AstronomyShowTheme::ShowThemeId)
                            .to(ShowTheme::Table, ShowTheme::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PlanetariumDome::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PlanetariumDome::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PlanetariumDome::Name)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(PlanetariumDome::Rows)
                            .integer()
                            .not_null()
                            .check(Expr::col(PlanetariumDome::Rows).gt(0)),
                    )
                    .col(
                        ColumnDef::new(PlanetariumDome::SeatsInRow)
                            .integer()
                            .not_null()
                            .check(Expr::col(PlanetariumDome::SeatsInRow).gt(0)),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlanetariumDome::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AstronomyShowTheme::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AstronomyShow::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ShowTheme::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(super) enum ShowTheme {
    Table,
    Id,
    Name,
    Description,
}

#[derive(DeriveIden)]
pub(super) enum AstronomyShow {
    Table,
    Id,
    Title,
    Description,
}

#[derive(DeriveIden)]
enum AstronomyShowTheme {
    Table,
    AstronomyShowId,
    ShowThemeId,
}

#[derive(DeriveIden)]
pub(super) enum PlanetariumDome {
    Table,
    Id,
    Name,
    Rows,
    SeatsInRow,
}
