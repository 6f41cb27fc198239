use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000001_create_camper_table::Camper,
    m20260101_000002_create_activity_table::Activity,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Signup::Table)
                    .if_not_exists()
                    .col(pk_auto(Signup::Id))
                    .col(integer(Signup::Time))
                    .col(integer(Signup::CamperId))
                    .col(integer(Signup::ActivityId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_signups_camper_id_campers")
                            .from(Signup::Table, Signup::CamperId)
                            .to(Camper::Table, Camper::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_signups_activity_id_activities")
                            .from(Signup::Table, Signup::ActivityId)
                            .to(Activity::Table, Activity::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Signup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Signup {
    #[sea_orm(iden = "signups")]
    Table,
    Id,
    Time,
    CamperId,
    ActivityId,
}
