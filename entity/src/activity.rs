use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "activities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    pub difficulty: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::signup::Entity")]
    Signup,
}

impl Related<super::signup::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Signup.def()
    }
}

impl Related<super::camper::Entity> for Entity {
    fn to() -> RelationDef {
        super::signup::Relation::Camper.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::signup::Relation::Activity.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
