//! Camper data repository for database operations
//!
//! Provides the `CamperRepository` for creating, reading and updating campers and for
//! loading a camper together with its signups.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::{
    activity::Activity,
    camper::{Camper, CamperSignup, CamperWithSignups, CreateCamperParams, UpdateCamperParams},
    signup::Signup,
};

/// Repository providing database operations for campers.
pub struct CamperRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CamperRepository<'a, C> {
    /// Creates a new CamperRepository instance
    ///
    /// # Arguments
    /// - `db` - Connection or transaction to run queries on
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new camper
    ///
    /// # Arguments
    /// - `params` - Validated name and age
    ///
    /// # Returns
    /// - `Ok(Camper)` - The created camper with its generated ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateCamperParams) -> Result<Camper, DbErr> {
        let camper = entity::camper::ActiveModel {
            name: ActiveValue::Set(params.name),
            age: ActiveValue::Set(params.age),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Camper::from_entity(camper))
    }

    /// Gets every camper ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Camper>, DbErr> {
        let campers = entity::prelude::Camper::find()
            .order_by_asc(entity::camper::Column::Id)
            .all(self.db)
            .await?;

        Ok(campers.into_iter().map(Camper::from_entity).collect())
    }

    /// Finds a camper by ID
    ///
    /// # Returns
    /// - `Ok(Some(Camper))` - The camper exists
    /// - `Ok(None)` - No camper has this ID
    /// - `Err(DbErr)` - Database error during lookup
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Camper>, DbErr> {
        let camper = entity::prelude::Camper::find_by_id(id).one(self.db).await?;

        Ok(camper.map(Camper::from_entity))
    }

    /// Finds a camper by ID along with its signups and the activity of each signup
    ///
    /// Signups are ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Some(CamperWithSignups))` - The camper exists
    /// - `Ok(None)` - No camper has this ID
    /// - `Err(DbErr)` - Database error during lookup
    pub async fn find_with_signups(&self, id: i32) -> Result<Option<CamperWithSignups>, DbErr> {
        let Some(camper) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let rows = entity::prelude::Signup::find()
            .filter(entity::signup::Column::CamperId.eq(id))
            .find_also_related(entity::prelude::Activity)
            .order_by_asc(entity::signup::Column::Id)
            .all(self.db)
            .await?;

        let signups = rows
            .into_iter()
            .map(|(signup, activity)| {
                let activity = activity.ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Activity {} referenced by signup {} not found",
                        signup.activity_id, signup.id
                    ))
                })?;

                Ok(CamperSignup {
                    signup: Signup::from_entity(signup),
                    activity: Activity::from_entity(activity),
                })
            })
            .collect::<Result<Vec<_>, DbErr>>()?;

        Ok(Some(CamperWithSignups { camper, signups }))
    }

    /// Applies the provided changes to a camper
    ///
    /// Fields left as `None` keep their stored value.
    ///
    /// # Arguments
    /// - `id` - ID of the camper to update
    /// - `params` - Validated changes
    ///
    /// # Returns
    /// - `Ok(Camper)` - The updated camper
    /// - `Err(DbErr::RecordNotFound)` - No camper has this ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, params: UpdateCamperParams) -> Result<Camper, DbErr> {
        let camper = entity::prelude::Camper::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Camper with id {} not found",
                id
            )))?;

        let mut active_model: entity::camper::ActiveModel = camper.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(age) = params.age {
            active_model.age = ActiveValue::Set(age);
        }

        let camper = active_model.update(self.db).await?;

        Ok(Camper::from_entity(camper))
    }
}
