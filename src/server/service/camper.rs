use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::camper::CamperRepository,
    error::AppError,
    model::camper::{Camper, CamperWithSignups, CreateCamperParams, UpdateCamperParams},
};

pub const CAMPER_NOT_FOUND: &str = "Camper not found";

pub struct CamperService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CamperService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every camper without signups
    pub async fn get_all(&self) -> Result<Vec<Camper>, AppError> {
        let campers = CamperRepository::new(self.db).get_all().await?;

        Ok(campers)
    }

    /// Gets a camper with its signups, each signup carrying its activity
    pub async fn get_with_signups(&self, id: i32) -> Result<Option<CamperWithSignups>, AppError> {
        let camper = CamperRepository::new(self.db).find_with_signups(id).await?;

        Ok(camper)
    }

    /// Checks whether a camper with this ID is stored
    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let camper = CamperRepository::new(self.db).find_by_id(id).await?;

        Ok(camper.is_some())
    }

    /// Creates a new camper from validated parameters
    pub async fn create(&self, params: CreateCamperParams) -> Result<Camper, AppError> {
        let txn = self.db.begin().await?;

        let camper = CamperRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        tracing::debug!("Created camper {}", camper.id);

        Ok(camper)
    }

    /// Applies a partial update to a camper
    ///
    /// The camper is looked up before the changes are validated, so an unknown ID is reported
    /// as not found whatever the request body holds.
    ///
    /// # Returns
    /// - `Ok(Camper)` - The updated camper
    /// - `Err(AppError::NotFound)` - No camper has this ID
    /// - `Err(AppError::BadRequest)` - No changes were given or a change is invalid; the
    ///   stored camper is left untouched
    pub async fn update(&self, id: i32, params: UpdateCamperParams) -> Result<Camper, AppError> {
        let txn = self.db.begin().await?;
        let repo = CamperRepository::new(&txn);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(CAMPER_NOT_FOUND.to_string()));
        }

        let params = params.validate()?;
        let camper = repo.update(id, params).await?;

        txn.commit().await?;

        Ok(camper)
    }
}
