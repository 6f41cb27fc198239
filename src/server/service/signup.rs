use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::{activity::ActivityRepository, camper::CamperRepository, signup::SignupRepository},
    error::AppError,
    model::signup::{CreateSignupParams, SignupWithRelations},
};

pub struct SignupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SignupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a signup and returns it with its camper and activity
    ///
    /// Both references are resolved inside the same transaction as the insert, and the
    /// store's foreign keys back that check up.
    ///
    /// # Returns
    /// - `Ok(SignupWithRelations)` - The created signup
    /// - `Err(AppError::Integrity)` - The camper or activity does not exist
    /// - `Err(AppError::DbErr)` - Any other database error
    pub async fn create(&self, params: CreateSignupParams) -> Result<SignupWithRelations, AppError> {
        let txn = self.db.begin().await?;

        let camper = CamperRepository::new(&txn)
            .find_by_id(params.camper_id)
            .await?
            .ok_or_else(|| {
                AppError::Integrity(format!("camper {} does not exist", params.camper_id))
            })?;
        let activity = ActivityRepository::new(&txn)
            .find_by_id(params.activity_id)
            .await?
            .ok_or_else(|| {
                AppError::Integrity(format!("activity {} does not exist", params.activity_id))
            })?;

        let signup = SignupRepository::new(&txn)
            .create(params)
            .await
            .map_err(integrity_or_db_err)?;

        txn.commit().await?;

        Ok(SignupWithRelations {
            signup,
            camper,
            activity,
        })
    }
}

fn integrity_or_db_err(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => AppError::Integrity(msg),
        _ => AppError::DbErr(err),
    }
}
