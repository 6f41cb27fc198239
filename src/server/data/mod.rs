//! Database repository layer for all domain entities.
//!
//! Repositories handle database operations (CRUD) for each entity. They use SeaORM entity
//! models internally and return domain models to keep the data layer separate from
//! business logic. Every repository is generic over `ConnectionTrait`, so the same methods
//! run against the connection pool or inside a `DatabaseTransaction` owned by a service.

pub mod activity;
pub mod camper;
pub mod signup;

#[cfg(test)]
mod test;
