//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`NotFound`] thrown when a path-addressed row does not exist.
//! - [`ExistingFavorite`] thrown when the (user, target) pair is already stored.
//!
//!  [`NotFound`]: EngineError::NotFound
//!  [`ExistingFavorite`]: EngineError::ExistingFavorite
use std::fmt;

use sea_orm::DbErr;
use thiserror::Error;

/// The kind of row a lookup failed to find.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Person,
    Planet,
    User,
    Favorite,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Person => "Person",
            Resource::Planet => "Planet",
            Resource::User => "User",
            Resource::Favorite => "Favorite",
        };
        f.write_str(name)
    }
}

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("{0} not found")]
    NotFound(Resource),
    #[error("Favorite already exists")]
    ExistingFavorite,
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NotFound(a), Self::NotFound(b)) => a == b,
            (Self::ExistingFavorite, Self::ExistingFavorite) => true,
            (Self::ExistingKey(a), Self::ExistingKey(b)) => a == b,
            (Self::InvalidInput(a), Self::InvalidInput(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
