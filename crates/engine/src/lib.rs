pub use error::{EngineError, Resource};
pub use favorites::{Favorite, FavoriteTarget};
pub use ops::{Engine, EngineBuilder};
pub use people::Person;
pub use planets::Planet;
pub use users::User;

mod error;
mod favorites;
mod ops;
mod people;
mod planets;
mod users;

type ResultEngine<T> = Result<T, EngineError>;

/// The identity a favorites operation acts on behalf of.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Principal {
    pub user_id: i32,
}

impl Principal {
    pub fn new(user_id: i32) -> Self {
        Self { user_id }
    }
}
