use serde::{Deserialize, Serialize};

/// Acknowledgement and error body: `{"msg": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub msg: String,
}

impl Message {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

pub mod person {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Person {
        pub id: i32,
        pub name: String,
        pub eye_color: Option<String>,
        pub hair_color: Option<String>,
    }
}

pub mod planet {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Planet {
        pub id: i32,
        pub name: String,
        pub climate: Option<String>,
        pub terrain: Option<String>,
    }
}

pub mod user {
    use super::*;

    /// Public view of a user, without credentials.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct User {
        pub id: i32,
        pub email: String,
    }
}

pub mod favorite {
    use super::*;

    /// A favorite as stored: exactly one of `planet_id` / `people_id` is set,
    /// the other serializes as `null`.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Favorite {
        pub id: i32,
        pub user_id: i32,
        pub planet_id: Option<i32>,
        pub people_id: Option<i32>,
    }
}
