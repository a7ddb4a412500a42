//! Users API endpoints

use api_types::{favorite::Favorite, user::User};
use axum::{Extension, Json, extract::State};
use engine::Principal;

use crate::{ServerError, favorites::map_favorite, server::ServerState};

fn map_user(user: engine::User) -> User {
    User {
        id: user.id,
        email: user.email,
    }
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<User>>, ServerError> {
    let users = state
        .engine
        .list_users()
        .await?
        .into_iter()
        .map(map_user)
        .collect();

    Ok(Json(users))
}

/// Handle requests for the favorites of the current principal
pub async fn favorites(
    Extension(principal): Extension<Principal>,
    State(state): State<ServerState>,
) -> Result<Json<Vec<Favorite>>, ServerError> {
    let favorites = state
        .engine
        .list_favorites(principal)
        .await?
        .into_iter()
        .map(map_favorite)
        .collect();

    Ok(Json(favorites))
}
