//! Favorites API endpoints
//!
//! Every handler acts on the [`Principal`] attached by the identity middleware.

use api_types::{Message, favorite::Favorite};
use axum::{Extension, Json, extract::State};
use engine::Principal;

use crate::{ServerError, extract::ResourceId, server::ServerState};

pub(crate) fn map_favorite(favorite: engine::Favorite) -> Favorite {
    Favorite {
        id: favorite.id,
        user_id: favorite.user_id,
        planet_id: favorite.target.planet_id(),
        people_id: favorite.target.people_id(),
    }
}

pub async fn add_planet(
    Extension(principal): Extension<Principal>,
    State(state): State<ServerState>,
    ResourceId(planet_id): ResourceId,
) -> Result<Json<Message>, ServerError> {
    state
        .engine
        .add_favorite_planet(principal, planet_id)
        .await?;
    Ok(Json(Message::new("Favorite planet added")))
}

pub async fn add_person(
    Extension(principal): Extension<Principal>,
    State(state): State<ServerState>,
    ResourceId(people_id): ResourceId,
) -> Result<Json<Message>, ServerError> {
    state
        .engine
        .add_favorite_person(principal, people_id)
        .await?;
    Ok(Json(Message::new("Favorite person added")))
}

pub async fn remove_planet(
    Extension(principal): Extension<Principal>,
    State(state): State<ServerState>,
    ResourceId(planet_id): ResourceId,
) -> Result<Json<Message>, ServerError> {
    state
        .engine
        .remove_favorite_planet(principal, planet_id)
        .await?;
    Ok(Json(Message::new("Favorite planet deleted")))
}

pub async fn remove_person(
    Extension(principal): Extension<Principal>,
    State(state): State<ServerState>,
    ResourceId(people_id): ResourceId,
) -> Result<Json<Message>, ServerError> {
    state
        .engine
        .remove_favorite_person(principal, people_id)
        .await?;
    Ok(Json(Message::new("Favorite person deleted")))
}
