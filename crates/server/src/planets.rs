//! Planets API endpoints

use api_types::planet::Planet;
use axum::{Json, extract::State};

use crate::{ServerError, extract::ResourceId, server::ServerState};

fn map_planet(planet: engine::Planet) -> Planet {
    Planet {
        id: planet.id,
        name: planet.name,
        climate: planet.climate,
        terrain: planet.terrain,
    }
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Planet>>, ServerError> {
    let planets = state
        .engine
        .list_planets()
        .await?
        .into_iter()
        .map(map_planet)
        .collect();

    Ok(Json(planets))
}

pub async fn get(
    State(state): State<ServerState>,
    ResourceId(id): ResourceId,
) -> Result<Json<Planet>, ServerError> {
    let planet = state.engine.planet(id).await?;
    Ok(Json(map_planet(planet)))
}
