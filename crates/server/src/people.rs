//! People API endpoints

use api_types::person::Person;
use axum::{Json, extract::State};

use crate::{ServerError, extract::ResourceId, server::ServerState};

fn map_person(person: engine::Person) -> Person {
    Person {
        id: person.id,
        name: person.name,
        eye_color: person.eye_color,
        hair_color: person.hair_color,
    }
}

/// Handle requests for listing every person
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Person>>, ServerError> {
    let people = state
        .engine
        .list_people()
        .await?
        .into_iter()
        .map(map_person)
        .collect();

    Ok(Json(people))
}

/// Handle requests for a single person
pub async fn get(
    State(state): State<ServerState>,
    ResourceId(id): ResourceId,
) -> Result<Json<Person>, ServerError> {
    let person = state.engine.person(id).await?;
    Ok(Json(map_person(person)))
}
