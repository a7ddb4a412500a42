//! Read access to the reference data and the seeding helpers behind the admin CLI.

use sea_orm::{ActiveValue, QueryOrder, SqlErr, prelude::*};

use crate::{EngineError, Person, Planet, Resource, ResultEngine, User, people, planets, users};

use super::{Engine, normalize_optional_text, normalize_required};

impl Engine {
    /// Lists every person ordered by id.
    pub async fn list_people(&self) -> ResultEngine<Vec<Person>> {
        let rows = people::Entity::find()
            .order_by_asc(people::Column::Id)
            .all(&self.database)
            .await?;
        Ok(rows.into_iter().map(Person::from).collect())
    }

    pub async fn person(&self, id: i32) -> ResultEngine<Person> {
        tracing::debug!("looking up person {id}");
        people::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .map(Person::from)
            .ok_or(EngineError::NotFound(Resource::Person))
    }

    /// Lists every planet ordered by id.
    pub async fn list_planets(&self) -> ResultEngine<Vec<Planet>> {
        let rows = planets::Entity::find()
            .order_by_asc(planets::Column::Id)
            .all(&self.database)
            .await?;
        Ok(rows.into_iter().map(Planet::from).collect())
    }

    pub async fn planet(&self, id: i32) -> ResultEngine<Planet> {
        tracing::debug!("looking up planet {id}");
        planets::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .map(Planet::from)
            .ok_or(EngineError::NotFound(Resource::Planet))
    }

    /// Lists every user ordered by id. Credentials are dropped by the mapping.
    pub async fn list_users(&self) -> ResultEngine<Vec<User>> {
        let rows = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.database)
            .await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    /// Creates a user. Emails are unique.
    pub async fn create_user(
        &self,
        email: &str,
        password: &str,
        is_active: bool,
    ) -> ResultEngine<User> {
        let email = normalize_required(email, "email")?;
        if password.is_empty() {
            return Err(EngineError::InvalidInput(
                "password must not be empty".to_string(),
            ));
        }

        let user = users::ActiveModel {
            id: ActiveValue::NotSet,
            email: ActiveValue::Set(email.clone()),
            password: ActiveValue::Set(password.to_string()),
            is_active: ActiveValue::Set(is_active),
        };
        let model = user.insert(&self.database).await.map_err(|err| {
            if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                EngineError::ExistingKey(email.clone())
            } else {
                EngineError::Database(err)
            }
        })?;

        tracing::info!("created user {} ({})", model.id, model.email);
        Ok(User::from(model))
    }

    pub async fn create_person(
        &self,
        name: &str,
        eye_color: Option<&str>,
        hair_color: Option<&str>,
    ) -> ResultEngine<Person> {
        let person = people::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(normalize_required(name, "name")?),
            eye_color: ActiveValue::Set(normalize_optional_text(eye_color)),
            hair_color: ActiveValue::Set(normalize_optional_text(hair_color)),
        };
        let model = person.insert(&self.database).await?;

        tracing::info!("created person {} ({})", model.id, model.name);
        Ok(Person::from(model))
    }

    pub async fn create_planet(
        &self,
        name: &str,
        climate: Option<&str>,
        terrain: Option<&str>,
    ) -> ResultEngine<Planet> {
        let planet = planets::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(normalize_required(name, "name")?),
            climate: ActiveValue::Set(normalize_optional_text(climate)),
            terrain: ActiveValue::Set(normalize_optional_text(terrain)),
        };
        let model = planet.insert(&self.database).await?;

        tracing::info!("created planet {} ({})", model.id, model.name);
        Ok(Planet::from(model))
    }
}
