//! Favorites of a principal.
//!
//! Duplicates are rejected by the unique indexes on `(user_id, planet_id)` and
//! `(user_id, people_id)`, and removal is a single conditional `DELETE`, so
//! concurrent identical requests cannot both succeed.

use sea_orm::{ActiveValue, ConnectionTrait, QueryFilter, QueryOrder, SqlErr, prelude::*};

use crate::{
    EngineError, Favorite, FavoriteTarget, Principal, Resource, ResultEngine, favorites, people,
    planets, users,
};

use super::Engine;

fn target_resource(target: FavoriteTarget) -> Resource {
    match target {
        FavoriteTarget::Planet(_) => Resource::Planet,
        FavoriteTarget::Person(_) => Resource::Person,
    }
}

fn insert_error(err: DbErr, target: FavoriteTarget) -> EngineError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => EngineError::ExistingFavorite,
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            EngineError::NotFound(target_resource(target))
        }
        _ => EngineError::Database(err),
    }
}

async fn require_user<C: ConnectionTrait>(db: &C, user_id: i32) -> ResultEngine<()> {
    let exists = users::Entity::find_by_id(user_id).one(db).await?.is_some();
    if !exists {
        return Err(EngineError::NotFound(Resource::User));
    }
    Ok(())
}

async fn require_target<C: ConnectionTrait>(db: &C, target: FavoriteTarget) -> ResultEngine<()> {
    let exists = match target {
        FavoriteTarget::Planet(id) => planets::Entity::find_by_id(id).one(db).await?.is_some(),
        FavoriteTarget::Person(id) => people::Entity::find_by_id(id).one(db).await?.is_some(),
    };
    if !exists {
        return Err(EngineError::NotFound(target_resource(target)));
    }
    Ok(())
}

impl Engine {
    /// Lists the favorites of `principal`, ordered by id.
    pub async fn list_favorites(&self, principal: Principal) -> ResultEngine<Vec<Favorite>> {
        require_user(&self.database, principal.user_id).await?;

        favorites::Entity::find()
            .filter(favorites::Column::UserId.eq(principal.user_id))
            .order_by_asc(favorites::Column::Id)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Favorite::try_from)
            .collect()
    }

    /// Stores `target` as a favorite of `principal`.
    ///
    /// Fails with [`EngineError::NotFound`] when the user or the target is
    /// missing and with [`EngineError::ExistingFavorite`] when the pair is
    /// already stored. The lookups only pick the error message; the insert is
    /// a single statement and the unique index decides who wins.
    pub async fn add_favorite(
        &self,
        principal: Principal,
        target: FavoriteTarget,
    ) -> ResultEngine<Favorite> {
        require_target(&self.database, target).await?;
        require_user(&self.database, principal.user_id).await?;

        let favorite = favorites::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(principal.user_id),
            planet_id: ActiveValue::Set(target.planet_id()),
            people_id: ActiveValue::Set(target.people_id()),
        };
        let model = favorite
            .insert(&self.database)
            .await
            .map_err(|err| insert_error(err, target))?;

        tracing::info!(
            "user {} added favorite {} ({target:?})",
            principal.user_id,
            model.id
        );
        Favorite::try_from(model)
    }

    /// Removes the favorite of `principal` pointing at `target`.
    pub async fn remove_favorite(
        &self,
        principal: Principal,
        target: FavoriteTarget,
    ) -> ResultEngine<()> {
        let res = favorites::Entity::delete_many()
            .filter(favorites::Column::UserId.eq(principal.user_id))
            .filter(target.condition())
            .exec(&self.database)
            .await?;

        if res.rows_affected == 0 {
            return Err(EngineError::NotFound(Resource::Favorite));
        }

        tracing::info!("user {} removed favorite {target:?}", principal.user_id);
        Ok(())
    }

    pub async fn add_favorite_planet(
        &self,
        principal: Principal,
        planet_id: i32,
    ) -> ResultEngine<Favorite> {
        self.add_favorite(principal, FavoriteTarget::Planet(planet_id))
            .await
    }

    pub async fn add_favorite_person(
        &self,
        principal: Principal,
        people_id: i32,
    ) -> ResultEngine<Favorite> {
        self.add_favorite(principal, FavoriteTarget::Person(people_id))
            .await
    }

    pub async fn remove_favorite_planet(
        &self,
        principal: Principal,
        planet_id: i32,
    ) -> ResultEngine<()> {
        self.remove_favorite(principal, FavoriteTarget::Planet(planet_id))
            .await
    }

    pub async fn remove_favorite_person(
        &self,
        principal: Principal,
        people_id: i32,
    ) -> ResultEngine<()> {
        self.remove_favorite(principal, FavoriteTarget::Person(people_id))
            .await
    }
}
