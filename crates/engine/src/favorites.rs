//! Favorites table and its typed view.
//!
//! A row points at exactly one planet or one person. The table stores that as
//! two nullable columns guarded by a CHECK constraint; in Rust the choice is
//! carried by [`FavoriteTarget`].

use sea_orm::entity::prelude::*;

use crate::EngineError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "favorites")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub planet_id: Option<i32>,
    pub people_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Users,
    #[sea_orm(
        belongs_to = "super::planets::Entity",
        from = "Column::PlanetId",
        to = "super::planets::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Planets,
    #[sea_orm(
        belongs_to = "super::people::Entity",
        from = "Column::PeopleId",
        to = "super::people::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    People,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::planets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planets.def()
    }
}

impl Related<super::people::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::People.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// What a favorite points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteTarget {
    Planet(i32),
    Person(i32),
}

impl FavoriteTarget {
    pub fn planet_id(&self) -> Option<i32> {
        match self {
            FavoriteTarget::Planet(id) => Some(*id),
            FavoriteTarget::Person(_) => None,
        }
    }

    pub fn people_id(&self) -> Option<i32> {
        match self {
            FavoriteTarget::Planet(_) => None,
            FavoriteTarget::Person(id) => Some(*id),
        }
    }

    /// Filter matching the target column of this favorite.
    pub(crate) fn condition(&self) -> sea_orm::sea_query::SimpleExpr {
        match self {
            FavoriteTarget::Planet(id) => Column::PlanetId.eq(*id),
            FavoriteTarget::Person(id) => Column::PeopleId.eq(*id),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub target: FavoriteTarget,
}

impl TryFrom<Model> for Favorite {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let target = match (model.planet_id, model.people_id) {
            (Some(planet_id), None) => FavoriteTarget::Planet(planet_id),
            (None, Some(people_id)) => FavoriteTarget::Person(people_id),
            _ => {
                return Err(EngineError::InvalidInput(format!(
                    "favorite {} must reference exactly one planet or person",
                    model.id
                )));
            }
        };

        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            target,
        })
    }
}
