use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

use engine::{Engine, EngineError, FavoriteTarget, Principal, Resource};
use migration::MigratorTrait;

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

/// Engine with user 1 plus Tatooine (planet 1) and Luke (person 1).
async fn seeded_engine() -> (Engine, DatabaseConnection) {
    let (engine, db) = engine_with_db().await;
    engine
        .create_user("luke@rebellion.org", "password", true)
        .await
        .unwrap();
    engine
        .create_planet("Tatooine", Some("arid"), Some("desert"))
        .await
        .unwrap();
    engine
        .create_person("Luke Skywalker", Some("blue"), Some("blond"))
        .await
        .unwrap();
    (engine, db)
}

fn principal() -> Principal {
    Principal::new(1)
}

#[tokio::test]
async fn lists_are_empty_on_fresh_database() {
    let (engine, _db) = engine_with_db().await;

    assert!(engine.list_people().await.unwrap().is_empty());
    assert!(engine.list_planets().await.unwrap().is_empty());
    assert!(engine.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn reference_lookups_return_requested_id() {
    let (engine, _db) = seeded_engine().await;
    engine.create_planet("Hoth", None, None).await.unwrap();

    let hoth = engine.planet(2).await.unwrap();
    assert_eq!(hoth.id, 2);
    assert_eq!(hoth.name, "Hoth");
    assert_eq!(hoth.climate, None);

    let luke = engine.person(1).await.unwrap();
    assert_eq!(luke.name, "Luke Skywalker");
    assert_eq!(luke.eye_color.as_deref(), Some("blue"));

    let planets = engine.list_planets().await.unwrap();
    assert_eq!(
        planets.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![1, 2]
    );
}

#[tokio::test]
async fn missing_reference_rows_are_not_found() {
    let (engine, _db) = seeded_engine().await;

    assert_eq!(
        engine.planet(42).await,
        Err(EngineError::NotFound(Resource::Planet))
    );
    assert_eq!(
        engine.person(42).await,
        Err(EngineError::NotFound(Resource::Person))
    );
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let (engine, _db) = seeded_engine().await;

    let err = engine
        .create_user("luke@rebellion.org", "other", false)
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::ExistingKey("luke@rebellion.org".to_string()));
    assert_eq!(engine.list_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn favorites_of_missing_user_are_not_found() {
    let (engine, _db) = engine_with_db().await;

    assert_eq!(
        engine.list_favorites(principal()).await,
        Err(EngineError::NotFound(Resource::User))
    );
}

#[tokio::test]
async fn favorite_planet_is_added_once() {
    let (engine, _db) = seeded_engine().await;

    let favorite = engine.add_favorite_planet(principal(), 1).await.unwrap();
    assert_eq!(favorite.user_id, 1);
    assert_eq!(favorite.target, FavoriteTarget::Planet(1));

    assert_eq!(
        engine.add_favorite_planet(principal(), 1).await,
        Err(EngineError::ExistingFavorite)
    );
    assert_eq!(engine.list_favorites(principal()).await.unwrap().len(), 1);
}

#[tokio::test]
async fn same_id_as_planet_and_person_are_distinct_favorites() {
    let (engine, _db) = seeded_engine().await;

    engine.add_favorite_planet(principal(), 1).await.unwrap();
    engine.add_favorite_person(principal(), 1).await.unwrap();
    engine.create_planet("Dagobah", Some("murky"), None).await.unwrap();
    engine.add_favorite_planet(principal(), 2).await.unwrap();

    let favorites = engine.list_favorites(principal()).await.unwrap();
    let targets: Vec<_> = favorites.iter().map(|f| f.target).collect();
    assert_eq!(
        targets,
        vec![
            FavoriteTarget::Planet(1),
            FavoriteTarget::Person(1),
            FavoriteTarget::Planet(2),
        ]
    );
}

#[tokio::test]
async fn favorite_of_missing_target_is_not_found() {
    let (engine, _db) = seeded_engine().await;

    assert_eq!(
        engine.add_favorite_planet(principal(), 9).await,
        Err(EngineError::NotFound(Resource::Planet))
    );
    assert_eq!(
        engine.add_favorite_person(principal(), 9).await,
        Err(EngineError::NotFound(Resource::Person))
    );
    assert!(engine.list_favorites(principal()).await.unwrap().is_empty());
}

#[tokio::test]
async fn favorite_for_missing_user_is_not_found() {
    let (engine, _db) = seeded_engine().await;

    assert_eq!(
        engine.add_favorite_planet(Principal::new(5), 1).await,
        Err(EngineError::NotFound(Resource::User))
    );
}

#[tokio::test]
async fn remove_favorite_twice_reports_not_found() {
    let (engine, _db) = seeded_engine().await;
    engine.add_favorite_person(principal(), 1).await.unwrap();

    engine.remove_favorite_person(principal(), 1).await.unwrap();
    assert_eq!(
        engine.remove_favorite_person(principal(), 1).await,
        Err(EngineError::NotFound(Resource::Favorite))
    );
    assert!(engine.list_favorites(principal()).await.unwrap().is_empty());
}

#[tokio::test]
async fn remove_only_touches_the_matching_target() {
    let (engine, _db) = seeded_engine().await;
    engine.add_favorite_planet(principal(), 1).await.unwrap();
    engine.add_favorite_person(principal(), 1).await.unwrap();

    engine.remove_favorite_planet(principal(), 1).await.unwrap();

    let favorites = engine.list_favorites(principal()).await.unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].target, FavoriteTarget::Person(1));
}

#[tokio::test]
async fn favorites_are_scoped_to_the_principal() {
    let (engine, _db) = seeded_engine().await;
    engine
        .create_user("leia@rebellion.org", "password", true)
        .await
        .unwrap();
    engine.add_favorite_planet(Principal::new(2), 1).await.unwrap();

    assert!(engine.list_favorites(principal()).await.unwrap().is_empty());
    assert_eq!(
        engine.remove_favorite_planet(principal(), 1).await,
        Err(EngineError::NotFound(Resource::Favorite))
    );
    assert_eq!(
        engine.list_favorites(Principal::new(2)).await.unwrap().len(),
        1
    );
}

#[tokio::test]
async fn schema_rejects_favorite_with_two_targets() {
    let (_engine, db) = seeded_engine().await;
    let backend = db.get_database_backend();

    let res = db
        .execute(Statement::from_sql_and_values(
            backend,
            "INSERT INTO favorites (user_id, planet_id, people_id) VALUES (?, ?, ?)",
            vec![1.into(), 1.into(), 1.into()],
        ))
        .await;
    assert!(res.is_err());

    let res = db
        .execute(Statement::from_sql_and_values(
            backend,
            "INSERT INTO favorites (user_id) VALUES (?)",
            vec![1.into()],
        ))
        .await;
    assert!(res.is_err());
}
