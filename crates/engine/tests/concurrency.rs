use std::sync::Arc;

use sea_orm::Database;
use tokio::task::JoinSet;
use uuid::Uuid;

use engine::{Engine, EngineError, Principal, Resource};
use migration::MigratorTrait;

const CALLERS: usize = 16;

/// Engine over a fresh sqlite file, so calls run on separate pooled connections.
async fn engine_with_file_db() -> (Arc<Engine>, std::path::PathBuf) {
    let root = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/test_dbs");
    std::fs::create_dir_all(&root).unwrap();

    let path = root.join(format!("engine_{}.db", Uuid::new_v4()));
    let db = Database::connect(migration::sqlite_url(path.display()))
        .await
        .unwrap();
    migration::Migrator::up(&db, None).await.unwrap();

    let engine = Engine::builder().database(db).build().await.unwrap();
    engine
        .create_user("luke@rebellion.org", "password", true)
        .await
        .unwrap();
    engine
        .create_planet("Tatooine", Some("arid"), Some("desert"))
        .await
        .unwrap();

    (Arc::new(engine), path)
}

#[derive(Default, Debug, PartialEq, Eq)]
struct Outcomes {
    ok: usize,
    existing: usize,
    not_found: usize,
    other: Vec<String>,
}

impl Outcomes {
    fn record<T>(&mut self, res: Result<T, EngineError>) {
        match res {
            Ok(_) => self.ok += 1,
            Err(EngineError::ExistingFavorite) => self.existing += 1,
            Err(EngineError::NotFound(Resource::Favorite)) => self.not_found += 1,
            Err(err) => self.other.push(err.to_string()),
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_identical_adds_store_one_favorite() {
    let (engine, _path) = engine_with_file_db().await;
    let principal = Principal::new(1);

    let mut tasks = JoinSet::new();
    for _ in 0..CALLERS {
        let engine = engine.clone();
        tasks.spawn(async move { engine.add_favorite_planet(principal, 1).await });
    }

    let mut outcomes = Outcomes::default();
    while let Some(res) = tasks.join_next().await {
        outcomes.record(res.unwrap());
    }

    assert_eq!(
        outcomes,
        Outcomes {
            ok: 1,
            existing: CALLERS - 1,
            ..Default::default()
        }
    );
    assert_eq!(engine.list_favorites(principal).await.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_identical_removes_delete_once() {
    let (engine, _path) = engine_with_file_db().await;
    let principal = Principal::new(1);
    engine.add_favorite_planet(principal, 1).await.unwrap();

    let mut tasks = JoinSet::new();
    for _ in 0..CALLERS {
        let engine = engine.clone();
        tasks.spawn(async move { engine.remove_favorite_planet(principal, 1).await });
    }

    let mut outcomes = Outcomes::default();
    while let Some(res) = tasks.join_next().await {
        outcomes.record(res.unwrap());
    }

    assert_eq!(
        outcomes,
        Outcomes {
            ok: 1,
            not_found: CALLERS - 1,
            ..Default::default()
        }
    );
    assert!(engine.list_favorites(principal).await.unwrap().is_empty());
}
