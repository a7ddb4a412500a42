use api_types::Message;
use axum::{
    Json, Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{MethodRouter, get, post},
};

use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::{favorites, people, planets, users};
use engine::{Engine, Principal};

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
    /// Identity every favorites request acts as.
    pub principal: Principal,
}

impl ServerState {
    pub fn new(engine: Engine, principal: Principal) -> Self {
        Self {
            engine: Arc::new(engine),
            principal,
        }
    }
}

/// Attaches the request principal as an extension.
///
/// There is no login, so this is always the configured principal.
async fn identity(State(state): State<ServerState>, mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(state.principal);
    next.run(request).await
}

async fn not_found() -> (StatusCode, Json<Message>) {
    (StatusCode::NOT_FOUND, Json(Message::new("Not found")))
}

async fn method_not_allowed() -> (StatusCode, Json<Message>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(Message::new("Method not allowed")),
    )
}

fn routes() -> Vec<(&'static str, MethodRouter<ServerState>)> {
    vec![
        ("/people", get(people::list)),
        ("/people/{id}", get(people::get)),
        ("/planets", get(planets::list)),
        ("/planets/{id}", get(planets::get)),
        ("/users", get(users::list)),
        ("/users/favorites", get(users::favorites)),
        (
            "/favorite/planet/{id}",
            post(favorites::add_planet).delete(favorites::remove_planet),
        ),
        (
            "/favorite/people/{id}",
            post(favorites::add_person).delete(favorites::remove_person),
        ),
    ]
}

pub fn router(state: ServerState) -> Router {
    // Trailing slashes are accepted on every route.
    let router = routes()
        .into_iter()
        .fold(Router::new(), |router, (path, handler)| {
            router
                .route(path, handler.clone())
                .route(&format!("{path}/"), handler)
        });

    router
        .route_layer(middleware::from_fn_with_state(state.clone(), identity))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    principal: Principal,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);
    tracing::info!("Acting as user {}", principal.user_id);

    let state = ServerState::new(engine, principal);

    axum::serve(listener, router(state)).await
}
