use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod auth;
mod config;
mod db;
mod error;
mod handlers;
mod models;
mod store;

use config::Config;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wellness_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Config::from_env();

    // Database
    let db = db::create_pool(&config.database_url).await;

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&db)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations applied");

    let state = AppState { db };

    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        // User directory & signup
        .route("/users", get(handlers::users::list_users))
        .route("/users", post(handlers::users::create_user))
        .route("/users/:id", get(handlers::users::get_user))
        // Session lifecycle; logout and get-session resolve identity
        // themselves so an absent session is a 204, not a 401
        .route("/login", post(handlers::session::login))
        .route("/logout", delete(handlers::session::logout))
        .route("/get-session", get(handlers::session::get_session));

    let protected_routes = Router::new()
        // Journals
        .route("/journals", get(handlers::journals::list_journals))
        .route("/journals", post(handlers::journals::create_journal))
        .route("/journals/:id", put(handlers::journals::update_journal))
        .route("/journals/:id", delete(handlers::journals::delete_journal))
        // Mood ratings (one per calendar day, upsert semantics)
        .route("/mood-ratings", get(handlers::moods::list_moods))
        .route("/mood-ratings", post(handlers::moods::submit_mood))
        // Medications
        .route("/medications", get(handlers::medications::list_medications))
        .route("/medications", post(handlers::medications::create_medication))
        .route(
            "/medications/:id",
            put(handlers::medications::update_medication),
        )
        .route(
            "/medications/:id",
            delete(handlers::medications::delete_medication),
        )
        // Todos
        .route("/todos", get(handlers::todos::list_todos))
        .route("/todos", post(handlers::todos::create_todo))
        .route("/todos/:id", put(handlers::todos::update_todo))
        .route("/todos/:id", delete(handlers::todos::delete_todo))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::middleware::require_auth,
        ));

    let cors = CorsLayer::new()
        .allow_origin(
            config
                .frontend_url
                .parse::<axum::http::HeaderValue>()
                .unwrap(),
        )
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true);

    let app = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = config.listen_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
