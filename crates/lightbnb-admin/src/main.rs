//! LightBnB database administration binary.
//!
//! Loads configuration, initializes structured logging, opens the database
//! pool, applies pending migrations, and loads JSON fixtures when a seed
//! directory is configured.

mod config;

use std::path::Path;

use tracing_subscriber::EnvFilter;

fn resolve_config_path() -> (Option<String>, &'static str) {
    if let Some(path) = std::env::args()
        .nth(1)
        .filter(|value| !value.trim().is_empty())
    {
        return (Some(path), "cli-arg");
    }

    if let Ok(path) = std::env::var("LIGHTBNB_CONFIG_PATH") {
        if !path.trim().is_empty() {
            return (Some(path), "env-var");
        }
    }

    (None, "default")
}

fn main() {
    let (resolved_config_path, config_source) = resolve_config_path();
    let selected_config_path = resolved_config_path.as_deref().or(Some("config.toml"));

    let config = config::load_config(selected_config_path)
        .expect("failed to load configuration");

    let filter =
        EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.logging.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    tracing::info!(
        source = config_source,
        path = selected_config_path.unwrap_or("<none>"),
        "resolved startup configuration path"
    );

    let pool = lightbnb_db::create_pool(&config.database)
        .expect("failed to create database pool, check database.database in config");

    let conn = pool
        .get()
        .expect("failed to get database connection for migrations");
    let applied = lightbnb_db::run_migrations(&conn).expect("failed to run database migrations");
    if applied > 0 {
        tracing::info!(count = applied, "applied database migrations");
    }

    if let Some(dir) = config.seed.dir.as_deref() {
        let summary = lightbnb_queries::seed_from_dir(&conn, Path::new(dir))
            .expect("failed to seed fixtures");
        tracing::info!(
            dir,
            users = summary.users,
            properties = summary.properties,
            "fixtures loaded"
        );
    }

    tracing::info!(database = %config.database.database, "database ready");
}
