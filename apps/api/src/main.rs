use std::sync::Arc;

use roster_api::api::{build_router, AppState};
use roster_api::application::RosterService;
use roster_api::auth::admin::AdminAccount;
use roster_api::config::Config;
use roster_api::infrastructure::database;
use roster_api::infrastructure::repositories::{PostgresPlayerRepository, PostgresTeamRepository};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = Config::from_env().expect("Invalid configuration");

    let roster = match &config.database_url {
        Some(url) => {
            let pool = database::connect(url, config.database_max_connections)
                .await
                .expect("Failed to connect to database");
            RosterService::new(
                Arc::new(PostgresTeamRepository::new(pool.clone())),
                Arc::new(PostgresPlayerRepository::new(pool)),
            )
        }
        None => {
            tracing::warn!("DATABASE_URL not set, roster is kept in memory");
            RosterService::in_memory()
        }
    };

    let admin = AdminAccount::new(
        config.admin_username.clone(),
        &config.admin_password,
        config.bcrypt_cost,
    )
    .expect("Failed to hash administrator password");

    let app = build_router(AppState::new(roster, admin, &config.jwt_secret));

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
