use std::net::SocketAddr;
use team_roster::{AppState, Config, auth::Credentials, load_data, models::Role, router};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();

    let roster = load_data(&config.data_path).await;
    info!(
        trainees = roster.count(Role::Trainee),
        completed = roster.count(Role::Completed),
        officials = roster.count(Role::Official),
        path = %config.data_path.display(),
        "roster loaded"
    );

    let credentials = Credentials {
        login: config.admin_login,
        password: config.admin_password,
    };
    let app = router(AppState::new(config.data_path, credentials, roster));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
