use anyhow::Result;
use reservafacil_front::application::{
    ports::{
        AuditLedgerPort, AuthenticationGatewayPort, RegistrationGatewayPort,
        ReservationCatalogPort,
    },
    services::ApplicationServices,
};
use reservafacil_front::config::AppConfig;
use reservafacil_front::infrastructure::gateways::{
    HttpAuditLedger, HttpAuthenticationGateway, HttpRegistrationGateway, HttpReservationCatalog,
    ServiceClient, build_http_client,
};
use reservafacil_front::presentation::http::{
    routes::build_router, state::HttpState, templates::load_templates,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let http = build_http_client()?;

    let audit_client = ServiceClient::new(http.clone(), config.audit_service_url());
    let auth_client = ServiceClient::new(http.clone(), config.auth_service_url());
    let registration_client = ServiceClient::new(http.clone(), config.registration_service_url());
    let reservations_client = ServiceClient::new(http, config.reservations_service_url());

    let ledger: Arc<AuditLedgerPort> = Arc::new(HttpAuditLedger::new(audit_client));
    let authenticator: Arc<AuthenticationGatewayPort> =
        Arc::new(HttpAuthenticationGateway::new(auth_client));
    let registrar: Arc<RegistrationGatewayPort> =
        Arc::new(HttpRegistrationGateway::new(registration_client));
    let catalog: Arc<ReservationCatalogPort> =
        Arc::new(HttpReservationCatalog::new(reservations_client));

    tracing::info!(
        audit = config.audit_service_url(),
        auth = config.auth_service_url(),
        registration = config.registration_service_url(),
        reservations = config.reservations_service_url(),
        "backend services configured"
    );

    let services = ApplicationServices::new(ledger, authenticator, registrar, catalog);
    let state = HttpState {
        services: Arc::new(services),
        templates: Arc::new(load_templates()?),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
