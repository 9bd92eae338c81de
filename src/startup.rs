//! Application Startup
//!
//! Application state, explicit composition, and server initialization.
//! There is no dependency-injection container: `compose` is the single
//! place where repositories, the command bus, and the query service are
//! wired together.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;

use crate::application::{CommandBus, LoansQueryService};
use crate::config::Settings;
use crate::domain::{LoanRepository, UserRepository};
use crate::infrastructure::database;
use crate::infrastructure::repositories::{PgLoanRepository, PgUserRepository};
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub loans: Arc<dyn LoanRepository>,
    pub users: Arc<dyn UserRepository>,
    pub bus: Arc<CommandBus>,
    pub queries: Arc<LoansQueryService>,
    pub settings: Arc<Settings>,
}

/// Build the application state from concrete repository instances.
///
/// The command bus and query service receive their collaborators by
/// reference-counted ownership here; handlers only ever see the wired
/// state.
pub fn compose(
    loans: Arc<dyn LoanRepository>,
    users: Arc<dyn UserRepository>,
    settings: Arc<Settings>,
) -> AppState {
    let bus = Arc::new(CommandBus::new(loans.clone(), users.clone()));
    let queries = Arc::new(LoansQueryService::new(loans.clone()));

    AppState {
        loans,
        users,
        bus,
        queries,
        settings,
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        // Create database pool
        let db = database::create_pool(&settings.database).await?;
        tracing::info!("Database connection pool created");

        database::run_migrations(&db).await?;
        tracing::info!("Database migrations applied");

        let loans: Arc<dyn LoanRepository> = Arc::new(PgLoanRepository::new(db.clone()));
        let users: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(db));

        let settings = Arc::new(settings);
        let state = compose(loans, users, settings.clone());

        crate::presentation::http::handlers::health::init_server_start();

        // Build router with middleware
        let router = routes::create_router(state)
            .layer(logging::create_trace_layer())
            .layer(cors::create_cors_layer(&settings.cors));

        // Bind to address
        let addr: SocketAddr = settings.server_addr().parse()?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}
