/// Jobboard Server - job-board user backend
use anyhow::Context;
use clap::{Parser, Subcommand};
use jobboard_core::User;
use jobboard_server::{
    config::ServerConfig,
    router::create_router,
    services::{AuthService, UserService},
    state::AppState,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "jobboard-server")]
#[command(about = "Job-board user service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Create a new user
    AddUser {
        /// Username
        #[arg(short, long)]
        username: String,
        /// Email address
        #[arg(short, long)]
        email: String,
        /// Password
        #[arg(short, long)]
        password: String,
        /// Grant the administrator role
        #[arg(long)]
        admin: bool,
    },
    /// List all users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jobboard_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => {
            serve().await?;
        }
        Commands::AddUser {
            username,
            email,
            password,
            admin,
        } => {
            add_user(&username, &email, &password, admin).await?;
        }
        Commands::ListUsers => {
            list_users().await?;
        }
    }

    Ok(())
}

async fn serve() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;
    config.validate()?;

    tracing::info!("Starting jobboard server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let pool = jobboard_storage::create_pool(&config.storage.database_url).await?;
    jobboard_storage::run_migrations(&pool).await?;
    tracing::info!("Database connected");

    // Initialize services
    let auth_service = Arc::new(AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_hours,
    ));
    let user_service = Arc::new(UserService::new(pool.clone()));
    tracing::info!("Services initialized");

    // Build application state and router
    let app_state = AppState::new(pool, user_service, auth_service);
    let app = create_router(app_state);

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn add_user(username: &str, email: &str, password: &str, admin: bool) -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    let pool = jobboard_storage::create_pool(&config.storage.database_url).await?;
    jobboard_storage::run_migrations(&pool).await?;

    let auth_service = AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_hours,
    );
    let password_hash = auth_service.hash_password(password)?;

    let user = jobboard_storage::users::save(
        &pool,
        User {
            id: None,
            username: username.to_string(),
            email: email.to_string(),
            is_admin: admin,
            created_at: None,
        },
    )
    .await?;

    let user_id = user.id.context("saved user has no id")?;
    jobboard_storage::users::set_password_hash(&pool, user_id, &password_hash).await?;

    println!("Created user {} ({})", user.username, user_id);

    Ok(())
}

async fn list_users() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    let pool = jobboard_storage::create_pool(&config.storage.database_url).await?;
    jobboard_storage::run_migrations(&pool).await?;

    let users = jobboard_storage::users::get_all(&pool).await?;

    println!("Users:");
    for user in users {
        let role = if user.is_admin { "admin" } else { "user" };
        println!(
            "  {} - {} <{}> ({})",
            user.id.unwrap_or_default(),
            user.username,
            user.email,
            role
        );
    }

    Ok(())
}
