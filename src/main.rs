mod config;
mod db;
mod dtos;
mod error;
mod handler;
mod mail;
mod models;
mod routes;
mod service;

use std::sync::Arc;

use axum::http::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    HeaderValue, Method,
};
use config::Config;
use dotenv::dotenv;
use routes::create_router;
use sqlx::sqlite::SqlitePoolOptions;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing_subscriber::filter::LevelFilter;

use crate::db::db::DBClient;
use crate::mail::sendmail::{Mailer, SmtpMailer};

// Import the services
use service::{
    business_service::BusinessService, community_service::CommunityService,
    job_service::JobService, product_service::ProductService,
};

#[derive(Debug, Clone)]
pub struct AppState {
    pub env: Config,
    pub db_client: Arc<DBClient>,
    // Services
    pub job_service: Arc<JobService>,
    pub business_service: Arc<BusinessService>,
    pub community_service: Arc<CommunityService>,
    pub product_service: Arc<ProductService>,
}

impl AppState {
    pub fn new(db_client: DBClient, config: Config, mailer: Arc<dyn Mailer>) -> Self {
        let db_client_arc = Arc::new(db_client);

        // Initialize all services
        let job_service = Arc::new(JobService::new(db_client_arc.clone(), mailer));
        let business_service = Arc::new(BusinessService::new(db_client_arc.clone()));
        let community_service = Arc::new(CommunityService::new(db_client_arc.clone()));
        let product_service = Arc::new(ProductService::new(db_client_arc.clone()));

        Self {
            env: config,
            db_client: db_client_arc,
            job_service,
            business_service,
            community_service,
            product_service,
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .init();

    dotenv().ok();

    let config = Config::init();

    // Connect to the document store
    let pool = match SqlitePoolOptions::new()
        .max_connections(20)
        .connect(&config.database_url)
        .await
    {
        Ok(pool) => {
            println!("✅ Connection to the database is successful!");
            pool
        }
        Err(err) => {
            println!("🔥 Failed to connect to the database: {:?}", err);
            std::process::exit(1);
        }
    };

    let db_client = DBClient::new(pool);
    if let Err(err) = db_client.init_collections().await {
        println!("🔥 Failed to prepare document collections: {:?}", err);
        std::process::exit(1);
    }

    let allowed_origins = vec![
        config.app_url.parse::<HeaderValue>().unwrap(),
        "http://localhost:3000".parse::<HeaderValue>().unwrap(),
        "http://localhost:8000".parse::<HeaderValue>().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE])
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ]);

    let mailer = Arc::new(SmtpMailer::from_config(&config));
    let app_state = Arc::new(AppState::new(db_client, config.clone(), mailer));

    let app = create_router(app_state.clone()).layer(cors);

    println!("🚀 Server is running on http://localhost:{}", config.port);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", &config.port))
        .await
        .unwrap();

    axum::serve(listener, app).await.unwrap();
}
