use actix_web::{App, HttpServer, middleware, web};

use roombook::auth::jwt::JwtService;
use roombook::auth::rate_limit::RateLimiter;
use roombook::auth::{password, validate};
use roombook::email::Mailer;
use roombook::{db, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    // Ensure data directory exists
    std::fs::create_dir_all("data").expect("Failed to create data directory");

    // Initialize database
    let database_path =
        std::env::var("DATABASE_PATH").unwrap_or_else(|_| "data/roombook.db".to_string());
    let pool = db::init_pool(&database_path);
    db::run_migrations(&pool);

    // Seed admin user and demo rooms if empty
    let admin_password =
        std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string());
    if let Some(err) = validate::validate_password(&admin_password) {
        log::warn!("ADMIN_PASSWORD is weak: {err}");
    }
    let admin_hash =
        password::hash_password(&admin_password).expect("Failed to hash admin password");
    db::seed(&pool, &admin_hash);

    let jwt = JwtService::from_env();
    let limiter = RateLimiter::new();
    let mailer = Mailer::from_env().await;

    log::info!("Starting server at http://127.0.0.1:8080");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(jwt.clone()))
            .app_data(web::Data::new(limiter.clone()))
            .app_data(web::Data::new(mailer.clone()))
            .configure(routes::configure)
    })
    .bind("127.0.0.1:8080")?
    .run()
    .await
}
