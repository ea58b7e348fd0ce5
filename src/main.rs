use actix_cors::Cors;
use actix_files::Files;
use actix_web::{web, App, HttpServer};
use env_logger::Env;

use taskdesk::config::Config;
use taskdesk::db::{self, ContactRepository, TaskRepository, UserRepository};
use taskdesk::error::AppError;
use taskdesk::middleware::RequestLogger;
use taskdesk::routes;
use taskdesk::services::{AuthService, ContactService, TaskService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    env_logger::Builder::from_env(Env::default().default_filter_or(&config.log_level)).init();

    let pool = db::init_pool(&config.database_url)
        .await
        .expect("Failed to connect to database");

    let auth_service = AuthService::new(UserRepository::new(pool.clone()), config.jwt_secret.clone());
    let task_service = TaskService::new(TaskRepository::new(pool.clone()));
    let contact_service = ContactService::new(ContactRepository::new(pool));

    log::info!("Server started on http://localhost:{}", config.port);
    log::info!("Serving files from: {}", config.static_dir.display());
    log::info!("Environment: {}", config.environment);

    let port = config.port;
    let static_dir = config.static_dir.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(RequestLogger)
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(auth_service.clone()))
            .app_data(web::Data::new(task_service.clone()))
            .app_data(web::Data::new(contact_service.clone()))
            .app_data(web::JsonConfig::default().error_handler(|_, _| {
                AppError::BadRequest("Invalid request payload".into()).into()
            }))
            .service(
                web::scope("/api")
                    .configure(|cfg| routes::configure(cfg, auth_service.clone())),
            )
            .service(Files::new("/", static_dir.clone()).index_file("index.html"))
    })
    .bind(("0.0.0.0", port))?
    // Drain in-flight requests for up to 10s on SIGINT/SIGTERM.
    .shutdown_timeout(10)
    .run()
    .await
}
