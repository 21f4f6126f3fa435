use actix_web::{App, HttpServer, middleware, web};

use pre_atendimento::config::AppConfig;
use pre_atendimento::handlers;
use pre_atendimento::intake::FormIntake;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;
    let intake = web::Data::new(FormIntake::new(config.destination.clone()));
    let static_dir = config.static_dir.clone();

    log::info!("Starting server at http://{}", config.bind_addr);
    log::info!("Sending pré-atendimento messages to {}", intake.destination().as_str());

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(intake.clone())
            .service(actix_files::Files::new("/static", static_dir.clone()))
            .configure(handlers::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(handlers::not_found))
    })
    .bind(config.bind_addr)?
    .run()
    .await
}
