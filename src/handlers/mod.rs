use actix_web::web;

pub mod pre_atendimento_handlers;

/// Attach the intake routes. Called once per `App`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(pre_atendimento_handlers::form_page))
        .route("/pre-atendimento", web::post().to(pre_atendimento_handlers::submit))
        .route("/api/pre-atendimento", web::post().to(pre_atendimento_handlers::api_submit));
}

pub async fn not_found() -> actix_web::HttpResponse {
    let html = include_str!("../../templates/errors/404.html");
    actix_web::HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
