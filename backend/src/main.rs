mod config;
mod repository;
mod services;

use actix_web::error::InternalError;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use common::responses::ApiResponse;
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::info;
use mime_guess::from_path;

use crate::config::AppConfig;
use crate::repository::Db;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let app_config = AppConfig::from_env();
    let db = Db::new(&app_config.db_path);

    info!(
        "Server is running on http://{}:{}",
        app_config.host, app_config.port
    );

    HttpServer::new(move || {
        // An unparsable JSON body answers with the same envelope as every
        // other failure instead of actix's plain-text default.
        let json_config = web::JsonConfig::default().error_handler(|err, _req| {
            let body = ApiResponse::<()>::failure(err.to_string());
            InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
        });

        App::new()
            .app_data(json_config)
            .app_data(web::Data::new(db.clone()))
            .service(services::products::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
    .bind((app_config.host.as_str(), app_config.port))?
    .run()
    .await
}
