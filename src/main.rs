use actix_web::{middleware, App, HttpServer};
use memory_game::config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let bind_addr = config.bind_addr();
    log::info!("🃏 Memory Game API started at http://{bind_addr}");
    log::info!("   GET  /api/grid?rows={{rows}}&columns={{columns}}");
    log::info!("   📖 Swagger UI → http://{bind_addr}/swagger-ui/");
    log::info!("   📌 OpenAPI spec → http://{bind_addr}/api-docs/openapi.json");

    // Query parsing errors are answered by the handler registered in `configure`.
    HttpServer::new(|| {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(memory_game::api::routes::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
