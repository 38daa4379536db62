use actix_web::{error::InternalError, web, HttpResponse};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{handlers::grid::get_grid, openapi::ApiDoc};
use crate::models::request::GridResponse;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(query_config())
        .service(web::scope("/api").service(get_grid))
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
}

/// Answers query strings that cannot be deserialised with the failure envelope.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let message = format!("Query string error: {err}");
        log::warn!("Rejected grid request: {message}");
        InternalError::from_response(err, HttpResponse::BadRequest().json(GridResponse::failure(message)))
            .into()
    })
}
