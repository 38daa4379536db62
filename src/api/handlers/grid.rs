use actix_web::{get, web, HttpResponse, Responder};

use crate::{
    logic::game::{play, GameError},
    models::request::{GridQuery, GridResponse},
};

/// GET /api/grid
/// Deals a shuffled grid of paired memory cards.
#[utoipa::path(
    get,
    path = "/api/grid",
    tag = "grid",
    params(GridQuery),
    responses(
        (status = 200, description = "A freshly shuffled grid of card pairs", body = GridResponse),
        (status = 400, description = "Invalid `rows` or `columns`", body = GridResponse),
        (status = 500, description = "The grid could not be generated", body = GridResponse),
    )
)]
#[get("/grid")]
pub async fn get_grid(query: web::Query<GridQuery>) -> impl Responder {
    let query = query.into_inner();

    match play(query.rows.as_deref(), query.columns.as_deref()) {
        Ok(grid) => HttpResponse::Ok().json(GridResponse::success(grid)),
        Err(e) => {
            match &e {
                GameError::Validation(_) => log::warn!("Rejected grid request: {e}"),
                GameError::Generator(_) => log::error!("Grid generation failed: {e}"),
            }
            HttpResponse::build(e.status_code()).json(GridResponse::failure(e.to_string()))
        }
    }
}
