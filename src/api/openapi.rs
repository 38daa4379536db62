use utoipa::OpenApi;

use crate::models::request::{GridData, GridMeta, GridResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Memory Game API",
        description = "Deals randomized grids of paired cards for a memory game. Every card in a grid has exactly one match.",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    paths(crate::api::handlers::grid::get_grid),
    components(schemas(GridMeta, GridData, GridResponse)),
    tags(
        (name = "grid", description = "Card grids — deal a shuffled grid of pairs"),
    )
)]
pub struct ApiDoc;
