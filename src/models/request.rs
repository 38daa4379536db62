use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::{IntoParams, ToSchema};

use crate::models::grid::CardGrid;

/// Query parameters of `GET /api/grid`.
///
/// Both values are kept as raw strings so that missing, empty or non-numeric
/// input reaches the validator instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GridQuery {
    /// Number of rows, an integer between 1 and 6.
    pub rows: Option<String>,
    /// Number of columns, an integer between 1 and 6.
    pub columns: Option<String>,
}

/// Response metadata. On failure only `success` and `message` are present.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GridMeta {
    pub success: bool,
    pub message: Option<String>,
    pub card_count: Option<usize>,
    pub unique_card_count: Option<usize>,
    pub unique_cards: Option<Vec<String>>,
}

/// Response payload. Serialises as `{}` when the request failed.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GridData {
    pub cards: Option<Vec<Vec<String>>>,
}

/// Envelope returned by the grid endpoint for both outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GridResponse {
    pub meta: GridMeta,
    pub data: GridData,
}

impl GridResponse {
    pub fn success(grid: CardGrid) -> Self {
        Self {
            meta: GridMeta {
                success: true,
                message: None,
                card_count: Some(grid.card_count()),
                unique_card_count: Some(grid.unique_card_count()),
                unique_cards: Some(grid.unique_cards),
            },
            data: GridData {
                cards: Some(grid.cards),
            },
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            meta: GridMeta {
                success: false,
                message: Some(message.into()),
                card_count: None,
                unique_card_count: None,
                unique_cards: None,
            },
            data: GridData::default(),
        }
    }
}
