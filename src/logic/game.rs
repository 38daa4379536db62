use actix_web::http::StatusCode;
use thiserror::Error;

use crate::logic::{
    generator::{generate, GeneratorError},
    validator::{validate, ValidationError},
};
use crate::models::grid::CardGrid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

impl GameError {
    /// Bad input is the caller's fault; a generator failure is ours.
    pub fn status_code(&self) -> StatusCode {
        match self {
            GameError::Validation(_) => StatusCode::BAD_REQUEST,
            GameError::Generator(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Validates the raw request values and, if they pass, deals a fresh grid.
pub fn play(rows: Option<&str>, columns: Option<&str>) -> Result<CardGrid, GameError> {
    let dimensions = validate(rows, columns)?;
    let grid = generate(dimensions.rows, dimensions.columns)?;
    log::debug!(
        "Dealt a {} x {} grid with {} unique cards",
        grid.rows,
        grid.columns,
        grid.unique_card_count()
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_valid_request() {
        let grid = play(Some("4"), Some("6")).unwrap();
        assert_eq!(grid.rows, 4);
        assert_eq!(grid.columns, 6);
        assert_eq!(grid.card_count(), 24);
        assert_eq!(grid.unique_card_count(), 12);
    }

    #[test]
    fn test_play_invalid_request_is_bad_request() {
        let err = play(Some("3"), Some("5")).unwrap_err();
        assert_eq!(err, GameError::Validation(ValidationError::NeitherEven));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_string(),
            "Either `rows` or `columns` needs to be an even number."
        );
    }

    #[test]
    fn test_generator_error_is_internal() {
        let err = GameError::from(generate(0, 2).unwrap_err());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
