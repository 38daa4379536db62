use serde::{Deserialize, Serialize};

use crate::models::Matrix;

/// A freshly generated grid of paired cards.
///
/// Every label in `unique_cards` appears exactly twice in `cards`, which is laid
/// out row-major as `rows` rows of `columns` cards each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardGrid {
    pub rows: usize,
    pub columns: usize,
    pub cards: Matrix<String>,
    pub unique_cards: Vec<String>,
}

impl CardGrid {
    /// Total number of cards on the table, both halves of every pair included.
    pub fn card_count(&self) -> usize {
        self.cards.iter().map(Vec::len).sum()
    }

    pub fn unique_card_count(&self) -> usize {
        self.unique_cards.len()
    }

    /// Flattens the grid back into the draw it was laid out from.
    pub fn draw(&self) -> Vec<&str> {
        self.cards
            .iter()
            .flat_map(|row| row.iter().map(String::as_str))
            .collect()
    }
}
