use rand::{seq::SliceRandom, Rng};
use thiserror::Error;

use crate::models::{
    card::{DECK_SIZE, FULL_DECK},
    grid::CardGrid,
    Matrix,
};

/// Raised when the generator is asked for a grid it cannot fill with pairs.
///
/// The validator keeps user input away from these cases, so reaching one
/// means a caller skipped validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("Unable to generate a {rows} x {columns} grid: {reason}.")]
    InvalidDimensions {
        rows: usize,
        columns: usize,
        reason: &'static str,
    },
}

/// A shuffled draw where every card in `unique_cards` appears exactly twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub unique_cards: Vec<&'static str>,
    pub cards: Vec<&'static str>,
}

/// Generates a grid of paired cards using the thread-local RNG.
pub fn generate(rows: usize, columns: usize) -> Result<CardGrid, GeneratorError> {
    generate_with_rng(rows, columns, &mut rand::thread_rng())
}

/// Generates a grid of paired cards, drawing randomness from `rng`.
pub fn generate_with_rng<R: Rng + ?Sized>(
    rows: usize,
    columns: usize,
    rng: &mut R,
) -> Result<CardGrid, GeneratorError> {
    let invalid = |reason: &'static str| GeneratorError::InvalidDimensions {
        rows,
        columns,
        reason,
    };
    if rows == 0 || columns == 0 {
        return Err(invalid("rows and columns must be positive"));
    }
    let card_count = rows
        .checked_mul(columns)
        .ok_or_else(|| invalid("too many cards requested"))?;
    check_card_count(card_count).map_err(invalid)?;

    let draw = draw_cards(card_count, rng)?;

    Ok(CardGrid {
        rows,
        columns,
        cards: lay_out(&draw.cards, rows, columns),
        unique_cards: draw.unique_cards.iter().map(|c| c.to_string()).collect(),
    })
}

/// Draws `card_count` cards (pairs included) from the full deck.
///
/// The deck is shuffled and the first `card_count / 2` cards become the unique
/// set. The set is doubled and shuffled again so matches are spread out.
pub fn draw_cards<R: Rng + ?Sized>(card_count: usize, rng: &mut R) -> Result<Draw, GeneratorError> {
    // A draw on its own is treated as a single row of cards.
    check_card_count(card_count).map_err(|reason| GeneratorError::InvalidDimensions {
        rows: 1,
        columns: card_count,
        reason,
    })?;
    let unique_count = card_count / 2;

    let mut deck = FULL_DECK.to_vec();
    deck.shuffle(rng);
    deck.truncate(unique_count);

    let mut cards = Vec::with_capacity(card_count);
    cards.extend_from_slice(&deck);
    cards.extend_from_slice(&deck);
    cards.shuffle(rng);

    Ok(Draw {
        unique_cards: deck,
        cards,
    })
}

fn check_card_count(card_count: usize) -> Result<(), &'static str> {
    if card_count % 2 != 0 {
        return Err("the grid would hold an odd number of cards");
    }
    if card_count / 2 > DECK_SIZE {
        return Err("not enough distinct cards in the deck");
    }
    Ok(())
}

/// Splits a draw into `rows` consecutive rows of `columns` cards each.
///
/// The draw must hold exactly `rows * columns` cards.
pub fn lay_out(cards: &[&str], rows: usize, columns: usize) -> Matrix<String> {
    debug_assert_eq!(cards.len(), rows * columns, "draw does not fill the grid");
    if columns == 0 {
        return Vec::new();
    }
    cards
        .chunks(columns)
        .map(|row| row.iter().map(|c| c.to_string()).collect())
        .collect()
}
