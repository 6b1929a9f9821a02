//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod joke_card;

pub use joke_card::JokeCard;
