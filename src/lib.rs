//! Five-card poker hand ranking.
//!
//! Hands are normalized into descending rank lists (with the ace playing
//! low in a wheel), classified into one of nine categories by trying the
//! strongest category first, and compared by the resulting [`Strength`].
//!
//! ## Core Types
//!
//! - [`Card`]: A single `(Rank, Suit)` pair
//! - [`Hand`]: Exactly five distinct cards
//! - [`Ranks`]: A hand's values, sorted high to low
//! - [`Strength`]: [`Ranking`] plus [`Kickers`], totally ordered
//! - [`Showdown`]: Hands ordered strongest first
//!
//! ## Operations
//!
//! - [`card_rank`], [`card_ranks`], [`hand_rank`]
//! - [`sort_hands`], [`winner`], [`winners`]
pub mod cards;

pub use cards::*;

/// Initialize terminal logging at the given level.
/// Location, target, and thread noise is switched off.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    if let Err(e) = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("logger already initialized: {}", e);
    }
}
