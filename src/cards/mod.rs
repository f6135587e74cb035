pub mod card;
pub use card::*;

pub mod error;
pub use error::*;

pub mod evaluator;
pub use evaluator::*;

pub mod hand;
pub use hand::*;

pub mod kicks;
pub use kicks::*;

pub mod rank;
pub use rank::*;

pub mod ranking;
pub use ranking::*;

pub mod ranks;
pub use ranks::*;

pub mod showdown;
pub use showdown::*;

pub mod strength;
pub use strength::*;

pub mod suit;
pub use suit::*;

#[cfg(test)]
mod tests;
