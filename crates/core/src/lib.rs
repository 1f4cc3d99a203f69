//! Card-hand session engine. Keep this crate free of IO and platform concerns.

pub mod action;
pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod persistence;
pub mod rng;
pub mod sanitize;
pub mod session;
pub mod shuffle;
pub mod state;
pub mod validate;

pub use action::*;
pub use cards::*;
pub use config::*;
pub use deck::*;
pub use engine::*;
pub use persistence::*;
pub use rng::*;
pub use sanitize::*;
pub use session::*;
pub use shuffle::*;
pub use state::*;
pub use validate::*;
