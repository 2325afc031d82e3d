//! Lemonade - Terminal Lemonade Game
//!
//! A terminal rendition of the four-step lemonade game: tap the lemon
//! tree, squeeze the lemon, drink the lemonade, start over.

pub mod domain;
pub mod application;
pub mod presentation;

pub use domain::*;
pub use application::*;
