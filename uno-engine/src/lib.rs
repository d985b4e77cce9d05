//! A turn-based UNO engine: deck lifecycle with reshuffling, legality
//! and effect resolution, a single-writer turn engine, and swappable
//! computer strategies from uniformly random up to a remote-advisory
//! tier that degrades to a local heuristic when the service misbehaves.
//!
//! Rendering, menus and keyboard handling are a frontend's job; the
//! engine only exposes snapshots to read and decisions to submit.

pub mod card;
pub mod constants;
pub mod deck;
pub mod error;
pub mod game;
pub mod player;
pub mod rules;
pub mod state;
pub mod strategy;
pub mod turn;
