//! Player, event and match history service.
//!
//! Players trigger events during matches; every occurrence is stored as an
//! event-history row so both a player's timeline and a match's event list can
//! be read back.

pub mod config;
pub mod context;
pub mod db;
pub mod http;
pub mod metrics;
