//! NEP-297-style JSON events, emitted as single-line `EVENT_JSON:` logs.

mod builder;
mod market;
mod types;

pub use market::*;

pub(crate) const STANDARD: &str = "nft-marketplace";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

/// Event type for all marketplace state transitions.
pub(crate) const MARKET: &str = "market_update";
