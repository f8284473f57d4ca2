//! Marketplace-wide constants.

/// Auction window: a bid landing at or after `start_time + AUCTION_DURATION_NS`
/// settles the auction instead of joining it, and `finish_auction` is
/// rejected with `TooEarly` before this much time has elapsed.
pub const AUCTION_DURATION_NS: u64 = 3 * 24 * 60 * 60 * 1_000_000_000;

/// An auction needs at least this many bids for the item to change hands at
/// settlement; below it the item goes back to the seller.
pub const MIN_BIDS_TO_SELL: u32 = 2;

/// Default page size for enumeration views.
pub const DEFAULT_QUERY_LIMIT: u64 = 50;

/// Hard cap per enumeration query.
pub const MAX_QUERY_LIMIT: u64 = 100;
