//! Typed error handling for the marketplace contract.
//!
//! Uses `#[derive(near_sdk::FunctionError)]` from the NEAR SDK to enable
//! `#[handle_result]` on public methods. When a method returns
//! `Err(MarketplaceError::Xxx)`, the SDK calls `env::panic_str()` with the
//! Display message — same on-wire behaviour as raw panics, but with
//! structured, testable codes. An `Err` aborts the whole transaction, so
//! no partial state change is ever observable.

use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(borsh, json)]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum MarketplaceError {
    /// Caller lacks ownership or operator rights for the action.
    NotAuthorized(String),
    /// No active fixed-price listing for the item.
    ListingNotFound(String),
    /// No active auction for the item.
    AuctionNotFound(String),
    /// Fixed-price payment differs from the listed price (either direction).
    WrongAmount(String),
    /// First bid does not strictly exceed the start price.
    BelowStartPrice(String),
    /// Bid does not strictly exceed the current highest bid.
    BelowHighestBid(String),
    /// Settlement attempted before the auction window elapsed.
    TooEarly(String),
    /// The registry refused to move the item.
    TransferRejected(String),
    /// Item id was never issued.
    UnknownItem(String),
    /// Invalid parameters from the caller.
    InvalidInput(String),
    /// Operation not allowed given current contract state.
    InvalidState(String),
    /// Internal invariant violation (should never happen).
    InternalError(String),
}

impl std::fmt::Display for MarketplaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAuthorized(msg) => write!(f, "Not authorized: {}", msg),
            Self::ListingNotFound(msg) => write!(f, "Listing not found: {}", msg),
            Self::AuctionNotFound(msg) => write!(f, "Auction not found: {}", msg),
            Self::WrongAmount(msg) => write!(f, "Wrong amount: {}", msg),
            Self::BelowStartPrice(msg) => write!(f, "Below start price: {}", msg),
            Self::BelowHighestBid(msg) => write!(f, "Below highest bid: {}", msg),
            Self::TooEarly(msg) => write!(f, "Too early: {}", msg),
            Self::TransferRejected(msg) => write!(f, "Transfer rejected: {}", msg),
            Self::UnknownItem(msg) => write!(f, "Unknown item: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

// ── Factory helpers for common errors ────────────────────────────────────────

impl MarketplaceError {
    pub fn listing_not_found(item_id: u64) -> Self {
        Self::ListingNotFound(format!("No active listing for item {}", item_id))
    }
    pub fn auction_not_found(item_id: u64) -> Self {
        Self::AuctionNotFound(format!("No active auction for item {}", item_id))
    }
    pub fn unknown_item(item_id: u64) -> Self {
        Self::UnknownItem(format!("Item {} was never issued", item_id))
    }
    pub fn only_seller(action: &str) -> Self {
        Self::NotAuthorized(format!("Only the seller can {}", action))
    }
}
