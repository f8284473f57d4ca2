//! Marketplace domain types.

use near_sdk::json_types::U128;
use near_sdk::near;
use near_sdk::AccountId;

/// An active fixed-price listing. While this record exists the contract
/// holds the item in custody; removal always coincides with the item
/// leaving custody (to the buyer or back to the seller).
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Listing {
    pub seller_id: AccountId,
    /// yoctoNEAR. Payment must equal this exactly.
    pub price: u128,
}

/// An active English auction. `highest_bid` is always the exact amount the
/// contract currently escrows for `highest_bidder`; superseded bids are
/// refunded in full in the same call that replaces them, so at most one
/// escrowed amount exists per auction.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Auction {
    pub seller_id: AccountId,
    /// yoctoNEAR. The first bid must strictly exceed this.
    pub start_price: u128,
    /// yoctoNEAR. 0 until the first bid is accepted.
    pub highest_bid: u128,
    pub highest_bidder: Option<AccountId>,
    /// Monotonically non-decreasing while the auction is active.
    pub bid_count: u32,
    /// ns since epoch; the window is `start_time + AUCTION_DURATION_NS`.
    pub start_time: u64,
}

/// View projection of a listing (JSON-only, not stored on-chain).
#[near(serializers = [json])]
pub struct ListingView {
    pub item_id: u64,
    pub seller_id: AccountId,
    pub price: U128,
}

/// View projection of an auction (JSON-only, not stored on-chain).
#[near(serializers = [json])]
pub struct AuctionView {
    pub item_id: u64,
    pub seller_id: AccountId,
    pub start_price: U128,
    pub highest_bid: U128,
    pub highest_bidder: Option<AccountId>,
    pub bid_count: u32,
    pub start_time: u64,
    pub ends_at: u64,
    pub is_expired: bool,
}
