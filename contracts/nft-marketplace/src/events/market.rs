use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::MARKET;

// --- Registry ---

pub fn emit_item_created(owner_id: &AccountId, item_id: u64) {
    EventBuilder::new(MARKET, "item_created", owner_id)
        .field("owner_id", owner_id)
        .field("item_id", item_id)
        .emit();
}

pub fn emit_operator_approval(owner_id: &AccountId, operator_id: &AccountId, approved: bool) {
    EventBuilder::new(MARKET, "operator_approval", owner_id)
        .field("owner_id", owner_id)
        .field("operator_id", operator_id)
        .field("approved", approved)
        .emit();
}

// --- Fixed-price listings ---

pub fn emit_item_listed(seller_id: &AccountId, item_id: u64, price: u128) {
    EventBuilder::new(MARKET, "item_listed", seller_id)
        .field("seller_id", seller_id)
        .field("item_id", item_id)
        .field("price", price)
        .emit();
}

pub fn emit_item_bought(buyer_id: &AccountId, item_id: u64, price: u128, seller_id: &AccountId) {
    EventBuilder::new(MARKET, "item_bought", buyer_id)
        .field("buyer_id", buyer_id)
        .field("item_id", item_id)
        .field("price", price)
        .field("seller_id", seller_id)
        .emit();
}

pub fn emit_listing_cancelled(seller_id: &AccountId, item_id: u64) {
    EventBuilder::new(MARKET, "listing_cancelled", seller_id)
        .field("seller_id", seller_id)
        .field("item_id", item_id)
        .emit();
}

// --- Auctions ---

pub fn emit_auction_created(seller_id: &AccountId, item_id: u64, start_price: u128) {
    EventBuilder::new(MARKET, "auction_created", seller_id)
        .field("seller_id", seller_id)
        .field("item_id", item_id)
        .field("start_price", start_price)
        .emit();
}

pub fn emit_auction_bid(bidder_id: &AccountId, item_id: u64, amount: u128, bid_count: u32) {
    EventBuilder::new(MARKET, "auction_bid", bidder_id)
        .field("bidder_id", bidder_id)
        .field("item_id", item_id)
        .field("amount", amount)
        .field("bid_count", bid_count)
        .emit();
}

/// `winner_id` is present only when the item changed hands (two-bid rule met).
pub fn emit_auction_finished(
    author: &AccountId,
    item_id: u64,
    winner_id: Option<&AccountId>,
    seller_id: &AccountId,
    winning_bid: u128,
) {
    EventBuilder::new(MARKET, "auction_finished", author)
        .field("item_id", item_id)
        .field_opt("winner_id", winner_id)
        .field("seller_id", seller_id)
        .field("winning_bid", winning_bid)
        .emit();
}

pub fn emit_auction_cancelled(seller_id: &AccountId, item_id: u64) {
    EventBuilder::new(MARKET, "auction_cancelled", seller_id)
        .field("seller_id", seller_id)
        .field("item_id", item_id)
        .emit();
}
