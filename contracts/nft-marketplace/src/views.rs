// View/enumeration methods for querying marketplace data.

use near_sdk::json_types::{U128, U64};

use crate::*;

#[near]
impl Contract {
    /// Get the active listing for an item, if any.
    pub fn get_listing(&self, item_id: U64) -> Option<ListingView> {
        self.listings
            .get(&item_id.0)
            .map(|listing| listing_view(item_id.0, listing))
    }

    /// Get the active auction for an item, if any.
    pub fn get_auction(&self, item_id: U64) -> Option<AuctionView> {
        self.auctions
            .get(&item_id.0)
            .map(|auction| auction_view(item_id.0, auction))
    }

    /// Total number of active listings.
    pub fn get_supply_listings(&self) -> u64 {
        self.listings.len() as u64
    }

    /// Total number of active auctions.
    pub fn get_supply_auctions(&self) -> u64 {
        self.auctions.len() as u64
    }

    /// Paginated active listings.
    pub fn get_listings(&self, from_index: Option<u64>, limit: Option<u64>) -> Vec<ListingView> {
        let start = from_index.unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT);

        self.listings
            .iter()
            .skip(start as usize)
            .take(limit as usize)
            .map(|(item_id, listing)| listing_view(*item_id, listing))
            .collect()
    }

    /// Paginated active auctions.
    pub fn get_auctions(&self, from_index: Option<u64>, limit: Option<u64>) -> Vec<AuctionView> {
        let start = from_index.unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT);

        self.auctions
            .iter()
            .skip(start as usize)
            .take(limit as usize)
            .map(|(item_id, auction)| auction_view(*item_id, auction))
            .collect()
    }

    /// Sum of all currently escrowed bid amounts.
    pub fn get_escrow_total(&self) -> U128 {
        U128(self.escrow_total)
    }

    /// Number of items ever issued.
    pub fn item_count(&self) -> u64 {
        self.items.len() as u64
    }

    pub fn get_owner_id(&self) -> AccountId {
        self.owner_id.clone()
    }
}

fn listing_view(item_id: u64, listing: &Listing) -> ListingView {
    ListingView {
        item_id,
        seller_id: listing.seller_id.clone(),
        price: U128(listing.price),
    }
}

fn auction_view(item_id: u64, auction: &Auction) -> AuctionView {
    let ends_at = auction.start_time + AUCTION_DURATION_NS;
    AuctionView {
        item_id,
        seller_id: auction.seller_id.clone(),
        start_price: U128(auction.start_price),
        highest_bid: U128(auction.highest_bid),
        highest_bidder: auction.highest_bidder.clone(),
        bid_count: auction.bid_count,
        start_time: auction.start_time,
        ends_at,
        is_expired: near_sdk::env::block_timestamp() >= ends_at,
    }
}
