//! English auction path: list, bid with refund-on-outbid escrow, settle,
//! cancel.
//!
//! Expiry is lazy: the 3-day window is only ever checked when the next
//! call touches the record. A bid landing after the window settles the
//! auction from its pre-call state instead of joining it.

use near_sdk::json_types::{U128, U64};

use crate::internal::transfer_near;
use crate::*;

#[near]
impl Contract {
    /// Put an item up for a 3-day auction. The caller must be the item's
    /// owner or an approved operator; custody moves to the contract.
    #[handle_result]
    pub fn list_item_on_auction(
        &mut self,
        item_id: U64,
        start_price: U128,
    ) -> Result<(), MarketplaceError> {
        let item_id = item_id.0;
        let caller = env::predecessor_account_id();

        self.assert_not_on_market(item_id)?;

        let owner_id = self.internal_owner_of(item_id)?.clone();
        if !self.internal_is_authorized(&caller, &owner_id) {
            return Err(MarketplaceError::NotAuthorized(
                "Only the item owner or an approved operator can start an auction".into(),
            ));
        }

        self.internal_transfer_item(&owner_id, &env::current_account_id(), item_id)?;
        self.auctions.insert(
            item_id,
            Auction {
                seller_id: owner_id.clone(),
                start_price: start_price.0,
                highest_bid: 0,
                highest_bidder: None,
                bid_count: 0,
                start_time: env::block_timestamp(),
            },
        );

        events::emit_auction_created(&owner_id, item_id, start_price.0);
        Ok(())
    }

    /// Bid on an active auction. The attached deposit is the bid amount
    /// and must strictly exceed the start price (first bid) or the current
    /// highest bid. The displaced leader is refunded in full in the same
    /// call.
    ///
    /// A bid arriving after the window has elapsed never becomes the new
    /// leader: it settles the auction from its pre-call state and the
    /// attached deposit is refunded untouched.
    #[payable]
    #[handle_result]
    pub fn make_bid(&mut self, item_id: U64) -> Result<(), MarketplaceError> {
        let item_id = item_id.0;
        let bidder_id = env::predecessor_account_id();
        let amount = env::attached_deposit().as_yoctonear();

        let mut auction = self
            .auctions
            .get(&item_id)
            .cloned()
            .ok_or_else(|| MarketplaceError::auction_not_found(item_id))?;

        if self.auction_window_elapsed(&auction) {
            // Late bid: close the stale auction, never escrow the amount.
            self.internal_settle_auction(&bidder_id, item_id, &auction)?;
            transfer_near(&bidder_id, amount);
            return Ok(());
        }

        if auction.bid_count == 0 {
            if amount <= auction.start_price {
                return Err(MarketplaceError::BelowStartPrice(format!(
                    "Bid {} must exceed start price {}",
                    amount, auction.start_price
                )));
            }
        } else if amount <= auction.highest_bid {
            return Err(MarketplaceError::BelowHighestBid(format!(
                "Bid {} must exceed current highest bid {}",
                amount, auction.highest_bid
            )));
        }

        // Supersede: settle the ledger and the record before the refund
        // transfer leaves the contract.
        let prev_bidder = auction.highest_bidder.take();
        let prev_bid = auction.highest_bid;

        auction.highest_bid = amount;
        auction.highest_bidder = Some(bidder_id.clone());
        auction.bid_count += 1;

        self.escrow_credit(amount);
        self.escrow_debit(prev_bid)?;
        let bid_count = auction.bid_count;
        self.auctions.insert(item_id, auction);

        events::emit_auction_bid(&bidder_id, item_id, amount, bid_count);
        if let Some(prev) = prev_bidder {
            transfer_near(&prev, prev_bid);
        }
        Ok(())
    }

    /// Settle an auction once the 3-day window has elapsed. Seller only.
    /// With two or more bids the item goes to the highest bidder and the
    /// escrowed bid to the seller; otherwise the item returns to the
    /// seller and the sole bidder (if any) is refunded in full.
    #[handle_result]
    pub fn finish_auction(&mut self, item_id: U64) -> Result<(), MarketplaceError> {
        let item_id = item_id.0;
        let caller = env::predecessor_account_id();

        let auction = self
            .auctions
            .get(&item_id)
            .cloned()
            .ok_or_else(|| MarketplaceError::auction_not_found(item_id))?;

        if caller != auction.seller_id {
            return Err(MarketplaceError::only_seller("finish the auction"));
        }
        if !self.auction_window_elapsed(&auction) {
            return Err(MarketplaceError::TooEarly(
                "Auction cannot be finished less than three days after it starts".into(),
            ));
        }

        self.internal_settle_auction(&caller, item_id, &auction)
    }

    /// Cancel an auction at any time, regardless of elapsed duration or
    /// bid count. Seller only. Refunds the current leader and returns the
    /// item. This is the only way to abort an auction with two or more
    /// bids before the window elapses.
    #[handle_result]
    pub fn cancel_auction(&mut self, item_id: U64) -> Result<(), MarketplaceError> {
        let item_id = item_id.0;
        let caller = env::predecessor_account_id();

        let auction = self
            .auctions
            .get(&item_id)
            .cloned()
            .ok_or_else(|| MarketplaceError::auction_not_found(item_id))?;

        if caller != auction.seller_id {
            return Err(MarketplaceError::only_seller("cancel the auction"));
        }

        self.auctions.remove(&item_id);
        self.escrow_debit(auction.highest_bid)?;
        self.internal_transfer_item(&env::current_account_id(), &auction.seller_id, item_id)?;

        events::emit_auction_cancelled(&auction.seller_id, item_id);
        if let Some(bidder) = auction.highest_bidder {
            transfer_near(&bidder, auction.highest_bid);
        }
        Ok(())
    }
}

// ── Settlement ───────────────────────────────────────────────────────────────

impl Contract {
    pub(crate) fn auction_window_elapsed(&self, auction: &Auction) -> bool {
        env::block_timestamp() >= auction.start_time + AUCTION_DURATION_NS
    }

    /// Terminal transition. Clears the record and the escrow entry before
    /// any balance leaves the contract; `auction` is the state as it stood
    /// before the initiating call.
    fn internal_settle_auction(
        &mut self,
        author: &AccountId,
        item_id: ItemId,
        auction: &Auction,
    ) -> Result<(), MarketplaceError> {
        self.auctions.remove(&item_id);
        self.escrow_debit(auction.highest_bid)?;

        if auction.bid_count >= MIN_BIDS_TO_SELL {
            let winner_id = auction.highest_bidder.clone().ok_or_else(|| {
                MarketplaceError::InternalError("Auction has bids but no bidder".into())
            })?;

            self.internal_transfer_item(&env::current_account_id(), &winner_id, item_id)?;

            events::emit_auction_finished(
                author,
                item_id,
                Some(&winner_id),
                &auction.seller_id,
                auction.highest_bid,
            );
            transfer_near(&auction.seller_id, auction.highest_bid);
        } else {
            // Fewer than two bids: the item never changes hands.
            self.internal_transfer_item(&env::current_account_id(), &auction.seller_id, item_id)?;

            events::emit_auction_finished(author, item_id, None, &auction.seller_id, 0);
            if let Some(bidder) = &auction.highest_bidder {
                transfer_near(bidder, auction.highest_bid);
            }
        }
        Ok(())
    }
}
