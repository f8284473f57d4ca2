//! Fixed-price path: list, buy, cancel.

use near_sdk::json_types::{U128, U64};

use crate::internal::transfer_near;
use crate::*;

#[near]
impl Contract {
    /// List an item at a fixed price. The caller must be the item's owner
    /// or an approved operator; custody moves to the contract and the
    /// owner is recorded as seller.
    #[handle_result]
    pub fn list_item(&mut self, item_id: U64, price: U128) -> Result<(), MarketplaceError> {
        let item_id = item_id.0;
        let caller = env::predecessor_account_id();

        if price.0 == 0 {
            return Err(MarketplaceError::InvalidInput(
                "Price must be greater than 0".into(),
            ));
        }
        self.assert_not_on_market(item_id)?;

        let owner_id = self.internal_owner_of(item_id)?.clone();
        if !self.internal_is_authorized(&caller, &owner_id) {
            return Err(MarketplaceError::NotAuthorized(
                "Only the item owner or an approved operator can list it".into(),
            ));
        }

        self.internal_transfer_item(&owner_id, &env::current_account_id(), item_id)?;
        self.listings.insert(
            item_id,
            Listing {
                seller_id: owner_id.clone(),
                price: price.0,
            },
        );

        events::emit_item_listed(&owner_id, item_id, price.0);
        Ok(())
    }

    /// Buy a listed item. The attached deposit must equal the listed price
    /// exactly; any other amount aborts before any state change.
    #[payable]
    #[handle_result]
    pub fn buy_item(&mut self, item_id: U64) -> Result<(), MarketplaceError> {
        let item_id = item_id.0;
        let buyer_id = env::predecessor_account_id();
        let payment = env::attached_deposit().as_yoctonear();

        let listing = self
            .listings
            .get(&item_id)
            .cloned()
            .ok_or_else(|| MarketplaceError::listing_not_found(item_id))?;

        if payment != listing.price {
            return Err(MarketplaceError::WrongAmount(format!(
                "Payment {} does not match price {}",
                payment, listing.price
            )));
        }

        // Record cleared and custody moved before the payout transfer.
        self.listings.remove(&item_id);
        self.internal_transfer_item(&env::current_account_id(), &buyer_id, item_id)?;

        events::emit_item_bought(&buyer_id, item_id, listing.price, &listing.seller_id);
        transfer_near(&listing.seller_id, listing.price);
        Ok(())
    }

    /// Cancel a listing and return the item to the seller. Seller only.
    #[handle_result]
    pub fn cancel_listing(&mut self, item_id: U64) -> Result<(), MarketplaceError> {
        let item_id = item_id.0;
        let caller = env::predecessor_account_id();

        let listing = self
            .listings
            .get(&item_id)
            .cloned()
            .ok_or_else(|| MarketplaceError::listing_not_found(item_id))?;

        if caller != listing.seller_id {
            return Err(MarketplaceError::only_seller("cancel the listing"));
        }

        self.listings.remove(&item_id);
        self.internal_transfer_item(&env::current_account_id(), &listing.seller_id, item_id)?;

        events::emit_listing_cancelled(&listing.seller_id, item_id);
        Ok(())
    }
}

impl Contract {
    /// Listing and auction are mutually exclusive per item.
    pub(crate) fn assert_not_on_market(&self, item_id: ItemId) -> Result<(), MarketplaceError> {
        if self.listings.contains_key(&item_id) {
            return Err(MarketplaceError::InvalidState(format!(
                "Item {} is already listed for sale",
                item_id
            )));
        }
        if self.auctions.contains_key(&item_id) {
            return Err(MarketplaceError::InvalidState(format!(
                "Item {} is already on auction",
                item_id
            )));
        }
        Ok(())
    }
}
