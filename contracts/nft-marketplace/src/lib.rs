//! NFT Marketplace — fixed-price sales and 3-day English auctions over a
//! native item registry, with the contract holding listed items and bid
//! escrow in custody. JSON events, typed errors.

use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{
    env, near, AccountId, BorshStorageKey, NearToken, PanicOnDefault, Promise,
};

// --- Modules ---

mod auction;
pub mod constants;
mod errors;
mod events;
mod internal;
mod listing;
mod registry;
pub mod types;
mod views;

#[cfg(test)]
mod tests;

pub use constants::*;
pub use errors::MarketplaceError;
pub use types::*;

/// Item identifier. Sequential, issued by `create_item` starting at 1.
pub type ItemId = u64;

// --- Storage Keys ---

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Items,
    OperatorApprovals,
    OperatorApprovalsInner { account_id_hash: Vec<u8> },
    Listings,
    Auctions,
}

// --- Contract State ---

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/nft-market/nft-marketplace",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub owner_id: AccountId,

    /// Registry facet: item id → current owner.
    pub items: IterableMap<ItemId, AccountId>,
    /// Registry facet: owner → blanket-approved operators.
    pub operator_approvals: LookupMap<AccountId, IterableSet<AccountId>>,
    /// Next id handed out by `create_item`.
    pub next_item_id: ItemId,

    /// Active fixed-price listings. Presence ⇒ the contract holds the item.
    pub listings: IterableMap<ItemId, Listing>,
    /// Active auctions. Presence ⇒ the contract holds the item.
    pub auctions: IterableMap<ItemId, Auction>,

    /// Sum of all currently escrowed bid amounts, in yoctoNEAR. Mutated in
    /// the same call as the auction record it accounts for.
    pub escrow_total: u128,
}

#[near]
impl Contract {
    #[init]
    pub fn new(owner_id: AccountId) -> Self {
        Self {
            owner_id,
            items: IterableMap::new(StorageKey::Items),
            operator_approvals: LookupMap::new(StorageKey::OperatorApprovals),
            next_item_id: 1,
            listings: IterableMap::new(StorageKey::Listings),
            auctions: IterableMap::new(StorageKey::Auctions),
            escrow_total: 0,
        }
    }
}
