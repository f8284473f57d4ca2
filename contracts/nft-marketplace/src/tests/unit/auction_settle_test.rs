use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::{U128, U64};
use near_sdk::test_utils::get_logs;
use near_sdk::testing_env;

const START_PRICE: u128 = 1000;

fn auctioned_item(contract: &mut Contract) -> u64 {
    let item_id = mint_item(contract, &seller());
    testing_env!(context(seller()).build());
    contract
        .list_item_on_auction(U64(item_id), U128(START_PRICE))
        .unwrap();
    item_id
}

fn bid(contract: &mut Contract, bidder: near_sdk::AccountId, item_id: u64, amount: u128) {
    testing_env!(context_with_deposit(bidder, amount).build());
    contract.make_bid(U64(item_id)).unwrap();
}

fn after_window() -> u64 {
    START_TS + AUCTION_DURATION_NS
}

// --- finish_auction ---

#[test]
fn finish_before_three_days_fails() {
    let mut contract = new_contract();
    let item_id = auctioned_item(&mut contract);
    bid(&mut contract, bidder_a(), item_id, 1001);
    bid(&mut contract, bidder_b(), item_id, 1002);

    let almost = START_TS + AUCTION_DURATION_NS - 1;
    testing_env!(context_at(seller(), almost).build());
    let err = contract.finish_auction(U64(item_id)).unwrap_err();

    assert!(matches!(err, MarketplaceError::TooEarly(_)));
    assert!(contract.get_auction(U64(item_id)).is_some());
}

#[test]
fn finish_as_non_seller_fails() {
    let mut contract = new_contract();
    let item_id = auctioned_item(&mut contract);
    bid(&mut contract, bidder_a(), item_id, 1001);

    testing_env!(context_at(bidder_a(), after_window()).build());
    let err = contract.finish_auction(U64(item_id)).unwrap_err();

    assert!(matches!(err, MarketplaceError::NotAuthorized(_)));
    assert_eq!(contract.owner_of(U64(item_id)).unwrap(), market());
}

#[test]
fn finish_missing_auction_fails() {
    let mut contract = new_contract();

    testing_env!(context(seller()).build());
    let err = contract.finish_auction(U64(1)).unwrap_err();
    assert!(matches!(err, MarketplaceError::AuctionNotFound(_)));
}

#[test]
fn finish_with_two_bids_sells_to_highest_bidder() {
    let mut contract = new_contract();
    let item_id = auctioned_item(&mut contract);
    bid(&mut contract, bidder_a(), item_id, 1001);
    bid(&mut contract, bidder_b(), item_id, 1002);

    testing_env!(context_at(seller(), after_window()).build());
    contract.finish_auction(U64(item_id)).unwrap();

    assert_eq!(contract.owner_of(U64(item_id)).unwrap(), bidder_b());
    assert!(contract.get_auction(U64(item_id)).is_none());
    assert_eq!(contract.get_escrow_total(), U128(0));

    let logs = get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("\"operation\":\"auction_finished\""));
    assert!(logs[0].contains(&format!("\"winner_id\":\"{}\"", bidder_b())));
}

#[test]
fn finish_with_no_bids_returns_item() {
    let mut contract = new_contract();
    let item_id = auctioned_item(&mut contract);

    testing_env!(context_at(seller(), after_window()).build());
    contract.finish_auction(U64(item_id)).unwrap();

    assert_eq!(contract.owner_of(U64(item_id)).unwrap(), seller());
    assert!(contract.get_auction(U64(item_id)).is_none());

    // No winner field when the item never changed hands.
    let logs = get_logs();
    assert!(logs[0].contains("\"operation\":\"auction_finished\""));
    assert!(!logs[0].contains("winner_id"));
}

#[test]
fn finish_with_one_bid_refunds_and_returns_item() {
    let mut contract = new_contract();
    let item_id = auctioned_item(&mut contract);
    bid(&mut contract, bidder_a(), item_id, 1001);

    testing_env!(context_at(seller(), after_window()).build());
    contract.finish_auction(U64(item_id)).unwrap();

    assert_eq!(contract.owner_of(U64(item_id)).unwrap(), seller());
    assert_eq!(contract.get_escrow_total(), U128(0));
}

#[test]
fn finish_twice_fails() {
    let mut contract = new_contract();
    let item_id = auctioned_item(&mut contract);
    bid(&mut contract, bidder_a(), item_id, 1001);
    bid(&mut contract, bidder_b(), item_id, 1002);

    testing_env!(context_at(seller(), after_window()).build());
    contract.finish_auction(U64(item_id)).unwrap();

    let err = contract.finish_auction(U64(item_id)).unwrap_err();
    assert!(matches!(err, MarketplaceError::AuctionNotFound(_)));
}

// --- cancel_auction ---

#[test]
fn cancel_with_outstanding_bids_refunds_leader() {
    let mut contract = new_contract();
    let item_id = auctioned_item(&mut contract);
    bid(&mut contract, bidder_a(), item_id, 1001);
    bid(&mut contract, bidder_b(), item_id, 1002);

    // Before the window elapses; allowed regardless of bid count.
    testing_env!(context(seller()).build());
    contract.cancel_auction(U64(item_id)).unwrap();

    assert_eq!(contract.owner_of(U64(item_id)).unwrap(), seller());
    assert!(contract.get_auction(U64(item_id)).is_none());
    assert_eq!(contract.get_escrow_total(), U128(0));
}

#[test]
fn cancel_after_window_is_still_allowed() {
    let mut contract = new_contract();
    let item_id = auctioned_item(&mut contract);
    bid(&mut contract, bidder_a(), item_id, 1001);

    testing_env!(context_at(seller(), after_window()).build());
    contract.cancel_auction(U64(item_id)).unwrap();

    assert_eq!(contract.owner_of(U64(item_id)).unwrap(), seller());
    assert_eq!(contract.get_escrow_total(), U128(0));
}

#[test]
fn cancel_as_non_seller_fails() {
    let mut contract = new_contract();
    let item_id = auctioned_item(&mut contract);
    bid(&mut contract, bidder_a(), item_id, 1001);

    testing_env!(context(bidder_a()).build());
    let err = contract.cancel_auction(U64(item_id)).unwrap_err();

    assert!(matches!(err, MarketplaceError::NotAuthorized(_)));
    assert_eq!(contract.owner_of(U64(item_id)).unwrap(), market());
}

#[test]
fn cancel_missing_auction_fails() {
    let mut contract = new_contract();

    testing_env!(context(seller()).build());
    let err = contract.cancel_auction(U64(1)).unwrap_err();
    assert!(matches!(err, MarketplaceError::AuctionNotFound(_)));
}

#[test]
fn finish_after_cancel_fails() {
    let mut contract = new_contract();
    let item_id = auctioned_item(&mut contract);
    bid(&mut contract, bidder_a(), item_id, 1001);
    bid(&mut contract, bidder_b(), item_id, 1002);

    testing_env!(context(seller()).build());
    contract.cancel_auction(U64(item_id)).unwrap();

    testing_env!(context_at(seller(), after_window()).build());
    let err = contract.finish_auction(U64(item_id)).unwrap_err();
    assert!(matches!(err, MarketplaceError::AuctionNotFound(_)));
}

// --- lifecycle ---

#[test]
fn item_can_be_relisted_after_settlement() {
    let mut contract = new_contract();
    let item_id = auctioned_item(&mut contract);
    bid(&mut contract, bidder_a(), item_id, 1001);
    bid(&mut contract, bidder_b(), item_id, 1002);

    testing_env!(context_at(seller(), after_window()).build());
    contract.finish_auction(U64(item_id)).unwrap();

    // The winner can immediately turn around and list it.
    testing_env!(context_at(bidder_b(), after_window()).build());
    contract.list_item(U64(item_id), U128(5000)).unwrap();
    assert_eq!(contract.get_listing(U64(item_id)).unwrap().seller_id, bidder_b());
}

#[test]
fn escrow_ledger_conserves_value_across_auctions() {
    let mut contract = new_contract();
    let first = auctioned_item(&mut contract);
    let second = auctioned_item(&mut contract);

    bid(&mut contract, bidder_a(), first, 1001);
    bid(&mut contract, bidder_b(), first, 1500);
    bid(&mut contract, bidder_a(), second, 2000);
    assert_eq!(contract.get_escrow_total(), U128(1500 + 2000));

    // Settling one auction releases exactly its escrow.
    testing_env!(context_at(seller(), after_window()).build());
    contract.finish_auction(U64(first)).unwrap();
    assert_eq!(contract.get_escrow_total(), U128(2000));

    testing_env!(context_at(seller(), after_window()).build());
    contract.cancel_auction(U64(second)).unwrap();
    assert_eq!(contract.get_escrow_total(), U128(0));
}
