
// --- Unit Tests ---
pub mod unit {
    pub mod auction_bid_test;
    pub mod auction_settle_test;
    pub mod listing_test;
    pub mod registry_test;
}
