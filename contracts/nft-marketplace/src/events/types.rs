//! Envelope for the `EVENT_JSON:` log lines this contract emits.

use near_sdk::serde::{Deserialize, Serialize};
use near_sdk::serde_json::{Map, Value};
use near_sdk_macros::NearSchema;

/// Top-level NEP-297 envelope. `event` is always `market_update` here;
/// indexers discriminate on the per-entry `operation` instead.
#[derive(NearSchema, Serialize, Deserialize, Clone, Debug)]
#[serde(crate = "near_sdk::serde")]
pub(crate) struct Event {
    pub(crate) standard: String,
    pub(crate) version: String,
    pub(crate) event: String,
    pub(crate) data: Vec<EventData>,
}

/// One marketplace state transition. `operation` names the transition
/// (`item_listed`, `auction_bid`, `auction_finished`, ...), `author` is
/// the account that drove it, and the operation-specific fields from the
/// builder are flattened alongside.
#[derive(NearSchema, Serialize, Deserialize, Clone, Debug)]
#[serde(crate = "near_sdk::serde")]
pub(crate) struct EventData {
    pub(crate) operation: String,
    pub(crate) author: String,
    #[serde(flatten)]
    pub(crate) extra: Map<String, Value>,
}
