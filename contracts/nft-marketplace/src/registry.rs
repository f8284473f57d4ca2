//! Item registry facet: minting, ownership records, operator approvals,
//! and the guarded transfer every marketplace operation moves items through.
//!
//! Kept in-contract so a registry failure aborts the initiating operation
//! synchronously; the marketplace paths only consume `internal_owner_of`,
//! `internal_is_authorized` and `internal_transfer_item`.

use near_sdk::json_types::U64;

use crate::*;

#[near]
impl Contract {
    /// Mint the next item for `receiver_id`. Item ids are sequential,
    /// starting at 1.
    #[handle_result]
    pub fn create_item(&mut self, receiver_id: AccountId) -> Result<U64, MarketplaceError> {
        let item_id = self.next_item_id;
        self.next_item_id = self
            .next_item_id
            .checked_add(1)
            .ok_or_else(|| MarketplaceError::InternalError("Item id counter overflow".into()))?;

        self.items.insert(item_id, receiver_id.clone());

        events::emit_item_created(&receiver_id, item_id);
        Ok(U64(item_id))
    }

    /// Grant or revoke `operator_id` blanket transfer rights over every
    /// item the caller owns now or later.
    pub fn set_approval_for_all(&mut self, operator_id: AccountId, approved: bool) {
        let owner_id = env::predecessor_account_id();

        let mut operators = self.operator_approvals.remove(&owner_id).unwrap_or_else(|| {
            IterableSet::new(StorageKey::OperatorApprovalsInner {
                account_id_hash: internal::hash_account_id(&owner_id),
            })
        });
        if approved {
            operators.insert(operator_id.clone());
        } else {
            operators.remove(&operator_id);
        }
        if !operators.is_empty() {
            self.operator_approvals.insert(owner_id.clone(), operators);
        }

        events::emit_operator_approval(&owner_id, &operator_id, approved);
    }

    #[handle_result]
    pub fn owner_of(&self, item_id: U64) -> Result<AccountId, MarketplaceError> {
        self.internal_owner_of(item_id.0).map(|owner| owner.clone())
    }

    /// True if `caller_id` is the item's owner or a blanket-approved
    /// operator for the owner.
    #[handle_result]
    pub fn is_authorized(&self, caller_id: AccountId, item_id: U64) -> Result<bool, MarketplaceError> {
        let owner_id = self.internal_owner_of(item_id.0)?.clone();
        Ok(self.internal_is_authorized(&caller_id, &owner_id))
    }
}

// ── Internal registry API ────────────────────────────────────────────────────

impl Contract {
    pub(crate) fn internal_owner_of(&self, item_id: ItemId) -> Result<&AccountId, MarketplaceError> {
        self.items
            .get(&item_id)
            .ok_or_else(|| MarketplaceError::unknown_item(item_id))
    }

    pub(crate) fn internal_is_authorized(&self, caller_id: &AccountId, owner_id: &AccountId) -> bool {
        caller_id == owner_id
            || self
                .operator_approvals
                .get(owner_id)
                .is_some_and(|ops| ops.contains(caller_id))
    }

    /// Move `item_id` from `from` to `to`. Fails with `TransferRejected`
    /// if `from` is not the current owner or the move is degenerate;
    /// callers rely on an error here aborting their whole operation.
    pub(crate) fn internal_transfer_item(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        item_id: ItemId,
    ) -> Result<(), MarketplaceError> {
        let current_owner = self.internal_owner_of(item_id)?;
        if current_owner != from {
            return Err(MarketplaceError::TransferRejected(format!(
                "{} does not own item {}",
                from, item_id
            )));
        }
        if to == from {
            return Err(MarketplaceError::TransferRejected(
                "Sender and receiver are the same account".into(),
            ));
        }

        self.items.insert(item_id, to.clone());
        Ok(())
    }
}
