// Internal helpers shared by the listing and auction paths.

use crate::*;

impl Contract {
    /// Account an incoming bid into the escrow ledger.
    pub(crate) fn escrow_credit(&mut self, amount: u128) {
        self.escrow_total = self.escrow_total.saturating_add(amount);
    }

    /// Release an escrowed amount. The debit must have a matching credit
    /// from an earlier accepted bid; anything else is a ledger corruption.
    pub(crate) fn escrow_debit(&mut self, amount: u128) -> Result<(), MarketplaceError> {
        self.escrow_total = self.escrow_total.checked_sub(amount).ok_or_else(|| {
            MarketplaceError::InternalError("Escrow ledger underflow".into())
        })?;
        Ok(())
    }
}

/// Hash an account ID for use in storage keys.
pub(crate) fn hash_account_id(account_id: &AccountId) -> Vec<u8> {
    env::sha256(account_id.as_bytes())
}

/// Pay out native balance. No-op for zero amounts. Issued only after all
/// record mutation in the calling operation is complete; a transfer to a
/// valid account id cannot fail or re-enter the running method.
pub(crate) fn transfer_near(to: &AccountId, amount: u128) {
    if amount > 0 {
        let _ = Promise::new(to.clone()).transfer(NearToken::from_yoctonear(amount));
    }
}
