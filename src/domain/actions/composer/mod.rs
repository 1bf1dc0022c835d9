//! Transaction composers, one per action kind.
//!
//! Each action route owns a concrete composer; there is no runtime dispatch
//! on the kind of action.

mod memo;
pub use memo::*;

mod transfer;
pub use transfer::*;

use super::{NetworkState, UnsignedTransaction};
use crate::models::ActionError;

/// Output of a composer: the transaction plus the text shown to the signer.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedTransaction {
    pub transaction: UnsignedTransaction,
    pub message: String,
}

pub trait ComposeTransaction {
    /// Validated request the composer builds from.
    type Intent;

    /// Data size of the account whose rent-exempt minimum the composer needs,
    /// or `None` when it does not need the rent-exempt balance at all.
    fn rent_exempt_data_size(&self) -> Option<usize>;

    /// Builds the ordered instruction list and wraps it into a transaction
    /// paid by the intent's payer.
    fn compose(
        &self,
        intent: &Self::Intent,
        state: &NetworkState,
    ) -> Result<ComposedTransaction, ActionError>;
}
