//! Transaction table and recent-activity models.

use serde::{Deserialize, Serialize};

/// Opaque identity of a row in the wallet's transaction table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxId(pub u64);

/// Confirmation status of a transaction, ordered worst to best.
///
/// The recent-activity view sorts on this key, descending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TxStatus {
    Conflicted,
    Immature,
    Offline,
    Unconfirmed,
    Confirming,
    Confirmed,
}

/// One row of the wallet's transaction table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: TxId,
    /// Counterparty address or label shown for the row.
    pub label: String,
    /// Unix timestamp of the transaction.
    pub at: i64,
    /// Signed amount in smallest units.
    pub amount: i64,
    pub status: TxStatus,
    pub confirmed: bool,
}

/// A row of the recent-activity view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RecentEntry {
    pub label: String,
    pub at: i64,
    /// Signed amount in smallest units; formatting is the renderer's job.
    pub amount: i64,
    pub confirmed: bool,
    /// Identity of the backing table row, for click-through.
    pub source: TxId,
}
