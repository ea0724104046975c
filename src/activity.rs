//! Bounded recent-activity view over the wallet's transaction table.

use crate::models::activity::{RecentEntry, TransactionRecord, TxId};

/// Derived read model over the transaction table: the most relevant
/// rows, status-descending, capped at a fixed row count.
///
/// The view is recomputed from scratch on every table-change
/// notification; nothing from the table is retained beyond the current
/// projection.
#[derive(Debug)]
pub struct RecentActivityAdapter {
    limit: usize,
    view: Vec<RecentEntry>,
}

impl RecentActivityAdapter {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            view: Vec::new(),
        }
    }

    /// Rebuilds the view from the current table contents.
    ///
    /// Rows are ordered by status descending; rows with equal status
    /// keep the table's own order (the sort is stable).
    pub fn refresh(&mut self, table: &[TransactionRecord]) -> &[RecentEntry] {
        let mut rows: Vec<&TransactionRecord> = table.iter().collect();
        rows.sort_by(|a, b| b.status.cmp(&a.status));

        self.view = rows
            .into_iter()
            .take(self.limit)
            .map(|row| RecentEntry {
                label: row.label.clone(),
                at: row.at,
                amount: row.amount,
                confirmed: row.confirmed,
                source: row.id,
            })
            .collect();

        &self.view
    }

    /// Current projection without recomputing.
    pub fn entries(&self) -> &[RecentEntry] {
        &self.view
    }

    /// Maps a view row back to the identity of its source-table row.
    pub fn resolve(&self, view_index: usize) -> Option<TxId> {
        self.view.get(view_index).map(|entry| entry.source)
    }
}
