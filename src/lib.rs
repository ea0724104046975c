//! Wallet home dashboard synchronization core.
//!
//! Keeps a local balance snapshot in sync with the wallet backend, polls
//! a remote price service for an exchange-rate series, downsamples the
//! series for charting, and projects the transaction history into a
//! bounded recent-activity list. Rendering and the wallet backend stay
//! outside: the core talks to them through the [`home::Renderer`],
//! [`home::ChartSink`], and [`home::WalletSource`] traits.

pub mod activity;
pub mod balance;
pub mod chart;
pub mod config;
pub mod error;
pub mod home;
pub mod models;
pub mod parser;
pub mod ticker;
pub mod units;

pub use error::{HearthError, Result};
