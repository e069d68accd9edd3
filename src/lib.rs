//! Client-side employee roster.
//!
//! The [`store::Store`] owns all application state and persists a snapshot
//! after every mutation; views read snapshots, derive what they show with
//! [`projection`], validate input with [`validation`], and localize text
//! with [`i18n::I18n`].

pub mod bus;
pub mod cli;
pub mod config;
pub mod format;
pub mod i18n;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod persist;
pub mod projection;
pub mod store;
pub mod validation;

pub use bus::{Subscription, SubscriptionBus};
pub use i18n::I18n;
pub use store::{AppState, Store, StoreError};
