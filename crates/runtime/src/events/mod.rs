//! Record-change subscriptions.

pub mod bus;

pub use bus::{EventBus, ShopEvent, Topic};
