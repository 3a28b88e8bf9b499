//! Platform-independent logic for the portfolio site front-end.
//!
//! Nothing in here touches the DOM; the wasm crate binds these types to
//! `web-sys` and the host-side tests drive them with fakes.

pub mod config;
pub mod constants;
pub mod counter;
pub mod device;
pub mod filter;
pub mod loader;
pub mod menu;
pub mod observer;
pub mod scroll;
pub mod share;

pub use config::{ConfigError, Length, ObserverConfig, RootMargin, SiteConfig};
pub use counter::{CounterAnimation, CounterFrame};
pub use filter::PortfolioFilter;
pub use loader::{register_placeholders, resolve, Placeholder, ResolvePolicy, Resolution};
pub use menu::MenuState;
pub use observer::{VisibilityEntry, VisibilityHost, VisibilityObserver, WatchId, WatchState};
pub use share::{SharePlatform, UnknownPlatform};
