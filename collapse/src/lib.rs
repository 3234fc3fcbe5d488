//! Open/closed toggling for collapsible panels.
//!
//! A panel is any element matching the container selector (`.collapse` by
//! default). Clicking its title child, or pressing Enter or Space while the
//! panel has focus, flips the `open` marker on the panel.

pub mod binder;
pub mod config;
pub mod error;
pub mod state;

pub use binder::{ContainerKeyDown, InitReport, TitleClick, ToggleBinder, key_toggle, toggle};
pub use config::BinderConfig;
pub use error::ConfigError;
pub use state::PanelState;
