//! Platform-neutral model and view-state logic for the Anelia Designs site.
//!
//! Nothing in this crate touches the DOM. The web front-end owns the event
//! wiring and timers and drives these types; the manifest builder shares the
//! manifest model and project catalog.

pub mod carousel;
pub mod chrome;
pub mod config;
pub mod constants;
pub mod manifest;
pub mod modal;
pub mod page;
pub mod popup;
pub mod submit;
pub mod validation;
pub mod wizard;

pub use carousel::*;
pub use chrome::*;
pub use config::*;
pub use constants::*;
pub use manifest::*;
pub use modal::*;
pub use page::*;
pub use popup::*;
pub use submit::*;
pub use validation::*;
pub use wizard::*;
