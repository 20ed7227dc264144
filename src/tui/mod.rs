//! Terminal user interface.
//!
//! - `app`: screen navigation and the main event loop
//! - `worker`: background prediction thread
//! - `styles`: color theme
//! - `ui`: view components

pub mod app;
pub mod styles;
pub mod ui;
pub mod worker;

pub use app::App;
