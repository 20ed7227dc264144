//! Adapters layer: Concrete implementations of ports.
//!
//! - `linear`: classifiers backed by exported linear-model JSON artifacts

pub mod linear;
