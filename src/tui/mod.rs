//! TUI module for montepi.
//!
//! Application state and key handling live here so they can be tested
//! without a terminal; drawing and the event loop stay in the `pi-tui`
//! binary.

pub mod pi_app;

pub use pi_app::PiApp;
