//! Terminal client for Space Empire.
//!
//! ```text
//! main (composition root)
//!   ├─→ ClientConfig (environment / .env)
//!   ├─→ logging (per-session log file)
//!   ├─→ Runtime (game sessions)
//!   └─→ app (status, board and prompt loops on stdout/stdin)
//! ```

pub mod app;
pub mod config;
pub mod logging;

pub use config::ClientConfig;
