// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific extraction for the Schedule Master site. Each spec reads one
//! page or endpoint and turns it into typed records (`data::*`).
//!
//! ## What lives here
//! - **Pure parsing** of already-fetched bodies: `parse(&str) -> Result<...>`.
//! - **Selector choice** for each page (hidden input id, cell classes, header div).
//!
//! ## What does **not** live here
//! - **Networking and session checks**: `gateway` fetches, `core::net` checks.
//! - **Filtering or report layout**: see `filter` and `report`.
//!
//! ## Typical call chain
//! ```text
//! runner → gateway::ScheduleMaster::fetch_*() → core::net::Http::get()
//!                                           ↘  specs::<page>::parse(body)
//! ```
//!
//! ## Testing notes
//! Every `parse` is tested offline against small inline fixtures.
pub mod my_schedule;
pub mod profile;
pub mod reservations;
pub mod resources;
