//! # termdeck
//!
//! A small HTTP service and CLI for curating a list of search-term strings
//! persisted in a JSON settings file.
//!
//! Every mutation is one transaction over a single document: validate the
//! input, load the current file, check domain invariants, copy the file to a
//! timestamped backup, apply the change in memory, and atomically replace
//! the file. The HTTP API and the CLI are both thin adapters over the same
//! [`store::SettingsStore`].
//!
//! ```text
//! ┌──────────┐      ┌──────────────────┐      ┌────────────────┐
//! │   HTTP   │─────▶│  SettingsStore   │─────▶│ settings.json  │
//! │   CLI    │─────▶│ validate→backup→ │      │ + backups/     │
//! └──────────┘      │  atomic rename   │      └────────────────┘
//!                   └──────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! termdeck list                         # print current terms
//! termdeck add "Python-Engineer"        # append a term
//! termdeck update 0 "Rust-Developer"    # replace a term
//! termdeck remove 0                     # delete a term
//! termdeck serve                        # start the HTTP server
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`error`] | Error taxonomy for settings transactions |
//! | [`models`] | Settings document and mutation receipts |
//! | [`validate`] | Search-term validity predicate |
//! | [`store`] | The settings transaction manager |
//! | [`server`] | HTTP API server |

pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod store;
pub mod validate;
