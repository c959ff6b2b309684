//! # Innkeep CLI
//!
//! Output formatting shared by the `innkeep-cli` binary.
//!
//! ## Usage
//!
//! ```bash
//! innkeep-cli roles
//! innkeep-cli permissions --tenant 5 --user 42
//! innkeep-cli overrides set --tenant 5 --user 42 --add reports.view --remove invoices.read
//! ```

pub mod output;
