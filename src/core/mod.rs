//! # Core Application Logic
//!
//! This module contains Jotter's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • NoteStore (notes)    │
//!                    │  • App (state machines) │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  I/O only via storage.  │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    Web     │      │   Tests    │
//!     │  Adapter   │      │  Adapter   │      │            │
//!     │ (ratatui)  │      │  (future)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`store`]: `NoteStore`, the only owner of the note collection
//! - [`storage`]: where the collection is persisted
//! - [`selection`], [`draft`]: the selection/overlay and creation-form state machines
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum, everything a user can mean

pub mod action;
pub mod config;
pub mod draft;
pub mod error;
pub mod fields;
pub mod note;
pub mod palette;
pub mod selection;
pub mod state;
pub mod storage;
pub mod store;

pub use action::{Action, Effect, update};
pub use error::{Result, StoreError};
pub use note::{Note, NoteId};
pub use state::App;
pub use store::NoteStore;
