//! # ferro-register: Operator Session Layer for Ferro POS
//!
//! Sits between the presentation layer and [`ferro_core`]: holds the one
//! in-progress sale an operator is editing, recomputes totals after every
//! validated mutation, and hands finalized drafts across the submission
//! boundary.
//!
//! ## What Lives Where
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  ferro-register                                                     │
//! │  ├── session   - RegisterSession over Arc<Mutex<DraftSale>>         │
//! │  ├── submit    - SaleSubmitter trait (persistence collaborator)     │
//! │  ├── config    - register.toml + env overrides                      │
//! │  └── error     - RegisterError / SubmitError                        │
//! │                                                                     │
//! │  Not here (collaborator responsibilities):                          │
//! │  routing, templating, authentication, storage, receipt numbering    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod session;
pub mod submit;

pub use config::RegisterConfig;
pub use error::{RegisterError, RegisterResult, SubmitError};
pub use session::RegisterSession;
pub use submit::SaleSubmitter;
