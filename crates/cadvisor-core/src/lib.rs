//! # cadvisor-core - Core Domain Types
//!
//! Foundation crate for the Career Advisor client. Provides the domain
//! types exchanged with the advisory service, error handling, and the
//! logging bootstrap.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Profile (`profile`)
//! - [`Profile`] - Structured career background collected by the form
//! - [`ExperienceLevel`] - Closed set of self-reported levels
//! - [`parse_csv()`] - Comma-separated field splitting
//!
//! ### Advice (`advice`)
//! - [`AdvicePayload`] - Untrusted advice result; every section tolerates
//!   absence and decodes to an empty render
//! - [`CareerPath`], [`SkillItem`], [`Resource`], [`Plan`], [`PlanPhase`]
//! - [`PlanDay`] - Closed enumeration of the 30/60/90 plan phases
//!
//! ### Chat (`chat`)
//! - [`ConversationTurn`], [`Role`] - Wire types for conversational context
//! - [`priming_turns()`] - The synthetic profile-priming turn pair
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use cadvisor_core::prelude::*;
//! ```

pub mod advice;
pub mod chat;
pub mod error;
pub mod logging;
pub mod profile;

/// Prelude for common imports used throughout all Career Advisor crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use advice::{AdvicePayload, CareerPath, Plan, PlanDay, PlanPhase, Resource, SkillItem};
pub use chat::{priming_turns, ConversationTurn, Role, PRIMING_ACK};
pub use error::{Error, Result, ResultExt};
pub use profile::{parse_csv, ExperienceLevel, Profile};
