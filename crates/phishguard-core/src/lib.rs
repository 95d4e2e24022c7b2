//! # phishguard-core - Core Domain Types
//!
//! Foundation crate for PhishGuard. Provides navigation and verdict types,
//! error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Page`], [`SiteVariant`] - Navigation destinations and the two site layouts
//! - [`Verdict`], [`Label`], [`Confidence`] - An interpreted classification
//! - [`AnalysisResult`], [`Outcome`] - Result of one submit cycle
//! - [`AnalysisToken`] - Per-submit identity used to drop stale completions
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Run-ending failures (IO, terminal, configuration)
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! ```rust
//! use phishguard_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    AnalysisResult, AnalysisToken, AppPhase, Confidence, Label, Outcome, Page, SiteVariant,
    Verdict,
};
