//! # agemark-engine
//!
//! Age-state decision engine for outdated content. Turns a content
//! item's timestamps, installation-wide thresholds, and per-item
//! overrides into a tri-state classification, a rendered label, and a
//! structured annotation record.
//!
//! ## Pipeline
//! 1. **Age** — pick the reference instant per basis, compute day/month/
//!    year facts (flat divisors).
//! 2. **Classify** — thresholds + override precedence + policy hook.
//! 3. **Render** — single-pass token substitution, then the restricted
//!    markup sanitizer.
//! 4. **Project** — schema.org-shaped annotation record.
//!
//! Every step is a pure function over its inputs; "now" is read once by
//! the caller and threaded through explicitly.

pub mod age;
pub mod classify;
pub mod engine;
pub mod project;
pub mod render;

pub use classify::PolicyInput;
pub use engine::{EvalHooks, Notice, NoticeEngine};
pub use render::TokenMap;
