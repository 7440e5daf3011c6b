//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer validates arguments and orchestrates the spiral → mask →
//! windows pipeline, selecting sequential or parallel algorithms.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Pipeline execution.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for pipeline runs.
pub mod output;
