//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure number-theoretic functions used by the spiral
//! pipeline. They are scalar-to-scalar and carry no grid logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Primality testing.
pub mod primality;
