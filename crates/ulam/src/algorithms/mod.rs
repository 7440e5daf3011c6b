//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the core grid algorithms:
//! - Center-out spiral numbering
//! - Element-wise primality masking
//! - Sliding-window sample extraction
//!
//! Inputs are assumed valid; argument checking happens in the engine layer.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Spiral numbering.
pub mod spiral;

/// Primality masks.
pub mod mask;

/// Window extraction.
pub mod windows;
