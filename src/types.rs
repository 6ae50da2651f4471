//! Core data types for the stride engine.
//!
//! This module defines the fundamental types used throughout the step
//! counting pipeline. All types are small value types designed to make
//! intent obvious: if a concept exists, it gets a type. Raw tuples and
//! untyped collections never cross module boundaries.
//!
//! Design note: All arithmetic is f64. The filter recursion and the
//! threshold derivation are sensitive to accumulated rounding, and the
//! pipeline is batch (not on-device), so there is no reason to trade
//! precision for memory.

use serde::Serialize;

/// A single three-axis reading, in one opaque acceleration unit.
///
/// The engine never assumes a particular unit (g, m/s²) — only that
/// every vector in a run uses the same one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TriaxialVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl TriaxialVector {
    /// Creates a new vector from its three components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &TriaxialVector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Component-wise subtraction (`self - other`).
    pub fn minus(&self, other: &TriaxialVector) -> TriaxialVector {
        TriaxialVector::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

/// One accelerometer sample at a single time step.
///
/// A sample arrives in one of two shapes:
/// - `Total`: a single raw total-acceleration vector. Gravity must be
///   separated out before projection.
/// - `Split`: a pre-separated `[user-motion, gravity]` pair, produced
///   by devices that do the separation in hardware. Decomposition is
///   skipped for these.
///
/// All samples in a run must share the same shape; the parser rejects
/// mixed runs before they reach the pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    /// Raw total acceleration; decomposition required.
    Total(TriaxialVector),
    /// Pre-separated user-motion and gravity components.
    Split {
        user: TriaxialVector,
        gravity: TriaxialVector,
    },
}

impl Sample {
    /// Number of vector groups this sample carries (1 or 2).
    pub fn group_count(&self) -> usize {
        match self {
            Sample::Total(_) => 1,
            Sample::Split { .. } => 2,
        }
    }
}

/// A sample after gravity separation: the user-motion component and
/// the gravity component at one time step.
///
/// This is the only shape the projection stage accepts. For `Total`
/// input it is produced by the decomposer; for `Split` input it is a
/// direct passthrough.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitSample {
    /// Acceleration due to the wearer's motion.
    pub user: TriaxialVector,
    /// Slow-varying, near-DC gravity component.
    pub gravity: TriaxialVector,
}

impl SplitSample {
    pub fn new(user: TriaxialVector, gravity: TriaxialVector) -> Self {
        Self { user, gravity }
    }

    /// Total acceleration reconstructed from the two components.
    pub fn total(&self) -> TriaxialVector {
        TriaxialVector::new(
            self.user.x + self.gravity.x,
            self.user.y + self.gravity.y,
            self.user.z + self.gravity.z,
        )
    }
}
