//! User profile and stride resolution.
//!
//! Stride length is resolved once at construction from whatever the
//! caller knows about the wearer, with an explicit fallback chain:
//! explicit stride, then gender × height, then height alone, then
//! gender alone, then a global average. Height, stride, and the final
//! walked distance share one opaque unit; the engine never assumes
//! centimeters or meters.

use serde::Serialize;
use std::str::FromStr;

use crate::error::{EngineError, Result};

/// Stride-per-height multipliers, by gender.
const MULTIPLIER_FEMALE: f64 = 0.413;
const MULTIPLIER_MALE: f64 = 0.415;

/// Population-average strides, by gender.
const AVERAGE_STRIDE_FEMALE: f64 = 70.0;
const AVERAGE_STRIDE_MALE: f64 = 78.0;

/// Wearer gender, used only for stride-table lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    Female,
    Male,
}

impl FromStr for Gender {
    type Err = EngineError;

    /// Case-insensitive parse of `male` / `female`.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "female" => Ok(Gender::Female),
            "male" => Ok(Gender::Male),
            other => Err(EngineError::validation(
                "gender",
                format!("unrecognized token \"{}\"", other),
            )),
        }
    }
}

/// An immutable wearer profile with a resolved stride.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UserProfile {
    gender: Option<Gender>,
    height: Option<f64>,
    stride: f64,
}

impl UserProfile {
    /// Builds a profile, validating every provided field and resolving
    /// the stride.
    ///
    /// Resolution priority when no explicit stride is given:
    /// 1. gender and height → `multiplier[gender] × height`
    /// 2. height only → `height × average(multipliers)`
    /// 3. gender only → `average_stride[gender]`
    /// 4. neither → average of the average-stride table
    pub fn new(
        gender: Option<&str>,
        height: Option<f64>,
        stride: Option<f64>,
    ) -> Result<Self> {
        let gender = gender.map(Gender::from_str).transpose()?;

        if let Some(h) = height {
            if !(h > 0.0) {
                return Err(EngineError::validation(
                    "height",
                    format!("must be > 0, got {}", h),
                ));
            }
        }
        if let Some(s) = stride {
            if !(s > 0.0) {
                return Err(EngineError::validation(
                    "stride",
                    format!("must be > 0, got {}", s),
                ));
            }
        }

        let stride = stride.unwrap_or_else(|| Self::resolve_stride(gender, height));
        Ok(Self {
            gender,
            height,
            stride,
        })
    }

    /// Profile with no information at all; stride falls back to the
    /// global average.
    pub fn unknown() -> Self {
        Self {
            gender: None,
            height: None,
            stride: Self::resolve_stride(None, None),
        }
    }

    fn resolve_stride(gender: Option<Gender>, height: Option<f64>) -> f64 {
        match (gender, height) {
            (Some(g), Some(h)) => Self::multiplier(g) * h,
            (None, Some(h)) => h * (MULTIPLIER_FEMALE + MULTIPLIER_MALE) / 2.0,
            (Some(g), None) => Self::average_stride(g),
            (None, None) => (AVERAGE_STRIDE_FEMALE + AVERAGE_STRIDE_MALE) / 2.0,
        }
    }

    fn multiplier(gender: Gender) -> f64 {
        match gender {
            Gender::Female => MULTIPLIER_FEMALE,
            Gender::Male => MULTIPLIER_MALE,
        }
    }

    fn average_stride(gender: Gender) -> f64 {
        match gender {
            Gender::Female => AVERAGE_STRIDE_FEMALE,
            Gender::Male => AVERAGE_STRIDE_MALE,
        }
    }

    /// Resolved stride; always > 0.
    pub fn stride(&self) -> f64 {
        self.stride
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn height(&self) -> Option<f64> {
        self.height
    }
}
