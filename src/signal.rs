//! Gravity separation and motion-intensity projection.
//!
//! This module turns raw triaxial samples into the scalar signal the
//! step detector scans:
//! - `MotionDecomposer` splits total acceleration into gravity and
//!   user-motion components using a near-DC low-pass per axis.
//! - `AccelerationProjector` projects user-motion onto gravity and
//!   smooths the resulting intensity signal.
//!
//! Why gravity separation matters: device orientation (pocket, hand,
//! bag) must not affect step evidence. Projecting the motion component
//! onto the estimated gravity axis yields an orientation-invariant
//! intensity signal.
//!
//! Design note: both stages are pure batch transformations. The filter
//! recursion is stateful across the sequence, so each axis is filtered
//! over the complete time series, never per-sample. Axes carry no
//! cross-dependency and could be filtered in any order.

use log::debug;

use crate::error::{EngineError, Result};
use crate::filter::{LOW_0HZ, LOW_5HZ};
use crate::types::{Sample, SplitSample, TriaxialVector};

/// Splits total acceleration into `[user-motion, gravity]` pairs.
pub struct MotionDecomposer;

impl MotionDecomposer {
    /// Decomposes a run of samples.
    ///
    /// - All-`Total` input: per axis, the gravity component is the
    ///   `LOW_0HZ` filtration of the full per-axis series; user-motion
    ///   is total minus gravity at each time step.
    /// - All-`Split` input: already decomposed, passed through
    ///   unchanged.
    /// - A mixed run is a format error (the parser normally rejects
    ///   this before it gets here, but sample sets built in code go
    ///   through the same check).
    pub fn decompose(samples: &[Sample]) -> Result<Vec<SplitSample>> {
        let Some(first) = samples.first() else {
            return Ok(Vec::new());
        };

        if let Some(bad) = samples
            .iter()
            .position(|s| s.group_count() != first.group_count())
        {
            return Err(EngineError::format(
                bad,
                format!(
                    "sample has {} vector group(s), expected {} as in sample 0",
                    samples[bad].group_count(),
                    first.group_count()
                ),
            ));
        }

        match first {
            Sample::Split { .. } => {
                debug!("decompose: {} pre-split samples, passthrough", samples.len());
                Ok(samples
                    .iter()
                    .map(|s| match s {
                        Sample::Split { user, gravity } => SplitSample::new(*user, *gravity),
                        // Uniformity was checked above.
                        Sample::Total(_) => unreachable!("mixed run past uniformity check"),
                    })
                    .collect())
            }
            Sample::Total(_) => {
                debug!("decompose: filtering gravity from {} raw samples", samples.len());
                Ok(Self::split_raw(samples))
            }
        }
    }

    /// Runs the gravity low-pass over each axis of an all-`Total` run
    /// and reassembles per-sample pairs.
    fn split_raw(samples: &[Sample]) -> Vec<SplitSample> {
        let axis = |f: fn(&TriaxialVector) -> f64| -> Vec<f64> {
            samples
                .iter()
                .map(|s| match s {
                    Sample::Total(v) => f(v),
                    Sample::Split { .. } => unreachable!("mixed run past uniformity check"),
                })
                .collect()
        };

        let total_x = axis(|v| v.x);
        let total_y = axis(|v| v.y);
        let total_z = axis(|v| v.z);

        let gravity_x = LOW_0HZ.apply(&total_x);
        let gravity_y = LOW_0HZ.apply(&total_y);
        let gravity_z = LOW_0HZ.apply(&total_z);

        (0..samples.len())
            .map(|i| {
                let gravity = TriaxialVector::new(gravity_x[i], gravity_y[i], gravity_z[i]);
                let total = TriaxialVector::new(total_x[i], total_y[i], total_z[i]);
                SplitSample::new(total.minus(&gravity), gravity)
            })
            .collect()
    }
}

/// Scale applied to the projection before smoothing.
const INTENSITY_GAIN: f64 = 3.0;

/// Projects user-motion onto gravity and smooths the scalar result.
pub struct AccelerationProjector;

impl AccelerationProjector {
    /// Produces the smoothed motion-intensity signal.
    ///
    /// Per sample: `intensity = |user · gravity| × 3.0`. The whole
    /// intensity sequence is then smoothed with one `LOW_5HZ` pass, so
    /// the output length equals the input length and the first two
    /// entries are zero by filter seeding.
    pub fn project(samples: &[SplitSample]) -> Vec<f64> {
        let intensity = Self::raw_intensity(samples);
        debug!("project: {} intensity values, smoothing with LOW_5HZ", intensity.len());
        LOW_5HZ.apply(&intensity)
    }

    /// The unsmoothed intensity sequence. Non-negative by
    /// construction; exposed for diagnostics and tests.
    pub fn raw_intensity(samples: &[SplitSample]) -> Vec<f64> {
        samples
            .iter()
            .map(|s| s.user.dot(&s.gravity).abs() * INTENSITY_GAIN)
            .collect()
    }
}
