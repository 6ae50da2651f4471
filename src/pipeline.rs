//! Complete step-counting pipeline.
//!
//! Orchestrates the full batch flow:
//!
//! 1. **Parse**: wire-format string into validated samples.
//! 2. **Decompose**: gravity / user-motion separation.
//! 3. **Project**: motion intensity along the gravity axis, smoothed.
//! 4. **Detect**: peak scan, step count, walked distance.
//!
//! The pipeline holds the output of every stage so callers (tests,
//! reporters, the CLI) can inspect intermediates. It adds no logic of
//! its own: each stage is a pure function of the previous stage's
//! output, and the whole run either validates and completes or rejects
//! at the input boundary with no partial result.

use log::debug;

use crate::error::Result;
use crate::profile::UserProfile;
use crate::signal::{AccelerationProjector, MotionDecomposer};
use crate::step_detection::{StepAnalysis, StepDetector};
use crate::types::{Sample, SplitSample};
use crate::wire;

/// A completed pipeline run with every stage's output retained.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    profile: UserProfile,
    samples: Vec<Sample>,
    split: Vec<SplitSample>,
    smoothed_intensity: Vec<f64>,
    analysis: StepAnalysis,
}

impl PipelineRun {
    /// Parses a raw wire-format string and runs the full pipeline.
    pub fn from_raw(raw: &str, profile: UserProfile) -> Result<Self> {
        let samples = wire::parse_run(raw)?;
        Self::from_samples(samples, profile)
    }

    /// Runs the pipeline over already-parsed samples.
    pub fn from_samples(samples: Vec<Sample>, profile: UserProfile) -> Result<Self> {
        debug!("pipeline: {} samples, stride {}", samples.len(), profile.stride());

        let split = MotionDecomposer::decompose(&samples)?;
        let smoothed_intensity = AccelerationProjector::project(&split);
        let analysis = StepDetector::detect(&smoothed_intensity, profile.stride());

        debug!(
            "pipeline: {} steps over distance {:.2}",
            analysis.steps, analysis.distance
        );

        Ok(Self {
            profile,
            samples,
            split,
            smoothed_intensity,
            analysis,
        })
    }

    /// The profile this run was computed against.
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Stage 1 output: parsed, validated samples.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Stage 2 output: `[user-motion, gravity]` pairs.
    pub fn split_samples(&self) -> &[SplitSample] {
        &self.split
    }

    /// Stage 3 output: the smoothed motion-intensity signal.
    pub fn smoothed_intensity(&self) -> &[f64] {
        &self.smoothed_intensity
    }

    /// Stage 4 output: detection result and diagnostics.
    pub fn analysis(&self) -> &StepAnalysis {
        &self.analysis
    }

    /// Detected step count.
    pub fn steps(&self) -> u32 {
        self.analysis.steps
    }

    /// Walked distance (`steps × stride`, in the profile's unit).
    pub fn distance(&self) -> f64 {
        self.analysis.distance
    }
}
