//! Structured report export.
//!
//! The algorithms never write to an output stream; they return
//! structured values. This module packages a completed pipeline run
//! into a serializable report that an external reporting collaborator
//! (console renderer, HTTP handler, test harness) can consume.
//!
//! The report is self-contained: counts, distance, threshold, rate
//! statistics, and the detected peak indices all travel together, so a
//! consumer needs no access to the run itself.

use serde::Serialize;

use crate::pipeline::PipelineRun;
use crate::profile::Gender;

/// Summary of one pipeline run, ready for serialization.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Number of input samples.
    pub sample_count: usize,
    /// Detected step count.
    pub steps: u32,
    /// Walked distance in the profile's unit.
    pub distance: f64,
    /// Profile fields the run was computed against.
    pub profile: ProfileReport,
    /// Detection diagnostics.
    pub detection: DetectionReport,
}

/// The resolved profile, echoed for report consumers.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileReport {
    pub gender: Option<Gender>,
    pub height: Option<f64>,
    pub stride: f64,
}

/// Diagnostic values from the detection stage.
///
/// `rate_std_dev` is informational only; the decision threshold is
/// derived from the mean alone.
#[derive(Debug, Clone, Serialize)]
pub struct DetectionReport {
    pub threshold: f64,
    pub rate_mean: f64,
    pub rate_std_dev: f64,
    pub rate_count: usize,
    /// Indices into the rate sequence where steps were counted.
    pub peaks: Vec<usize>,
}

impl RunReport {
    /// Builds a report from a completed run.
    pub fn from_run(run: &PipelineRun) -> Self {
        let analysis = run.analysis();
        Self {
            sample_count: run.samples().len(),
            steps: analysis.steps,
            distance: analysis.distance,
            profile: ProfileReport {
                gender: run.profile().gender(),
                height: run.profile().height(),
                stride: run.profile().stride(),
            },
            detection: DetectionReport {
                threshold: analysis.threshold,
                rate_mean: analysis.rate_mean,
                rate_std_dev: analysis.rate_std_dev,
                rate_count: analysis.rates.len(),
                peaks: analysis.peaks.clone(),
            },
        }
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
