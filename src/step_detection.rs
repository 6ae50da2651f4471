//! Step detection over the smoothed motion-intensity signal.
//!
//! The detector works on the rate of change of the smoothed signal:
//! 1. First differences of the signal give the rate sequence.
//! 2. An adaptive threshold is derived from the rate mean.
//! 3. A single left-to-right scan finds descending-edge peaks subject
//!    to a minimum spacing and a duplicate-suppression rule.
//! 4. One boundary check after the scan can add a final step.
//!
//! Steps times stride gives walked distance. The detector never fails:
//! a signal too short to produce a usable rate sequence simply counts
//! zero steps.

use log::debug;
use serde::Serialize;

/// Threshold scale applied to the rate mean.
const THRESHOLD_FACTOR: f64 = 0.3;

/// Minimum index spacing between accepted peaks.
const MIN_PEAK_DISTANCE: i64 = 2;

/// Rate difference below which two nearby peaks count as one.
const DUPLICATE_RATE_EPSILON: f64 = 1.0;

/// Everything one detection pass derives from the signal.
///
/// The rate statistics and peak indices exist for diagnostics and
/// reporting; only the threshold, the peak rules, and the stride feed
/// the step/distance result.
#[derive(Debug, Clone, Serialize)]
pub struct StepAnalysis {
    /// Number of detected steps.
    pub steps: u32,
    /// Walked distance: exactly `steps × stride`.
    pub distance: f64,
    /// Stride used for the distance computation.
    pub stride: f64,
    /// Decision threshold (`rate mean × 0.3`; may be negative).
    pub threshold: f64,
    /// Mean of the rate sequence.
    pub rate_mean: f64,
    /// Population standard deviation of the rate sequence.
    ///
    /// Carried for diagnostic parity only; it never affects the
    /// decision.
    pub rate_std_dev: f64,
    /// Indices into the rate sequence where steps were counted. A
    /// boundary-rule step is recorded at the last rate index.
    pub peaks: Vec<usize>,
    /// First differences of the smoothed signal.
    pub rates: Vec<f64>,
}

/// Scans a smoothed motion-intensity signal for footstrike peaks.
pub struct StepDetector;

impl StepDetector {
    /// Runs the full detection pass.
    ///
    /// `filtered_signal` is the smoothed motion-intensity signal from
    /// the projector; `stride` is the per-step distance (> 0, resolved
    /// by the user profile).
    pub fn detect(filtered_signal: &[f64], stride: f64) -> StepAnalysis {
        let rates = Self::rates(filtered_signal);
        let (mean, std_dev) = Self::rate_statistics(&rates);
        let threshold = mean * THRESHOLD_FACTOR;

        let mut steps: u32 = 0;
        let mut peaks: Vec<usize> = Vec::new();
        // Seeded so the first candidate always satisfies the spacing
        // rule.
        let mut last_peak: i64 = -MIN_PEAK_DISTANCE;

        // Interior scan; the first and last two rate indices are left
        // to the boundary rule.
        for i in 1..rates.len().saturating_sub(2) {
            let edge = (rates[i - 1] > threshold || rates[i] > threshold)
                && rates[i] > rates[i + 1];
            let spaced = i as i64 - last_peak > MIN_PEAK_DISTANCE;
            if !(edge && spaced) {
                continue;
            }

            let duplicate = last_peak >= 0
                && (rates[i] - rates[last_peak as usize]).abs() < DUPLICATE_RATE_EPSILON
                && i as i64 - last_peak < MIN_PEAK_DISTANCE + 1;
            if duplicate {
                continue;
            }

            steps += 1;
            peaks.push(i);
            last_peak = i as i64;
        }

        // Boundary rule: a still-rising tail past the scan window
        // counts once more, exempt from duplicate suppression.
        if let Some(&tail) = rates.last() {
            let tail_index = rates.len() as i64 - 1;
            if tail > threshold && tail_index - last_peak > MIN_PEAK_DISTANCE {
                steps += 1;
                peaks.push(rates.len() - 1);
            }
        }

        debug!(
            "detect: {} rates, threshold {:.6}, {} steps",
            rates.len(),
            threshold,
            steps
        );

        StepAnalysis {
            steps,
            distance: steps as f64 * stride,
            stride,
            threshold,
            rate_mean: mean,
            rate_std_dev: std_dev,
            peaks,
            rates,
        }
    }

    /// First differences of the signal; length = len(signal) − 1.
    fn rates(signal: &[f64]) -> Vec<f64> {
        signal.windows(2).map(|w| w[1] - w[0]).collect()
    }

    /// Mean and population standard deviation of the rate sequence.
    fn rate_statistics(rates: &[f64]) -> (f64, f64) {
        if rates.is_empty() {
            return (0.0, 0.0);
        }
        let n = rates.len() as f64;
        let mean = rates.iter().sum::<f64>() / n;
        let variance = rates.iter().map(|r| (r - mean) * (r - mean)).sum::<f64>() / n;
        (mean, variance.sqrt())
    }
}
