//! Fixed-design IIR filtering.
//!
//! The engine uses three second-order (biquad) filter designs, each a
//! pair of fixed coefficient tables baked in at an implicit sampling
//! rate. The rate is intentionally not a parameter and must never be
//! inferred from the input: these are specific designs, not a general
//! filter-design facility.
//!
//! Design note: the recursion seeds its first two outputs to exact
//! zero. That startup transient is part of the contract — downstream
//! stages (and their thresholds) are tuned against it, so it must not
//! be "fixed" by priming the state.

/// One biquad design: feedback weights `alpha` and feed-forward
/// weights `beta`.
///
/// `alpha[0]` is 1.0 in every provided design and is applied as a
/// literal multiplication in the recursion, never as a divisor, to
/// preserve exact numeric behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterCoefficients {
    /// Feedback (recursion) weights. `alpha[0]` is always 1.
    pub alpha: [f64; 3],
    /// Feed-forward weights.
    pub beta: [f64; 3],
}

/// Near-DC low-pass, used to estimate the gravity component.
pub const LOW_0HZ: FilterCoefficients = FilterCoefficients {
    alpha: [1.0, -1.979133761292768, 0.979521463540373],
    beta: [0.000086384997973502, 0.000172769995947004, 0.000086384997973502],
};

/// 5 Hz low-pass, used to smooth the motion-intensity signal.
pub const LOW_5HZ: FilterCoefficients = FilterCoefficients {
    alpha: [1.0, -1.80898117793047, 0.827224480562408],
    beta: [0.095465967120306, -0.172688631608676, 0.095465967120306],
};

/// 1 Hz high-pass. Defined as an available design; no pipeline stage
/// currently invokes it.
pub const HIGH_1HZ: FilterCoefficients = FilterCoefficients {
    alpha: [1.0, -1.905384612118461, 0.910092542787947],
    beta: [0.953986986993339, -1.907503180919730, 0.953986986993339],
};

impl FilterCoefficients {
    /// Runs the filter over `input`, returning a new sequence of the
    /// same length.
    ///
    /// Causal second-order recursion with a zero seed:
    ///
    /// ```text
    /// y[0] = 0, y[1] = 0
    /// y[i] = alpha[0] * ( beta[0]*x[i] + beta[1]*x[i-1] + beta[2]*x[i-2]
    ///                      - alpha[1]*y[i-1] - alpha[2]*y[i-2] )
    /// ```
    ///
    /// Inputs shorter than two samples return the unmodified zero-seed
    /// prefix (`[]` for empty input, `[0.0]` for a single sample).
    pub fn apply(&self, input: &[f64]) -> Vec<f64> {
        let mut output = vec![0.0; input.len()];
        for i in 2..input.len() {
            output[i] = self.alpha[0]
                * (self.beta[0] * input[i]
                    + self.beta[1] * input[i - 1]
                    + self.beta[2] * input[i - 2]
                    - self.alpha[1] * output[i - 1]
                    - self.alpha[2] * output[i - 2]);
        }
        output
    }
}
