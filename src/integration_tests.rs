/// Integration tests for the complete step-counting pipeline.
/// Exercises realistic end-to-end scenarios: synthetic walks through
/// the full parse → decompose → project → detect flow, profile
/// resolution, and input rejection at the boundary.

#[cfg(test)]
mod integration_tests {
    // Everything here goes through the crate-root re-exports, the
    // surface external callers see.
    use crate::{MotionDecomposer, PipelineRun, RunReport, Sample, TriaxialVector, UserProfile};

    /// Helper: synthetic walk as raw wire text. Total acceleration
    /// oscillates sinusoidally about a constant unit gravity offset on
    /// the z axis, `samples_per_cycle` samples per oscillation.
    fn sinusoidal_walk(cycles: usize, samples_per_cycle: usize, amplitude: f64) -> String {
        let mut raw = String::new();
        for i in 0..cycles * samples_per_cycle {
            let phase = 2.0 * std::f64::consts::PI * (i % samples_per_cycle) as f64
                / samples_per_cycle as f64;
            raw.push_str(&format!("0,0,{};", 1.0 + amplitude * phase.sin()));
        }
        raw
    }

    /// Helper: the same walk as in-memory samples.
    fn sinusoidal_walk_samples(
        cycles: usize,
        samples_per_cycle: usize,
        amplitude: f64,
    ) -> Vec<Sample> {
        (0..cycles * samples_per_cycle)
            .map(|i| {
                let phase = 2.0 * std::f64::consts::PI * (i % samples_per_cycle) as f64
                    / samples_per_cycle as f64;
                Sample::Total(TriaxialVector::new(0.0, 0.0, 1.0 + amplitude * phase.sin()))
            })
            .collect()
    }

    #[test]
    fn test_synthetic_walk_counts_cycles() {
        // 10 oscillation cycles should land within ±1 step.
        let raw = sinusoidal_walk(10, 6, 0.3);
        let profile = UserProfile::new(Some("female"), None, None).unwrap();
        let run = PipelineRun::from_raw(&raw, profile).unwrap();

        let steps = run.steps() as i64;
        assert!(
            (steps - 10).abs() <= 1,
            "expected 10 ± 1 steps, got {}",
            steps
        );
        assert_eq!(run.distance(), run.steps() as f64 * 70.0);
    }

    #[test]
    fn test_walk_length_scales_step_count() {
        let profile = UserProfile::unknown();
        let short = PipelineRun::from_raw(&sinusoidal_walk(8, 6, 0.3), profile).unwrap();
        let long = PipelineRun::from_raw(&sinusoidal_walk(16, 6, 0.3), profile).unwrap();
        assert!(
            long.steps() > short.steps(),
            "doubling the walk should add steps: {} vs {}",
            short.steps(),
            long.steps()
        );
    }

    #[test]
    fn test_raw_and_parsed_inputs_agree() {
        let profile = UserProfile::unknown();
        let from_raw = PipelineRun::from_raw(&sinusoidal_walk(10, 6, 0.3), profile).unwrap();
        let from_samples =
            PipelineRun::from_samples(sinusoidal_walk_samples(10, 6, 0.3), profile).unwrap();
        assert_eq!(from_raw.steps(), from_samples.steps());
        assert_eq!(from_raw.distance(), from_samples.distance());
    }

    #[test]
    fn test_pre_split_run_end_to_end() {
        // A device that separates gravity in hardware: pipeline skips
        // decomposition but produces the same downstream shapes.
        let samples = sinusoidal_walk_samples(10, 6, 0.3);
        let split = MotionDecomposer::decompose(&samples).unwrap();
        let pre_split: Vec<Sample> = split
            .iter()
            .map(|s| Sample::Split {
                user: s.user,
                gravity: s.gravity,
            })
            .collect();

        let profile = UserProfile::unknown();
        let direct = PipelineRun::from_samples(samples, profile).unwrap();
        let via_split = PipelineRun::from_samples(pre_split, profile).unwrap();
        assert_eq!(direct.steps(), via_split.steps());
    }

    #[test]
    fn test_zero_signal_counts_no_steps() {
        // Free fall (all-zero readings) has no motion intensity at
        // all. A merely still device is different: its constant
        // gravity still excites the filter startup transient.
        let raw = "0,0,0;".repeat(300);
        let run = PipelineRun::from_raw(&raw, UserProfile::unknown()).unwrap();
        assert_eq!(run.steps(), 0);
        assert_eq!(run.distance(), 0.0);
    }

    #[test]
    fn test_degenerate_short_input() {
        for raw in ["", "0,0,1;", "0,0,1;0,0,1;"] {
            let run = PipelineRun::from_raw(raw, UserProfile::unknown()).unwrap();
            assert_eq!(run.steps(), 0, "short input {:?} must count zero", raw);
        }
    }

    #[test]
    fn test_format_violation_rejected_before_any_filtering() {
        let raw = "0,0,1;0.1,0,0.9|0,0,1;";
        let result = PipelineRun::from_raw(raw, UserProfile::unknown());
        assert!(result.is_err(), "mixed group counts must be rejected");
    }

    #[test]
    fn test_stride_changes_distance_not_steps() {
        let raw = sinusoidal_walk(10, 6, 0.3);
        let short_stride = UserProfile::new(Some("female"), None, None).unwrap();
        let long_stride = UserProfile::new(Some("male"), Some(190.0), None).unwrap();

        let a = PipelineRun::from_raw(&raw, short_stride).unwrap();
        let b = PipelineRun::from_raw(&raw, long_stride).unwrap();
        assert_eq!(a.steps(), b.steps());
        assert!(b.distance() > a.distance());
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let raw = sinusoidal_walk(10, 6, 0.3);
        let run = PipelineRun::from_raw(&raw, UserProfile::unknown()).unwrap();
        let report = RunReport::from_run(&run);
        let json = report.to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["steps"], u64::from(run.steps()));
        assert_eq!(value["sample_count"], 60);
        assert!(value["detection"]["threshold"].is_number());
    }
}
