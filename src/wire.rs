//! Text wire format for accelerometer runs.
//!
//! Grammar, validated eagerly before anything reaches the signal
//! stages:
//!
//! ```text
//! run      := sample (';' sample)* ';'?
//! sample   := group ('|' group)?          -- one or two vector groups
//! group    := float ',' float ',' float   -- x, y, z
//! ```
//!
//! One group per sample means raw total acceleration; two groups mean
//! a pre-separated `[user-motion, gravity]` pair. Every sample in a
//! run must carry the same group count. A trailing `;` is accepted as
//! a terminator; an interior empty sample is not.
//!
//! All violations surface as a format error naming the sample index
//! and the offending token, so a caller can locate the malformed
//! element.

use crate::error::{EngineError, Result};
use crate::types::{Sample, TriaxialVector};

/// Parses a raw run string into validated samples.
///
/// An empty (or all-whitespace) string parses to an empty run.
pub fn parse_run(raw: &str) -> Result<Vec<Sample>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    let body = trimmed.strip_suffix(';').unwrap_or(trimmed);

    let mut samples = Vec::new();
    for (index, text) in body.split(';').enumerate() {
        samples.push(parse_sample(index, text)?);
    }

    if let Some(first) = samples.first() {
        let expected = first.group_count();
        if let Some(bad) = samples.iter().position(|s| s.group_count() != expected) {
            return Err(EngineError::format(
                bad,
                format!(
                    "sample has {} vector group(s), expected {} as in sample 0",
                    samples[bad].group_count(),
                    expected
                ),
            ));
        }
    }

    Ok(samples)
}

fn parse_sample(index: usize, text: &str) -> Result<Sample> {
    if text.trim().is_empty() {
        return Err(EngineError::format(index, "empty sample"));
    }

    let groups: Vec<&str> = text.split('|').collect();
    match groups.as_slice() {
        [total] => Ok(Sample::Total(parse_group(index, total)?)),
        [user, gravity] => Ok(Sample::Split {
            user: parse_group(index, user)?,
            gravity: parse_group(index, gravity)?,
        }),
        _ => Err(EngineError::format(
            index,
            format!("{} vector groups, expected 1 or 2", groups.len()),
        )),
    }
}

fn parse_group(index: usize, text: &str) -> Result<TriaxialVector> {
    let components: Vec<&str> = text.split(',').collect();
    if components.len() != 3 {
        return Err(EngineError::format(
            index,
            format!("expected 3 components, got {} in \"{}\"", components.len(), text.trim()),
        ));
    }

    let mut parsed = [0.0_f64; 3];
    for (slot, token) in parsed.iter_mut().zip(&components) {
        let token = token.trim();
        *slot = token.parse::<f64>().map_err(|_| {
            EngineError::format(index, format!("not a number: \"{}\"", token))
        })?;
        if !slot.is_finite() {
            return Err(EngineError::format(
                index,
                format!("non-finite component: \"{}\"", token),
            ));
        }
    }

    Ok(TriaxialVector::new(parsed[0], parsed[1], parsed[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_is_empty_run() {
        assert!(parse_run("").unwrap().is_empty());
        assert!(parse_run("   \n").unwrap().is_empty());
    }

    #[test]
    fn test_single_total_sample() {
        let samples = parse_run("0.123,-0.928,0.342").unwrap();
        assert_eq!(
            samples,
            vec![Sample::Total(TriaxialVector::new(0.123, -0.928, 0.342))]
        );
    }

    #[test]
    fn test_split_sample_pairs() {
        let samples = parse_run("0.028,-0.072,5.0|0.129,-0.945,-5.0;").unwrap();
        assert_eq!(samples.len(), 1);
        let Sample::Split { user, gravity } = samples[0] else {
            panic!("expected split sample");
        };
        assert_eq!(user, TriaxialVector::new(0.028, -0.072, 5.0));
        assert_eq!(gravity, TriaxialVector::new(0.129, -0.945, -5.0));
    }

    #[test]
    fn test_multi_sample_run_with_trailing_separator() {
        let samples = parse_run("1,2,3;4,5,6;7,8,9;").unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[2], Sample::Total(TriaxialVector::new(7.0, 8.0, 9.0)));
    }

    #[test]
    fn test_mixed_group_counts_rejected() {
        let err = parse_run("1,2,3;1,2,3|4,5,6").unwrap_err();
        assert!(matches!(err, EngineError::Format { sample: 1, .. }));
    }

    #[test]
    fn test_wrong_component_count_rejected() {
        let err = parse_run("1,2,3;4,5").unwrap_err();
        assert_eq!(
            err,
            EngineError::format(1, "expected 3 components, got 2 in \"4,5\"")
        );
    }

    #[test]
    fn test_three_groups_rejected() {
        let err = parse_run("1,2,3|4,5,6|7,8,9").unwrap_err();
        assert!(matches!(err, EngineError::Format { sample: 0, .. }));
    }

    #[test]
    fn test_non_numeric_component_rejected() {
        let err = parse_run("1,2,three").unwrap_err();
        assert_eq!(err, EngineError::format(0, "not a number: \"three\""));
    }

    #[test]
    fn test_non_finite_component_rejected() {
        let err = parse_run("1,2,inf").unwrap_err();
        assert!(matches!(err, EngineError::Format { sample: 0, .. }));
    }

    #[test]
    fn test_interior_empty_sample_rejected() {
        let err = parse_run("1,2,3;;4,5,6").unwrap_err();
        assert!(matches!(err, EngineError::Format { sample: 1, .. }));
    }
}
