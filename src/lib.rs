//! Stride Engine Library
//!
//! A batch signal-processing kernel that converts a sequence of
//! triaxial accelerometer samples into an estimated step count and
//! walked distance.
//!
//! # Design Philosophy
//!
//! - **Pure stages**: every stage is a pure function of the previous
//!   stage's output; nothing mutates its input in place.
//! - **Fail at the boundary**: format and validation errors are
//!   detected eagerly before any filtering runs; there are no partial
//!   results and no retries.
//! - **Structured diagnostics**: algorithms return structured values
//!   (thresholds, rate statistics, peak indices); rendering them is a
//!   caller's concern.
//!
//! # Example
//!
//! ```
//! use stride_engine::pipeline::PipelineRun;
//! use stride_engine::profile::UserProfile;
//!
//! let profile = UserProfile::new(Some("male"), Some(180.0), None)?;
//! let run = PipelineRun::from_raw("0.1,0.0,1.0;0.2,0.0,1.0;0.0,0.1,1.0;", profile)?;
//! assert_eq!(run.distance(), run.steps() as f64 * profile.stride());
//! # Ok::<(), stride_engine::error::EngineError>(())
//! ```

pub mod error;
pub mod export;
pub mod filter;
pub mod pipeline;
pub mod profile;
pub mod signal;
pub mod step_detection;
pub mod types;
pub mod wire;

mod integration_tests;

// Re-export the full stage set and its inputs/outputs
pub use error::{EngineError, Result};
pub use export::RunReport;
pub use pipeline::PipelineRun;
pub use profile::{Gender, UserProfile};
pub use signal::{AccelerationProjector, MotionDecomposer};
pub use step_detection::{StepAnalysis, StepDetector};
pub use types::{Sample, SplitSample, TriaxialVector};
