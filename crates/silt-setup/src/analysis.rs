//! The post-output analysis observer capability.

use silt_domain::DomainBlock;
use std::fmt;

/// Error returned by a failing analysis pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    /// The observer failed while analysing or writing its output.
    ExecutionFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExecutionFailed { reason } => write!(f, "analysis failed: {reason}"),
        }
    }
}

impl std::error::Error for AnalysisError {}

/// An observer invoked by the framework after each output cycle.
///
/// # Contract
///
/// - Read-only with respect to simulation state: the `&DomainBlock`
///   receiver makes field or particle mutation impossible. Observers
///   should read the published [`device image`](DomainBlock::device),
///   which is the state the compute pipeline last saw.
/// - Observers own whatever output sink they write to (a file, a
///   collector, a socket); failures surface as
///   [`AnalysisError::ExecutionFailed`].
/// - Invoked zero or more times, at a cadence the framework controls;
///   an observer must not block the simulation loop for unbounded time.
pub trait Analysis {
    /// Analyse the current state of one local domain.
    fn make_analysis(&mut self, block: &DomainBlock) -> Result<(), AnalysisError>;
}

/// The no-op observer: the default when a run needs no analysis.
///
/// Always succeeds and reads nothing. Using an explicit type rather
/// than an empty method override keeps "this run has no analysis"
/// visible in the type system.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoAnalysis;

impl Analysis for NoAnalysis {
    fn make_analysis(&mut self, _block: &DomainBlock) -> Result<(), AnalysisError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use silt_core::{Axis, FieldChannel, ParticleSlot};

    fn small_block() -> DomainBlock {
        DomainBlock::builder()
            .extent([2, 2, 2])
            .bounds(Axis::I, 0.0, 1.0)
            .bounds(Axis::J, 0.0, 1.0)
            .bounds(Axis::K, 0.0, 1.0)
            .particle_capacity(4)
            .build()
            .unwrap()
    }

    #[test]
    fn no_analysis_always_succeeds() {
        let block = small_block();
        assert_eq!(NoAnalysis.make_analysis(&block), Ok(()));
    }

    /// Observers collect into state they own; the block stays untouched.
    #[test]
    fn observer_reads_published_state() {
        struct ActiveMass {
            total: f64,
        }

        impl Analysis for ActiveMass {
            fn make_analysis(&mut self, block: &DomainBlock) -> Result<(), AnalysisError> {
                let device = block.device();
                self.total = (0..device.particle_count())
                    .filter(|&k| device.is_active(k))
                    .map(|k| device.particle(ParticleSlot::Mass, k))
                    .sum();
                Ok(())
            }
        }

        let mut block = small_block();
        for k in 0..4 {
            block.particles_mut().set(ParticleSlot::Mass, k, 2.5);
        }
        block.particles_mut().set_active(0, false);
        block.particles_mut().set_active(2, false);
        block.field_mut(FieldChannel::Density).fill(1.0);
        block.publish();

        let mut observer = ActiveMass { total: 0.0 };
        observer.make_analysis(&block).unwrap();
        assert_eq!(observer.total, 5.0);
    }

    #[test]
    fn failures_carry_a_reason() {
        struct Failing;
        impl Analysis for Failing {
            fn make_analysis(&mut self, _block: &DomainBlock) -> Result<(), AnalysisError> {
                Err(AnalysisError::ExecutionFailed {
                    reason: "sink closed".to_string(),
                })
            }
        }

        let block = small_block();
        let err = Failing.make_analysis(&block).unwrap_err();
        assert!(err.to_string().contains("sink closed"));
    }
}
