use std::num::NonZeroUsize;

use bon::bon;
use thiserror::Error;

use crate::geometry::FloatType;

pub const DEFAULT_POINT_COUNT: NonZeroUsize = NonZeroUsize::new(100).unwrap();
pub const DEFAULT_RADIUS: FloatType = 1.0;
pub const DEFAULT_OBJECT_COUNT: usize = 10_000_000;
pub const DEFAULT_PROBE_COUNT: usize = 100;
pub const DEFAULT_POSITION_RANGE: FloatType = 50.0;
pub const DEFAULT_SEED: u64 = 0x5eed_aab0_0000_0001;

/// Sizes of one benchmark run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BenchmarkSettings {
    /// Points in the shared mesh.
    pub point_count: NonZeroUsize,
    /// Radius of the ball the mesh points are sampled from.
    pub radius: FloatType,
    pub object_count: usize,
    /// The first `probe_count` objects are tested against all objects.
    pub probe_count: usize,
    /// Object positions are sampled from `[-position_range, position_range]` on each axis.
    pub position_range: FloatType,
    /// Seed for the random generator used by the binary.
    pub seed: u64,
}

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("Probe count {probe_count} exceeds object count {object_count}")]
    TooManyProbes {
        probe_count: usize,
        object_count: usize,
    },

    #[error("Mesh radius must be finite and non-negative, got {0}")]
    InvalidRadius(FloatType),

    #[error("Position range must be finite and non-negative, got {0}")]
    InvalidPositionRange(FloatType),
}

#[bon]
impl BenchmarkSettings {
    #[builder]
    pub fn new(
        #[builder(default = DEFAULT_POINT_COUNT)] point_count: NonZeroUsize,
        #[builder(default = DEFAULT_RADIUS)] radius: FloatType,
        #[builder(default = DEFAULT_OBJECT_COUNT)] object_count: usize,
        #[builder(default = DEFAULT_PROBE_COUNT)] probe_count: usize,
        #[builder(default = DEFAULT_POSITION_RANGE)] position_range: FloatType,
        #[builder(default = DEFAULT_SEED)] seed: u64,
    ) -> Result<Self, SettingsError> {
        let settings = BenchmarkSettings {
            point_count,
            radius,
            object_count,
            probe_count,
            position_range,
            seed,
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl BenchmarkSettings {
    /// Checks the constraints the builder enforces.
    /// The fields are public, so settings may have been modified since they were built.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.probe_count > self.object_count {
            return Err(SettingsError::TooManyProbes {
                probe_count: self.probe_count,
                object_count: self.object_count,
            });
        }
        if !is_valid_extent(self.radius) {
            return Err(SettingsError::InvalidRadius(self.radius));
        }
        if !is_valid_extent(self.position_range) {
            return Err(SettingsError::InvalidPositionRange(self.position_range));
        }
        Ok(())
    }
}

impl Default for BenchmarkSettings {
    fn default() -> Self {
        BenchmarkSettings {
            point_count: DEFAULT_POINT_COUNT,
            radius: DEFAULT_RADIUS,
            object_count: DEFAULT_OBJECT_COUNT,
            probe_count: DEFAULT_PROBE_COUNT,
            position_range: DEFAULT_POSITION_RANGE,
            seed: DEFAULT_SEED,
        }
    }
}

fn is_valid_extent(value: FloatType) -> bool {
    value.is_finite() && value >= 0.0
}
