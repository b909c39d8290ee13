use std::{collections::TryReserveError, num::NonZeroUsize};

use rand::distr::{Distribution as _, Uniform, uniform};
use thiserror::Error;
use tracing::debug;

use crate::geometry::{FloatType, WorldPoint};

/// Point cloud shared by all objects. Never empty.
#[derive(Clone, Debug)]
pub struct Mesh {
    points: Vec<WorldPoint>,
}

#[derive(Debug, Error)]
pub enum MeshError {
    #[error("mesh must contain at least one point")]
    Empty,

    #[error("Invalid mesh radius {radius}: {source}")]
    InvalidRadius {
        radius: FloatType,
        source: uniform::Error,
    },

    #[error("Failed to allocate mesh points: {0}")]
    Allocation(#[from] TryReserveError),
}

impl Mesh {
    pub fn from_points(points: Vec<WorldPoint>) -> Result<Mesh, MeshError> {
        if points.is_empty() {
            return Err(MeshError::Empty);
        }
        Ok(Mesh { points })
    }

    /// Generates `count` points uniformly distributed inside a ball of given radius
    /// centered at the origin, by rejection sampling from the enclosing cube.
    pub fn generate(
        count: NonZeroUsize,
        radius: FloatType,
        rng: &mut impl rand::Rng,
    ) -> Result<Mesh, MeshError> {
        let coordinate = Uniform::new_inclusive(-radius, radius)
            .map_err(|source| MeshError::InvalidRadius { radius, source })?;

        let mut points = Vec::new();
        points.try_reserve_exact(count.get())?;

        let mut rejected = 0usize;
        while points.len() < count.get() {
            let candidate = WorldPoint::new(
                coordinate.sample(rng),
                coordinate.sample(rng),
                coordinate.sample(rng),
            );
            if candidate.coords.norm() <= radius {
                points.push(candidate);
            } else {
                rejected += 1;
            }
        }

        debug!(count = count.get(), rejected, radius, "Generated mesh");

        Mesh::from_points(points)
    }

    pub fn points(&self) -> &[WorldPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
