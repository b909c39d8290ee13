use std::collections::TryReserveError;

use index_vec::IndexVec;
use rand::distr::{Distribution as _, Uniform, uniform};
use thiserror::Error;

use crate::{
    geometry::{FloatType, SlabBox, WorldBox, WorldPoint, WorldVector, slab_coords},
    mesh::Mesh,
};

index_vec::define_index_type! {
    pub struct ObjectIdx = usize;
}

/// Instance of the shared mesh, translated to its world position.
#[derive(Copy, Clone, Debug)]
pub struct Object<'mesh> {
    pub mesh: &'mesh Mesh,
    pub position: WorldVector,
}

#[derive(Debug, Error)]
pub enum PopulationError {
    #[error("Invalid position range {range}: {source}")]
    InvalidRange {
        range: FloatType,
        source: uniform::Error,
    },

    #[error("Failed to allocate {count} objects: {source}")]
    Allocation {
        count: usize,
        source: TryReserveError,
    },
}

impl<'mesh> Object<'mesh> {
    pub fn new(mesh: &'mesh Mesh, position: WorldVector) -> Self {
        Object { mesh, position }
    }

    /// Mesh points transformed to world space.
    pub fn world_points(&self) -> impl Iterator<Item = WorldPoint> {
        self.mesh.points().iter().map(|p| p + self.position)
    }

    pub fn bounding_box(&self) -> WorldBox {
        WorldBox::from_points(self.world_points()).expect("Mesh is never empty")
    }

    /// Bounds of the four slab functionals over the world space points.
    pub fn slab_box(&self) -> SlabBox {
        SlabBox::from_points(self.world_points().map(|p| slab_coords(&p)))
            .expect("Mesh is never empty")
    }
}

/// Creates `count` instances of `mesh`, with each position coordinate drawn
/// independently from `[-range, range]`.
pub fn populate<'mesh>(
    mesh: &'mesh Mesh,
    count: usize,
    range: FloatType,
    rng: &mut impl rand::Rng,
) -> Result<IndexVec<ObjectIdx, Object<'mesh>>, PopulationError> {
    let coordinate = Uniform::new_inclusive(-range, range)
        .map_err(|source| PopulationError::InvalidRange { range, source })?;

    let mut objects = Vec::new();
    objects
        .try_reserve_exact(count)
        .map_err(|source| PopulationError::Allocation { count, source })?;

    objects.extend((0..count).map(|_| {
        let position = WorldVector::new(
            coordinate.sample(rng),
            coordinate.sample(rng),
            coordinate.sample(rng),
        );
        Object::new(mesh, position)
    }));

    Ok(IndexVec::from_vec(objects))
}
