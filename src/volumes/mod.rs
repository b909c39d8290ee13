//! Derived bounding volumes of all objects, stored in parallel arrays indexed by `ObjectIdx`.
//!
//! Each storage layout implements [`BoundingVolumes`], so that the intersection sweep
//! can be run over any of them.

mod axes;
mod slab;
mod split;

use std::{collections::TryReserveError, fmt::Display};

use assert2::assert;
use index_vec::IndexVec;
use thiserror::Error;
use tracing::info;

use crate::{
    geometry::{SlabPoint, WorldPoint},
    object::{Object, ObjectIdx},
};

pub use axes::AxisBoxes;
pub use slab::{Octahedra, Tetrahedra};
pub use split::SplitBounds;

const PROGRESS_STRIDE: usize = 1 << 16;

/// Storage of one bounding volume per object, with the overlap test that belongs to it.
pub trait BoundingVolumes {
    /// Data of a single probe, extracted once before sweeping over all targets.
    type Probe;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn probe(&self, index: ObjectIdx) -> Self::Probe;

    /// Tests a single target against the probe.
    fn overlaps(&self, probe: &Self::Probe, target: ObjectIdx) -> bool;

    /// Number of targets among all stored volumes that overlap the probe.
    /// Implementations override this with a tight loop over their arrays.
    fn count_overlaps(&self, probe: &Self::Probe) -> usize {
        (0..self.len())
            .filter(|i| self.overlaps(probe, ObjectIdx::from_usize(*i)))
            .count()
    }

    /// Tests the first `probe_count` objects against all objects (including themselves)
    /// and returns the total number of overlaps.
    fn count_intersections(&self, probe_count: usize) -> usize {
        assert!(probe_count <= self.len());
        (0..probe_count)
            .map(|i| self.count_overlaps(&self.probe(ObjectIdx::from_usize(i))))
            .sum()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BuildStage {
    Boxes,
    Axes,
    Slabs,
}

impl Display for BuildStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            BuildStage::Boxes => "boxes",
            BuildStage::Axes => "axis intervals",
            BuildStage::Slabs => "slab volumes",
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BuildProgress {
    pub stage: BuildStage,
    pub finished: usize,
    pub total: usize,
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Failed to allocate {stage} for {count} objects: {source}")]
    Allocation {
        stage: BuildStage,
        count: usize,
        source: TryReserveError,
    },
}

/// All bounding volume representations of one population.
#[derive(Clone, Debug)]
pub struct Volumes {
    /// Point-major boxes, one array of min corners and one of max corners.
    pub boxes: SplitBounds<WorldPoint>,
    /// The same boxes, stored axis-major.
    pub axes: AxisBoxes,
    /// Bounds of the four slab functionals.
    pub slabs: SplitBounds<SlabPoint>,
}

impl Volumes {
    pub fn build(
        objects: &IndexVec<ObjectIdx, Object<'_>>,
        mut on_progress: impl FnMut(BuildProgress),
    ) -> Result<Volumes, BuildError> {
        let boxes = SplitBounds::build(
            objects,
            BuildStage::Boxes,
            Object::bounding_box,
            &mut on_progress,
        )?;
        let axes = AxisBoxes::from_split(&boxes, &mut on_progress)?;
        let slabs = SplitBounds::build(
            objects,
            BuildStage::Slabs,
            Object::slab_box,
            &mut on_progress,
        )?;

        info!(objects = objects.len(), "Built bounding volumes");

        Ok(Volumes { boxes, axes, slabs })
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn tetrahedra(&self) -> Tetrahedra<'_> {
        Tetrahedra(&self.slabs)
    }

    pub fn octahedra(&self) -> Octahedra<'_> {
        Octahedra(&self.slabs)
    }
}

fn try_with_capacity<T>(stage: BuildStage, count: usize) -> Result<Vec<T>, BuildError> {
    let mut v = Vec::new();
    v.try_reserve_exact(count)
        .map_err(|source| BuildError::Allocation { stage, count, source })?;
    Ok(v)
}

/// Reports progress every `PROGRESS_STRIDE` objects and once at the end of the stage.
fn report_progress(
    on_progress: &mut impl FnMut(BuildProgress),
    stage: BuildStage,
    finished: usize,
    total: usize,
) {
    if finished % PROGRESS_STRIDE == 0 || finished == total {
        on_progress(BuildProgress {
            stage,
            finished,
            total,
        });
    }
}
