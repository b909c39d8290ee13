use crate::{
    geometry::{SlabBox, SlabPoint},
    object::ObjectIdx,
};

use super::{BoundingVolumes, SplitBounds};

/// One-sided test over slab volumes: only `target.min <= probe.max` for the four functionals.
///
/// Cheaper than [`Octahedra`] and never rejects a pair that the two-sided test accepts,
/// but it does not check `probe.min` against `target.max`, so it reports extra pairs.
#[derive(Copy, Clone, Debug)]
pub struct Tetrahedra<'a>(pub &'a SplitBounds<SlabPoint>);

/// Two-sided overlap test over slab volumes.
#[derive(Copy, Clone, Debug)]
pub struct Octahedra<'a>(pub &'a SplitBounds<SlabPoint>);

impl BoundingVolumes for Tetrahedra<'_> {
    /// Max corner of the probe, the min corner never takes part.
    type Probe = SlabPoint;

    fn len(&self) -> usize {
        self.0.len()
    }

    fn probe(&self, index: ObjectIdx) -> SlabPoint {
        self.0.max[index]
    }

    fn overlaps(&self, probe: &SlabPoint, target: ObjectIdx) -> bool {
        let target = self.0.get(target);
        target.reaches(&SlabBox::new(*probe, *probe))
    }

    fn count_overlaps(&self, probe_max: &SlabPoint) -> usize {
        self.0
            .min
            .iter()
            .filter(|target_min| {
                target_min.x <= probe_max.x
                    && target_min.y <= probe_max.y
                    && target_min.z <= probe_max.z
                    && target_min.w <= probe_max.w
            })
            .count()
    }
}

impl BoundingVolumes for Octahedra<'_> {
    type Probe = SlabBox;

    fn len(&self) -> usize {
        self.0.len()
    }

    fn probe(&self, index: ObjectIdx) -> SlabBox {
        self.0.get(index)
    }

    fn overlaps(&self, probe: &SlabBox, target: ObjectIdx) -> bool {
        self.0.get(target).overlaps(probe)
    }

    fn count_overlaps(&self, probe: &SlabBox) -> usize {
        self.0
            .min
            .iter()
            .zip(self.0.max.iter())
            .filter(|(target_min, target_max)| {
                target_min.x <= probe.max.x
                    && target_min.y <= probe.max.y
                    && target_min.z <= probe.max.z
                    && target_min.w <= probe.max.w
                    && target_max.x >= probe.min.x
                    && target_max.y >= probe.min.y
                    && target_max.z >= probe.min.z
                    && target_max.w >= probe.min.w
            })
            .count()
    }
}
