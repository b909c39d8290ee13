use index_vec::IndexVec;

use crate::{
    geometry::{AABB, WorldBox, WorldPoint},
    object::{Object, ObjectIdx},
};

use super::{
    BoundingVolumes, BuildError, BuildProgress, BuildStage, report_progress, try_with_capacity,
};

/// Point-major bounds: all min corners in one array, all max corners in another.
#[derive(Clone, Debug, Default)]
pub struct SplitBounds<P> {
    pub min: IndexVec<ObjectIdx, P>,
    pub max: IndexVec<ObjectIdx, P>,
}

impl<P: Copy> SplitBounds<P> {
    pub(super) fn build<'mesh>(
        objects: &IndexVec<ObjectIdx, Object<'mesh>>,
        stage: BuildStage,
        bounds: impl Fn(&Object<'mesh>) -> AABB<P>,
        on_progress: &mut impl FnMut(BuildProgress),
    ) -> Result<SplitBounds<P>, BuildError> {
        let total = objects.len();
        let mut min = try_with_capacity(stage, total)?;
        let mut max = try_with_capacity(stage, total)?;

        for (i, object) in objects.iter().enumerate() {
            let b = bounds(object);
            min.push(b.min);
            max.push(b.max);
            report_progress(on_progress, stage, i + 1, total);
        }

        Ok(SplitBounds {
            min: IndexVec::from_vec(min),
            max: IndexVec::from_vec(max),
        })
    }

    pub fn get(&self, index: ObjectIdx) -> AABB<P> {
        AABB::new(self.min[index], self.max[index])
    }

    pub fn len(&self) -> usize {
        self.min.len()
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_empty()
    }
}

/// Box min/max: every target's min corner is compared first, max corner only if that passes.
impl BoundingVolumes for SplitBounds<WorldPoint> {
    type Probe = WorldBox;

    fn len(&self) -> usize {
        self.min.len()
    }

    fn probe(&self, index: ObjectIdx) -> WorldBox {
        self.get(index)
    }

    fn overlaps(&self, probe: &WorldBox, target: ObjectIdx) -> bool {
        self.get(target).overlaps(probe)
    }

    fn count_overlaps(&self, probe: &WorldBox) -> usize {
        self.min
            .iter()
            .zip(self.max.iter())
            .filter(|(target_min, target_max)| {
                target_min.x <= probe.max.x
                    && target_min.y <= probe.max.y
                    && target_min.z <= probe.max.z
                    && target_max.x >= probe.min.x
                    && target_max.y >= probe.min.y
                    && target_max.z >= probe.min.z
            })
            .count()
    }
}
