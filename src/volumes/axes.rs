use index_vec::IndexVec;
use itertools::izip;

use crate::{
    geometry::{Interval, WorldPoint},
    object::ObjectIdx,
};

use super::{
    BoundingVolumes, BuildError, BuildProgress, BuildStage, SplitBounds, report_progress,
    try_with_capacity,
};

/// Axis-major boxes: one array of intervals per axis.
#[derive(Clone, Debug, Default)]
pub struct AxisBoxes {
    pub x: IndexVec<ObjectIdx, Interval>,
    pub y: IndexVec<ObjectIdx, Interval>,
    pub z: IndexVec<ObjectIdx, Interval>,
}

impl AxisBoxes {
    /// Re-lays out point-major boxes, values are copied unchanged.
    pub fn from_split(
        boxes: &SplitBounds<WorldPoint>,
        on_progress: &mut impl FnMut(BuildProgress),
    ) -> Result<AxisBoxes, BuildError> {
        let total = boxes.len();
        let mut x = try_with_capacity(BuildStage::Axes, total)?;
        let mut y = try_with_capacity(BuildStage::Axes, total)?;
        let mut z = try_with_capacity(BuildStage::Axes, total)?;

        for (i, (min, max)) in boxes.min.iter().zip(boxes.max.iter()).enumerate() {
            x.push(Interval::new(min.x, max.x));
            y.push(Interval::new(min.y, max.y));
            z.push(Interval::new(min.z, max.z));
            report_progress(on_progress, BuildStage::Axes, i + 1, total);
        }

        Ok(AxisBoxes {
            x: IndexVec::from_vec(x),
            y: IndexVec::from_vec(y),
            z: IndexVec::from_vec(z),
        })
    }
}

/// Box x/y/z: tested axis by axis, stopping at the first separating axis.
impl BoundingVolumes for AxisBoxes {
    type Probe = [Interval; 3];

    fn len(&self) -> usize {
        self.x.len()
    }

    fn probe(&self, index: ObjectIdx) -> [Interval; 3] {
        [self.x[index], self.y[index], self.z[index]]
    }

    fn overlaps(&self, probe: &[Interval; 3], target: ObjectIdx) -> bool {
        self.x[target].overlaps(&probe[0])
            && self.y[target].overlaps(&probe[1])
            && self.z[target].overlaps(&probe[2])
    }

    fn count_overlaps(&self, probe: &[Interval; 3]) -> usize {
        let [probe_x, probe_y, probe_z] = probe;
        izip!(self.x.iter(), self.y.iter(), self.z.iter())
            .filter(|(target_x, target_y, target_z)| {
                target_x.overlaps(probe_x)
                    && target_y.overlaps(probe_y)
                    && target_z.overlaps(probe_z)
            })
            .count()
    }
}
