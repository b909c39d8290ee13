use super::FloatType;

/// Closed range `[lo, hi]` of one box axis.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Interval {
    pub lo: FloatType,
    pub hi: FloatType,
}

impl Interval {
    pub fn new(lo: FloatType, hi: FloatType) -> Self {
        Interval { lo, hi }
    }

    #[inline(always)]
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.lo <= other.hi && self.hi >= other.lo
    }
}
