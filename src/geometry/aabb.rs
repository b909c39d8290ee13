use std::ops::Sub;

use nalgebra::{Point, Scalar, SimdPartialOrd};

/// Axis aligned bound of a point set, generic over the point type.
///
/// Used both for world space boxes and for bounds of the slab functionals.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AABB<Point> {
    pub min: Point,
    pub max: Point,
}

impl<Point> AABB<Point> {
    pub fn new(min: Point, max: Point) -> AABB<Point> {
        AABB { min, max }
    }

    pub fn map<Point2, F: FnMut(&Point) -> Point2>(&self, mut f: F) -> AABB<Point2> {
        AABB {
            min: f(&self.min),
            max: f(&self.max),
        }
    }
}

impl<Point: Sub + Copy> AABB<Point> {
    pub fn size(&self) -> Point::Output {
        self.max - self.min
    }
}

impl<T: Scalar + SimdPartialOrd, const D: usize> AABB<Point<T, D>> {
    /// Componentwise minimum and maximum of the points, `None` if there are no points.
    pub fn from_points(points: impl IntoIterator<Item = Point<T, D>>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let init = AABB {
            min: first.clone(),
            max: first,
        };

        Some(iter.fold(init, |acc, p| AABB {
            min: acc.min.inf(&p),
            max: acc.max.sup(&p),
        }))
    }
}

impl<T: Scalar + PartialOrd, const D: usize> AABB<Point<T, D>> {
    /// Every component of `self.min` is at most the matching component of `other.max`.
    ///
    /// Only half of an overlap test: it never checks `other.min` against `self.max`.
    pub fn reaches(&self, other: &Self) -> bool {
        self.min.iter().zip(other.max.iter()).all(|(lo, hi)| lo <= hi)
    }

    /// Closed overlap test, boxes touching at a face overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.reaches(other) && other.reaches(self)
    }

    pub fn is_valid(&self) -> bool {
        self.min.iter().zip(self.max.iter()).all(|(lo, hi)| lo <= hi)
    }
}

impl<Point> From<[Point; 2]> for AABB<Point> {
    fn from(value: [Point; 2]) -> Self {
        let [min, max] = value;
        AABB { min, max }
    }
}

impl<Point> From<(Point, Point)> for AABB<Point> {
    fn from(value: (Point, Point)) -> Self {
        let (min, max) = value;
        AABB { min, max }
    }
}
