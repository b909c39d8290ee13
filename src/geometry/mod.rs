mod aabb;
mod interval;

pub use aabb::AABB;
pub use interval::Interval;

pub type FloatType = f32;

pub type WorldPoint = nalgebra::Point3<FloatType>;
pub type WorldVector = nalgebra::Vector3<FloatType>;
pub type WorldBox = AABB<WorldPoint>;

/// Point in the space of the four slab functionals `(x, y, z, -(x + y + z))`.
pub type SlabPoint = nalgebra::Point4<FloatType>;
pub type SlabBox = AABB<SlabPoint>;

/// Evaluates the four slab functionals at a world space point.
///
/// The four directions positively span the space, so upper bounds alone enclose a tetrahedron
/// and upper and lower bounds together enclose an octahedron-like slab volume.
#[inline(always)]
pub fn slab_coords(p: &WorldPoint) -> SlabPoint {
    SlabPoint::new(p.x, p.y, p.z, -(p.x + p.y + p.z))
}
