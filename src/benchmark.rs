use std::{
    fmt::Display,
    hint::black_box,
    time::{Duration, Instant},
};

use thiserror::Error;
use tracing::{debug, info};

use crate::{
    mesh::{Mesh, MeshError},
    object::{PopulationError, populate},
    settings::{BenchmarkSettings, SettingsError},
    volumes::{BoundingVolumes, BuildError, BuildProgress, Volumes},
};

/// Representation and overlap test used by one timed sweep.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Point-major boxes.
    BoxMinMax,
    /// Axis-major boxes.
    BoxAxes,
    /// One-sided slab test.
    Tetrahedron,
    /// Two-sided slab test.
    Octahedron,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::BoxMinMax,
        Variant::BoxAxes,
        Variant::Tetrahedron,
        Variant::Octahedron,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Variant::BoxMinMax => "box min/max",
            Variant::BoxAxes => "box x/y/z",
            Variant::Tetrahedron => "tetrahedron",
            Variant::Octahedron => "octahedron",
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BenchmarkResult {
    pub variant: Variant,
    pub intersections: usize,
    pub elapsed: Duration,
}

impl Display for BenchmarkResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} reported {} intersections in {:.6} seconds",
            self.variant,
            self.intersections,
            self.elapsed.as_secs_f64()
        )
    }
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("Invalid settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("Failed to generate mesh: {0}")]
    Mesh(#[from] MeshError),

    #[error("Failed to populate objects: {0}")]
    Population(#[from] PopulationError),

    #[error("Failed to build bounding volumes: {0}")]
    Build(#[from] BuildError),
}

impl Volumes {
    /// Runs one timed sweep of the first `probe_count` objects against all objects.
    ///
    /// Panics if `probe_count` exceeds the number of objects.
    pub fn measure(&self, variant: Variant, probe_count: usize) -> BenchmarkResult {
        debug!(%variant, probe_count, objects = self.len(), "Starting sweep");

        let start = Instant::now();
        let intersections = match variant {
            Variant::BoxMinMax => sweep(&self.boxes, probe_count),
            Variant::BoxAxes => sweep(&self.axes, probe_count),
            Variant::Tetrahedron => sweep(&self.tetrahedra(), probe_count),
            Variant::Octahedron => sweep(&self.octahedra(), probe_count),
        };
        let elapsed = start.elapsed();

        info!(%variant, intersections, ?elapsed, "Finished sweep");

        BenchmarkResult {
            variant,
            intersections,
            elapsed,
        }
    }

    /// Measures all variants in table order.
    pub fn measure_all(&self, probe_count: usize) -> Vec<BenchmarkResult> {
        Variant::ALL
            .iter()
            .map(|variant| self.measure(*variant, probe_count))
            .collect()
    }
}

fn sweep<V: BoundingVolumes>(volumes: &V, probe_count: usize) -> usize {
    black_box(volumes).count_intersections(black_box(probe_count))
}

/// Generates the mesh and the population, builds all bounding volumes and measures
/// every variant.
///
/// Settings are validated before any work is done.
pub fn run(
    settings: &BenchmarkSettings,
    rng: &mut impl rand::Rng,
    on_progress: impl FnMut(BuildProgress),
) -> Result<Vec<BenchmarkResult>, RunError> {
    settings.validate()?;

    let mesh = Mesh::generate(settings.point_count, settings.radius, rng)?;
    info!(points = mesh.len(), radius = settings.radius, "Generated mesh");

    let objects = populate(&mesh, settings.object_count, settings.position_range, rng)?;
    info!(
        objects = objects.len(),
        range = settings.position_range,
        "Populated objects"
    );

    let volumes = Volumes::build(&objects, on_progress)?;

    Ok(volumes.measure_all(settings.probe_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        geometry::{WorldPoint, WorldVector},
        object::{Object, ObjectIdx},
        volumes::tests::random_volumes,
    };

    use assert2::{assert, let_assert};
    use index_vec::IndexVec;
    use rand::{SeedableRng, rngs::SmallRng};

    fn small_settings() -> BenchmarkSettings {
        BenchmarkSettings::builder()
            .point_count(20.try_into().unwrap())
            .object_count(2_000)
            .probe_count(20)
            .position_range(10.0)
            .build()
            .unwrap()
    }

    fn counts(results: &[BenchmarkResult]) -> Vec<(Variant, usize)> {
        results
            .iter()
            .map(|r| (r.variant, r.intersections))
            .collect()
    }

    #[test]
    fn labels() {
        let labels: Vec<_> = Variant::ALL.iter().map(|v| v.to_string()).collect();
        assert!(labels == ["box min/max", "box x/y/z", "tetrahedron", "octahedron"]);
    }

    #[test]
    fn report_line_format() {
        let result = BenchmarkResult {
            variant: Variant::BoxAxes,
            intersections: 1234,
            elapsed: Duration::from_millis(1500),
        };
        assert!(result.to_string() == "box x/y/z reported 1234 intersections in 1.500000 seconds");
    }

    #[test]
    fn run_reports_all_variants_in_order() {
        let settings = small_settings();
        let results = run(&settings, &mut SmallRng::seed_from_u64(settings.seed), |_| {}).unwrap();
        let variants: Vec<_> = results.iter().map(|r| r.variant).collect();
        assert!(variants == Variant::ALL);
    }

    #[test]
    fn run_is_reproducible() {
        let settings = small_settings();
        let a = run(&settings, &mut SmallRng::seed_from_u64(settings.seed), |_| {}).unwrap();
        let b = run(&settings, &mut SmallRng::seed_from_u64(settings.seed), |_| {}).unwrap();
        assert!(counts(&a) == counts(&b));
    }

    #[test]
    fn counts_are_ordered() {
        let settings = small_settings();
        let results = run(&settings, &mut SmallRng::seed_from_u64(3), |_| {}).unwrap();
        let counts: Vec<usize> = results.iter().map(|r| r.intersections).collect();
        let_assert!(&[box_min_max, box_axes, tetrahedron, octahedron] = counts.as_slice());

        // Both box layouts store the same boxes.
        assert!(box_min_max == box_axes);
        // Every probe hits at least itself.
        assert!(octahedron >= settings.probe_count);
        assert!(tetrahedron >= octahedron);
        assert!(box_min_max >= octahedron);
    }

    #[test]
    fn self_intersections_only() {
        // Objects far apart from each other only intersect themselves.
        let mesh = Mesh::from_points(vec![
            WorldPoint::new(-1.0, -1.0, -1.0),
            WorldPoint::new(1.0, 1.0, 1.0),
        ])
        .unwrap();
        let objects: IndexVec<ObjectIdx, _> = (0..10)
            .map(|i| Object::new(&mesh, WorldVector::new(10.0 * i as f32, 0.0, 0.0)))
            .collect();
        let volumes = Volumes::build(&objects, |_| {}).unwrap();

        for variant in [Variant::BoxMinMax, Variant::BoxAxes, Variant::Octahedron] {
            assert!(volumes.measure(variant, 5).intersections == 5);
        }
        // Targets to the left pass the x test, but the fourth functional separates them.
        assert!(volumes.measure(Variant::Tetrahedron, 5).intersections == 5);
    }

    #[test]
    fn zero_probes() {
        let volumes = random_volumes(50, 1);
        for result in volumes.measure_all(0) {
            assert!(result.intersections == 0);
        }
    }

    #[test]
    #[should_panic]
    fn too_many_probes_panics() {
        let volumes = random_volumes(10, 1);
        volumes.measure(Variant::BoxMinMax, 11);
    }

    #[test]
    fn invalid_radius_is_reported() {
        let mut settings = small_settings();
        settings.radius = -1.0;
        let result = run(&settings, &mut SmallRng::seed_from_u64(0), |_| {});
        let_assert!(Err(RunError::Settings(SettingsError::InvalidRadius(_))) = result);
    }

    #[test]
    fn too_many_probes_is_reported() {
        let mut settings = BenchmarkSettings::builder()
            .object_count(10)
            .probe_count(5)
            .build()
            .unwrap();
        settings.probe_count = 11;

        let mut progress_reports = 0;
        let result = run(&settings, &mut SmallRng::seed_from_u64(0), |_| {
            progress_reports += 1
        });
        let_assert!(
            Err(RunError::Settings(SettingsError::TooManyProbes {
                probe_count: 11,
                object_count: 10
            })) = result
        );
        // Rejected before building anything.
        assert!(progress_reports == 0);
    }
}
