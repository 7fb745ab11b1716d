use std::f32::consts::PI;
use std::fmt;

use bevy::math::Vec3;
use log::warn;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::algorithms::{ribbon_orthogonal, taper_radius};
use super::{CrossSection, RibbonMesh, Triangle};
use crate::tools::seed_from_name;

/// Place in a scene description that referenced the hair file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.file.is_empty() {
            write!(f, "<unknown>")
        } else {
            write!(f, "{}:{}:{}", self.file, self.line, self.column)
        }
    }
}

/// A strand that could not be turned into a ribbon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HairWarning {
    pub location: SourceLocation,
    /// Index of the strand in file order.
    pub strand: usize,
    pub vertex_count: usize,
}

impl fmt::Display for HairWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: hair strand {} was defined with {} vertices, at least 2 are needed",
            self.location, self.strand, self.vertex_count
        )
    }
}

/// Accumulates ribbon triangles for the strands of one hair file.
pub struct RibbonBuilder {
    triangles: Vec<Triangle>,
    warnings: Vec<HairWarning>,
    location: SourceLocation,
    pub rng: StdRng,
}

impl RibbonBuilder {
    pub fn new(rng: StdRng, location: SourceLocation) -> Self {
        Self {
            triangles: vec![],
            warnings: vec![],
            location,
            rng,
        }
    }

    /// Builder whose orientations depend only on the file name.
    pub fn for_file(name: &str, location: SourceLocation) -> Self {
        Self::new(StdRng::seed_from_u64(seed_from_name(name)), location)
    }

    pub fn add_strand(&mut self, index: usize, strand: &[Vec3], radius: f32) {
        let n = strand.len();
        if n < 2 {
            self.warn_degenerate(index, n);
            return;
        }

        let angle: f32 = self.rng.gen_range(0f32..PI);

        let orthogonal = ribbon_orthogonal(strand[1] - strand[0], angle);
        let mut previous = CrossSection::around(strand[0], orthogonal, radius);

        let last = (n - 1) as f32;
        for v in 1..n {
            let orthogonal = ribbon_orthogonal(strand[v] - strand[v - 1], angle);
            let r = taper_radius(radius, v as f32 / last);
            let current = CrossSection::around(strand[v], orthogonal, r);
            self.register_quad(previous, current);
            previous = current;
        }
    }

    /// Two triangles joining consecutive cross-sections.
    pub fn register_quad(&mut self, previous: CrossSection, current: CrossSection) {
        self.triangles
            .push(Triangle::new(previous.begin, previous.end, current.begin));
        self.triangles
            .push(Triangle::new(previous.end, current.end, current.begin));
    }

    fn warn_degenerate(&mut self, strand: usize, vertex_count: usize) {
        let warning = HairWarning {
            location: self.location.clone(),
            strand,
            vertex_count,
        };
        warn!("{warning}");
        self.warnings.push(warning);
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn warnings(&self) -> &[HairWarning] {
        &self.warnings
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    /// Hands over everything built so far and leaves the builder empty.
    /// The generator keeps its state.
    pub fn finish(&mut self, strand_count: usize) -> RibbonMesh {
        RibbonMesh {
            triangles: std::mem::take(&mut self.triangles),
            warnings: std::mem::take(&mut self.warnings),
            strand_count,
        }
    }
}

impl From<StdRng> for RibbonBuilder {
    fn from(rng: StdRng) -> Self {
        Self::new(rng, SourceLocation::default())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn straight_strand(n: usize) -> Vec<Vec3> {
        (0..n).map(|i| Vec3::new(0., 0., i as f32)).collect()
    }

    fn half_widths(triangles: &[Triangle]) -> Vec<f32> {
        let mut widths = vec![0.5 * triangles[0].positions[0].distance(triangles[0].positions[1])];
        for quad in triangles.chunks(2) {
            widths.push(0.5 * quad[1].positions[1].distance(quad[1].positions[2]));
        }
        widths
    }

    #[test]
    fn two_triangles_per_segment() {
        let mut builder = RibbonBuilder::from(StdRng::seed_from_u64(0));
        for n in 2..7 {
            builder.add_strand(0, &straight_strand(n), 0.1);
            assert_eq!(builder.finish(1).triangles.len(), 2 * (n - 1));
        }
    }

    #[test]
    fn short_strands_are_skipped_with_a_warning() {
        let location = SourceLocation::new("scene.xml", 12, 4);
        let mut builder = RibbonBuilder::new(StdRng::seed_from_u64(0), location.clone());
        assert_eq!(builder.location(), &location);
        builder.add_strand(3, &[Vec3::ONE], 1.);
        assert!(builder.triangles().is_empty());
        assert_eq!(
            builder.warnings(),
            &[HairWarning {
                location,
                strand: 3,
                vertex_count: 1
            }]
        );

        builder.add_strand(4, &[], 1.);
        assert_eq!(builder.warnings().len(), 2);
    }

    #[test]
    fn skipped_strands_do_not_consume_randomness() {
        let strand = straight_strand(4);

        let mut reference = RibbonBuilder::from(StdRng::seed_from_u64(5));
        reference.add_strand(0, &strand, 1.);

        let mut builder = RibbonBuilder::from(StdRng::seed_from_u64(5));
        builder.add_strand(0, &strand[..1], 1.);
        builder.add_strand(1, &strand, 1.);

        assert_eq!(reference.triangles(), builder.triangles());
    }

    #[test]
    fn ribbon_tapers_to_the_tip() {
        let n = 5;
        let radius = 2.;
        let mut builder = RibbonBuilder::from(StdRng::seed_from_u64(1));
        builder.add_strand(0, &straight_strand(n), radius);

        let widths = half_widths(builder.triangles());
        assert_eq!(widths.len(), n);
        for (v, w) in widths.iter().enumerate() {
            let expected = radius * (1. - v as f32 / (n - 1) as f32);
            assert!((w - expected).abs() < 1e-5, "vertex {v}: {w} != {expected}");
        }
        assert_eq!(widths[n - 1], 0.);
    }

    #[test]
    fn quad_layout() {
        let mut builder = RibbonBuilder::from(StdRng::seed_from_u64(0));
        let previous = CrossSection {
            begin: Vec3::X,
            end: -Vec3::X,
        };
        let current = CrossSection {
            begin: Vec3::new(1., 0., 1.),
            end: Vec3::new(-1., 0., 1.),
        };
        builder.register_quad(previous, current);

        let triangles = builder.triangles();
        assert_eq!(
            triangles[0].positions,
            [previous.begin, previous.end, current.begin]
        );
        assert_eq!(
            triangles[1].positions,
            [previous.end, current.end, current.begin]
        );
        for t in triangles {
            assert_eq!(t.normals, [Vec3::ZERO; 3]);
            assert_eq!(t.tex_coords, Triangle::TEX_COORDS);
        }
    }

    #[test]
    fn ribbon_is_across_the_strand() {
        let mut builder = RibbonBuilder::from(StdRng::seed_from_u64(9));
        builder.add_strand(0, &straight_strand(3), 1.);
        for quad in builder.triangles().chunks(2) {
            let previous = quad[0].positions[0] - quad[0].positions[1];
            let current = quad[1].positions[2] - quad[1].positions[1];
            assert!(previous.dot(Vec3::Z).abs() < 1e-5);
            assert!(current.dot(Vec3::Z).abs() < 1e-5);
        }
    }

    #[test]
    fn repeated_points_stay_finite() {
        let mut builder = RibbonBuilder::from(StdRng::seed_from_u64(2));
        builder.add_strand(0, &[Vec3::ZERO, Vec3::ZERO, Vec3::Z, Vec3::Z, Vec3::ONE], 0.5);
        assert_eq!(builder.triangles().len(), 8);
        assert!(builder.triangles().iter().all(Triangle::is_finite));
    }

    #[test]
    fn zero_length_strand_uses_fallback_direction() {
        let mut builder = RibbonBuilder::from(StdRng::seed_from_u64(2));
        builder.add_strand(0, &[Vec3::ONE, Vec3::ONE], 1.);
        let first = builder.triangles()[0];
        assert_eq!(first.positions[0], Vec3::new(2., 1., 1.));
        assert_eq!(first.positions[1], Vec3::new(0., 1., 1.));
        assert_eq!(first.positions[2], Vec3::ONE);
    }

    #[test]
    fn huge_segment_keeps_full_width() {
        let mut builder = RibbonBuilder::from(StdRng::seed_from_u64(4));
        builder.add_strand(0, &[Vec3::ZERO, Vec3::new(3e19, 0., 0.)], 1.);
        let widths = half_widths(builder.triangles());
        assert_eq!(widths, vec![1., 0.]);
        assert!(builder.triangles().iter().all(Triangle::is_finite));
    }

    #[test]
    fn test_random() {
        const N: u64 = 10;
        for i in 0..N {
            let mut rng = StdRng::seed_from_u64(i);
            let strand: Vec<Vec3> = (0..10)
                .map(|_| {
                    Vec3::new(
                        rng.gen_range(0..3) as f32,
                        rng.gen_range(0..3) as f32,
                        rng.gen_range(0..3) as f32,
                    )
                })
                .collect();

            let mut builder = RibbonBuilder::from(StdRng::seed_from_u64(i));
            builder.add_strand(0, &strand, 0.3);

            assert_eq!(builder.triangles().len(), 18);
            assert!(builder.triangles().iter().all(Triangle::is_finite));
        }
    }
}
