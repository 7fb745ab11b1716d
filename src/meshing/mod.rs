mod algorithms;
mod ribbon_builder;

use std::path::Path;

use bevy::math::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::HairError;
use crate::parsing::HairStrands;
use crate::HairPipelinePhase;

pub use algorithms::{ribbon_orthogonal, taper_radius, FALLBACK_ORTHOGONAL};
pub use ribbon_builder::{HairWarning, RibbonBuilder, SourceLocation};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HairConfig {
    /// Ribbon half-width at the root of every strand.
    pub radius: f32,
}

impl Default for HairConfig {
    fn default() -> Self {
        Self { radius: 0.0025 }
    }
}

impl HairConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, HairError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, HairError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| HairError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

/// Ribbon triangle. Normals are left at zero for the shading stage to fill.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle {
    pub positions: [Vec3; 3],
    pub normals: [Vec3; 3],
    pub tex_coords: [Vec2; 3],
}

impl Triangle {
    pub const TEX_COORDS: [Vec2; 3] = [Vec2::ZERO, Vec2::X, Vec2::Y];

    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self {
            positions: [a, b, c],
            normals: [Vec3::ZERO; 3],
            tex_coords: Self::TEX_COORDS,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.positions.iter().all(|p| p.is_finite())
    }
}

/// The two edges of a ribbon at one strand vertex.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CrossSection {
    pub begin: Vec3,
    pub end: Vec3,
}

impl CrossSection {
    pub fn around(center: Vec3, orthogonal: Vec3, radius: f32) -> Self {
        Self {
            begin: center + radius * orthogonal,
            end: center - radius * orthogonal,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RibbonMesh {
    pub triangles: Vec<Triangle>,
    pub warnings: Vec<HairWarning>,
    /// Closed strands found in the file, skipped ones included.
    pub strand_count: usize,
}

impl HairPipelinePhase for RibbonMesh {
    type Previous = HairStrands;
    type Config = HairConfig;
    type Builder = RibbonBuilder;

    fn generate_from(
        prev: Self::Previous,
        config: &Self::Config,
        builder: &mut Self::Builder,
    ) -> Self {
        for (index, strand) in prev.strands().enumerate() {
            builder.add_strand(index, strand, config.radius);
        }
        builder.finish(prev.strand_count())
    }
}
