use std::path::Path;

use log::info;

use crate::error::HairError;
use crate::meshing::{HairConfig, RibbonBuilder, RibbonMesh, SourceLocation};
use crate::parsing::HairStrands;
use crate::Grow;

/// Turns hair curve files into ribbon triangles.
pub struct HairLoader;

impl HairLoader {
    /// Reads `path` and triangulates it. The path, as given, seeds the ribbon
    /// orientations.
    pub fn load(
        path: impl AsRef<Path>,
        location: SourceLocation,
        radius: f32,
    ) -> Result<RibbonMesh, HairError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| HairError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load_bytes(&path.to_string_lossy(), &bytes, location, radius)
    }

    pub fn load_with_config(
        path: impl AsRef<Path>,
        location: SourceLocation,
        config: &HairConfig,
    ) -> Result<RibbonMesh, HairError> {
        Self::load(path, location, config.radius)
    }

    /// Triangulates an in-memory hair file. `name` only seeds the ribbon
    /// orientations.
    pub fn load_bytes(
        name: &str,
        bytes: &[u8],
        location: SourceLocation,
        radius: f32,
    ) -> Result<RibbonMesh, HairError> {
        if !radius.is_finite() || radius < 0. {
            return Err(HairError::InvalidRadius(radius));
        }

        let strands = HairStrands::parse(bytes).map_err(|source| HairError::Parse {
            name: name.to_string(),
            source,
        })?;

        let mut builder = RibbonBuilder::for_file(name, location);
        let mesh = strands.grow::<RibbonMesh>(&HairConfig { radius }, &mut builder);

        info!(
            "{name}: {} strands, {} triangles, {} skipped",
            mesh.strand_count,
            mesh.triangles.len(),
            mesh.warnings.len()
        );
        Ok(mesh)
    }
}
