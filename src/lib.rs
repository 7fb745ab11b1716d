pub mod bevy_mesh;
pub mod error;
pub mod loader;
pub mod meshing;
pub mod parsing;
mod tools;

pub use bevy_mesh::BevyMesh;
pub use error::{HairError, ParseError};
pub use loader::HairLoader;
pub use meshing::{
    CrossSection, HairConfig, HairWarning, RibbonBuilder, RibbonMesh, SourceLocation, Triangle,
};
pub use parsing::{HairFormat, HairStrands};
pub use tools::seed_from_name;

/// One stage of the hair import pipeline.
///
/// Each stage is built from the output of the previous one, a stage config
/// and a mutable builder holding the state shared across the stage
/// (random generator, recorded diagnostics).
pub trait HairPipelinePhase {
    type Previous;
    type Config;
    type Builder;

    fn generate_from(
        prev: Self::Previous,
        config: &Self::Config,
        builder: &mut Self::Builder,
    ) -> Self;
}

pub trait Grow {
    fn grow<Next>(self, config: &Next::Config, builder: &mut Next::Builder) -> Next
    where
        Next: HairPipelinePhase<Previous = Self>;
}

impl<T> Grow for T {
    fn grow<Next>(
        self,
        config: &<Next as HairPipelinePhase>::Config,
        builder: &mut <Next as HairPipelinePhase>::Builder,
    ) -> Next
    where
        Next: HairPipelinePhase<Previous = T>,
    {
        Next::generate_from(self, config, builder)
    }
}
