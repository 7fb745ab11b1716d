use bevy::asset::RenderAssetUsages;
use bevy::math::{Vec2, Vec3};
use bevy::prelude::Mesh;
use bevy_render::mesh::{Indices, PrimitiveTopology};

use crate::meshing::RibbonMesh;
use crate::HairPipelinePhase;

/// Ribbon triangles as a bevy triangle list, three vertices per triangle.
pub struct BevyMesh(pub Mesh);

impl HairPipelinePhase for BevyMesh {
    type Previous = RibbonMesh;
    type Config = ();
    type Builder = ();

    fn generate_from(prev: Self::Previous, _: &Self::Config, _: &mut Self::Builder) -> Self {
        let positions: Vec<Vec3> = prev.triangles.iter().flat_map(|t| t.positions).collect();
        let normals: Vec<Vec3> = prev.triangles.iter().flat_map(|t| t.normals).collect();
        let uvs: Vec<Vec2> = prev.triangles.iter().flat_map(|t| t.tex_coords).collect();
        let indices: Vec<u32> = (0..positions.len() as u32).collect();

        let mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        )
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U32(indices));
        BevyMesh(mesh)
    }
}
