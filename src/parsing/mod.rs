use bevy::math::Vec3;
use log::{debug, warn};

use crate::error::ParseError;

mod ascii;
mod binary;

pub use ascii::parse_ascii;
pub use binary::parse_binary;

/// Token opening every binary hair file.
pub const BINARY_MAGIC: &[u8] = b"BINARY_HAIR";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HairFormat {
    Binary,
    Ascii,
}

impl HairFormat {
    /// Anything that does not start with the binary magic token is ascii.
    pub fn detect(bytes: &[u8]) -> Self {
        if bytes.starts_with(BINARY_MAGIC) {
            HairFormat::Binary
        } else {
            HairFormat::Ascii
        }
    }
}

/// Points of every strand of a hair file, stored back to back.
///
/// Strand `i` is the span of `strand_lengths[i]` points following the spans
/// of the strands before it. Points read after the last separator belong to
/// no strand: they stay in `vertices` but are never triangulated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HairStrands {
    pub vertices: Vec<Vec3>,
    pub strand_lengths: Vec<usize>,
    /// Vertex count announced by a binary header. Informative only.
    pub vertex_count_hint: Option<u32>,
}

impl HairStrands {
    pub fn parse(bytes: &[u8]) -> Result<Self, ParseError> {
        let format = HairFormat::detect(bytes);
        debug!("decoding {} bytes of {format:?} hair data", bytes.len());

        let strands = match format {
            HairFormat::Binary => parse_binary(bytes)?,
            HairFormat::Ascii => parse_ascii(bytes)?,
        };

        let dropped = strands.dropped_vertex_count();
        if dropped > 0 {
            warn!(
                "hair data does not end with a strand separator, \
                 the last {dropped} vertices are ignored"
            );
        }
        Ok(strands)
    }

    pub fn strand_count(&self) -> usize {
        self.strand_lengths.len()
    }

    /// Vertices that belong to a closed strand.
    pub fn closed_vertex_count(&self) -> usize {
        self.strand_lengths.iter().sum()
    }

    pub fn dropped_vertex_count(&self) -> usize {
        self.vertices.len().saturating_sub(self.closed_vertex_count())
    }

    /// Strand spans in file order. Stops at the first length that runs past
    /// the end of `vertices`.
    pub fn strands(&self) -> impl Iterator<Item = &[Vec3]> + '_ {
        let mut offset: usize = 0;
        self.strand_lengths.iter().map_while(move |&length| {
            let strand = self.vertices.get(offset..offset.checked_add(length)?)?;
            offset += length;
            Some(strand)
        })
    }
}
