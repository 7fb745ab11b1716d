use bevy::math::Vec3;
use log::debug;

use super::{HairStrands, BINARY_MAGIC};
use crate::error::ParseError;

struct ByteReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    fn is_empty(&self) -> bool {
        self.offset >= self.bytes.len()
    }

    fn take<const N: usize>(&mut self) -> Option<[u8; N]> {
        let chunk = self.bytes.get(self.offset..self.offset + N)?;
        self.offset += N;
        chunk.try_into().ok()
    }

    fn read_u32(&mut self) -> Option<u32> {
        self.take().map(u32::from_le_bytes)
    }

    fn read_f32(&mut self) -> Option<f32> {
        self.take().map(f32::from_le_bytes)
    }
}

/// Decodes a binary hair file. `bytes` is the whole file, magic token included.
///
/// After the little-endian `u32` vertex count come `f32` triples until the end
/// of the buffer. A triple whose x is `+inf` is a strand separator: it is a
/// single float, y and z are not stored.
pub fn parse_binary(bytes: &[u8]) -> Result<HairStrands, ParseError> {
    let mut reader = ByteReader {
        bytes,
        offset: BINARY_MAGIC.len(),
    };

    let vertex_count = reader.read_u32().ok_or(ParseError::MissingHeader {
        offset: BINARY_MAGIC.len(),
    })?;

    let mut strands = HairStrands {
        vertex_count_hint: Some(vertex_count),
        ..HairStrands::default()
    };
    let mut current_strand_length = 0;

    while !reader.is_empty() {
        let record_start = reader.offset;
        let truncated = move || ParseError::TruncatedRecord {
            offset: record_start,
        };

        let x = reader.read_f32().ok_or_else(truncated)?;
        if x == f32::INFINITY {
            strands.strand_lengths.push(current_strand_length);
            current_strand_length = 0;
            continue;
        }
        let y = reader.read_f32().ok_or_else(truncated)?;
        let z = reader.read_f32().ok_or_else(truncated)?;
        strands.vertices.push(Vec3::new(x, y, z));
        current_strand_length += 1;
    }

    if strands.vertices.len() != vertex_count as usize {
        debug!(
            "binary hair header announces {vertex_count} vertices, found {}",
            strands.vertices.len()
        );
    }

    Ok(strands)
}
