use bevy::math::Vec3;

use super::HairStrands;
use crate::error::ParseError;

/// Decodes an ascii hair file: one `x y z` point per line, strands separated
/// by blank lines.
pub fn parse_ascii(bytes: &[u8]) -> Result<HairStrands, ParseError> {
    let text = std::str::from_utf8(bytes).map_err(|e| ParseError::InvalidUtf8 {
        offset: e.valid_up_to(),
    })?;

    let mut strands = HairStrands::default();
    let mut current_strand_length = 0;

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            strands.strand_lengths.push(current_strand_length);
            current_strand_length = 0;
        } else {
            strands.vertices.push(parse_point(line, index + 1)?);
            current_strand_length += 1;
        }
    }

    Ok(strands)
}

fn parse_point(line: &str, line_number: usize) -> Result<Vec3, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(ParseError::CoordinateCount {
            line: line_number,
            found: tokens.len(),
        });
    }

    let mut point = [0.; 3];
    for (c, token) in point.iter_mut().zip(tokens) {
        *c = token.parse().map_err(|_| ParseError::MalformedNumber {
            line: line_number,
            token: token.to_string(),
        })?;
    }
    Ok(Vec3::from_array(point))
}
