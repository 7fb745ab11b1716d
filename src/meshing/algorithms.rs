use bevy::math::{FloatExt, Quat, Vec3};

/// Ribbon direction used where a strand segment has no usable tangent.
pub const FALLBACK_ORTHOGONAL: Vec3 = Vec3::X;

/// Unit vector across the ribbon at a strand segment.
///
/// A fixed perpendicular of the segment's tangent is rotated by `angle`
/// around the tangent. Segments whose length is zero or overflows `f32` have
/// no tangent and get [`FALLBACK_ORTHOGONAL`] instead.
pub fn ribbon_orthogonal(segment: Vec3, angle: f32) -> Vec3 {
    let Some(direction) = segment.try_normalize() else {
        return FALLBACK_ORTHOGONAL;
    };
    Quat::from_axis_angle(direction, angle) * direction.any_orthonormal_vector()
}

/// Half-width of the ribbon at taper factor `t`: `radius` at the root
/// (`t = 0`) down to zero at the tip (`t = 1`).
pub fn taper_radius(radius: f32, t: f32) -> f32 {
    radius.lerp(0., t)
}
