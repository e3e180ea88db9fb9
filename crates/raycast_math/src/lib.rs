// Re-export glam for convenience
pub use glam::{dvec3, DVec3};

/// Double-precision 3D vector used for positions and directions.
pub type Vec3 = DVec3;

/// RGB color, channels conventionally in [0, 1].
pub type Color = DVec3;

// Raycast math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::{direction_to, Ray};

/// Reflect `l` about the normal `n`.
///
/// Both vectors point away from the surface, so the result is the mirror
/// direction of `l` on the other side of `n`: `2(n·l)n - l`.
#[inline]
pub fn reflect(l: Vec3, n: Vec3) -> Vec3 {
    n * (2.0 * n.dot(l)) - l
}

/// Clamp every channel of a color to [0, 1].
#[inline]
pub fn clamp_unit(c: Color) -> Color {
    Color::new(
        Interval::UNIT.clamp(c.x),
        Interval::UNIT.clamp(c.y),
        Interval::UNIT.clamp(c.z),
    )
}
