use crate::Vec3;

/// A ray in 3D space with an origin and a direction.
///
/// Pixel and shadow rays are built with unit directions, which makes `t`
/// a true distance along the ray.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray from `origin` heading towards `target`, with a unit direction.
    ///
    /// A target at infinity is reached by heading along the signs of its
    /// infinite components; its finite components and `origin` do not matter.
    pub fn towards(origin: Vec3, target: Vec3) -> Self {
        Self::new(origin, direction_to(origin, target))
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Unit vector pointing from `from` to `to`, or zero if they coincide.
pub fn direction_to(from: Vec3, to: Vec3) -> Vec3 {
    if to.is_finite() {
        return (to - from).normalize_or_zero();
    }

    let axis = |c: f64| if c.is_infinite() { c.signum() } else { 0.0 };
    Vec3::new(axis(to.x), axis(to.y), axis(to.z)).normalize_or_zero()
}
