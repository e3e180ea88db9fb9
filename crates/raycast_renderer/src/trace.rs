//! Nearest-hit search and shadow rays.

use crate::geometry::intersect;
use crate::RenderResult;
use raycast_core::{Light, SceneObject};
use raycast_math::{Interval, Ray, Vec3};

/// Nearest intersection found by [`shoot`].
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Parameter t where the intersection occurs, always > 0
    pub t: f64,
    /// Object that was hit
    pub object: &'a SceneObject,
    /// Position of the object in the scene's object list
    pub index: usize,
}

/// Find the closest object in front of the ray.
///
/// Objects are tested in scene order. When two objects are hit at exactly
/// the same `t`, the one that comes first in the list wins.
pub fn shoot<'a>(ray: &Ray, objects: &'a [SceneObject]) -> RenderResult<Option<Hit<'a>>> {
    let mut closest: Option<Hit<'a>> = None;
    let mut closest_so_far = f64::INFINITY;

    for (index, object) in objects.iter().enumerate() {
        if let Some(t) = intersect(ray, &object.geometry).map_err(|e| e.at(index))? {
            if t < closest_so_far {
                closest_so_far = t;
                closest = Some(Hit { t, object, index });
            }
        }
    }

    Ok(closest)
}

/// Check whether any object blocks the path from `point` to `light`.
///
/// `exclude` is the surface `point` lies on. It is skipped so that rounding
/// at the hit point cannot make a surface shadow itself. Only occluders
/// strictly between the point and the light count; a light at infinity is
/// blocked by anything in front of the shadow ray.
pub fn in_shadow(
    point: Vec3,
    light: &Light,
    objects: &[SceneObject],
    exclude: &SceneObject,
) -> RenderResult<bool> {
    let ray = Ray::towards(point, light.position);
    let to_light = Interval::new(0.0, point.distance(light.position));

    for (index, object) in objects.iter().enumerate() {
        if std::ptr::eq(object, exclude) {
            continue;
        }
        if let Some(t) = intersect(&ray, &object.geometry).map_err(|e| e.at(index))? {
            if to_light.surrounds(t) {
                return Ok(true);
            }
        }
    }

    Ok(false)
}
