//! Local illumination: diffuse and specular terms with shadows.
//!
//! Each light that reaches the point contributes
//! `(diffuse + specular) * radial * angular`, floored at zero per channel.
//! Contributions are summed and clamped to [0, 1] when converted to a pixel.
//! There is no ambient term: a point in shadow of every light is black.

use crate::geometry::surface_normal;
use crate::renderer::Pixel;
use crate::trace::{in_shadow, Hit};
use crate::RenderResult;
use raycast_core::{Light, SceneObject};
use raycast_math::{direction_to, reflect, Color, Ray, Vec3};

/// Spotlight falloff at `point`.
///
/// Omnidirectional lights (see [`Light::is_spot`]) always return 1.
///
/// The cone test treats a point as blocked when the cosine between the
/// light axis and the light-to-point vector is *greater* than the cone
/// cosine, and the falloff exponent is applied to the dot product of that
/// vector with the light's *position*.
pub fn angular_attenuation(point: Vec3, light: &Light) -> f64 {
    if !light.is_spot() {
        return 1.0;
    }

    let to_point = -direction_to(point, light.position);
    let cos_alpha = to_point.dot(light.direction);
    let cos_theta = light.cone_angle.to_radians().cos();
    if cos_alpha > cos_theta {
        return 0.0;
    }

    to_point
        .dot(light.position)
        .max(0.0)
        .powf(light.angular_falloff)
}

/// Lambertian term for one light.
pub fn diffuse(normal: Vec3, to_light: Vec3, object: &SceneObject, light: &Light) -> Color {
    let cos_alpha = normal.dot(to_light);
    if cos_alpha > 0.0 {
        object.surface.diffuse * light.color * cos_alpha
    } else {
        Color::ZERO
    }
}

/// Phong highlight for one light, seen along `ray`.
pub fn specular(
    ray: &Ray,
    normal: Vec3,
    to_light: Vec3,
    object: &SceneObject,
    light: &Light,
) -> Color {
    let cos_alpha = normal.dot(to_light);
    let view = -ray.direction;
    let reflected = reflect(to_light, normal);
    let cos_beta = view.dot(reflected);

    if cos_beta > 0.0 && cos_alpha > 0.0 {
        object.surface.specular * light.color * cos_beta.powf(object.surface.shininess)
    } else {
        Color::ZERO
    }
}

/// Color added by a single light at `point`, ignoring shadows.
///
/// `normal` is the unit surface normal of `object` at `point`.
pub fn light_contribution(
    ray: &Ray,
    point: Vec3,
    normal: Vec3,
    object: &SceneObject,
    light: &Light,
) -> Color {
    let to_light = direction_to(point, light.position);

    let radial = light.radial.factor(point.distance(light.position));
    let angular = angular_attenuation(point, light);

    let color = (diffuse(normal, to_light, object, light)
        + specular(ray, normal, to_light, object, light))
        * (radial * angular);

    color.max(Color::ZERO)
}

/// Shade the point where `ray` hits an object with every light that reaches it.
pub fn shade(
    ray: &Ray,
    hit: &Hit,
    objects: &[SceneObject],
    lights: &[Light],
) -> RenderResult<Pixel> {
    let point = ray.at(hit.t);
    let normal = surface_normal(point, &hit.object.geometry).map_err(|e| e.at(hit.index))?;
    let mut sum = Color::ZERO;

    for light in lights {
        if in_shadow(point, light, objects, hit.object)? {
            continue;
        }
        sum += light_contribution(ray, point, normal, hit.object, light);
    }

    Ok(Pixel::from_color(sum))
}
