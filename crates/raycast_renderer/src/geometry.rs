//! Closed-form ray intersection and surface normals.

use crate::UnsupportedGeometry;
use raycast_core::Geometry;
use raycast_math::{Ray, Vec3};

/// Distance along `ray` to the near surface of a sphere.
///
/// Projects the center onto the ray and measures how far the closest
/// approach is from the center. Only the entering root is returned; the
/// far side of the sphere is never visible. The result may be zero or
/// negative when the sphere is behind the ray origin or surrounds it.
/// Returns `None` when the ray passes outside the sphere.
pub fn sphere_intersection(ray: &Ray, center: Vec3, radius: f64) -> Option<f64> {
    let t_close = ray.direction.dot(center - ray.origin);
    let closest = ray.at(t_close);
    let d = (closest - center).length();

    if d > radius {
        None
    } else if d < radius {
        Some(t_close - (radius * radius - d * d).sqrt())
    } else {
        // Tangent: the entering and leaving roots coincide
        Some(t_close)
    }
}

/// Distance along `ray` to a plane, if the plane is strictly ahead.
///
/// Rays parallel to the plane never hit it, even if they lie inside it.
pub fn plane_intersection(ray: &Ray, point: Vec3, normal: Vec3) -> Option<f64> {
    let denom = normal.dot(ray.direction);
    if denom == 0.0 {
        return None;
    }

    let t = -normal.dot(ray.origin - point) / denom;
    (t > 0.0).then_some(t)
}

/// Smallest positive ray parameter at which `ray` meets `geometry`.
pub fn intersect(ray: &Ray, geometry: &Geometry) -> Result<Option<f64>, UnsupportedGeometry> {
    let t = match *geometry {
        Geometry::Sphere { center, radius } => sphere_intersection(ray, center, radius),
        Geometry::Plane { point, normal } => plane_intersection(ray, point, normal),
        Geometry::Cylinder { .. } => return Err(UnsupportedGeometry(geometry.kind())),
    };
    Ok(t.filter(|t| *t > 0.0))
}

/// Unit outward normal of `geometry` at a point on its surface.
pub fn surface_normal(point: Vec3, geometry: &Geometry) -> Result<Vec3, UnsupportedGeometry> {
    match *geometry {
        Geometry::Sphere { center, .. } => Ok((point - center).normalize_or_zero()),
        Geometry::Plane { normal, .. } => Ok(normal),
        Geometry::Cylinder { .. } => Err(UnsupportedGeometry(geometry.kind())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn sphere(center: Vec3, radius: f64) -> Geometry {
        Geometry::Sphere { center, radius }
    }

    #[test]
    fn test_sphere_hit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let t = intersect(&ray, &sphere(Vec3::new(0.0, 0.0, 5.0), 1.0)).unwrap();
        assert_eq!(t, Some(4.0));
    }

    #[test]
    fn test_sphere_miss() {
        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        let t = intersect(&ray, &sphere(Vec3::new(0.0, 0.0, 5.0), 1.0)).unwrap();
        assert_eq!(t, None);

        // Sphere behind the ray
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);
        let t = intersect(&ray, &sphere(Vec3::new(0.0, 0.0, 5.0), 1.0)).unwrap();
        assert_eq!(t, None);
    }

    #[test]
    fn test_sphere_tangent_returns_closest_approach() {
        // Passes exactly one radius from the center
        let ray = Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::Z);
        let t = sphere_intersection(&ray, Vec3::new(0.0, 0.0, 5.0), 1.0);
        assert_eq!(t, Some(5.0));
    }

    #[test]
    fn test_sphere_from_inside_is_no_hit() {
        // Only the entering root is used, and it lies behind the origin
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let raw = sphere_intersection(&ray, Vec3::ZERO, 2.0).unwrap();
        assert!(raw < 0.0);
        assert_eq!(intersect(&ray, &sphere(Vec3::ZERO, 2.0)).unwrap(), None);
    }

    #[test]
    fn test_zero_radius_sphere() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert_eq!(
            intersect(&ray, &sphere(Vec3::new(0.5, 0.0, 3.0), 0.0)).unwrap(),
            None
        );
    }

    #[test]
    fn test_sphere_hit_iff_line_distance_within_radius() {
        let center = Vec3::new(0.3, -0.2, 8.0);
        let radius = 1.5;
        let origin = Vec3::new(-1.0, 0.5, -2.0);

        for i in -10..=10 {
            for j in -10..=10 {
                let target = Vec3::new(i as f64 * 0.25, j as f64 * 0.25, 8.0);
                let ray = Ray::towards(origin, target);
                let to_center = center - origin;
                let along = to_center.dot(ray.direction);
                let line_distance = (to_center - ray.direction * along).length();

                let hit = intersect(&ray, &sphere(center, radius)).unwrap();
                if (line_distance - radius).abs() < 1e-9 {
                    continue;
                }
                assert_eq!(
                    hit.is_some(),
                    line_distance < radius,
                    "target {:?} distance {}",
                    target,
                    line_distance
                );
                if let Some(t) = hit {
                    let p = ray.at(t);
                    assert!(((p - center).length() - radius).abs() < 1e-6);
                }
            }
        }
    }

    #[test]
    fn test_plane_hit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 1.0).normalize());
        let t = plane_intersection(&ray, Vec3::new(0.0, -2.0, 0.0), Vec3::Y).unwrap();
        assert!((ray.at(t).y + 2.0).abs() < EPS);
        assert!((t - 8.0_f64.sqrt()).abs() < EPS);
    }

    #[test]
    fn test_plane_parallel_is_no_hit() {
        let normal = Vec3::Y;
        for origin in [Vec3::ZERO, Vec3::new(3.0, -1.0, 2.0), Vec3::new(0.0, 5.0, 0.0)] {
            for direction in [Vec3::X, Vec3::Z, Vec3::new(1.0, 0.0, 1.0).normalize()] {
                let ray = Ray::new(origin, direction);
                assert_eq!(plane_intersection(&ray, Vec3::ZERO, normal), None);
            }
        }
    }

    #[test]
    fn test_plane_behind_or_touching_is_no_hit() {
        // Plane behind the origin
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert_eq!(plane_intersection(&ray, Vec3::new(0.0, -1.0, 0.0), Vec3::Y), None);

        // Starting on the plane, pointing away
        assert_eq!(plane_intersection(&ray, Vec3::ZERO, Vec3::Y), None);
    }

    #[test]
    fn test_plane_zero_normal_is_no_hit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let plane = Geometry::Plane {
            point: Vec3::new(0.0, 0.0, 4.0),
            normal: Vec3::ZERO,
        };
        assert_eq!(intersect(&ray, &plane).unwrap(), None);
    }

    #[test]
    fn test_plane_normal_sign_does_not_matter() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let point = Vec3::new(0.0, 0.0, 3.0);
        assert_eq!(plane_intersection(&ray, point, Vec3::Z), Some(3.0));
        assert_eq!(plane_intersection(&ray, point, -Vec3::Z), Some(3.0));
    }

    #[test]
    fn test_surface_normal() {
        let ball = sphere(Vec3::new(0.0, 0.0, 5.0), 1.0);
        let n = surface_normal(Vec3::new(0.0, 0.0, 4.0), &ball).unwrap();
        assert_eq!(n, -Vec3::Z);

        let plane = Geometry::Plane {
            point: Vec3::ZERO,
            normal: Vec3::Y,
        };
        assert_eq!(surface_normal(Vec3::new(3.0, 0.0, 1.0), &plane).unwrap(), Vec3::Y);
    }

    #[test]
    fn test_cylinder_is_unsupported() {
        let cylinder = Geometry::Cylinder {
            center: Vec3::ZERO,
            radius: 1.0,
            height: 2.0,
        };
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
        assert_eq!(intersect(&ray, &cylinder), Err(UnsupportedGeometry("cylinder")));
        assert_eq!(
            surface_normal(Vec3::ZERO, &cylinder),
            Err(UnsupportedGeometry("cylinder"))
        );
    }
}
