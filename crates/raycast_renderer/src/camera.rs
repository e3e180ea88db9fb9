//! Pixel-to-ray mapping for a pinhole camera at the origin.

use raycast_core::Camera;
use raycast_math::{Ray, Vec3};

/// Distance from the eye to the view plane along +Z.
const FOCAL_DISTANCE: f64 = 1.0;

/// View plane sampled at pixel centers.
///
/// The plane is centered on the +Z axis at unit distance and spans the
/// camera's width and height. Image rows run top to bottom, so row 0 maps
/// to the top edge of the plane.
#[derive(Debug, Clone, Copy)]
pub struct ViewPlane {
    half_width: f64,
    half_height: f64,
    pixel_width: f64,
    pixel_height: f64,
}

impl ViewPlane {
    /// Set up the view plane for an image of `width` x `height` pixels.
    pub fn new(camera: Camera, width: u32, height: u32) -> Self {
        Self {
            half_width: camera.width / 2.0,
            half_height: camera.height / 2.0,
            pixel_width: camera.width / width as f64,
            pixel_height: camera.height / height as f64,
        }
    }

    /// Point on the view plane at the center of pixel (x, y).
    pub fn pixel_center(&self, x: u32, y: u32) -> Vec3 {
        let px = -self.half_width + self.pixel_width * (x as f64 + 0.5);
        // Flip so that image row 0 is the top of the plane
        let py = -(-self.half_height + self.pixel_height * (y as f64 + 0.5));
        Vec3::new(px, py, FOCAL_DISTANCE)
    }

    /// Unit-direction ray from the eye through the center of pixel (x, y).
    pub fn ray(&self, x: u32, y: u32) -> Ray {
        Ray::towards(Vec3::ZERO, self.pixel_center(x, y))
    }
}
