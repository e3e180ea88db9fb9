//! Raycast Renderer - CPU raycasting
//!
//! Casts one ray per pixel through a pinhole camera, finds the nearest
//! surface, and shades it with diffuse and specular terms from every
//! light that is not blocked by another object.

mod camera;
mod error;
mod geometry;
mod output;
mod renderer;
mod shading;
mod trace;

pub use camera::ViewPlane;
pub use error::{RenderError, RenderResult, UnsupportedGeometry};
pub use geometry::{intersect, plane_intersection, sphere_intersection, surface_normal};
pub use output::{
    save_image, to_rgb_image, write_ppm, EncodeError, EncodeResult, OutputFormat, PpmFormat,
};
pub use renderer::{render, render_pixel, ImageBuffer, Pixel};
pub use shading::{angular_attenuation, diffuse, light_contribution, shade, specular};
pub use trace::{in_shadow, shoot, Hit};

/// Re-export common math types from raycast_math
pub use raycast_math::{Color, Ray, Vec3};
