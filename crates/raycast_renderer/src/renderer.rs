//! Image driver: one primary ray per pixel.
//!
//! Pixels are traced in row-major order, top row first. Each pixel only
//! reads the scene, so results do not depend on visiting order. Misses
//! stay black.

use std::time::Instant;

use bytemuck::{Pod, Zeroable};
use raycast_core::Scene;
use raycast_math::{clamp_unit, Color};

use crate::camera::ViewPlane;
use crate::shading::shade;
use crate::trace::shoot;
use crate::RenderResult;

/// 8-bit RGB pixel.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Convert a linear color to 8 bits: clamp to [0, 1], scale by 255, truncate.
    pub fn from_color(color: Color) -> Self {
        let c = clamp_unit(color) * 255.0;
        Self::new(c.x as u8, c.y as u8, c.z as u8)
    }
}

/// Row-major pixel buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Pixel>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Pixel::BLACK; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Pixel {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, pixel: Pixel) {
        let index = self.index(x, y);
        self.pixels[index] = pixel;
    }

    /// Packed RGB bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

/// Trace and shade the pixel at (x, y).
pub fn render_pixel(scene: &Scene, view: &ViewPlane, x: u32, y: u32) -> RenderResult<Pixel> {
    let ray = view.ray(x, y);
    match shoot(&ray, scene.objects())? {
        Some(hit) => shade(&ray, &hit, scene.objects(), scene.lights()),
        None => Ok(Pixel::BLACK),
    }
}

/// Render the entire scene at `width` x `height` pixels.
///
/// Fails without returning a partial image if the scene holds geometry
/// the tracer cannot intersect.
pub fn render(scene: &Scene, width: u32, height: u32) -> RenderResult<ImageBuffer> {
    let start = Instant::now();
    log::info!(
        "Rendering {}x{} ({} objects, {} lights)",
        width,
        height,
        scene.objects().len(),
        scene.lights().len()
    );

    let view = ViewPlane::new(scene.camera(), width, height);
    let mut image = ImageBuffer::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let pixel = render_pixel(scene, &view, x, y)?;
            image.set(x, y, pixel);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}
