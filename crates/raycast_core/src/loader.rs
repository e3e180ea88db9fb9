//! JSON scene loading.
//!
//! A scene file is a JSON array of entries, each tagged with a `type`:
//!
//! ```json
//! [
//!   { "type": "camera", "width": 1.0, "height": 1.0 },
//!   { "type": "sphere", "position": [0, 0, 5], "radius": 1, "diffuse_color": [1, 0, 0] },
//!   { "type": "plane", "position": [0, -1, 0], "normal": [0, 1, 0], "diffuse_color": [0, 0, 1] },
//!   { "type": "light", "position": [0, 10, 0], "color": [1, 1, 1], "radial-a2": 0.01 }
//! ]
//! ```
//!
//! Unknown types, unknown or duplicate keys, missing required keys, and
//! negative radii, colors, or attenuation values are rejected.

use std::path::Path;

use raycast_math::{Color, Vec3};
use serde::Deserialize;
use serde_json::value::RawValue;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::scene::{Camera, Geometry, Light, RadialAttenuation, Scene, SceneObject, Surface};

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene must be a JSON array of objects: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Entry {index}: {source}")]
    Entry {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Entry {index} ({kind}): {message}")]
    Invalid {
        index: usize,
        kind: &'static str,
        message: String,
    },
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

#[derive(Deserialize, Debug)]
#[serde(tag = "type", rename_all = "lowercase")]
enum Entry {
    Camera(CameraEntry),
    Sphere(SphereEntry),
    Plane(PlaneEntry),
    Light(LightEntry),
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct CameraEntry {
    width: f64,
    height: f64,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct SphereEntry {
    position: [f64; 3],
    radius: f64,
    diffuse_color: [f64; 3],
    specular_color: Option<[f64; 3]>,
    ns: Option<f64>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct PlaneEntry {
    position: [f64; 3],
    normal: [f64; 3],
    diffuse_color: [f64; 3],
    specular_color: Option<[f64; 3]>,
    ns: Option<f64>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct LightEntry {
    position: [f64; 3],
    color: [f64; 3],
    direction: Option<[f64; 3]>,
    theta: Option<f64>,
    #[serde(rename = "radial-a0")]
    radial_a0: Option<f64>,
    #[serde(rename = "radial-a1")]
    radial_a1: Option<f64>,
    #[serde(rename = "radial-a2")]
    radial_a2: Option<f64>,
    #[serde(rename = "angular-a0")]
    angular_a0: Option<f64>,
}

/// Load a scene from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    log::debug!("Read {} bytes from {}", text.len(), path.display());
    load_scene_from_str(&text)
}

/// Load a scene from a JSON string.
pub fn load_scene_from_str(text: &str) -> LoadResult<Scene> {
    let raw_entries: Vec<Box<RawValue>> = serde_json::from_str(text)?;

    if raw_entries.is_empty() {
        log::warn!("Scene file is an empty array");
    }

    let mut camera: Option<Camera> = None;
    let mut objects = Vec::new();
    let mut lights = Vec::new();

    for (index, raw) in raw_entries.iter().enumerate() {
        // Entries are re-parsed from their raw text so duplicate keys are still caught
        let fields: Map<String, Value> = serde_json::from_str(raw.get())
            .map_err(|source| LoadError::Entry { index, source })?;
        if fields.is_empty() {
            log::warn!("Entry {} is an empty object, skipping", index);
            continue;
        }

        let entry: Entry = serde_json::from_str(raw.get())
            .map_err(|source| LoadError::Entry { index, source })?;

        match entry {
            Entry::Camera(entry) => {
                if camera.is_some() {
                    log::warn!("Entry {} redefines the camera, using the last one", index);
                }
                camera = Some(camera_from_entry(index, entry)?);
            }
            Entry::Sphere(entry) => objects.push(sphere_from_entry(index, entry)?),
            Entry::Plane(entry) => objects.push(plane_from_entry(index, entry)?),
            Entry::Light(entry) => lights.push(light_from_entry(index, entry)?),
        }
    }

    let camera = camera.unwrap_or_else(|| {
        log::warn!("Scene has no camera, using a 0x0 view plane");
        Camera::default()
    });

    log::info!(
        "Loaded scene: {} objects, {} lights, camera {}x{}",
        objects.len(),
        lights.len(),
        camera.width,
        camera.height
    );

    Ok(Scene::new(camera, objects, lights))
}

fn camera_from_entry(index: usize, entry: CameraEntry) -> LoadResult<Camera> {
    non_negative(index, "camera", "width", entry.width)?;
    non_negative(index, "camera", "height", entry.height)?;
    Ok(Camera::new(entry.width, entry.height))
}

fn sphere_from_entry(index: usize, entry: SphereEntry) -> LoadResult<SceneObject> {
    non_negative(index, "sphere", "radius", entry.radius)?;
    Ok(SceneObject {
        geometry: Geometry::Sphere {
            center: Vec3::from_array(entry.position),
            radius: entry.radius,
        },
        surface: surface_from_entry(
            index,
            "sphere",
            entry.diffuse_color,
            entry.specular_color,
            entry.ns,
        )?,
    })
}

fn plane_from_entry(index: usize, entry: PlaneEntry) -> LoadResult<SceneObject> {
    Ok(SceneObject {
        geometry: Geometry::Plane {
            point: Vec3::from_array(entry.position),
            normal: Vec3::from_array(entry.normal),
        },
        surface: surface_from_entry(
            index,
            "plane",
            entry.diffuse_color,
            entry.specular_color,
            entry.ns,
        )?,
    })
}

fn surface_from_entry(
    index: usize,
    kind: &'static str,
    diffuse: [f64; 3],
    specular: Option<[f64; 3]>,
    ns: Option<f64>,
) -> LoadResult<Surface> {
    let mut surface = Surface {
        diffuse: color(index, kind, "diffuse_color", diffuse)?,
        ..Default::default()
    };
    if let Some(specular) = specular {
        surface.specular = color(index, kind, "specular_color", specular)?;
    }
    if let Some(ns) = ns {
        surface.shininess = non_negative(index, kind, "ns", ns)?;
    }
    Ok(surface)
}

fn light_from_entry(index: usize, entry: LightEntry) -> LoadResult<Light> {
    let defaults = RadialAttenuation::default();
    let radial = RadialAttenuation::new(
        optional_non_negative(index, "radial-a0", entry.radial_a0, defaults.constant)?,
        optional_non_negative(index, "radial-a1", entry.radial_a1, defaults.linear)?,
        optional_non_negative(index, "radial-a2", entry.radial_a2, defaults.quadratic)?,
    );
    if radial.constant == 0.0 && radial.linear == 0.0 && radial.quadratic == 0.0 {
        return Err(invalid(index, "light", "radial attenuation coefficients cannot all be zero"));
    }

    Ok(Light {
        position: Vec3::from_array(entry.position),
        direction: entry.direction.map(Vec3::from_array).unwrap_or(Vec3::ZERO),
        color: color(index, "light", "color", entry.color)?,
        cone_angle: optional_non_negative(index, "theta", entry.theta, 0.0)?,
        angular_falloff: optional_non_negative(index, "angular-a0", entry.angular_a0, 0.0)?,
        radial,
    })
}

fn color(index: usize, kind: &'static str, key: &str, value: [f64; 3]) -> LoadResult<Color> {
    if value.iter().any(|c| *c < 0.0) {
        return Err(invalid(
            index,
            kind,
            format!("'{}' components must be at least 0.0", key),
        ));
    }
    Ok(Color::from_array(value))
}

fn non_negative(index: usize, kind: &'static str, key: &str, value: f64) -> LoadResult<f64> {
    if value < 0.0 {
        return Err(invalid(index, kind, format!("'{}' cannot be negative", key)));
    }
    Ok(value)
}

fn optional_non_negative(
    index: usize,
    key: &str,
    value: Option<f64>,
    default: f64,
) -> LoadResult<f64> {
    match value {
        Some(value) => non_negative(index, "light", key, value),
        None => Ok(default),
    }
}

fn invalid(index: usize, kind: &'static str, message: impl Into<String>) -> LoadError {
    LoadError::Invalid {
        index,
        kind,
        message: message.into(),
    }
}
