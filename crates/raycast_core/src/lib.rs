//! Raycast Core - Scene description for the raycaster.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `SceneObject`, `Geometry`, `Surface`, `Light`, `Camera`
//! - **Scene loading**: JSON scene file parsing and validation
//!
//! # Example
//!
//! ```ignore
//! use raycast_core::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} objects, {} lights",
//!     scene.objects().len(),
//!     scene.lights().len());
//! ```

pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, LoadError, LoadResult};
pub use scene::{
    Camera, Geometry, Light, RadialAttenuation, Scene, SceneObject, Surface, DEFAULT_SHININESS,
};
