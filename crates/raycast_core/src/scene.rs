//! Scene types for the raycaster.
//!
//! A `Scene` is an immutable snapshot: it is built once from a camera,
//! objects, and lights, with plane normals and spotlight directions
//! normalized on the way in, and never changes during a render.

use raycast_math::{Color, Vec3};

/// Specular exponent used when a surface does not set one.
pub const DEFAULT_SHININESS: f64 = 20.0;

/// View plane extent at unit distance along +Z from the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Camera {
    /// Horizontal extent of the view plane
    pub width: f64,
    /// Vertical extent of the view plane
    pub height: f64,
}

impl Camera {
    /// Create a new camera.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Shape of a scene object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Sphere { center: Vec3, radius: f64 },
    /// `normal` is unit length once the plane is inside a `Scene`.
    Plane { point: Vec3, normal: Vec3 },
    /// Y-axis aligned cylinder. Can be described but not traced.
    Cylinder { center: Vec3, radius: f64, height: f64 },
}

impl Geometry {
    /// Short name of the geometry type, for logs and errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Sphere { .. } => "sphere",
            Geometry::Plane { .. } => "plane",
            Geometry::Cylinder { .. } => "cylinder",
        }
    }

    fn normalized(self) -> Self {
        match self {
            Geometry::Plane { point, normal } => Geometry::Plane {
                point,
                normal: normal.normalize_or_zero(),
            },
            other => other,
        }
    }
}

/// Surface response to light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    /// Diffuse (matte) color
    pub diffuse: Color,
    /// Specular highlight color
    pub specular: Color,
    /// Specular exponent
    pub shininess: f64,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            diffuse: Color::ZERO,
            specular: Color::ONE,
            shininess: DEFAULT_SHININESS,
        }
    }
}

/// A piece of geometry with its surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneObject {
    pub geometry: Geometry,
    pub surface: Surface,
}

impl SceneObject {
    /// Create an object with a white specular color and default shininess.
    pub fn new(geometry: Geometry, diffuse: Color) -> Self {
        Self {
            geometry,
            surface: Surface {
                diffuse,
                ..Default::default()
            },
        }
    }

    /// Create a sphere.
    pub fn sphere(center: Vec3, radius: f64, diffuse: Color) -> Self {
        Self::new(Geometry::Sphere { center, radius }, diffuse)
    }

    /// Create a plane. The normal does not need to be unit length.
    pub fn plane(point: Vec3, normal: Vec3, diffuse: Color) -> Self {
        Self::new(Geometry::Plane { point, normal }, diffuse)
    }

    /// Set the specular color.
    pub fn with_specular(mut self, specular: Color) -> Self {
        self.surface.specular = specular;
        self
    }

    /// Set the specular exponent.
    pub fn with_shininess(mut self, shininess: f64) -> Self {
        self.surface.shininess = shininess;
        self
    }
}

/// Distance falloff `1 / (a2*d^2 + a1*d + a0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialAttenuation {
    /// a0
    pub constant: f64,
    /// a1
    pub linear: f64,
    /// a2
    pub quadratic: f64,
}

impl Default for RadialAttenuation {
    fn default() -> Self {
        Self {
            constant: 1.0,
            linear: 0.0,
            quadratic: 0.0,
        }
    }
}

impl RadialAttenuation {
    /// Create a new attenuation from (a0, a1, a2).
    pub fn new(constant: f64, linear: f64, quadratic: f64) -> Self {
        Self {
            constant,
            linear,
            quadratic,
        }
    }

    /// Attenuation factor at `distance` from the light.
    ///
    /// A light at infinity is never attenuated.
    pub fn factor(&self, distance: f64) -> f64 {
        if distance == f64::INFINITY {
            return 1.0;
        }
        1.0 / (self.quadratic * distance * distance + self.linear * distance + self.constant)
    }
}

/// A point light, or a spotlight when direction, cone angle, and falloff are all set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    /// Spotlight axis. Zero for omnidirectional lights.
    pub direction: Vec3,
    pub color: Color,
    /// Spotlight cone angle in degrees
    pub cone_angle: f64,
    /// Angular falloff exponent
    pub angular_falloff: f64,
    pub radial: RadialAttenuation,
}

impl Light {
    /// Create an omnidirectional point light with no attenuation.
    pub fn point(position: Vec3, color: Color) -> Self {
        Self {
            position,
            direction: Vec3::ZERO,
            color,
            cone_angle: 0.0,
            angular_falloff: 0.0,
            radial: RadialAttenuation::default(),
        }
    }

    /// Turn this light into a spotlight.
    pub fn with_spot(mut self, direction: Vec3, cone_angle: f64, angular_falloff: f64) -> Self {
        self.direction = direction;
        self.cone_angle = cone_angle;
        self.angular_falloff = angular_falloff;
        self
    }

    /// Set radial attenuation.
    pub fn with_radial(mut self, radial: RadialAttenuation) -> Self {
        self.radial = radial;
        self
    }

    /// True if angular attenuation applies to this light.
    pub fn is_spot(&self) -> bool {
        self.cone_angle != 0.0 && self.angular_falloff != 0.0 && self.direction != Vec3::ZERO
    }

    fn normalized(self) -> Self {
        Self {
            direction: self.direction.normalize_or_zero(),
            ..self
        }
    }
}

/// Immutable scene snapshot consumed by the renderer.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    camera: Camera,
    objects: Vec<SceneObject>,
    lights: Vec<Light>,
}

impl Scene {
    /// Build a scene, normalizing plane normals and light directions.
    ///
    /// Zero-length vectors stay zero. Object and light order is preserved.
    pub fn new(camera: Camera, objects: Vec<SceneObject>, lights: Vec<Light>) -> Self {
        let objects = objects
            .into_iter()
            .map(|object| SceneObject {
                geometry: object.geometry.normalized(),
                ..object
            })
            .collect();
        let lights = lights.into_iter().map(Light::normalized).collect();

        Self {
            camera,
            objects,
            lights,
        }
    }

    pub fn camera(&self) -> Camera {
        self.camera
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// True if the scene has no objects and no lights.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty() && self.lights.is_empty()
    }
}
