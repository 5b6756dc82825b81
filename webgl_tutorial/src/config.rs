use cgmath::{Deg, Rad, Vector3};

use crate::transform::Transform3D;

/// Settings of the spinning 3D "F" stages.
///
/// The defaults are the values the stages ship with; use [FShapeConfig::begin] to override
/// some of them.
#[derive(Clone, Debug, PartialEq)]
pub struct FShapeConfig {
    vertex_shader_url: String,
    fragment_shader_url: String,
    scene_url: String,
    texture_url: String,
    clear_color: [f32; 4],
    rotation_speed: f32,
    initial_rotation: [Rad<f32>; 3],
    translation: Vector3<f32>,
    scale: Vector3<f32>,
    depth: f32,
}

impl FShapeConfig {
    pub fn begin() -> FShapeConfigBuilder {
        FShapeConfigBuilder {
            config: FShapeConfig::default(),
        }
    }

    pub fn vertex_shader_url(&self) -> &str {
        &self.vertex_shader_url
    }

    pub fn fragment_shader_url(&self) -> &str {
        &self.fragment_shader_url
    }

    pub fn scene_url(&self) -> &str {
        &self.scene_url
    }

    pub fn texture_url(&self) -> &str {
        &self.texture_url
    }

    pub fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }

    /// Radians per second around the Y axis.
    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    /// Half the depth of the orthographic view volume.
    pub fn depth(&self) -> f32 {
        self.depth
    }

    /// The transform the shape starts out with.
    pub fn initial_transform(&self) -> Transform3D {
        let [rotation_x, rotation_y, rotation_z] = self.initial_rotation;

        Transform3D {
            translation: self.translation,
            rotation_x,
            rotation_y,
            rotation_z,
            scale: self.scale,
        }
    }
}

impl Default for FShapeConfig {
    fn default() -> Self {
        FShapeConfig {
            vertex_shader_url: "public/shader/vertex/shader.vert".to_string(),
            fragment_shader_url: "public/shader/fragment/fragment.frag".to_string(),
            scene_url: "public/scene/f_letter_3d.json".to_string(),
            texture_url: "public/img/f-texture.png".to_string(),
            clear_color: [0.9, 0.9, 0.0, 0.5],
            rotation_speed: 1.2,
            initial_rotation: [
                Rad::from(Deg(180.0)),
                Rad::from(Deg(60.0)),
                Rad::from(Deg(25.0)),
            ],
            translation: Vector3::new(150.0, 180.0, 0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
            depth: 400.0,
        }
    }
}

pub struct FShapeConfigBuilder {
    config: FShapeConfig,
}

impl FShapeConfigBuilder {
    pub fn vertex_shader_url<S>(mut self, url: S) -> Self
    where
        S: Into<String>,
    {
        self.config.vertex_shader_url = url.into();

        self
    }

    pub fn fragment_shader_url<S>(mut self, url: S) -> Self
    where
        S: Into<String>,
    {
        self.config.fragment_shader_url = url.into();

        self
    }

    pub fn scene_url<S>(mut self, url: S) -> Self
    where
        S: Into<String>,
    {
        self.config.scene_url = url.into();

        self
    }

    pub fn texture_url<S>(mut self, url: S) -> Self
    where
        S: Into<String>,
    {
        self.config.texture_url = url.into();

        self
    }

    pub fn clear_color(mut self, clear_color: [f32; 4]) -> Self {
        self.config.clear_color = clear_color;

        self
    }

    pub fn rotation_speed(mut self, rotation_speed: f32) -> Self {
        self.config.rotation_speed = rotation_speed;

        self
    }

    pub fn initial_rotation<A>(mut self, x: A, y: A, z: A) -> Self
    where
        A: Into<Rad<f32>>,
    {
        self.config.initial_rotation = [x.into(), y.into(), z.into()];

        self
    }

    pub fn translation(mut self, translation: Vector3<f32>) -> Self {
        self.config.translation = translation;

        self
    }

    pub fn scale(mut self, scale: Vector3<f32>) -> Self {
        self.config.scale = scale;

        self
    }

    pub fn depth(mut self, depth: f32) -> Self {
        self.config.depth = depth;

        self
    }

    pub fn finish(self) -> FShapeConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_initial_transform() {
        let transform = FShapeConfig::default().initial_transform();

        assert_eq!(transform.translation, Vector3::new(150.0, 180.0, 0.0));
        assert_eq!(transform.scale, Vector3::new(1.0, 1.0, 1.0));
        assert!((transform.rotation_x.0 - std::f32::consts::PI).abs() < 1e-6);
        assert!((transform.rotation_y.0 - std::f32::consts::FRAC_PI_3).abs() < 1e-6);
    }

    #[test]
    fn test_builder_overrides() {
        let config = FShapeConfig::begin()
            .scene_url("scene.json")
            .rotation_speed(0.5)
            .initial_rotation(Deg(0.0), Deg(90.0), Deg(0.0))
            .finish();

        assert_eq!(config.scene_url(), "scene.json");
        assert_eq!(config.texture_url(), "public/img/f-texture.png");
        assert_eq!(config.rotation_speed(), 0.5);
        assert_eq!(config.depth(), 400.0);
        assert_eq!(
            config.initial_transform().rotation_y,
            Rad::from(Deg(90.0))
        );
    }
}
