use failure::Fail;
use serde_derive::{Deserialize, Serialize};

/// A static scene description: flat per-vertex attribute arrays, as stored in the JSON files
/// under a stage's `public/scene/` directory.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Scene {
    pub vertices: Vec<f32>,
    /// Texture coordinates, 2 per vertex.
    #[serde(default)]
    pub textures: Vec<f32>,
    /// RGB colors, 3 per vertex.
    #[serde(default)]
    pub colors: Vec<u8>,
}

/// An optional per-vertex array a stage can't draw without.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneAttribute {
    Textures,
    Colors,
}

#[derive(Fail, Debug, PartialEq)]
pub enum SceneError {
    #[fail(display = "Malformed scene JSON: {}", _0)]
    Json(String),
    #[fail(display = "Scene has no vertices")]
    Empty,
    #[fail(
        display = "{} position values do not form whole {}-component positions",
        values, components
    )]
    PartialVertex { values: usize, components: usize },
    #[fail(
        display = "Expected {} texture coordinate values for {} vertices, found {}",
        expected, vertices, found
    )]
    TextureCount {
        vertices: usize,
        expected: usize,
        found: usize,
    },
    #[fail(
        display = "Expected {} color values for {} vertices, found {}",
        expected, vertices, found
    )]
    ColorCount {
        vertices: usize,
        expected: usize,
        found: usize,
    },
}

impl Scene {
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        serde_json::from_str(json).map_err(|err| SceneError::Json(err.to_string()))
    }

    /// Checks that the attribute arrays agree on the number of vertices and returns that number.
    ///
    /// `position_components` is the number of values per position (2 for the flat stages, 3 for
    /// the 3D ones). Empty `textures` and `colors` arrays are not checked.
    pub fn validate(&self, position_components: usize) -> Result<usize, SceneError> {
        self.validate_with(position_components, &[])
    }

    /// Like [validate], but an empty array listed in `required` counts as a mismatch.
    ///
    /// [validate]: Scene::validate
    pub fn validate_with(
        &self,
        position_components: usize,
        required: &[SceneAttribute],
    ) -> Result<usize, SceneError> {
        if self.vertices.is_empty() {
            return Err(SceneError::Empty);
        }

        if position_components == 0 || self.vertices.len() % position_components != 0 {
            return Err(SceneError::PartialVertex {
                values: self.vertices.len(),
                components: position_components,
            });
        }

        let vertices = self.vertices.len() / position_components;

        let checked = |attribute: SceneAttribute, values: usize| {
            values > 0 || required.contains(&attribute)
        };

        if checked(SceneAttribute::Textures, self.textures.len())
            && self.textures.len() != vertices * 2
        {
            return Err(SceneError::TextureCount {
                vertices,
                expected: vertices * 2,
                found: self.textures.len(),
            });
        }

        if checked(SceneAttribute::Colors, self.colors.len()) && self.colors.len() != vertices * 3
        {
            return Err(SceneError::ColorCount {
                vertices,
                expected: vertices * 3,
                found: self.colors.len(),
            });
        }

        Ok(vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_optional_arrays() {
        let scene = Scene::from_json("{\"vertices\": [0, 0, 0, 30, 0, 0, 0, 150, 0]}").unwrap();

        assert_eq!(scene.vertices.len(), 9);
        assert!(scene.textures.is_empty());
        assert!(scene.colors.is_empty());
        assert_eq!(scene.validate(3), Ok(3));
    }

    #[test]
    fn test_from_json_malformed() {
        match Scene::from_json("{\"vertices\": [0, 0,") {
            Err(SceneError::Json(_)) => (),
            other => panic!("expected a JSON error, got {:?}", other),
        }

        match Scene::from_json("{\"textures\": [0, 1]}") {
            Err(SceneError::Json(message)) => assert!(message.contains("vertices")),
            other => panic!("expected a JSON error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_empty() {
        assert_eq!(Scene::default().validate(3), Err(SceneError::Empty));
    }

    #[test]
    fn test_validate_partial_vertex() {
        let scene = Scene {
            vertices: vec![0.0; 10],
            ..Scene::default()
        };

        assert_eq!(
            scene.validate(3),
            Err(SceneError::PartialVertex {
                values: 10,
                components: 3
            })
        );
        assert_eq!(scene.validate(2), Ok(5));
    }

    #[test]
    fn test_validate_attribute_counts() {
        let scene = Scene {
            vertices: vec![0.0; 18],
            textures: vec![0.0; 10],
            colors: vec![],
        };

        assert_eq!(
            scene.validate(3),
            Err(SceneError::TextureCount {
                vertices: 6,
                expected: 12,
                found: 10
            })
        );

        let scene = Scene {
            vertices: vec![0.0; 18],
            textures: vec![0.0; 12],
            colors: vec![255; 17],
        };

        assert_eq!(
            scene.validate(3),
            Err(SceneError::ColorCount {
                vertices: 6,
                expected: 18,
                found: 17
            })
        );
    }

    #[test]
    fn test_validate_with_required_attribute() {
        let scene = Scene {
            vertices: vec![0.0; 96 * 3],
            ..Scene::default()
        };

        assert_eq!(scene.validate(3), Ok(96));
        assert_eq!(
            scene.validate_with(3, &[SceneAttribute::Textures]),
            Err(SceneError::TextureCount {
                vertices: 96,
                expected: 192,
                found: 0
            })
        );
        assert_eq!(
            scene.validate_with(3, &[SceneAttribute::Colors]),
            Err(SceneError::ColorCount {
                vertices: 96,
                expected: 288,
                found: 0
            })
        );

        let scene = Scene {
            colors: vec![255; 96 * 3],
            ..scene
        };

        assert_eq!(scene.validate_with(3, &[SceneAttribute::Colors]), Ok(96));
    }
}
