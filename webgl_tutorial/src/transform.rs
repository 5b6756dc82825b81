use cgmath::{ortho, Matrix3, Matrix4, Rad, Vector2, Vector3};

/// Maps pixel coordinates (origin top-left, y down) on a `width` by `height` canvas to clip
/// space.
pub fn projection_2d(width: f32, height: f32) -> Matrix3<f32> {
    #[rustfmt::skip]
    let projection = Matrix3::new(
        2.0 / width, 0.0, 0.0,
        0.0, -2.0 / height, 0.0,
        -1.0, 1.0, 1.0,
    );

    projection
}

/// Orthographic projection of a `width` by `height` box (origin bottom-left) that is `2 * depth`
/// deep and centered on `z = 0`.
pub fn ortho_projection(width: f32, height: f32, depth: f32) -> Matrix4<f32> {
    ortho(0.0, width, 0.0, height, depth, -depth)
}

/// Translation, rotation and scale of a flat shape, in pixels and radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2D {
    pub translation: Vector2<f32>,
    pub rotation: Rad<f32>,
    pub scale: Vector2<f32>,
}

impl Transform2D {
    pub fn model(&self) -> Matrix3<f32> {
        #[rustfmt::skip]
        let translation = Matrix3::new(
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            self.translation.x, self.translation.y, 1.0,
        );

        #[rustfmt::skip]
        let scale = Matrix3::new(
            self.scale.x, 0.0, 0.0,
            0.0, self.scale.y, 0.0,
            0.0, 0.0, 1.0,
        );

        translation * Matrix3::from_angle_z(self.rotation) * scale
    }

    /// The full matrix for a canvas of the given size: projection, translation, rotation, scale.
    pub fn matrix(&self, width: f32, height: f32) -> Matrix3<f32> {
        projection_2d(width, height) * self.model()
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Transform2D {
            translation: Vector2::new(0.0, 0.0),
            rotation: Rad(0.0),
            scale: Vector2::new(1.0, 1.0),
        }
    }
}

/// Translation, per-axis rotation and scale of a 3D shape.
///
/// Rotations are applied in X, Y, Z order on top of the translation, the way they would be with
/// successive `rotateX`/`rotateY`/`rotateZ` calls on a matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform3D {
    pub translation: Vector3<f32>,
    pub rotation_x: Rad<f32>,
    pub rotation_y: Rad<f32>,
    pub rotation_z: Rad<f32>,
    pub scale: Vector3<f32>,
}

impl Transform3D {
    pub fn model(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.translation)
            * Matrix4::from_angle_x(self.rotation_x)
            * Matrix4::from_angle_y(self.rotation_y)
            * Matrix4::from_angle_z(self.rotation_z)
            * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }

    pub fn matrix(&self, width: f32, height: f32, depth: f32) -> Matrix4<f32> {
        ortho_projection(width, height, depth) * self.model()
    }

    /// Advances the Y rotation by `speed` radians per second over `delta_seconds`.
    pub fn rotate(&mut self, speed: f32, delta_seconds: f32) {
        self.rotation_y += Rad(speed * delta_seconds);
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Transform3D {
            translation: Vector3::new(0.0, 0.0, 0.0),
            rotation_x: Rad(0.0),
            rotation_y: Rad(0.0),
            rotation_z: Rad(0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

/// The matrix in the column-major layout `uniformMatrix3fv` expects.
pub fn matrix3_columns(matrix: &Matrix3<f32>) -> [f32; 9] {
    let columns: &[f32; 9] = matrix.as_ref();

    *columns
}

/// The matrix in the column-major layout `uniformMatrix4fv` expects.
pub fn matrix4_columns(matrix: &Matrix4<f32>) -> [f32; 16] {
    let columns: &[f32; 16] = matrix.as_ref();

    *columns
}

#[cfg(test)]
mod tests {
    use super::*;

    use cgmath::{Deg, SquareMatrix, Vector4};

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "{} is not close to {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_projection_2d_corners() {
        let projection = projection_2d(400.0, 300.0);

        let top_left = projection * Vector3::new(0.0, 0.0, 1.0);
        let bottom_right = projection * Vector3::new(400.0, 300.0, 1.0);

        assert_eq!(top_left, Vector3::new(-1.0, 1.0, 1.0));
        assert_close(bottom_right.x, 1.0);
        assert_close(bottom_right.y, -1.0);
    }

    #[test]
    fn test_transform_2d_order() {
        let transform = Transform2D {
            translation: Vector2::new(100.0, 50.0),
            rotation: Rad::from(Deg(90.0)),
            scale: Vector2::new(2.0, 2.0),
        };

        // Scaled first, then rotated, then translated.
        let point = transform.model() * Vector3::new(10.0, 0.0, 1.0);

        assert_close(point.x, 100.0);
        assert_close(point.y, 70.0);
        assert_close(point.z, 1.0);
    }

    #[test]
    fn test_transform_2d_default_is_projection() {
        assert_eq!(
            Transform2D::default().matrix(400.0, 300.0),
            projection_2d(400.0, 300.0)
        );
    }

    #[test]
    fn test_ortho_projection() {
        let projection = ortho_projection(400.0, 300.0, 400.0);

        let origin = projection * Vector4::new(0.0, 0.0, 0.0, 1.0);
        let corner = projection * Vector4::new(400.0, 300.0, 0.0, 1.0);
        let near = projection * Vector4::new(0.0, 0.0, 400.0, 1.0);

        assert_eq!(origin, Vector4::new(-1.0, -1.0, 0.0, 1.0));
        assert_close(corner.x, 1.0);
        assert_close(corner.y, 1.0);
        assert_close(corner.z, 0.0);
        assert_close(near.z, 1.0);
    }

    #[test]
    fn test_transform_3d_default_is_identity() {
        assert_eq!(Transform3D::default().model(), Matrix4::identity());
    }

    #[test]
    fn test_transform_3d_order() {
        let transform = Transform3D {
            translation: Vector3::new(150.0, 180.0, 0.0),
            rotation_y: Rad::from(Deg(90.0)),
            ..Transform3D::default()
        };

        // The Y rotation turns +X into -Z before the translation applies.
        let point = transform.model() * Vector4::new(10.0, 0.0, 0.0, 1.0);

        assert_close(point.x, 150.0);
        assert_close(point.y, 180.0);
        assert_close(point.z, -10.0);
    }

    #[test]
    fn test_transform_3d_rotation_axis_order() {
        let transform = Transform3D {
            translation: Vector3::new(150.0, 180.0, 0.0),
            rotation_x: Rad::from(Deg(180.0)),
            rotation_y: Rad::from(Deg(60.0)),
            rotation_z: Rad::from(Deg(25.0)),
            scale: Vector3::new(1.0, 1.0, 1.0),
        };

        // Z applies first, then Y, then X. Reversing the axes lands near (184.4, 163.0, -101.6).
        let point = transform.model() * Vector4::new(100.0, 30.0, 30.0, 1.0);

        assert!((point.x - 214.957).abs() < 1e-3, "x = {}", point.x);
        assert!((point.y - 110.549).abs() < 1e-3, "y = {}", point.y);
        assert!((point.z - 52.509).abs() < 1e-3, "z = {}", point.z);
        assert_close(point.w, 1.0);
    }

    #[test]
    fn test_transform_3d_rotate() {
        let mut transform = Transform3D::default();

        transform.rotate(1.2, 0.5);
        transform.rotate(1.2, 0.5);

        assert_close(transform.rotation_y.0, 1.2);
        assert_eq!(transform.rotation_x, Rad(0.0));
        assert_eq!(transform.rotation_z, Rad(0.0));
    }

    #[test]
    fn test_matrix_columns() {
        let matrix = Matrix4::from_translation(Vector3::new(1.0, 2.0, 3.0));
        let columns = matrix4_columns(&matrix);

        assert_eq!(&columns[12..], &[1.0, 2.0, 3.0, 1.0]);

        let columns = matrix3_columns(&projection_2d(2.0, 2.0));

        assert_eq!(columns, [1.0, 0.0, 0.0, 0.0, -1.0, 0.0, -1.0, 1.0, 1.0]);
    }
}
