use rand::Rng;

/// The 6 vertices (2 triangles) that cover the rectangle at `x`, `y` with the given size.
pub fn rectangle(x: f32, y: f32, width: f32, height: f32) -> [f32; 12] {
    let x1 = x;
    let x2 = x + width;
    let y1 = y;
    let y2 = y + height;

    [x1, y1, x2, y1, x1, y2, x1, y2, x2, y1, x2, y2]
}

/// A rectangle whose position and size components are each a random integer in `0..range`.
pub fn random_rectangle<R>(rng: &mut R, range: u32) -> [f32; 12]
where
    R: Rng + ?Sized,
{
    if range == 0 {
        return rectangle(0.0, 0.0, 0.0, 0.0);
    }

    let mut component = || rng.gen_range(0..range) as f32;

    let x = component();
    let y = component();
    let width = component();
    let height = component();

    rectangle(x, y, width, height)
}

/// An opaque color with random red, green and blue channels.
pub fn random_color<R>(rng: &mut R) -> [f32; 4]
where
    R: Rng + ?Sized,
{
    [rng.gen(), rng.gen(), rng.gen(), 1.0]
}

/// The flat "F": a 30x150 left column, a 70x30 top rung and a 37x30 middle rung, with its
/// top-left corner at the origin.
pub fn f_letter_2d() -> Vec<f32> {
    let mut vertices = Vec::with_capacity(36);

    vertices.extend_from_slice(&rectangle(0.0, 0.0, 30.0, 150.0));
    vertices.extend_from_slice(&rectangle(30.0, 0.0, 70.0, 30.0));
    vertices.extend_from_slice(&rectangle(30.0, 60.0, 37.0, 30.0));

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_rectangle() {
        assert_eq!(
            rectangle(10.0, 20.0, 30.0, 40.0),
            [10.0, 20.0, 40.0, 20.0, 10.0, 60.0, 10.0, 60.0, 40.0, 20.0, 40.0, 60.0]
        );
    }

    #[test]
    fn test_random_rectangle_in_range() {
        let mut rng = SmallRng::seed_from_u64(7);

        for _ in 0..50 {
            let vertices = random_rectangle(&mut rng, 300);
            let (x, y) = (vertices[0], vertices[1]);
            let (width, height) = (vertices[2] - x, vertices[5] - y);

            for value in &[x, y, width, height] {
                assert!(*value >= 0.0 && *value < 300.0);
                assert_eq!(value.fract(), 0.0);
            }
        }
    }

    #[test]
    fn test_random_rectangle_empty_range() {
        let mut rng = SmallRng::seed_from_u64(7);

        assert_eq!(random_rectangle(&mut rng, 0), [0.0; 12]);
    }

    #[test]
    fn test_random_color_is_opaque() {
        let mut rng = SmallRng::seed_from_u64(3);
        let color = random_color(&mut rng);

        assert_eq!(color[3], 1.0);
        assert!(color[..3].iter().all(|c| *c >= 0.0 && *c < 1.0));
    }

    #[test]
    fn test_f_letter_2d() {
        let vertices = f_letter_2d();

        assert_eq!(vertices.len(), 36);
        assert_eq!(&vertices[12..24], &rectangle(30.0, 0.0, 70.0, 30.0)[..]);

        let max_x = vertices.chunks(2).map(|v| v[0]).fold(0.0, f32::max);
        let max_y = vertices.chunks(2).map(|v| v[1]).fold(0.0, f32::max);

        assert_eq!((max_x, max_y), (100.0, 150.0));
    }
}
