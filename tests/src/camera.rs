#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use hikari::{
        camera::{Camera, CameraParameters},
        math::{vec2, vec3},
    };

    #[test]
    fn default_parameters() {
        let params = CameraParameters::default();
        assert_eq!(params.screen_min, vec3(-4.0, -3.0, 0.0));
        assert_eq!(params.screen_size, vec2(8.0, 6.0));
        assert_eq!(params.focal_point, vec3(0.0, 0.0, 6.0));
    }

    #[test]
    fn rows_go_up() {
        let camera = Camera::new(CameraParameters::default(), vec2(80, 60));
        let bottom = camera.ray(0, 40);
        let top = camera.ray(59, 40);
        assert!(bottom.o.y < top.o.y);
        assert!(bottom.d.y < 0.0);
        assert!(top.d.y > 0.0);
        assert_abs_diff_eq!(bottom.d.len(), 1.0, epsilon = 1e-6);

        let left = camera.ray(30, 0);
        let right = camera.ray(30, 79);
        assert!(left.o.x < right.o.x);
        // Pixel centers stay inside the screen
        assert_abs_diff_eq!(left.o.x, -4.0 + 0.05, epsilon = 1e-5);
        assert_abs_diff_eq!(right.o.x, 4.0 - 0.05, epsilon = 1e-5);
    }
}
