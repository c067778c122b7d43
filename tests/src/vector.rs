#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq};
    use std::panic;

    use hikari::math::{reflect, vec2, vec3, Vec2, Vec3};

    // Vec2 and Vec3 share their impls through the same macros so the generic
    // parts are checked mostly on Vec3.

    #[test]
    fn new() {
        let v = Vec2::new(0.0, 1.0);
        assert_eq!(v.x, 0.0);
        assert_eq!(v.y, 1.0);
        assert_eq!(vec2(0.0, 1.0), v);

        let v = Vec3::new(0.0, 1.0, 2.0);
        assert_eq!(v.x, 0.0);
        assert_eq!(v.y, 1.0);
        assert_eq!(v.z, 2.0);
        assert_eq!(vec3(0.0, 1.0, 2.0), v);

        // Integer vectors are used for resolutions
        let v: Vec2<u16> = vec2(640, 480);
        assert_eq!(v.x, 640);
    }

    #[test]
    fn zeros_ones() {
        assert_eq!(Vec3::zeros(), vec3(0.0, 0.0, 0.0));
        assert_eq!(Vec3::ones(), vec3(1.0, 1.0, 1.0));
        assert_eq!(Vec3::from(2.0), vec3(2.0, 2.0, 2.0));
    }

    #[test]
    fn has_nans() {
        // Constructors catch NaNs in debug
        let result = panic::catch_unwind(|| Vec3::new(f32::NAN, 0.0, 0.0));
        assert!(result.is_err());

        let mut v = Vec3::new(0.0f32, 0.0, 0.0);
        assert!(!v.has_nans());
        v.z = f32::NAN;
        assert!(v.has_nans());
    }

    #[test]
    fn index() {
        let mut v = vec3(0.0, 1.0, 2.0);
        assert_eq!(v[0], 0.0);
        assert_eq!(v[1], 1.0);
        assert_eq!(v[2], 2.0);
        v[0] = 3.0;
        assert_eq!(v.x, 3.0);

        let result = panic::catch_unwind(|| vec3(0.0, 1.0, 2.0)[3]);
        assert!(result.is_err());
    }

    #[test]
    fn ops() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(4.0, 6.0, 8.0);
        assert_eq!(a + b, vec3(5.0, 8.0, 11.0));
        assert_eq!(b - a, vec3(3.0, 4.0, 5.0));
        assert_eq!(a * 2.0, vec3(2.0, 4.0, 6.0));
        assert_eq!(b / 2.0, vec3(2.0, 3.0, 4.0));
        assert_eq!(-a, vec3(-1.0, -2.0, -3.0));

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
        c -= b;
        assert_eq!(c, a);
        c *= 2.0;
        assert_eq!(c, a * 2.0);
        c /= 2.0;
        assert_eq!(c, a);
    }

    #[test]
    fn dot_cross() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(vec2(1.0, 2.0).dot(vec2(3.0, 4.0)), 11.0);

        let x = vec3(1.0, 0.0, 0.0);
        let y = vec3(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), vec3(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), vec3(0.0, 0.0, -1.0));
        assert_eq!(a.cross(b).dot(a), 0.0);
    }

    #[test]
    fn len() {
        let v = vec3(2.0, 3.0, 6.0);
        assert_eq!(v.len_sqr(), 49.0);
        assert_eq!(v.len(), 7.0);
        assert_eq!(vec3(1.0, 2.0, 3.0).dist_sqr(vec3(1.0, 2.0, 5.0)), 4.0);
    }

    #[test]
    fn normalize() {
        let v = vec3(2.0f32, 3.0, 6.0);
        assert_relative_eq!(v.normalized(), vec3(2.0 / 7.0, 3.0 / 7.0, 6.0 / 7.0));
        assert_relative_eq!(v.normalized().len(), 1.0);

        let mut w = v;
        w.normalize();
        assert_eq!(w, v.normalized());

        let result = panic::catch_unwind(|| Vec3::<f32>::zeros().normalized());
        assert!(result.is_err());
    }

    #[test]
    fn reflection() {
        assert_eq!(
            reflect(vec3(1.0, -1.0, 0.0), vec3(0.0, 1.0, 0.0)),
            vec3(1.0, 1.0, 0.0)
        );
        // Head-on bounces straight back
        assert_eq!(
            reflect(vec3(0.0, 0.0, -1.0), vec3(0.0, 0.0, 1.0)),
            vec3(0.0, 0.0, 1.0)
        );
        // Length is preserved
        let d = vec3(0.3f32, -0.5, 0.2);
        let n = vec3(1.0f32, 1.0, 0.0).normalized();
        assert_relative_eq!(reflect(d, n).len(), d.len());
    }

    #[test]
    fn approx() {
        let a = vec3(1.0f32, 2.0, 3.0);
        assert_abs_diff_eq!(a, a + Vec3::from(f32::EPSILON * 0.5));
        assert_abs_diff_ne!(a, a + vec3(0.0, 0.0, 0.1));
        assert_abs_diff_eq!(a, a + vec3(0.0, 0.0, 0.1), epsilon = 0.2);
    }
}
