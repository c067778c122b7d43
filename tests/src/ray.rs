#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use std::panic;

    use hikari::math::{vec3, Ray};

    #[test]
    fn new() {
        let o = vec3(1.0, 2.0, 3.0);
        let d = vec3(4.0, 5.0, 6.0);
        let r = Ray::new(o, d);
        assert_eq!(r.o, o);
        assert_eq!(r.d, d);

        // Zero direction is a precondition violation
        let result = panic::catch_unwind(|| Ray::new(o, vec3(0.0, 0.0, 0.0)));
        assert!(result.is_err());
    }

    #[test]
    fn has_nans() {
        let mut r = Ray::new(vec3(0.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0));
        assert!(!r.has_nans());
        r.o[0] = f32::NAN;
        assert!(r.has_nans());
        r.o[0] = 0.0;
        r.d[2] = f32::NAN;
        assert!(r.has_nans());
    }

    #[test]
    fn point() {
        let o = vec3(1.0, 2.0, 3.0);
        let d = vec3(4.0, 5.0, 6.0);
        let r = Ray::new(o, d);
        assert_eq!(r.point(0.0), o);
        assert_eq!(r.point(1.0), o + d);
        assert_eq!(r.point(2.0), o + d * 2.0);
    }

    #[test]
    fn approx() {
        let r = Ray::new(vec3(1.0f32, 2.0, 3.0), vec3(0.0, 0.0, 1.0));
        let s = Ray::new(vec3(1.0f32, 2.0, 3.0 + f32::EPSILON), vec3(0.0, 0.0, 1.0));
        assert_abs_diff_eq!(r, s, epsilon = 1e-5);
    }
}
