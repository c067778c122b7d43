#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use hikari::math::{
        spectrum::{BLACK, TURQUOISE, WHITE},
        Spectrum,
    };

    #[test]
    fn ops() {
        let a = Spectrum::new(0.5, 0.25, 1.0);
        let b = Spectrum::new(0.5, 2.0, 0.0);
        assert_eq!(a + b, Spectrum::new(1.0, 2.25, 1.0));
        assert_eq!(a * b, Spectrum::new(0.25, 0.5, 0.0));
        assert_eq!(a * 2.0, Spectrum::new(1.0, 0.5, 2.0));

        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);

        let sum: Spectrum<f32> = vec![a, b, WHITE].into_iter().sum();
        assert_eq!(sum, Spectrum::new(2.0, 3.25, 2.0));
        let empty: Spectrum<f32> = Vec::<Spectrum<f32>>::new().into_iter().sum();
        assert!(empty.is_black());
    }

    #[test]
    fn clamped() {
        let s = Spectrum::new(-1.0f32, 0.5, 3.0);
        assert_eq!(s.clamped(), Spectrum::new(0.0, 0.5, 1.0));
        assert_eq!(TURQUOISE.clamped(), TURQUOISE);
    }

    #[test]
    fn packing() {
        assert_eq!(WHITE.to_packed(), 0xFFFF_FF00);
        assert_eq!(BLACK.to_packed(), 0);
        assert_eq!(Spectrum::new(1.0f32, 0.0, 0.0).to_packed(), 0xFF00_0000);
        assert_eq!(Spectrum::new(0.0f32, 0.0, 1.0).to_packed(), 0x0000_FF00);
        // Out of range values are clamped first
        assert_eq!(Spectrum::new(4.0f32, -1.0, 0.5).to_rgb8(), [255, 0, 127]);
    }

    #[test]
    fn approx() {
        let s = Spectrum::new(0.1f32, 0.2, 0.3);
        assert_abs_diff_eq!(s * 3.0, Spectrum::new(0.3, 0.6, 0.9), epsilon = 1e-6);
    }
}
