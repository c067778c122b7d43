#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use hikari::{
        materials::{DULL, LIGHT},
        math::{vec3, Ray},
        shapes::{Cuboid, Rect, Shape, Sphere, Triangle},
    };

    #[test]
    fn sphere_behind_origin() {
        let s = Sphere::new(vec3(0.0, 0.0, 5.0), 1.0, DULL);
        let ray = Ray::new(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, -1.0));
        assert!(s.intersect(ray).is_none());
    }

    #[test]
    fn sphere_through_center() {
        let center = vec3(0.0, 0.0, -5.0);
        let s = Sphere::new(center, 1.5, DULL);
        let ray = Ray::new(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, -1.0));
        let hit = s.intersect(ray).unwrap();
        assert_abs_diff_eq!(hit.p().len(), 5.0 - 1.5);
        assert_abs_diff_eq!(hit.n, (hit.p() - center).normalized());
        assert_abs_diff_eq!(hit.reflection.d, vec3(0.0, 0.0, 1.0));
        assert_eq!(hit.beta, 0.0);
        assert_eq!(hit.gamma, 0.0);
    }

    #[test]
    fn triangle_barycentrics() {
        let t = Triangle::new(
            vec3(0.0, 0.0, 0.0),
            vec3(1.0, 0.0, 0.0),
            vec3(0.0, 1.0, 0.0),
            DULL,
        );
        let ray = Ray::new(vec3(0.25, 0.25, 1.0), vec3(0.0, 0.0, -1.0));
        let hit = t.intersect(ray).unwrap();
        assert_abs_diff_eq!(hit.p(), vec3(0.25, 0.25, 0.0));
        assert_abs_diff_eq!(hit.p(), ray.point(1.0));
        assert_abs_diff_eq!(hit.beta, 0.25);
        assert_abs_diff_eq!(hit.gamma, 0.25);
        assert_abs_diff_eq!(hit.n, vec3(0.0, 0.0, 1.0));
        assert_abs_diff_eq!(hit.reflection.d, vec3(0.0, 0.0, 1.0));

        // Back face
        let flipped = Ray::new(vec3(0.25, 0.25, -1.0), vec3(0.0, 0.0, 1.0));
        assert!(t.intersect(flipped).is_none());
    }

    #[test]
    fn rect_covers_parallelogram() {
        let r = Rect::new(
            vec3(0.0, 0.0, 0.0),
            vec3(2.0, 0.0, 0.0),
            vec3(0.0, 2.0, 0.0),
            DULL,
        );
        // Would be outside the triangle with the same vertices
        let ray = Ray::new(vec3(1.5, 1.5, 1.0), vec3(0.0, 0.0, -1.0));
        let hit = r.intersect(ray).unwrap();
        assert_abs_diff_eq!(hit.beta, 0.75);
        assert_abs_diff_eq!(hit.gamma, 0.75);

        let outside = Ray::new(vec3(2.5, 1.0, 1.0), vec3(0.0, 0.0, -1.0));
        assert!(r.intersect(outside).is_none());
    }

    #[test]
    fn cuboid_nearest_face() {
        let c = Cuboid::axis_aligned(vec3(-1.0, -1.0, -6.0), vec3(1.0, 1.0, -4.0), DULL);
        let ray = Ray::new(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, -1.0));
        let hit = c.intersect(ray).unwrap();
        assert_abs_diff_eq!(hit.p(), vec3(0.0, 0.0, -4.0));
        assert_abs_diff_eq!(hit.n, vec3(0.0, 0.0, 1.0));

        // Every face points away from the center
        let center = vec3(0.0, 0.0, -5.0);
        for face in c.faces() {
            assert!(face.normal().dot(face.center() - center) > 0.0);
        }
    }

    #[test]
    fn shape_dispatch() {
        let shapes: Vec<Shape> = vec![
            Sphere::new(vec3(0.0, 0.0, -5.0), 1.0, LIGHT).into(),
            Triangle::new(
                vec3(0.0, 0.0, -3.0),
                vec3(1.0, 0.0, -3.0),
                vec3(0.0, 1.0, -3.0),
                DULL,
            )
            .into(),
        ];
        assert!(shapes[0].material().is_emissive());
        assert!(!shapes[1].material().is_emissive());

        let ray = Ray::new(vec3(0.0, 2.0, 0.0), vec3(0.0, 0.0, -1.0));
        assert!(shapes[0].intersect(ray).is_none());
        assert_abs_diff_eq!(shapes[0].shortest_distance(ray), 2.0);
    }
}
