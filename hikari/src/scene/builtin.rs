use crate::{
    materials::{
        Material, BRIGHT, DULL, GRAYISH, LIGHT, MIRRORISH, WHITEISH, YELLOWISH,
    },
    math::{
        spectrum::{BLUE, RED},
        vec3,
    },
    shapes::{Cuboid, Rect, Shape, Sphere, Triangle},
};

/// A room with a bunch of stuff in it
pub fn room() -> Vec<Shape> {
    vec![
        Sphere::new(vec3(-4.0, 0.0, -4.0), 1.0, MIRRORISH).into(),
        Sphere::new(vec3(2.5, -2.0, -15.0), 0.75, DULL).into(),
        Sphere::new(vec3(2.5, -2.0, -10.0), 0.75, BRIGHT).into(),
        Sphere::new(vec3(2.5, -2.0, -5.0), 0.75, BRIGHT).into(),
        Sphere::new(vec3(-2.5, -2.0, -2.0), 1.0, BRIGHT).into(),
        // Light bulb
        Sphere::new(vec3(-2.0, 3.75, -3.0), 0.25, LIGHT).into(),
        // Crystal
        Rect::new(
            vec3(1.0, 2.0, -6.0),
            vec3(1.5, 2.5, -6.5),
            vec3(0.5, 2.5, -6.5),
            BRIGHT,
        )
        .into(),
        Rect::new(
            vec3(1.0, 2.0, -6.0),
            vec3(0.5, 2.5, -6.5),
            vec3(1.0, 1.0, -6.0),
            BRIGHT,
        )
        .into(),
        Rect::new(
            vec3(1.0, 2.0, -6.0),
            vec3(1.0, 1.0, -6.0),
            vec3(1.5, 2.5, -6.5),
            BRIGHT,
        )
        .into(),
        Rect::new(
            vec3(1.0, 1.0, -6.0),
            vec3(0.5, 1.5, -6.5),
            vec3(1.5, 1.5, -6.5),
            BRIGHT,
        )
        .into(),
        Rect::new(
            vec3(1.0, 2.0, -7.0),
            vec3(0.5, 1.5, -6.5),
            vec3(1.0, 3.0, -7.0),
            BRIGHT,
        )
        .into(),
        Rect::new(
            vec3(1.0, 2.0, -7.0),
            vec3(1.0, 3.0, -7.0),
            vec3(1.5, 1.5, -6.5),
            BRIGHT,
        )
        .into(),
        Cuboid::axis_aligned(vec3(-1.5, -4.0, -9.0), vec3(-0.25, -3.0, -7.75), WHITEISH).into(),
        // Floor
        Rect::new(
            vec3(-10.0, -4.0, -20.0),
            vec3(-10.0, -4.0, 0.1),
            vec3(10.0, -4.0, -20.0),
            GRAYISH,
        )
        .into(),
        // Walls
        Rect::new(
            vec3(-10.0, -4.0, -20.0),
            vec3(-10.0, 4.0, -20.0),
            vec3(-10.0, -4.0, 0.0),
            YELLOWISH,
        )
        .into(),
        Rect::new(
            vec3(10.0, -4.0, 0.1),
            vec3(10.0, 4.0, 0.1),
            vec3(10.0, -4.0, -20.0),
            YELLOWISH,
        )
        .into(),
        Rect::new(
            vec3(10.0, -4.0, -20.0),
            vec3(10.0, 4.0, -20.0),
            vec3(-10.0, -4.0, -20.0),
            YELLOWISH,
        )
        .into(),
        Rect::new(
            vec3(-10.0, -4.0, 0.1),
            vec3(-10.0, 4.0, 0.1),
            vec3(10.0, -4.0, 0.1),
            YELLOWISH,
        )
        .into(),
        // Ceiling
        Rect::new(
            vec3(-10.0, 4.0, -20.0),
            vec3(10.0, 4.0, -20.0),
            vec3(-10.0, 4.0, 0.1),
            WHITEISH,
        )
        .into(),
        // Mirror on the back wall
        Rect::new(
            vec3(5.0, -3.0, -19.9),
            vec3(5.0, 3.0, -19.9),
            vec3(-5.0, -3.0, -19.9),
            MIRRORISH,
        )
        .into(),
    ]
}

/// Two mirrors facing each other with a light between them
pub fn mirrors() -> Vec<Shape> {
    vec![
        // Left, facing +x
        Rect::new(
            vec3(-3.0, -3.0, -14.0),
            vec3(-3.0, 3.0, -14.0),
            vec3(-3.0, -3.0, -2.0),
            MIRRORISH,
        )
        .into(),
        // Right, facing -x
        Rect::new(
            vec3(3.0, -3.0, -14.0),
            vec3(3.0, -3.0, -2.0),
            vec3(3.0, 3.0, -14.0),
            MIRRORISH,
        )
        .into(),
        // Floor
        Rect::new(
            vec3(-3.0, -3.0, -14.0),
            vec3(-3.0, -3.0, -2.0),
            vec3(3.0, -3.0, -14.0),
            GRAYISH,
        )
        .into(),
        Sphere::new(vec3(0.0, 0.0, -8.0), 0.5, LIGHT).into(),
        Sphere::new(vec3(1.0, -2.25, -6.0), 0.75, BRIGHT).into(),
    ]
}

/// Reflecting spheres over a floor
pub fn spheres() -> Vec<Shape> {
    vec![
        Sphere::new(vec3(-3.0, -1.0, -8.0), 1.0, MIRRORISH).into(),
        Sphere::new(vec3(0.0, -1.0, -10.0), 1.0, Material::new(RED, 0.0)).into(),
        Sphere::new(vec3(3.0, -1.0, -8.0), 1.0, Material::new(BLUE, 0.0)).into(),
        Sphere::new(vec3(0.0, -1.5, -6.0), 0.5, MIRRORISH).into(),
        Sphere::new(vec3(0.0, 3.0, -9.0), 0.5, LIGHT).into(),
        // Backdrop
        Triangle::new(
            vec3(-2.0, -2.0, -14.0),
            vec3(2.0, -2.0, -14.0),
            vec3(0.0, 2.0, -14.0),
            YELLOWISH,
        )
        .into(),
        // Floor
        Rect::new(
            vec3(-20.0, -2.0, -40.0),
            vec3(-20.0, -2.0, 5.0),
            vec3(20.0, -2.0, -40.0),
            WHITEISH,
        )
        .into(),
    ]
}
