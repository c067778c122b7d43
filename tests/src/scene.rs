#[cfg(test)]
mod tests {
    use std::{io::Write, path::Path};

    use hikari::{
        camera::CameraParameters,
        integrators::{GlowParams, IntegratorType},
        math::vec2,
        scene::{try_load_scene, Scene, SceneType},
        settings::Settings,
        shapes::Shape,
    };

    #[test]
    fn builtin_by_name() {
        let (scene, secs) = try_load_scene("mirrors").unwrap();
        assert_eq!(scene.name, "mirrors");
        assert!(!scene.shapes.is_empty());
        assert!(secs >= 0.0);
        assert_eq!(scene.camera, CameraParameters::default());

        let (room, _) = Scene::builtin(SceneType::Room);
        assert!(room.shapes.iter().any(|s| matches!(s, Shape::Cuboid(_))));
    }

    #[test]
    fn unknown_scene() {
        assert!(try_load_scene("cornell").is_err());
    }

    #[test]
    fn yaml_file() {
        let path = std::env::temp_dir().join("hikari_scene_test.yaml");
        {
            let mut file = std::fs::File::create(&path).unwrap();
            file.write_all(
                b"shapes:
  - type: triangle
    vertices:
      - {x: 0.0, y: 0.0, z: -3.0}
      - {x: 1.0, y: 0.0, z: -3.0}
      - {x: 0.0, y: 1.0, z: -3.0}
    material:
      color: {r: 0.2, g: 0.4, b: 0.6}
  - type: box
    corner: {x: 0.0, y: 0.0, z: -8.0}
    edges:
      - {x: 1.0, y: 0.0, z: 0.0}
      - {x: 0.0, y: 1.0, z: 0.0}
      - {x: 0.0, y: 0.0, z: 1.0}
    material:
      color: {r: 1.0, g: 1.0, b: 1.0}
      intensity: 0.5
",
            )
            .unwrap();
        }

        let (scene, _) = try_load_scene(path.to_str().unwrap()).unwrap();
        assert_eq!(scene.name, "hikari_scene_test");
        assert_eq!(scene.shapes.len(), 2);
        assert!(matches!(scene.shapes[0], Shape::Triangle(_)));
        assert!(matches!(scene.shapes[1], Shape::Cuboid(_)));
        assert!(scene.shapes[1].material().is_emissive());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.res, vec2(640, 480));
        assert_eq!(settings.scene, "room");
        assert_eq!(
            settings.integrator,
            IntegratorType::Glow(GlowParams::default())
        );
        assert!(!settings.single_thread);
    }

    #[test]
    fn settings_yaml() {
        let settings: Settings =
            serde_yaml::from_str("scene: spheres\nintegrator: normals\nsingle_thread: true\n")
                .unwrap();
        assert_eq!(settings.scene, "spheres");
        assert_eq!(settings.integrator, IntegratorType::Normals);
        assert!(settings.single_thread);
        assert_eq!(settings.res, Settings::default().res);

        assert!(Settings::load(Path::new("missing_settings.yaml")).is_err());
    }
}
