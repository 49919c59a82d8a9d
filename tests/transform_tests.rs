use cube_viewer::core::UniformTable;
use cube_viewer::math::{look_at, PerspectiveParams};
use cube_viewer::traits::{ProgramHandle, UniformBackend};
use cube_viewer::{Model, Projection, Transformation, View, ViewerError};
use glam::{Mat4, Quat, Vec3, Vec4};

fn backend() -> (UniformTable, ProgramHandle) {
    let mut table = UniformTable::new();
    let program = table.link_program(&["model", "view", "projection"]);
    (table, program)
}

#[cfg(test)]
mod transformation_tests {
    use super::*;

    #[test]
    fn test_update_read_round_trip() {
        let (mut table, program) = backend();
        let slot = table.create_uniform_slot(program, "model").unwrap();
        let mut transformation = Transformation::new(slot, Mat4::IDENTITY);

        let matrices = [
            Mat4::ZERO,
            Mat4::from_translation(Vec3::new(-4.0, 0.5, 9.0)),
            Mat4::from_scale_rotation_translation(
                Vec3::new(2.0, 0.5, 1.0),
                Quat::from_rotation_z(0.7),
                Vec3::ONE,
            ),
            Mat4::from_cols(
                Vec4::new(1.0, -2.0, 3.0, -4.0),
                Vec4::new(5.0, -6.0, 7.0, -8.0),
                Vec4::new(9.0, -10.0, 11.0, -12.0),
                Vec4::new(13.0, -14.0, 15.0, -16.0),
            ),
        ];

        for matrix in matrices {
            transformation.update(matrix);
            assert_eq!(transformation.read(), matrix);
        }
    }

    #[test]
    fn test_staleness_until_push() {
        let (mut table, program) = backend();
        let mut model = Model::new(&mut table, program, "model").unwrap();
        let slot = model.transformation().slot();

        model.set_rotation(1.0, Vec3::Y);
        assert_eq!(table.value(slot), Some(Mat4::IDENTITY));

        model.push(&mut table);
        assert_eq!(table.value(slot), Some(model.matrix()));
    }
}

#[cfg(test)]
mod look_at_tests {
    use super::*;

    #[test]
    fn test_up_parallel_to_direction_fails() {
        let cases = [
            (Vec3::ZERO, Vec3::new(0.0, 10.0, 0.0), Vec3::Y),
            (Vec3::ZERO, Vec3::new(0.0, -10.0, 0.0), Vec3::Y),
            (Vec3::new(1.0, 1.0, 1.0), Vec3::new(2.0, 2.0, 2.0), Vec3::new(3.0, 3.0, 3.0)),
        ];

        for (eye, target, up) in cases {
            let (mut table, program) = backend();
            let result = View::new(&mut table, program, "view", eye, target, up);
            assert!(
                matches!(result, Err(ViewerError::InvalidCameraBasis { .. })),
                "eye {:?} target {:?} up {:?} should be rejected",
                eye,
                target,
                up
            );
        }
    }

    #[test]
    fn test_look_at_is_right_handed() {
        let view = look_at(Vec3::new(3.0, 3.0, 3.0), Vec3::ZERO, Vec3::Y).unwrap();

        // World +Y must stay "up" in camera space
        let up_in_view = view.transform_vector3(Vec3::Y);
        assert!(up_in_view.y > 0.0);

        // Target sits straight ahead on -Z
        let target_in_view = view.transform_point3(Vec3::ZERO);
        assert!(target_in_view.x.abs() < 1e-5);
        assert!(target_in_view.y.abs() < 1e-5);
        assert!((target_in_view.z + 27.0_f32.sqrt()).abs() < 1e-4);
    }
}

#[cfg(test)]
mod projection_tests {
    use super::*;

    #[test]
    fn test_invalid_parameters_rejected() {
        let cases = [
            PerspectiveParams::new(45.0, 0.0, 0.1, 100.0),
            PerspectiveParams::new(45.0, -1.0, 0.1, 100.0),
            PerspectiveParams::new(45.0, 1.0, 0.0, 100.0),
            PerspectiveParams::new(45.0, 1.0, 100.0, 0.1),
            PerspectiveParams::new(45.0, f32::NAN, 0.1, 100.0),
            PerspectiveParams::new(180.0, 1.0, 0.1, 100.0),
        ];

        for params in cases {
            let (mut table, program) = backend();
            let result = Projection::new(&mut table, program, "projection", params);
            assert!(
                matches!(result, Err(ViewerError::InvalidProjectionParameters { .. })),
                "{:?} should be rejected",
                params
            );
        }
    }

    #[test]
    fn test_full_pipeline_places_cube_on_screen() {
        let (mut table, program) = backend();
        let model = Model::new(&mut table, program, "model").unwrap();
        let view = View::new(
            &mut table,
            program,
            "view",
            Vec3::new(3.0, 3.0, 3.0),
            Vec3::ZERO,
            Vec3::Y,
        )
        .unwrap();
        let projection = Projection::new(
            &mut table,
            program,
            "projection",
            PerspectiveParams::new(45.0, 1.0, 0.1, 100.0),
        )
        .unwrap();

        let mvp = projection.matrix() * view.matrix() * model.matrix();

        for x in [-1.0, 1.0] {
            for y in [-1.0, 1.0] {
                for z in [-1.0, 1.0] {
                    let ndc = mvp.project_point3(Vec3::new(x, y, z));
                    assert!(
                        ndc.abs().max_element() <= 1.0,
                        "corner ({}, {}, {}) projected outside clip volume: {:?}",
                        x,
                        y,
                        z,
                        ndc
                    );
                }
            }
        }
    }
}
