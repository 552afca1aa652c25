//! Tests for the geometry builder.

use super::*;
use approx::assert_relative_eq;

fn v(x: f64, y: f64, z: f64) -> Vector3 {
    Vector3::new(x, y, z)
}

fn one_material() -> Vec<Option<String>> {
    vec![Some("Material".to_string())]
}

// =============================================================================
// BASIC SCENARIOS
// =============================================================================

#[test]
fn single_flat_triangle() {
    let face = InputFace::flat(
        vec![v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0)],
        v(0.0, 0.0, 1.0),
        0,
    );
    let model = build_mesh("Tri", &one_material(), &[face]).unwrap();

    assert_eq!(model.vertex_count(), 3);
    assert_eq!(model.submeshes.len(), 1);
    assert_eq!(model.submeshes[0].faces, vec![Face::new(0, 1, 2)]);

    let vertices = model.vertex_buffer.as_slice();
    assert_eq!(vertices[2].position, v(0.0, 0.0, -1.0));
    for vertex in vertices {
        assert_eq!(vertex.normal, v(0.0, 1.0, 0.0));
    }
}

#[test]
fn positions_and_normals_are_swapped() {
    let face = InputFace::smooth(
        vec![v(1.0, 2.0, 3.0), v(4.0, 5.0, 6.0), v(7.0, 8.0, 9.0)],
        vec![v(0.0, 0.0, 1.0), v(0.0, 1.0, 0.0), v(1.0, 0.0, 0.0)],
        0,
    );
    let model = build_mesh("Swap", &one_material(), &[face]).unwrap();
    let vertices = model.vertex_buffer.as_slice();

    assert_eq!(vertices[0].position, v(1.0, 3.0, -2.0));
    assert_eq!(vertices[1].position, v(4.0, 6.0, -5.0));
    assert_eq!(vertices[2].position, v(7.0, 9.0, -8.0));
    assert_eq!(vertices[0].normal, v(0.0, 1.0, -0.0));
    assert_eq!(vertices[1].normal, v(0.0, 0.0, -1.0));
    assert_eq!(vertices[2].normal, v(1.0, 0.0, -0.0));
}

// =============================================================================
// TRIANGULATION
// =============================================================================

#[test]
fn quad_is_fan_split_in_order() {
    let quad = InputFace::flat(
        vec![v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(1.0, 1.0, 0.0), v(0.0, 1.0, 0.0)],
        v(0.0, 0.0, 1.0),
        0,
    );
    let model = build_mesh("Quad", &one_material(), &[quad]).unwrap();

    assert_eq!(model.vertex_count(), 4);
    assert_eq!(
        model.submeshes[0].faces,
        vec![Face::new(0, 1, 2), Face::new(0, 2, 3)]
    );
}

#[test]
fn quad_triangles_stay_adjacent_between_other_faces() {
    let tri = |x: f64| {
        InputFace::flat(
            vec![v(x, 0.0, 0.0), v(x + 1.0, 0.0, 0.0), v(x, 1.0, 0.0)],
            v(0.0, 0.0, 1.0),
            0,
        )
    };
    let quad = InputFace::flat(
        vec![v(10.0, 0.0, 0.0), v(11.0, 0.0, 0.0), v(11.0, 1.0, 0.0), v(10.0, 1.0, 0.0)],
        v(0.0, 0.0, 1.0),
        0,
    );
    let model = build_mesh("Mixed", &one_material(), &[tri(0.0), quad, tri(20.0)]).unwrap();
    let faces = &model.submeshes[0].faces;

    assert_eq!(faces.len(), 4);
    assert_eq!(faces[1], Face::new(3, 4, 5));
    assert_eq!(faces[2], Face::new(3, 5, 6));
    assert_eq!(faces[3], Face::new(7, 8, 9));
}

// =============================================================================
// DEDUPLICATION
// =============================================================================

#[test]
fn smooth_faces_share_corners() {
    let n = v(0.0, 0.0, 1.0);
    let a = InputFace::smooth(
        vec![v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0)],
        vec![n; 3],
        0,
    );
    let b = InputFace::smooth(
        vec![v(1.0, 0.0, 0.0), v(1.0, 1.0, 0.0), v(0.0, 1.0, 0.0)],
        vec![n; 3],
        0,
    );
    let model = build_mesh("Shared", &one_material(), &[a, b]).unwrap();

    assert_eq!(model.vertex_count(), 4);
    assert_eq!(model.submeshes[0].faces[1], Face::new(1, 3, 2));
}

#[test]
fn flat_faces_duplicate_shared_positions() {
    let shared = v(1.0, 0.0, 0.0);
    let a = InputFace::flat(
        vec![v(0.0, 0.0, 0.0), shared, v(0.0, 1.0, 0.0)],
        v(0.0, 0.0, 1.0),
        0,
    );
    let b = InputFace::flat(
        vec![shared, v(2.0, 0.0, 0.0), v(1.0, 0.0, 1.0)],
        v(0.0, -1.0, 0.0),
        0,
    );
    let model = build_mesh("Flat", &one_material(), &[a, b]).unwrap();

    let swapped = axis_swap(shared);
    let matches = model
        .vertex_buffer
        .iter()
        .filter(|vertex| vertex.position == swapped)
        .count();
    assert_eq!(matches, 2);
    assert_eq!(model.vertex_count(), 6);
}

#[test]
fn dedup_spans_submeshes() {
    let materials = vec![Some("A".to_string()), Some("B".to_string())];
    let n = v(0.0, 0.0, 1.0);
    let corners = vec![v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0)];
    let a = InputFace::flat(corners.clone(), n, 0);
    let b = InputFace::flat(corners, n, 1);
    let model = build_mesh("Split", &materials, &[a, b]).unwrap();

    assert_eq!(model.vertex_count(), 3);
    assert_eq!(model.submeshes[0].faces, model.submeshes[1].faces);
}

#[test]
fn flat_face_without_face_normal_uses_geometry() {
    let face = InputFace {
        positions: vec![v(0.0, 0.0, 0.0), v(2.0, 0.0, 0.0), v(0.0, 2.0, 0.0)],
        normals: FaceNormals::PerVertex(vec![v(1.0, 0.0, 0.0); 3]),
        smooth: false,
        material_index: 0,
    };
    let model = build_mesh("Derived", &one_material(), &[face]).unwrap();

    assert_eq!(model.vertex_count(), 3);
    for vertex in model.vertex_buffer.iter() {
        assert_relative_eq!(vertex.normal.y, 1.0);
        assert_relative_eq!(vertex.normal.length(), 1.0);
    }
}

#[test]
fn smooth_face_with_only_face_normal_repeats_it() {
    let face = InputFace {
        positions: vec![v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0)],
        normals: FaceNormals::Face(v(0.0, 0.0, 1.0)),
        smooth: true,
        material_index: 0,
    };
    let model = build_mesh("SmoothFace", &one_material(), &[face]).unwrap();
    assert!(model.vertex_buffer.iter().all(|x| x.normal == v(0.0, 1.0, -0.0)));
}

#[test]
fn polygon_normal_of_quad_uses_diagonals() {
    let n = polygon_normal(&[v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(1.0, 1.0, 0.0), v(0.0, 1.0, 0.0)]);
    assert_relative_eq!(n.z, 1.0);
    assert_eq!(polygon_normal(&[v(0.0, 0.0, 0.0); 3]), Vector3::ZERO);
}

/// A twisted quad: the diagonals give (-1, -1, 2) / sqrt(6) before the swap.
#[test]
fn flat_non_planar_quad_normal_is_exact() {
    let face = InputFace {
        positions: vec![v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(1.0, 1.0, 1.0), v(0.0, 1.0, 0.0)],
        normals: FaceNormals::PerVertex(vec![v(0.0, 0.0, 1.0); 4]),
        smooth: false,
        material_index: 0,
    };
    let model = build_mesh("Twisted", &one_material(), &[face]).unwrap();

    let s = 6.0_f64.sqrt();
    assert_eq!(model.vertex_count(), 4);
    for vertex in model.vertex_buffer.iter() {
        assert_relative_eq!(vertex.normal.x, -1.0 / s, epsilon = 1e-12);
        assert_relative_eq!(vertex.normal.y, 2.0 / s, epsilon = 1e-12);
        assert_relative_eq!(vertex.normal.z, 1.0 / s, epsilon = 1e-12);
    }
}

// =============================================================================
// MATERIAL SLOTS
// =============================================================================

#[test]
fn submeshes_follow_slot_order_and_skip_empty_slots() {
    let materials = vec![Some("First".to_string()), None, Some("Third".to_string())];
    let face = InputFace::flat(
        vec![v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0)],
        v(0.0, 0.0, 1.0),
        2,
    );
    let model = build_mesh("Slots", &materials, &[face]).unwrap();

    let names: Vec<&str> = model.submeshes.iter().map(|s| s.material_name.as_str()).collect();
    assert_eq!(names, vec!["First", "Third"]);
    assert!(model.submeshes[0].faces.is_empty());
    assert_eq!(model.submeshes[1].faces.len(), 1);
}

#[test]
fn unused_materials_still_get_submeshes() {
    let materials = vec![Some("A".to_string()), Some("B".to_string())];
    let model = build_mesh("Empty", &materials, &[]).unwrap();
    assert_eq!(model.submeshes.len(), 2);
    assert_eq!(model.vertex_count(), 0);
}

// =============================================================================
// ERRORS
// =============================================================================

#[test]
fn zero_materials_fail() {
    let err = build_mesh("Bare", &[], &[]).unwrap_err();
    assert!(matches!(err, ExportError::NoMaterialsAssigned { ref mesh } if mesh == "Bare"));
}

#[test]
fn only_empty_slots_fail() {
    let err = build_mesh("Nulls", &[None, None], &[]).unwrap_err();
    assert!(matches!(err, ExportError::NoMaterialsAssigned { .. }));
}

#[test]
fn pentagon_is_rejected() {
    let face = InputFace::flat(vec![v(0.0, 0.0, 0.0); 5], v(0.0, 0.0, 1.0), 0);
    let err = build_mesh("Pent", &one_material(), &[face]).unwrap_err();
    assert!(matches!(err, ExportError::InvalidFaceArity { face: 0, corners: 5 }));
}

#[test]
fn degenerate_face_is_rejected() {
    let face = InputFace::flat(vec![v(0.0, 0.0, 0.0); 2], v(0.0, 0.0, 1.0), 0);
    let err = build_mesh("Line", &one_material(), &[face]).unwrap_err();
    assert!(matches!(err, ExportError::InvalidFaceArity { corners: 2, .. }));
}

#[test]
fn material_index_past_slots_is_rejected() {
    let face = InputFace::flat(
        vec![v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0)],
        v(0.0, 0.0, 1.0),
        1,
    );
    let err = build_mesh("Range", &one_material(), &[face]).unwrap_err();
    assert!(matches!(
        err,
        ExportError::MaterialIndexOutOfRange { face: 0, index: 1, slots: 1 }
    ));
}

#[test]
fn material_index_on_empty_slot_is_rejected() {
    let materials = vec![None, Some("Real".to_string())];
    let face = InputFace::flat(
        vec![v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0)],
        v(0.0, 0.0, 1.0),
        0,
    );
    let err = build_mesh("NullSlot", &materials, &[face]).unwrap_err();
    assert!(matches!(err, ExportError::MaterialIndexOutOfRange { index: 0, .. }));
}

#[test]
fn normal_count_mismatch_is_rejected() {
    let face = InputFace::smooth(
        vec![v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0)],
        vec![v(0.0, 0.0, 1.0); 2],
        0,
    );
    let err = build_mesh("Normals", &one_material(), &[face]).unwrap_err();
    assert!(matches!(
        err,
        ExportError::NormalCountMismatch { corners: 3, normals: 2, .. }
    ));
}

#[test]
fn nan_position_is_rejected() {
    let face = InputFace::flat(
        vec![v(f64::NAN, 0.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0)],
        v(0.0, 0.0, 1.0),
        0,
    );
    let err = build_mesh("Nan", &one_material(), &[face]).unwrap_err();
    assert!(matches!(
        err,
        ExportError::NonFiniteComponent { face: 0, attribute: "position" }
    ));
}

#[test]
fn infinite_normal_is_rejected() {
    let good = InputFace::flat(
        vec![v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0)],
        v(0.0, 0.0, 1.0),
        0,
    );
    let bad = InputFace::smooth(
        good.positions.clone(),
        vec![v(0.0, 0.0, 1.0), v(0.0, f64::INFINITY, 0.0), v(0.0, 0.0, 1.0)],
        0,
    );
    let err = build_mesh("Inf", &one_material(), &[good, bad]).unwrap_err();
    assert!(matches!(
        err,
        ExportError::NonFiniteComponent { face: 1, attribute: "normal" }
    ));
}

#[test]
fn vertex_capacity_is_bounded_by_u32() {
    assert!(check_vertex_capacity(0).is_ok());
    assert!(check_vertex_capacity(MAX_VERTEX_COUNT).is_ok());
    let err = check_vertex_capacity(MAX_VERTEX_COUNT + 1).unwrap_err();
    assert!(matches!(err, ExportError::TooManyVertices { max, .. } if max == u32::MAX as usize));
}

/// The first bad face in input order is reported.
#[test]
fn first_violation_wins() {
    let good = InputFace::flat(
        vec![v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0)],
        v(0.0, 0.0, 1.0),
        0,
    );
    let bad_arity = InputFace::flat(vec![v(0.0, 0.0, 0.0); 6], v(0.0, 0.0, 1.0), 0);
    let mut bad_slot = good.clone();
    bad_slot.material_index = 9;

    let err = build_mesh("Order", &one_material(), &[good, bad_slot, bad_arity]).unwrap_err();
    assert!(matches!(err, ExportError::MaterialIndexOutOfRange { face: 1, .. }));
}
