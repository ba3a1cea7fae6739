use planar_kernels::{
    core::math::Vector2,
    polygon::BooleanOp,
    scene::{ConvexBooleanScene, PointSet, ScenePhase},
};

fn v(x: f64, y: f64) -> Vector2<f64> {
    Vector2::new(x, y)
}

fn add_square(scene: &mut ConvexBooleanScene, min_x: f64, min_y: f64, size: f64) {
    for p in [
        v(min_x, min_y),
        v(min_x + size, min_y),
        v(min_x + size, min_y + size),
        v(min_x, min_y + size),
    ] {
        assert!(scene.add_point(p).is_some());
    }
}

fn result_area(scene: &ConvexBooleanScene) -> f64 {
    scene
        .result()
        .iter()
        .map(|c| if c.is_hole { -c.area() } else { c.area() })
        .sum()
}

#[test]
fn point_set_edits() {
    let mut set = PointSet::new();
    assert!(set.is_empty());
    assert_eq!(set.add_point(v(0.0, 0.0)), 0);
    assert_eq!(set.add_point(v(1.0, 0.0)), 1);
    assert_eq!(set.add_point(v(2.0, 0.0)), 2);

    assert!(set.move_point(1, v(1.0, 5.0)));
    assert_eq!(set.points()[1], v(1.0, 5.0));

    assert!(set.delete_point(0));
    assert_eq!(set.points(), &[v(1.0, 5.0), v(2.0, 0.0)]);
}

#[test]
fn point_set_invalid_index_is_noop() {
    let mut set = PointSet::new();
    set.add_point(v(0.0, 0.0));
    let before = set.clone();

    assert!(!set.move_point(1, v(9.0, 9.0)));
    assert!(!set.delete_point(1));
    assert!(!set.delete_point(usize::MAX));
    assert_eq!(set, before);
}

#[test]
fn pick_closest_within_radius() {
    let mut set = PointSet::new();
    set.add_point(v(0.0, 0.0));
    set.add_point(v(1.0, 0.0));
    set.add_point(v(1.0, 0.0));

    assert_eq!(set.pick_point_index(v(0.9, 0.0), 0.5), Some(1));
    assert_eq!(set.pick_point_index(v(0.2, 0.0), 0.5), Some(0));
    assert_eq!(set.pick_point_index(v(0.5, 3.0), 0.5), None);
    // boundary of the radius is included
    assert_eq!(set.pick_point_index(v(0.0, 0.5), 0.5), Some(0));
}

#[test]
fn phases_advance_in_order() {
    let mut scene: ConvexBooleanScene = ConvexBooleanScene::new();
    assert_eq!(scene.phase(), ScenePhase::EditingA);

    // finishing early is ignored
    scene.finish();
    assert_eq!(scene.phase(), ScenePhase::EditingA);

    scene.start_b();
    assert_eq!(scene.phase(), ScenePhase::EditingB);
    scene.start_b();
    assert_eq!(scene.phase(), ScenePhase::EditingB);

    scene.finish();
    assert_eq!(scene.phase(), ScenePhase::Done);
    assert_eq!(scene.add_point(v(0.0, 0.0)), None);
    assert!(scene.points_a().is_empty());
    assert!(scene.points_b().is_empty());
}

#[test]
fn hulls_follow_edits() {
    let mut scene: ConvexBooleanScene = ConvexBooleanScene::new();
    add_square(&mut scene, 0.0, 0.0, 4.0);
    let center = scene.add_point(v(2.0, 2.0)).unwrap();
    assert_eq!(scene.hull_a().len(), 4);

    // dragging the center outward makes it a hull vertex
    scene.move_point(center, v(2.0, -2.0));
    assert_eq!(scene.hull_a().len(), 5);

    scene.delete_point(center);
    assert_eq!(scene.hull_a().len(), 4);
    assert!(scene.hull_b().is_empty());
    assert!(scene.result().is_empty());
}

#[test]
fn invalid_edits_are_ignored() {
    let mut scene: ConvexBooleanScene = ConvexBooleanScene::new();
    add_square(&mut scene, 0.0, 0.0, 4.0);
    let hull = scene.hull_a().to_vec();

    scene.move_point(10, v(100.0, 100.0));
    scene.delete_point(10);
    assert_eq!(scene.points_a().len(), 4);
    assert_eq!(scene.hull_a(), hull.as_slice());
    assert_eq!(scene.pick_point_index(v(50.0, 50.0), 1.0), None);
}

#[test]
fn result_only_when_done() {
    let mut scene: ConvexBooleanScene = ConvexBooleanScene::new();
    add_square(&mut scene, 0.0, 0.0, 4.0);
    scene.start_b();
    add_square(&mut scene, 2.0, 2.0, 4.0);
    assert_eq!(scene.hull_b().len(), 4);
    assert!(scene.result().is_empty());

    // edits in phase B never touch set A
    assert_eq!(scene.pick_point_index(v(0.0, 0.0), 0.1), None);
    assert_eq!(scene.pick_point_index(v(6.0, 6.0), 0.1), Some(2));

    scene.finish();
    assert_eq!(scene.op(), BooleanOp::Intersection);
    assert!((result_area(&scene) - 4.0).abs() < 1e-9);

    scene.set_op(BooleanOp::Union);
    assert!((result_area(&scene) - 28.0).abs() < 1e-9);
    assert_eq!(scene.result().len(), 3);

    scene.set_op(BooleanOp::Difference);
    assert!((result_area(&scene) - 12.0).abs() < 1e-9);

    // edits are ignored once done
    scene.move_point(0, v(-10.0, -10.0));
    scene.delete_point(0);
    assert_eq!(scene.points_b().len(), 4);
    assert!((result_area(&scene) - 12.0).abs() < 1e-9);
}

#[test]
fn too_few_points_give_no_result() {
    let mut scene: ConvexBooleanScene = ConvexBooleanScene::new();
    scene.add_point(v(0.0, 0.0));
    scene.add_point(v(1.0, 0.0));
    scene.start_b();
    add_square(&mut scene, 0.0, 0.0, 4.0);
    scene.finish();
    // hull of two points is a segment
    assert_eq!(scene.hull_a().len(), 2);
    assert!(scene.result().is_empty());
}
