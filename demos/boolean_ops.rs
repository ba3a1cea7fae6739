use planar_kernels::{
    contour,
    convex::{convex_boolean, convex_boolean_opt, ConvexBooleanOptions, DifferenceMethod},
    core::{math::Vector2, traits::FuzzyEq},
    hole,
    polygon::{BooleanOp, Contour, OverflowPolicy, Polygon, PolygonBooleanOptions},
    scene::{ConvexBooleanScene, ScenePhase},
};

fn main() {
    env_logger::init();
    polygon_operations();
    polygons_with_holes();
    convex_operations();
    scene_workflow();
    special_cases();
}

fn net_area(contours: &[Contour<f64>]) -> f64 {
    contours
        .iter()
        .map(|c| if c.is_hole { -c.area() } else { c.area() })
        .sum()
}

fn print_polygons(description: &str, polygons: &[Polygon<f64>]) {
    println!("  {description}: {} polygon(s)", polygons.len());
    for (i, polygon) in polygons.iter().enumerate() {
        println!(
            "    polygon {i}: {} solid(s), {} hole(s), area {:.3}",
            polygon.solids().count(),
            polygon.holes().count(),
            polygon.area()
        );
    }
}

fn polygon_operations() {
    println!("Testing polygon boolean operations...");

    let a = Polygon::from_contours(vec![contour![
        (0.0, 0.0),
        (4.0, 0.0),
        (4.0, 4.0),
        (0.0, 4.0)
    ]]);
    let b = Polygon::from_contours(vec![contour![
        (2.0, 2.0),
        (6.0, 2.0),
        (6.0, 6.0),
        (2.0, 6.0)
    ]]);

    // Test cases: (operation, expected total area)
    let test_cases = [
        (BooleanOp::Intersection, 4.0),
        (BooleanOp::Union, 28.0),
        (BooleanOp::Difference, 12.0),
    ];

    for (op, expected_area) in test_cases {
        let result = a.boolean(&b, op);
        print_polygons(&format!("{op:?}"), &result);
        let area: f64 = result.iter().map(|p| p.area()).sum();
        assert!(area.fuzzy_eq(expected_area), "{op:?} area {area}");
    }

    println!("Polygon boolean operation tests completed successfully!\n");
}

fn polygons_with_holes() {
    println!("Testing polygons with holes...");

    let ring = Polygon::from_contours(vec![
        contour![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)],
        hole![(2.0, 2.0), (8.0, 2.0), (8.0, 8.0), (2.0, 8.0)],
    ]);
    let island = Polygon::from_contours(vec![contour![
        (4.0, 4.0),
        (6.0, 4.0),
        (6.0, 6.0),
        (4.0, 6.0)
    ]]);

    // island inside the hole stays a separate polygon
    let result = ring.boolean(&island, BooleanOp::Union);
    print_polygons("Ring union island", &result);
    assert_eq!(result.len(), 2);

    // cutting through the ring leaves a single U shape
    let cut = Polygon::from_contours(vec![contour![
        (4.0, -1.0),
        (6.0, -1.0),
        (6.0, 5.0),
        (4.0, 5.0)
    ]]);
    let result = ring.boolean(&cut, BooleanOp::Difference);
    print_polygons("Ring minus cut", &result);
    assert_eq!(result.len(), 1);
    assert!(result[0].holes().next().is_none());

    println!("Polygons with holes tests completed successfully!\n");
}

fn convex_operations() {
    println!("Testing convex boolean operations...");

    let a = vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(4.0, 0.0),
        Vector2::new(4.0, 4.0),
        Vector2::new(0.0, 4.0),
    ];
    let b = vec![
        Vector2::new(2.0, 2.0),
        Vector2::new(6.0, 2.0),
        Vector2::new(6.0, 6.0),
        Vector2::new(2.0, 6.0),
    ];

    for op in [
        BooleanOp::Intersection,
        BooleanOp::Union,
        BooleanOp::Difference,
    ] {
        let result = convex_boolean(&a, &b, op);
        println!(
            "  {op:?}: {} contour(s), net area {:.3}",
            result.len(),
            net_area(&result)
        );
    }

    // hole producing difference
    let inner = vec![
        Vector2::new(1.0, 1.0),
        Vector2::new(3.0, 1.0),
        Vector2::new(3.0, 3.0),
        Vector2::new(1.0, 3.0),
    ];
    let result = convex_boolean(&a, &inner, BooleanOp::Difference);
    println!(
        "  Contained difference: {} contour(s), hole: {}",
        result.len(),
        result.iter().any(|c| c.is_hole)
    );
    assert!(net_area(&result).fuzzy_eq(12.0));

    let naive = ConvexBooleanOptions {
        difference: DifferenceMethod::Naive,
        ..ConvexBooleanOptions::new()
    };
    let result = convex_boolean_opt(&a, &inner, BooleanOp::Difference, &naive);
    println!("  Naive contained difference: {} contour(s)", result.len());

    println!("Convex boolean operation tests completed successfully!\n");
}

fn scene_workflow() {
    println!("Testing the convex boolean scene...");

    let mut scene: ConvexBooleanScene = ConvexBooleanScene::new();
    for (x, y) in [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (2.0, 1.0)] {
        scene.add_point(Vector2::new(x, y));
    }
    println!("  Hull A has {} vertexes", scene.hull_a().len());

    scene.start_b();
    for (x, y) in [(2.0, 2.0), (6.0, 2.0), (6.0, 6.0), (2.0, 6.0)] {
        scene.add_point(Vector2::new(x, y));
    }

    // drag a point then put it back
    if let Some(i) = scene.pick_point_index(Vector2::new(6.1, 6.1), 0.5) {
        scene.move_point(i, Vector2::new(7.0, 7.0));
        scene.move_point(i, Vector2::new(6.0, 6.0));
    }

    scene.finish();
    assert_eq!(scene.phase(), ScenePhase::Done);
    for op in [
        BooleanOp::Intersection,
        BooleanOp::Union,
        BooleanOp::Difference,
    ] {
        scene.set_op(op);
        println!(
            "  {op:?}: {} contour(s), net area {:.3}",
            scene.result().len(),
            net_area(scene.result())
        );
    }

    println!("Scene tests completed successfully!\n");
}

fn special_cases() {
    println!("Testing special cases...");

    let big = Polygon::from_contours(vec![contour![
        (0.0, 0.0),
        (1e13, 0.0),
        (1e13, 1e13),
        (0.0, 1e13)
    ]]);
    let small = Polygon::from_contours(vec![contour![
        (0.0, 0.0),
        (1.0, 0.0),
        (1.0, 1.0),
        (0.0, 1.0)
    ]]);

    let reject = PolygonBooleanOptions {
        overflow: OverflowPolicy::Reject,
        ..PolygonBooleanOptions::new()
    };
    match big.boolean_opt(&small, BooleanOp::Union, &reject) {
        Ok(result) => println!("  Unexpected success with {} polygon(s)", result.len()),
        Err(err) => println!("  Out of range coordinates rejected: {err}"),
    }

    // coarser grid keeps the large coordinates in range
    let coarse = PolygonBooleanOptions {
        scale: 1e-4,
        overflow: OverflowPolicy::Reject,
    };
    let result = big.boolean_opt(&small, BooleanOp::Intersection, &coarse);
    println!("  Coarse grid intersection ok: {}", result.is_ok());

    let empty = Polygon::new();
    let result = empty.boolean(&small, BooleanOp::Union);
    print_polygons("Empty union square", &result);

    println!("Special case tests completed successfully!\n");
}
