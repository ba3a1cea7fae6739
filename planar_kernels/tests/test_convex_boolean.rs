mod test_utils;

use planar_kernels::{
    convex::{
        convex_boolean, convex_boolean_opt, suth_hodg_clip, ClipSide, ConvexBooleanOptions,
        DifferenceMethod,
    },
    core::math::Vector2,
    polygon::{
        BooleanOp::{self, *},
        Contour,
    },
};
use test_utils::{
    create_property_set, net_area, property_sets_match, regular_polygon, square,
    ContourProperties, ModifiedPointsSet,
};

fn v(x: f64, y: f64) -> Vector2<f64> {
    Vector2::new(x, y)
}

fn props(
    vertex_count: usize,
    is_hole: bool,
    area: f64,
    extents: [f64; 4],
) -> ContourProperties {
    ContourProperties::new(
        vertex_count,
        is_hole,
        area,
        extents[0],
        extents[1],
        extents[2],
        extents[3],
    )
}

fn assert_props(result: &[Contour<f64>], expected: &[ContourProperties]) {
    let result_set = create_property_set(result);
    assert!(property_sets_match(&result_set, expected));
}

/// Output solids are counter clockwise and holes clockwise.
fn assert_output_orientation(result: &[Contour<f64>]) {
    for c in result {
        if c.is_hole {
            assert!(c.signed_area() < 0.0, "hole is not clockwise: {c:?}");
        } else {
            assert!(c.signed_area() > 0.0, "solid is not counter clockwise: {c:?}");
        }
    }
}

#[test]
fn overlapping_squares() {
    let a = square(0.0, 0.0, 4.0);
    let b = square(2.0, 2.0, 4.0);

    let result = convex_boolean(&a, &b, Intersection);
    assert_props(&result, &[props(4, false, 4.0, [2.0, 2.0, 4.0, 4.0])]);

    let result = convex_boolean(&a, &b, Difference);
    assert_props(&result, &[props(6, false, 12.0, [0.0, 0.0, 4.0, 4.0])]);

    let result = convex_boolean(&b, &a, Difference);
    assert_props(&result, &[props(6, false, 12.0, [2.0, 2.0, 6.0, 6.0])]);

    // union is returned as disjoint pieces: a \ b, b \ a, a ∩ b
    let result = convex_boolean(&a, &b, Union);
    assert_eq!(result.len(), 3);
    assert_props(
        &result,
        &[
            props(6, false, 12.0, [0.0, 0.0, 4.0, 4.0]),
            props(6, false, 12.0, [2.0, 2.0, 6.0, 6.0]),
            props(4, false, 4.0, [2.0, 2.0, 4.0, 4.0]),
        ],
    );
    assert!((net_area(&result) - 28.0).abs() < 1e-9);
    assert_output_orientation(&result);
}

#[test]
fn overlapping_squares_any_orientation_or_start() {
    let a = square(0.0, 0.0, 4.0);
    let b = square(2.0, 2.0, 4.0);
    let cases: [(BooleanOp, f64, usize); 3] =
        [(Intersection, 4.0, 1), (Difference, 12.0, 1), (Union, 28.0, 3)];

    let set = ModifiedPointsSet::new(&a, true, true);
    set.accept_closure(&mut |points, state| {
        for (op, expected_area, expected_count) in cases {
            let result = convex_boolean(&points, &b, op);
            assert_eq!(result.len(), expected_count, "{op:?} {state:?}");
            assert!(
                (net_area(&result) - expected_area).abs() < 1e-9,
                "{op:?} {state:?}"
            );
            assert_output_orientation(&result);
        }
    });
}

#[test]
fn identical() {
    let a = square(0.0, 0.0, 10.0);
    assert_props(
        &convex_boolean(&a, &a, Intersection),
        &[props(4, false, 100.0, [0.0, 0.0, 10.0, 10.0])],
    );
    assert!(convex_boolean(&a, &a, Difference).is_empty());
    assert_props(
        &convex_boolean(&a, &a, Union),
        &[props(4, false, 100.0, [0.0, 0.0, 10.0, 10.0])],
    );
}

#[test]
fn contained() {
    let outer = square(0.0, 0.0, 10.0);
    let inner = square(4.0, 4.0, 2.0);

    let result = convex_boolean(&outer, &inner, Difference);
    assert_props(
        &result,
        &[
            props(4, false, 100.0, [0.0, 0.0, 10.0, 10.0]),
            props(4, true, 4.0, [4.0, 4.0, 6.0, 6.0]),
        ],
    );
    assert_output_orientation(&result);
    assert!((net_area(&result) - 96.0).abs() < 1e-9);

    assert!(convex_boolean(&inner, &outer, Difference).is_empty());

    let result = convex_boolean(&outer, &inner, Union);
    assert!((net_area(&result) - 100.0).abs() < 1e-9);
}

#[test]
fn disjoint() {
    let a = square(0.0, 0.0, 1.0);
    let b = square(5.0, 5.0, 1.0);
    assert!(convex_boolean(&a, &b, Intersection).is_empty());
    assert_props(
        &convex_boolean(&a, &b, Difference),
        &[props(4, false, 1.0, [0.0, 0.0, 1.0, 1.0])],
    );
    assert_props(
        &convex_boolean(&a, &b, Union),
        &[
            props(4, false, 1.0, [0.0, 0.0, 1.0, 1.0]),
            props(4, false, 1.0, [5.0, 5.0, 6.0, 6.0]),
        ],
    );
}

#[test]
fn touching() {
    // shared edge
    let a = square(0.0, 0.0, 2.0);
    let b = square(2.0, 0.0, 2.0);
    assert!(convex_boolean(&a, &b, Intersection).is_empty());
    assert_props(
        &convex_boolean(&a, &b, Difference),
        &[props(4, false, 4.0, [0.0, 0.0, 2.0, 2.0])],
    );

    // shared corner
    let c = square(2.0, 2.0, 2.0);
    assert!(convex_boolean(&a, &c, Intersection).is_empty());
    assert_props(
        &convex_boolean(&a, &c, Difference),
        &[props(4, false, 4.0, [0.0, 0.0, 2.0, 2.0])],
    );
}

#[test]
fn bar_splits_square() {
    let a = square(0.0, 0.0, 10.0);
    let bar = vec![v(-1.0, 4.0), v(11.0, 4.0), v(11.0, 6.0), v(-1.0, 6.0)];
    let result = convex_boolean(&a, &bar, Difference);
    assert_props(
        &result,
        &[
            props(4, false, 40.0, [0.0, 0.0, 10.0, 4.0]),
            props(4, false, 40.0, [0.0, 6.0, 10.0, 10.0]),
        ],
    );
    assert_output_orientation(&result);
}

#[test]
fn notch_cut_into_edge() {
    let a = square(0.0, 0.0, 4.0);
    let b = vec![v(1.0, -1.0), v(3.0, -1.0), v(3.0, 2.0), v(1.0, 2.0)];
    let result = convex_boolean(&a, &b, Difference);
    assert_props(&result, &[props(8, false, 12.0, [0.0, 0.0, 4.0, 4.0])]);
}

#[test]
fn areas_are_consistent() {
    for k in 0..40 {
        let kf = k as f64;
        let a = regular_polygon(v(0.0, 0.0), 3.0, 5 + k % 7);
        let b = regular_polygon(
            v(2.0 * kf.cos(), 1.5 * (1.3 * kf).sin()),
            2.0 + 0.05 * kf,
            3 + k % 5,
        );
        let area_a = Contour::solid(a.clone()).area();
        let area_b = Contour::solid(b.clone()).area();

        let intersection = net_area(&convex_boolean(&a, &b, Intersection));
        let a_minus_b = net_area(&convex_boolean(&a, &b, Difference));
        let b_minus_a = net_area(&convex_boolean(&b, &a, Difference));
        let union = net_area(&convex_boolean(&a, &b, Union));

        let eps = 1e-9;
        assert!((a_minus_b + intersection - area_a).abs() < eps, "case {k}");
        assert!((b_minus_a + intersection - area_b).abs() < eps, "case {k}");
        assert!((union - (area_a + area_b - intersection)).abs() < eps, "case {k}");
    }
}

#[test]
fn degenerate_inputs_give_nothing() {
    let a = square(0.0, 0.0, 4.0);
    let segment = vec![v(0.0, 0.0), v(1.0, 0.0)];
    for op in [Intersection, Union, Difference] {
        assert!(convex_boolean(&a, &segment, op).is_empty());
        assert!(convex_boolean(&segment, &a, op).is_empty());
    }
}

#[test]
fn naive_difference_is_at_most_one_piece() {
    let options = ConvexBooleanOptions {
        difference: DifferenceMethod::Naive,
        ..ConvexBooleanOptions::new()
    };
    let a = square(0.0, 0.0, 4.0);
    let b = square(2.0, 2.0, 4.0);

    // outside of every clip edge at once leaves nothing here
    let result = convex_boolean_opt(&a, &b, Difference, &options);
    assert!(result.is_empty());

    let bar = vec![v(-1.0, 4.0), v(11.0, 4.0), v(11.0, 6.0), v(-1.0, 6.0)];
    let result = convex_boolean_opt(&square(0.0, 0.0, 10.0), &bar, Difference, &options);
    assert!(result.len() <= 1);
    assert!(result.iter().all(|c| !c.is_hole));

    // intersection does not depend on the difference method
    let result = convex_boolean_opt(&a, &b, Intersection, &options);
    assert!((net_area(&result) - 4.0).abs() < 1e-9);
}

#[test]
fn clip_against_triangle() {
    let a = square(0.0, 0.0, 4.0);
    let triangle = vec![v(0.0, 0.0), v(4.0, 0.0), v(0.0, 4.0)];
    let options = ConvexBooleanOptions::new();
    let clipped = suth_hodg_clip(&a, &triangle, ClipSide::Inside, &options);
    assert_eq!(clipped.len(), 3);
    assert!((Contour::solid(clipped).area() - 8.0).abs() < 1e-9);
}
