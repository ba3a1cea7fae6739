use planar_kernels::core::math::{
    point_on_segment, point_seg_distance, point_segment_relation, seg_seg_intr,
    segment_intersection, PointSegmentRelation, SegSegIntr, Vector2,
};

const EPS: f64 = 1e-9;

fn main() {
    env_logger::init();
    point_segment_relations();
    segment_intersections();
    degenerate_segments();
}

fn point_segment_relations() {
    println!("Testing point to segment relations...");

    let p0 = Vector2::new(0.0, 0.0);
    let p1 = Vector2::new(10.0, 0.0);

    // Test cases: (point, expected relation, description)
    let test_cases = [
        (Vector2::new(5.0, 0.0), PointSegmentRelation::OnSegment, "Midpoint"),
        (Vector2::new(0.0, 0.0), PointSegmentRelation::OnSegment, "Start point"),
        (Vector2::new(5.0, 3.0), PointSegmentRelation::Left, "Above"),
        (Vector2::new(5.0, -3.0), PointSegmentRelation::Right, "Below"),
        (Vector2::new(15.0, 0.0), PointSegmentRelation::Collinear, "Beyond end"),
    ];

    for (point, expected, description) in test_cases {
        let relation = point_segment_relation(p0, p1, point, EPS);
        println!(
            "  {description}: {relation:?} (sign {}), distance {:.3}",
            relation.sign(),
            point_seg_distance(p0, p1, point)
        );
        assert_eq!(relation, expected, "{description}");
    }

    // Tolerance widens the segment
    let near = Vector2::new(5.0, 1e-4);
    assert!(!point_on_segment(p0, p1, near, EPS));
    assert!(point_on_segment(p0, p1, near, 1e-3));
    println!("  Point 1e-4 off the segment is on it with eps 1e-3");

    println!("Point to segment relation tests completed successfully!\n");
}

fn segment_intersections() {
    println!("Testing segment intersections...");

    // Test cases: (segment1, segment2, description)
    let test_cases = [
        (
            (Vector2::new(0.0, 0.0), Vector2::new(2.0, 2.0)),
            (Vector2::new(0.0, 2.0), Vector2::new(2.0, 0.0)),
            "Crossing diagonals",
        ),
        (
            (Vector2::new(0.0, 0.0), Vector2::new(10.0, 0.0)),
            (Vector2::new(0.0, 5.0), Vector2::new(10.0, 5.0)),
            "Parallel lines",
        ),
        (
            (Vector2::new(0.0, 0.0), Vector2::new(4.0, 0.0)),
            (Vector2::new(2.0, 0.0), Vector2::new(6.0, 0.0)),
            "Collinear overlap",
        ),
        (
            (Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0)),
            (Vector2::new(1.0, -1.0), Vector2::new(1.0, 1.0)),
            "Touching at end point",
        ),
    ];

    for ((a, b), (c, d), description) in test_cases {
        match seg_seg_intr(a, b, c, d, EPS) {
            SegSegIntr::NoIntersect => println!("  {description}: no intersection"),
            SegSegIntr::Crossing {
                point,
                seg1_t,
                seg2_t,
            } => println!(
                "  {description}: crossing at ({:.3}, {:.3}), t1 = {seg1_t:.3}, t2 = {seg2_t:.3}",
                point.x, point.y
            ),
            SegSegIntr::Collinear { point } => println!(
                "  {description}: collinear, representative point ({:.3}, {:.3})",
                point.x, point.y
            ),
        }
    }

    let crossing = segment_intersection(
        Vector2::new(0.0, 0.0),
        Vector2::new(2.0, 2.0),
        Vector2::new(0.0, 2.0),
        Vector2::new(2.0, 0.0),
        EPS,
    );
    assert!(
        crossing.is_some_and(|p| p.fuzzy_eq(Vector2::new(1.0, 1.0))),
        "Diagonals should cross at (1, 1)"
    );

    println!("Segment intersection tests completed successfully!\n");
}

fn degenerate_segments() {
    println!("Testing degenerate segments...");

    let point = Vector2::new(1.0, 0.0);
    let result = segment_intersection(
        point,
        point,
        Vector2::new(0.0, 0.0),
        Vector2::new(2.0, 0.0),
        EPS,
    );
    println!("  Point on segment: {result:?}");
    assert!(result.is_some());

    let result = segment_intersection(point, point, point + Vector2::new(0.0, 1.0), point, EPS);
    println!("  Point at segment end: {result:?}");
    assert!(result.is_some());

    println!("Degenerate segment tests completed successfully!\n");
}
