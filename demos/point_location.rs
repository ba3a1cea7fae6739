use planar_kernels::{
    contour,
    core::math::Vector2,
    hole,
    hull::convex_hull,
    locate::{
        classify_point_in_convex, classify_point_in_polygon, classify_point_in_polygon_opt,
        delta_for_polygon, Classification, ClassifyOptions, FillRule, Region,
    },
    polygon::Polygon,
};

fn main() {
    env_logger::init();
    convex_location();
    polygon_with_hole_location();
    fill_rules();
}

fn print_classification(description: &str, c: &Classification<f64>) {
    println!(
        "  {description}: {:?}, distance {:.3}, delta {:.3}",
        c.region, c.distance, c.delta
    );
}

fn convex_location() {
    println!("Testing point location in a convex hull...");

    let points = vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(10.0, 0.0),
        Vector2::new(10.0, 10.0),
        Vector2::new(0.0, 10.0),
        Vector2::new(3.0, 7.0),
    ];
    let hull = convex_hull(&points);

    // Test cases: (query point, expected region, description)
    let test_cases = [
        (Vector2::new(5.0, 5.0), Region::Inside, "Center"),
        (Vector2::new(5.0, 0.0), Region::Boundary, "Edge midpoint"),
        (Vector2::new(5.0, 10.5), Region::NearBoundary, "Just outside top edge"),
        (Vector2::new(20.0, 5.0), Region::Outside, "Far right"),
    ];

    for (point, expected, description) in test_cases {
        let c = classify_point_in_convex(&hull, point);
        print_classification(description, &c);
        assert_eq!(c.region, expected, "{description}");
    }

    println!("Convex point location tests completed successfully!\n");
}

fn polygon_with_hole_location() {
    println!("Testing point location in a polygon with a hole...");

    let polygon = Polygon::from_contours(vec![
        contour![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)],
        hole![(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0)],
    ]);
    println!("  Near boundary tolerance: {:.3}", delta_for_polygon(&polygon));

    let test_cases = [
        (Vector2::new(2.0, 2.0), Region::Inside, "Between outer and hole"),
        (Vector2::new(5.0, 5.0), Region::Outside, "Inside the hole"),
        (Vector2::new(6.0, 5.0), Region::Boundary, "On the hole edge"),
        (Vector2::new(5.0, 3.9), Region::NearBoundary, "Close to the hole"),
    ];

    for (point, expected, description) in test_cases {
        let c = classify_point_in_polygon(&polygon, point);
        print_classification(description, &c);
        assert_eq!(c.region, expected, "{description}");
    }

    println!("Polygon point location tests completed successfully!\n");
}

fn fill_rules() {
    println!("Testing fill rules with overlapping solids...");

    let polygon = Polygon::from_contours(vec![
        contour![(0.0, 0.0), (6.0, 0.0), (6.0, 6.0), (0.0, 6.0)],
        contour![(3.0, 3.0), (9.0, 3.0), (9.0, 9.0), (3.0, 9.0)],
    ]);
    let overlap = Vector2::new(4.5, 4.5);

    let even_odd = classify_point_in_polygon(&polygon, overlap);
    print_classification("Even-odd, overlap region", &even_odd);
    assert_eq!(even_odd.region, Region::Outside);

    let options = ClassifyOptions {
        fill_rule: FillRule::NonZero,
        ..ClassifyOptions::new()
    };
    let non_zero = classify_point_in_polygon_opt(&polygon, overlap, &options);
    print_classification("Non-zero, overlap region", &non_zero);
    assert_eq!(non_zero.region, Region::Inside);

    println!("Fill rule tests completed successfully!\n");
}
