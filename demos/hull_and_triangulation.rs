use planar_kernels::{
    core::math::Vector2,
    hull::{convex_hull, convex_hull_indices},
    triangulation::{delaunay_triangulation, delaunay_triangulation_opt, DelaunayOptions},
    GeomError,
};

fn main() {
    env_logger::init();
    convex_hulls();
    triangulations();
    triangulation_errors();
}

fn convex_hulls() {
    println!("Testing convex hulls...");

    let points = vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(4.0, 0.0),
        Vector2::new(4.0, 4.0),
        Vector2::new(0.0, 4.0),
        Vector2::new(2.0, 2.0),
        Vector2::new(2.0, 0.0),
    ];

    let indices = convex_hull_indices(&points);
    println!("  Square with centroid and edge midpoint: hull indexes {indices:?}");
    assert_eq!(indices, vec![0, 1, 2, 3]);

    let collinear = vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 1.0),
        Vector2::new(2.0, 2.0),
    ];
    let hull = convex_hull(&collinear);
    println!("  Collinear points: hull {hull:?}");
    assert_eq!(hull.len(), 2);

    println!("Convex hull tests completed successfully!\n");
}

fn triangulations() {
    println!("Testing Delaunay triangulations...");

    let points = vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(2.0, 0.0),
        Vector2::new(2.0, 2.0),
        Vector2::new(0.0, 2.0),
        Vector2::new(1.0, 1.0),
    ];

    match delaunay_triangulation(&points) {
        Ok(triangles) => {
            println!("  Square with center: {} triangles", triangles.len());
            for t in &triangles {
                println!("    {:?}", t.indices());
            }
            assert_eq!(triangles.len(), 4);
        }
        Err(err) => panic!("triangulation failed: {err}"),
    }

    let ring: Vec<_> = (0..12)
        .map(|i| {
            let angle = std::f64::consts::TAU * i as f64 / 12.0;
            Vector2::new(5.0 * angle.cos() + 0.01 * i as f64, 5.0 * angle.sin())
        })
        .collect();
    let options = DelaunayOptions {
        incircle_eps: 1e-12,
        ..DelaunayOptions::new()
    };
    let triangles = delaunay_triangulation_opt(&ring, &options).unwrap_or_default();
    println!("  Perturbed ring of 12 points: {} triangles", triangles.len());

    println!("Delaunay triangulation tests completed successfully!\n");
}

fn triangulation_errors() {
    println!("Testing triangulation input errors...");

    let single = [Vector2::new(1.0, 1.0)];
    let result = delaunay_triangulation(&single);
    println!("  Single point: {result:?}");
    assert!(matches!(
        result,
        Err(GeomError::InsufficientPoints { found: 1, .. })
    ));

    let pair = [Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0)];
    let result = delaunay_triangulation(&pair);
    println!("  Two points: {result:?}");
    assert!(result.is_ok_and(|t| t.is_empty()));

    println!("Triangulation input error tests completed successfully!\n");
}
