use planar_kernels::core::math::Vector2;

/// Cycles all the vertex index positions forward by `n`. E.g. index 0 becomes 1, last index becomes
/// 0, etc.
pub fn cycle_start_index_forward(input: &[Vector2<f64>], n: usize) -> Vec<Vector2<f64>> {
    assert!(n > 0, "cycling forward by 0 just returns the same points");
    assert!(
        n < input.len(),
        "cycling forward by more than the point count is unnecessary"
    );
    input.iter().cycle().skip(n).take(input.len()).copied().collect()
}

/// Translate every point by `(dx, dy)`.
pub fn translated(input: &[Vector2<f64>], dx: f64, dy: f64) -> Vec<Vector2<f64>> {
    input
        .iter()
        .map(|p| Vector2::new(p.x + dx, p.y + dy))
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub struct ModifiedPointsState {
    pub inverted_direction: bool,
    pub cycle_position: usize,
}

impl ModifiedPointsState {
    pub fn new(inverted_direction: bool, cycle_position: usize) -> Self {
        Self {
            inverted_direction,
            cycle_position,
        }
    }
}

/// Visits a closed point sequence along with its reversed and start index cycled variations.
#[derive(Debug, Clone)]
pub struct ModifiedPointsSet<'a> {
    pub input: &'a [Vector2<f64>],
    pub invert_direction: bool,
    pub cycle_index_positions: bool,
}

impl<'a> ModifiedPointsSet<'a> {
    pub fn new(
        input: &'a [Vector2<f64>],
        invert_direction: bool,
        cycle_index_positions: bool,
    ) -> Self {
        Self {
            input,
            invert_direction,
            cycle_index_positions,
        }
    }

    pub fn accept_closure<F>(&self, visitor: &mut F)
    where
        F: FnMut(Vec<Vector2<f64>>, ModifiedPointsState),
    {
        let inverted = || {
            let mut points = self.input.to_vec();
            points.reverse();
            points
        };

        visitor(self.input.to_vec(), ModifiedPointsState::new(false, 0));
        if self.invert_direction {
            visitor(inverted(), ModifiedPointsState::new(true, 0));
        }

        if self.cycle_index_positions {
            for i in 1..self.input.len() {
                let cycled = cycle_start_index_forward(self.input, i);
                visitor(cycled, ModifiedPointsState::new(false, i));
            }

            if self.invert_direction {
                let inverted = inverted();
                for i in 1..inverted.len() {
                    let cycled = cycle_start_index_forward(&inverted, i);
                    visitor(cycled, ModifiedPointsState::new(true, i));
                }
            }
        }
    }
}

/// Deterministic scattered points along a golden angle (sunflower) spiral, no three points are
/// collinear and no four are cocircular for small counts.
pub fn spiral_points(count: usize) -> Vec<Vector2<f64>> {
    const GOLDEN_ANGLE: f64 = 2.399963229728653;
    (0..count)
        .map(|i| {
            let r = ((i + 1) as f64).sqrt();
            let angle = i as f64 * GOLDEN_ANGLE;
            Vector2::new(r * angle.cos(), r * angle.sin())
        })
        .collect()
}

/// Regular `size x size` grid of points with unit spacing, row major.
pub fn grid_points(size: usize) -> Vec<Vector2<f64>> {
    (0..size * size)
        .map(|i| Vector2::new((i % size) as f64, (i / size) as f64))
        .collect()
}
