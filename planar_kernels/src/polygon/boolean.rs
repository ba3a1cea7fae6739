use super::{BooleanOp, ContourTree, Polygon};
use crate::{core::math::Vector2, GeomError};
use i_overlay::{
    core::{fill_rule::FillRule, overlay::Overlay, overlay_rule::OverlayRule},
    i_float::int::point::IntPoint,
};

/// Largest magnitude a scaled coordinate may have, beyond this `f64` can no longer represent every
/// integer exactly.
pub const MAX_GRID_COORD: f64 = 9_007_199_254_740_991.0;

/// Largest distance from the center of the inputs, in grid units, the integer overlay accepts.
pub const MAX_OVERLAY_COORD: i64 = (1 << 30) - 1;

/// What to do with coordinates the integer grid cannot hold once scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Clamp coordinates beyond [MAX_GRID_COORD] and coarsen the grid by a power of two when the
    /// inputs reach further than [MAX_OVERLAY_COORD] from their center. Both lose precision and are
    /// logged as warnings.
    #[default]
    Clamp,
    /// Fail the operation with [GeomError::CoordinateOutOfRange] when either limit is exceeded.
    Reject,
}

/// Options for [Polygon::boolean_opt].
#[derive(Debug, Clone)]
pub struct PolygonBooleanOptions {
    /// Scale applied to coordinates before snapping them to the integer grid, the grid spacing in
    /// input units is `1 / scale`.
    pub scale: f64,
    /// Handling of coordinates the grid cannot hold, see [OverflowPolicy].
    pub overflow: OverflowPolicy,
}

impl PolygonBooleanOptions {
    #[inline]
    pub fn new() -> Self {
        Self {
            scale: 1e6,
            overflow: OverflowPolicy::Clamp,
        }
    }
}

impl Default for PolygonBooleanOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl From<BooleanOp> for OverlayRule {
    fn from(op: BooleanOp) -> Self {
        match op {
            BooleanOp::Intersection => OverlayRule::Intersect,
            BooleanOp::Union => OverlayRule::Union,
            BooleanOp::Difference => OverlayRule::Difference,
        }
    }
}

type GridPath = Vec<[i64; 2]>;

/// Snap a single coordinate to the integer grid.
fn to_grid(value: f64, options: &PolygonBooleanOptions) -> Result<i64, GeomError> {
    let scaled = (value * options.scale).round();
    if scaled.is_finite() && scaled.abs() <= MAX_GRID_COORD {
        return Ok(scaled as i64);
    }

    match options.overflow {
        OverflowPolicy::Reject => Err(GeomError::CoordinateOutOfRange {
            value,
            scale: options.scale,
        }),
        OverflowPolicy::Clamp => {
            if value.is_nan() {
                return Err(GeomError::CoordinateOutOfRange {
                    value,
                    scale: options.scale,
                });
            }

            let clamped = scaled.clamp(-MAX_GRID_COORD, MAX_GRID_COORD);
            log::warn!(
                "polygon boolean: coordinate {value} clamped to {} at scale {}",
                clamped / options.scale,
                options.scale
            );
            Ok(clamped as i64)
        }
    }
}

/// Convert the non degenerate contours of `polygon` to grid paths, oriented solids counter
/// clockwise and holes clockwise so the non-zero fill rule subtracts holes.
fn to_grid_paths(
    polygon: &Polygon<f64>,
    options: &PolygonBooleanOptions,
) -> Result<Vec<GridPath>, GeomError> {
    polygon
        .contours
        .iter()
        .filter(|c| !c.is_degenerate())
        .map(|c| {
            c.normalized()
                .vertices
                .iter()
                .map(|v| Ok([to_grid(v.x, options)?, to_grid(v.y, options)?]))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
}

/// Divide by `2^shift` rounding to nearest.
#[inline]
fn shift_round(value: i64, shift: u32) -> i64 {
    if shift == 0 {
        value
    } else {
        (value + (1 << (shift - 1))) >> shift
    }
}

/// Placement of the grid paths in the integer overlay: points are taken relative to `center` and
/// divided by `2^shift`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OverlayFrame {
    center: [i64; 2],
    shift: u32,
}

impl OverlayFrame {
    /// Frame centered on the bounding box of all the paths, the shift is 0 unless the paths reach
    /// further than [MAX_OVERLAY_COORD] from the center.
    fn fit(paths: &[&[GridPath]], options: &PolygonBooleanOptions) -> Result<Self, GeomError> {
        let mut min = [i64::MAX; 2];
        let mut max = [i64::MIN; 2];
        for p in paths.iter().flat_map(|set| set.iter()).flatten() {
            for axis in 0..2 {
                min[axis] = min[axis].min(p[axis]);
                max[axis] = max[axis].max(p[axis]);
            }
        }

        if min[0] > max[0] {
            return Ok(Self {
                center: [0, 0],
                shift: 0,
            });
        }

        let center = [
            min[0] + (max[0] - min[0]) / 2,
            min[1] + (max[1] - min[1]) / 2,
        ];
        // center rounds down so the far side is never closer than the near side
        let axis = if max[0] - center[0] >= max[1] - center[1] {
            0
        } else {
            1
        };
        let reach = max[axis] - center[axis];
        if reach <= MAX_OVERLAY_COORD {
            return Ok(Self { center, shift: 0 });
        }

        if options.overflow == OverflowPolicy::Reject {
            return Err(GeomError::CoordinateOutOfRange {
                value: max[axis] as f64 / options.scale,
                scale: options.scale,
            });
        }

        let mut shift = 1;
        while shift_round(reach, shift) > MAX_OVERLAY_COORD {
            shift += 1;
        }

        log::warn!(
            "polygon boolean: inputs reach {} grid units from their center, grid coarsened {}x \
             at scale {}",
            reach,
            1u64 << shift,
            options.scale
        );

        Ok(Self { center, shift })
    }

    fn to_overlay(&self, paths: &[GridPath]) -> Vec<Vec<IntPoint>> {
        paths
            .iter()
            .map(|path| {
                path.iter()
                    .map(|p| {
                        IntPoint::new(
                            shift_round(p[0] - self.center[0], self.shift) as i32,
                            shift_round(p[1] - self.center[1], self.shift) as i32,
                        )
                    })
                    .collect()
            })
            .collect()
    }

    fn from_overlay(
        &self,
        shapes: Vec<Vec<Vec<IntPoint>>>,
        scale: f64,
    ) -> Vec<Vec<Vec<Vector2<f64>>>> {
        let unit = |value: i32, axis: usize| {
            (((value as i64) << self.shift) + self.center[axis]) as f64 / scale
        };

        shapes
            .into_iter()
            .map(|shape| {
                shape
                    .into_iter()
                    .map(|path| {
                        path.into_iter()
                            .map(|p| Vector2::new(unit(p.x, 0), unit(p.y, 1)))
                            .collect()
                    })
                    .collect()
            })
            .collect()
    }
}

impl Polygon<f64> {
    /// Perform a boolean operation between this polygon and `other` using default options.
    ///
    /// Returns an empty result (and logs an error) if the operation fails, see
    /// [Polygon::boolean_opt] to get the error instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_kernels::core::math::*;
    /// # use planar_kernels::polygon::*;
    /// let a = Polygon::from_solid(vec![
    ///     Vector2::new(0.0, 0.0),
    ///     Vector2::new(4.0, 0.0),
    ///     Vector2::new(4.0, 4.0),
    ///     Vector2::new(0.0, 4.0),
    /// ]);
    /// let b = Polygon::from_solid(vec![
    ///     Vector2::new(2.0, 2.0),
    ///     Vector2::new(6.0, 2.0),
    ///     Vector2::new(6.0, 6.0),
    ///     Vector2::new(2.0, 6.0),
    /// ]);
    /// let union = a.boolean(&b, BooleanOp::Union);
    /// assert_eq!(union.len(), 1);
    /// assert!((union[0].area() - 28.0).abs() < 1e-9);
    /// ```
    pub fn boolean(&self, other: &Polygon<f64>, op: BooleanOp) -> Vec<Polygon<f64>> {
        self.boolean_opt(other, op, &PolygonBooleanOptions::new())
            .unwrap_or_else(|err| {
                log::error!("polygon boolean {op:?} failed: {err}");
                Vec::new()
            })
    }

    /// Perform a boolean operation between this polygon and `other`.
    ///
    /// Coordinates are multiplied by `options.scale` and snapped to an integer grid, then clipped
    /// with the non-zero fill rule in integer arithmetic on that grid. The overlay holds
    /// [MAX_OVERLAY_COORD] grid units either side of the center of both inputs (an extent of about
    /// 2147 units at the default scale of 1e6), wider inputs are handled per `options.overflow`.
    ///
    /// Contour roles in the inputs are taken from their `is_hole` flags (orientation is normalized
    /// first) and degenerate contours are skipped. The clipped contours are nested by containment
    /// into polygons: each solid with its holes forms one polygon, solids found inside holes become
    /// separate polygons.
    ///
    /// Output solids are counter clockwise and holes clockwise.
    pub fn boolean_opt(
        &self,
        other: &Polygon<f64>,
        op: BooleanOp,
        options: &PolygonBooleanOptions,
    ) -> Result<Vec<Polygon<f64>>, GeomError> {
        if !options.scale.is_finite() || options.scale <= 0.0 {
            return Err(GeomError::InvalidScale(options.scale));
        }

        let subject = to_grid_paths(self, options)?;
        let clip = to_grid_paths(other, options)?;

        let shapes = if subject.is_empty() && clip.is_empty() {
            Vec::new()
        } else {
            let frame = OverlayFrame::fit(&[subject.as_slice(), clip.as_slice()], options)?;
            let overlay =
                Overlay::with_contours(&frame.to_overlay(&subject), &frame.to_overlay(&clip));
            let int_shapes = overlay.overlay(op.into(), FillRule::NonZero);
            frame.from_overlay(int_shapes, options.scale)
        };

        log::debug!(
            "polygon boolean {op:?}: {} subject paths, {} clip paths, {} output shapes",
            subject.len(),
            clip.len(),
            shapes.len()
        );

        let tree = ContourTree::from_shapes(shapes);
        Ok(tree.into_polygons())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    fn square(min: f64, max: f64) -> Vec<Vector2<f64>> {
        vec![
            vec2(min, min),
            vec2(max, min),
            vec2(max, max),
            vec2(min, max),
        ]
    }

    #[test]
    fn invalid_scale_rejected() {
        let a = Polygon::from_solid(square(0.0, 1.0));
        for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let options = PolygonBooleanOptions {
                scale,
                ..PolygonBooleanOptions::new()
            };
            let result = a.boolean_opt(&a, BooleanOp::Union, &options);
            assert!(matches!(result, Err(GeomError::InvalidScale(_))));
        }
    }

    #[test]
    fn out_of_range_rejected_when_requested() {
        let a = Polygon::from_solid(square(0.0, 1e12));
        let b = Polygon::from_solid(square(0.0, 1.0));
        let options = PolygonBooleanOptions {
            overflow: OverflowPolicy::Reject,
            ..PolygonBooleanOptions::new()
        };
        let result = a.boolean_opt(&b, BooleanOp::Union, &options);
        assert!(matches!(
            result,
            Err(GeomError::CoordinateOutOfRange { value, .. }) if value == 1e12
        ));

        // default clamps and still produces output
        let clamped = a.boolean_opt(&b, BooleanOp::Intersection, &PolygonBooleanOptions::new());
        assert!(clamped.is_ok());
    }

    #[test]
    fn empty_inputs() {
        let empty = Polygon::new();
        let a = Polygon::from_solid(square(0.0, 1.0));
        assert!(empty.boolean(&empty, BooleanOp::Union).is_empty());
        assert!(empty.boolean(&a, BooleanOp::Intersection).is_empty());
        assert!(a.boolean(&empty, BooleanOp::Intersection).is_empty());
        let diff = a.boolean(&empty, BooleanOp::Difference);
        assert_eq!(diff.len(), 1);
        assert!((diff[0].area() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn shift_round_to_nearest() {
        assert_eq!(shift_round(5, 0), 5);
        assert_eq!(shift_round(5, 1), 3);
        assert_eq!(shift_round(-5, 1), -2);
        assert_eq!(shift_round(7, 2), 2);
        assert_eq!(shift_round(-7, 2), -2);
    }

    #[test]
    fn overlay_frame_centers_inputs() {
        let options = PolygonBooleanOptions::new();
        let subject: Vec<GridPath> = vec![vec![[0, 0], [2000, 0], [2000, 1000]]];
        let clip: Vec<GridPath> = vec![vec![[500, 200], [600, 200], [600, 300]]];
        let frame = OverlayFrame::fit(&[&subject[..], &clip[..]], &options).unwrap();
        assert_eq!(
            frame,
            OverlayFrame {
                center: [1000, 500],
                shift: 0
            }
        );

        let empty: Vec<GridPath> = Vec::new();
        let frame = OverlayFrame::fit(&[&empty[..], &empty[..]], &options).unwrap();
        assert_eq!(frame.shift, 0);
    }

    #[test]
    fn overlay_frame_wide_inputs() {
        let subject: Vec<GridPath> = vec![vec![[0, 0], [3_000_000_000, 0], [3_000_000_000, 10]]];
        let empty: Vec<GridPath> = Vec::new();

        let paths = [&subject[..], &empty[..]];
        let frame = OverlayFrame::fit(&paths, &PolygonBooleanOptions::new()).unwrap();
        assert_eq!(frame.center, [1_500_000_000, 5]);
        assert_eq!(frame.shift, 1);
        let points = frame.to_overlay(&subject);
        assert_eq!(points[0][1], IntPoint::new(750_000_000, -2));

        let reject = PolygonBooleanOptions {
            overflow: OverflowPolicy::Reject,
            ..PolygonBooleanOptions::new()
        };
        let result = OverlayFrame::fit(&paths, &reject);
        assert!(matches!(
            result,
            Err(GeomError::CoordinateOutOfRange { value, .. }) if value == 3000.0
        ));
    }
}
