//! Editing model for interactively building two point sets and viewing the boolean result of
//! their convex hulls.
//!
//! The model holds no rendering or input state. Callers translate user actions into the point
//! editing calls, every edit recomputes the hulls (and the boolean result once editing is done).
use crate::{
    convex::{convex_boolean_opt, ConvexBooleanOptions},
    core::{
        math::{dist_squared, Vector2},
        traits::Real,
    },
    hull::convex_hull,
    polygon::{BooleanOp, Contour},
};

/// Editable list of points.
///
/// Edits addressing an index that does not exist are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet<T = f64> {
    points: Vec<Vector2<T>>,
}

impl<T> PointSet<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        PointSet { points: Vec::new() }
    }

    #[inline]
    pub fn points(&self) -> &[Vector2<T>] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a point, returning its index.
    pub fn add_point(&mut self, point: Vector2<T>) -> usize {
        self.points.push(point);
        self.points.len() - 1
    }

    /// Move the point at `index`, returns false (and does nothing) if `index` is out of range.
    pub fn move_point(&mut self, index: usize, point: Vector2<T>) -> bool {
        match self.points.get_mut(index) {
            Some(p) => {
                *p = point;
                true
            }
            None => false,
        }
    }

    /// Remove the point at `index`, returns false (and does nothing) if `index` is out of range.
    pub fn delete_point(&mut self, index: usize) -> bool {
        if index < self.points.len() {
            self.points.remove(index);
            true
        } else {
            false
        }
    }

    /// Index of the point closest to `point` within `radius`, ties resolve to the lowest index.
    pub fn pick_point_index(&self, point: Vector2<T>, radius: T) -> Option<usize> {
        let radius_sq = radius * radius;
        let mut best: Option<(usize, T)> = None;
        for (i, &p) in self.points.iter().enumerate() {
            let d = dist_squared(p, point);
            if d <= radius_sq && best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((i, d));
            }
        }

        best.map(|(i, _)| i)
    }
}

/// Editing phase of a [ConvexBooleanScene].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScenePhase {
    /// Points edit the first set.
    #[default]
    EditingA,
    /// Points edit the second set.
    EditingB,
    /// Editing finished, the boolean result is available.
    Done,
}

/// Two point sets edited in turn, their convex hulls and the boolean result between the hulls.
#[derive(Debug, Clone)]
pub struct ConvexBooleanScene<T = f64>
where
    T: Real,
{
    phase: ScenePhase,
    op: BooleanOp,
    points_a: PointSet<T>,
    points_b: PointSet<T>,
    hull_a: Vec<Vector2<T>>,
    hull_b: Vec<Vector2<T>>,
    result: Vec<Contour<T>>,
    options: ConvexBooleanOptions<T>,
}

impl<T> ConvexBooleanScene<T>
where
    T: Real,
{
    pub fn new() -> Self {
        Self::with_options(ConvexBooleanOptions::new())
    }

    pub fn with_options(options: ConvexBooleanOptions<T>) -> Self {
        ConvexBooleanScene {
            phase: ScenePhase::EditingA,
            op: BooleanOp::Intersection,
            points_a: PointSet::new(),
            points_b: PointSet::new(),
            hull_a: Vec::new(),
            hull_b: Vec::new(),
            result: Vec::new(),
            options,
        }
    }

    #[inline]
    pub fn phase(&self) -> ScenePhase {
        self.phase
    }

    #[inline]
    pub fn op(&self) -> BooleanOp {
        self.op
    }

    #[inline]
    pub fn points_a(&self) -> &PointSet<T> {
        &self.points_a
    }

    #[inline]
    pub fn points_b(&self) -> &PointSet<T> {
        &self.points_b
    }

    #[inline]
    pub fn hull_a(&self) -> &[Vector2<T>] {
        &self.hull_a
    }

    #[inline]
    pub fn hull_b(&self) -> &[Vector2<T>] {
        &self.hull_b
    }

    /// Boolean result between the two hulls, empty until [ConvexBooleanScene::finish] is called.
    #[inline]
    pub fn result(&self) -> &[Contour<T>] {
        &self.result
    }

    fn active_points_mut(&mut self) -> Option<&mut PointSet<T>> {
        match self.phase {
            ScenePhase::EditingA => Some(&mut self.points_a),
            ScenePhase::EditingB => Some(&mut self.points_b),
            ScenePhase::Done => None,
        }
    }

    fn active_points(&self) -> Option<&PointSet<T>> {
        match self.phase {
            ScenePhase::EditingA => Some(&self.points_a),
            ScenePhase::EditingB => Some(&self.points_b),
            ScenePhase::Done => None,
        }
    }

    /// Switch from editing the first set to editing the second, ignored in any other phase.
    pub fn start_b(&mut self) {
        if self.phase == ScenePhase::EditingA {
            self.phase = ScenePhase::EditingB;
            self.recompute();
        }
    }

    /// Finish editing and compute the boolean result, ignored unless editing the second set.
    pub fn finish(&mut self) {
        if self.phase == ScenePhase::EditingB {
            self.phase = ScenePhase::Done;
            self.recompute();
        }
    }

    /// Add a point to the set being edited, returns its index or `None` once editing is done.
    pub fn add_point(&mut self, point: Vector2<T>) -> Option<usize> {
        let index = self.active_points_mut()?.add_point(point);
        self.recompute();
        Some(index)
    }

    /// See [PointSet::pick_point_index], searches the set being edited.
    pub fn pick_point_index(&self, point: Vector2<T>, radius: T) -> Option<usize> {
        self.active_points()?.pick_point_index(point, radius)
    }

    /// Move a point of the set being edited, invalid indexes are ignored.
    pub fn move_point(&mut self, index: usize, point: Vector2<T>) {
        let moved = self
            .active_points_mut()
            .map_or(false, |points| points.move_point(index, point));
        if moved {
            self.recompute();
        }
    }

    /// Delete a point of the set being edited, invalid indexes are ignored.
    pub fn delete_point(&mut self, index: usize) {
        let deleted = self
            .active_points_mut()
            .map_or(false, |points| points.delete_point(index));
        if deleted {
            self.recompute();
        }
    }

    /// Change the boolean operation, the result is recomputed if editing is done.
    pub fn set_op(&mut self, op: BooleanOp) {
        self.op = op;
        if self.phase == ScenePhase::Done {
            self.recompute();
        }
    }

    /// Recompute both hulls and (once done) the boolean result from scratch.
    pub fn recompute(&mut self) {
        self.hull_a = convex_hull(self.points_a.points());
        self.hull_b = convex_hull(self.points_b.points());

        self.result = if self.phase == ScenePhase::Done
            && !self.hull_a.is_empty()
            && !self.hull_b.is_empty()
        {
            convex_boolean_opt(&self.hull_a, &self.hull_b, self.op, &self.options)
        } else {
            Vec::new()
        };
    }
}

impl<T> Default for ConvexBooleanScene<T>
where
    T: Real,
{
    fn default() -> Self {
        Self::new()
    }
}
