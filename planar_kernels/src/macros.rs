/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Macro used for implementing the contour macros. Used for extracting macro repetition count for
/// reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct a solid contour with the vertexes given as a list of (x, y) tuples.
///
/// # Examples
///
/// ```
/// # use planar_kernels::contour;
/// # use planar_kernels::core::math::*;
/// let contour = contour![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0)];
/// assert!(!contour.is_hole);
/// assert_eq!(contour.vertices[1], Vector2::new(2.0, 0.0));
/// ```
#[macro_export]
macro_rules! contour {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut vertices = Vec::with_capacity(size);
            $(
                vertices.push($crate::core::math::Vector2::new($x.0, $x.1));
            )*
            $crate::polygon::Contour::solid(vertices)
        }
    };
}

/// Construct a hole contour with the vertexes given as a list of (x, y) tuples.
///
/// # Examples
///
/// ```
/// # use planar_kernels::hole;
/// let hole = hole![(1.0, 1.0), (1.0, 2.0), (2.0, 2.0)];
/// assert!(hole.is_hole);
/// assert_eq!(hole.len(), 3);
/// ```
#[macro_export]
macro_rules! hole {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut vertices = Vec::with_capacity(size);
            $(
                vertices.push($crate::core::math::Vector2::new($x.0, $x.1));
            )*
            $crate::polygon::Contour::hole(vertices)
        }
    };
}
