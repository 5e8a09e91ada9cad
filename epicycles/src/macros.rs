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

/// Macro used for implementing the sketch macros. Used for extracting macro repetition count for
/// reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct a [CurveBuffer](crate::sketch::CurveBuffer) holding the points given as a list of
/// (x, y) tuples.
///
/// The buffer capacity is the number of points given, the minimum point distance check is disabled
/// and every point gets a zero radius.
///
/// # Examples
///
/// ```
/// # use epicycles::sketch_buffer;
/// # use epicycles::sketch::*;
/// let buffer = sketch_buffer![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)];
/// assert_eq!(buffer.count(), 3);
/// assert!(buffer.is_full());
/// assert_eq!(buffer[1], SketchPoint::new(1.0, 0.0, 0.0));
/// ```
#[macro_export]
macro_rules! sketch_buffer {
    ($( $x:expr ),* $(,)?) => {
        {
            use $crate::sketch::*;
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut buffer = CurveBuffer::new(size, 0.0);
            $(
                buffer.append(SketchPoint::new($x.0, $x.1, 0.0));
            )*
            buffer
        }
    };
}

/// Construct a [ClosedSamples](crate::sketch::ClosedSamples) from the points given as a list of
/// (x, y) tuples, closing them with [close_curve](crate::sketch::close_curve).
///
/// Panics if fewer than 3 points are given.
///
/// # Examples
///
/// ```
/// # use epicycles::closed_curve;
/// # use epicycles::core::math::*;
/// let closed = closed_curve![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
/// assert_eq!(closed.len(), 5);
/// assert!(closed.closed_with_midpoint());
/// assert_eq!(closed[4], vec2(0.0, 0.5));
/// ```
#[macro_export]
macro_rules! closed_curve {
    ($( $x:expr ),* $(,)?) => {
        {
            let points = [$($crate::core::math::vec2($x.0, $x.1)),*];
            $crate::sketch::close_curve(&points).expect("at least 3 points are required to close a curve")
        }
    };
}
