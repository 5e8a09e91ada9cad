use super::{vec2, Vector2};
use crate::core::traits::Real;

/// Distance squared between the points `p0` and `p1`.
#[inline]
pub fn dist_squared<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    let d = p0 - p1;
    d.dot(d)
}

/// Returns the midpoint between `p0` and `p1` (arithmetic mean of the two points).
///
/// # Examples
///
/// ```
/// # use epicycles::core::math::*;
/// let m = midpoint(vec2(0.0, 0.0), vec2(0.0, 1.0));
/// assert_eq!(m, vec2(0.0, 0.5));
/// ```
#[inline]
pub fn midpoint<T>(p0: Vector2<T>, p1: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    vec2((p0.x + p1.x) / T::two(), (p0.y + p1.y) / T::two())
}

/// Point at parametric value `t` along the line from `p0` to `p1` (`t = 0` gives `p0`, `t = 1`
/// gives `p1`).
#[inline]
pub fn point_from_parametric<T>(p0: Vector2<T>, p1: Vector2<T>, t: T) -> Vector2<T>
where
    T: Real,
{
    p0 + (p1 - p0).scale(t)
}

/// Fourier integration kernel: rotates `point` by `-angle`.
///
/// Reading `point` as the complex number `x + iy` this is the product `(x + iy) * e^(-i * angle)`,
/// real part `x * cos + y * sin` and imaginary part `y * cos - x * sin`.
///
/// # Examples
///
/// ```
/// # use epicycles::core::math::*;
/// use std::f64::consts::FRAC_PI_2;
/// // i * e^(-i * PI/2) = 1
/// assert!(integrant(vec2(0.0, 1.0), FRAC_PI_2).fuzzy_eq(vec2(1.0, 0.0)));
/// ```
#[inline]
pub fn integrant<T>(point: Vector2<T>, angle: T) -> Vector2<T>
where
    T: Real,
{
    let c = angle.cos();
    let s = angle.sin();
    vec2(point.x * c + point.y * s, point.y * c - point.x * s)
}

/// Projects a window pixel position into drawing space.
///
/// Drawing space spans `[-1, 1]` on both axes with the y axis pointing up, while pixel positions
/// start at the top left corner of the window with y pointing down.
///
/// # Examples
///
/// ```
/// # use epicycles::core::math::*;
/// assert_eq!(screen_to_drawing(0.0, 0.0, 800.0, 600.0), vec2(-1.0, 1.0));
/// assert_eq!(screen_to_drawing(400.0, 300.0, 800.0, 600.0), vec2(0.0, 0.0));
/// assert_eq!(screen_to_drawing(800.0, 600.0, 800.0, 600.0), vec2(1.0, -1.0));
/// ```
#[inline]
pub fn screen_to_drawing<T>(px: T, py: T, width: T, height: T) -> Vector2<T>
where
    T: Real,
{
    vec2(
        px / width * T::two() - T::one(),
        -py / height * T::two() + T::one(),
    )
}

/// Unit circle as a triangle fan: the center followed by `samples` points on the circle.
///
/// Ring point `i` sits at angle `2PI / (samples - 1) * i`, so the last ring point closes the fan
/// on the first one. Renderers scale and translate this fan once per circle instance.
///
/// # Examples
///
/// ```
/// # use epicycles::core::math::*;
/// let fan = circle_fan_vertexes::<f64>(64);
/// assert_eq!(fan.len(), 65);
/// assert_eq!(fan[0], vec2(0.0, 0.0));
/// assert!(fan[1].fuzzy_eq(vec2(1.0, 0.0)));
/// assert!(fan[64].fuzzy_eq(vec2(1.0, 0.0)));
/// ```
pub fn circle_fan_vertexes<T>(samples: usize) -> Vec<Vector2<T>>
where
    T: Real,
{
    let mut result = Vec::with_capacity(samples + 1);
    result.push(Vector2::zero());
    if samples == 0 {
        return result;
    }

    if samples == 1 {
        result.push(vec2(T::one(), T::zero()));
        return result;
    }

    let step = T::tau() / T::from_index(samples - 1);
    for i in 0..samples {
        let angle = step * T::from_index(i);
        result.push(vec2(angle.cos(), angle.sin()));
    }

    result
}
