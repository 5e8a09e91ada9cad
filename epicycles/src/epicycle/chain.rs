use crate::{
    core::{math::Vector2, traits::Real},
    fourier::CoefficientSet,
};
use static_aabb2d_index::AABB;

/// One rotating link of the epicycle chain at a given time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EpicycleLink<T = f64> {
    /// Frequency of the coefficient driving this link.
    pub frequency: i32,
    /// Circle center, the tip of the previous link (or the chain origin for the first link).
    pub center: Vector2<T>,
    /// Circle radius, magnitude of the coefficient.
    pub radius: T,
    /// End of the rotated coefficient vector, `center + c_n * e^(i * n * t)`.
    pub tip: Vector2<T>,
}

/// Epicycle chain state for a single point in time.
///
/// The origin is the non rotating offset (zero frequency) term, each link is centered on the tip of
/// the link before it and the tip of the final link is the reconstructed curve point.
#[derive(Debug, Clone, PartialEq)]
pub struct EpicycleChain<T = f64> {
    /// Time the chain was composed for.
    pub time: T,
    /// Offset term position, where the first link is centered.
    pub origin: Vector2<T>,
    /// Rotating links in visiting order (`2 * degree` of them).
    pub links: Vec<EpicycleLink<T>>,
}

/// Compose the epicycle chain for `coefficients` at time `t`.
///
/// This is a pure function of its inputs, composing twice for the same `t` gives identical chains
/// and no state is carried from one frame to the next. Since all frequencies are integers the chain
/// is periodic in `t` with period `2PI`.
///
/// # Examples
///
/// ```
/// # use epicycles::core::math::*;
/// # use epicycles::epicycle::*;
/// # use epicycles::fourier::*;
/// let coefficients = CoefficientSet::from_coefficients(
///     vec![
///         FourierCoefficient::new(0, vec2(1.0, 1.0)),
///         FourierCoefficient::new(1, vec2(0.5, 0.0)),
///         FourierCoefficient::new(-1, vec2(0.0, 0.0)),
///     ],
///     1,
/// )
/// .unwrap();
///
/// let chain = compose_chain(&coefficients, std::f64::consts::FRAC_PI_2);
/// assert_eq!(chain.links.len(), 2);
/// assert!(chain.links[0].center.fuzzy_eq(vec2(1.0, 1.0)));
/// assert!(chain.tip().fuzzy_eq(vec2(1.0, 1.5)));
/// ```
pub fn compose_chain<T>(coefficients: &CoefficientSet<T>, t: T) -> EpicycleChain<T>
where
    T: Real,
{
    let mut iter = coefficients.iter();
    // zero frequency is always visited first, rotating it is a no-op but keeps the walk uniform
    let origin = iter.next().map(|c| c.at(t)).unwrap_or_else(Vector2::zero);

    let mut links = Vec::with_capacity(coefficients.len().saturating_sub(1));
    let mut center = origin;
    for c in iter {
        let tip = center + c.at(t);
        links.push(EpicycleLink {
            frequency: c.frequency,
            center,
            radius: c.radius(),
            tip,
        });
        center = tip;
    }

    EpicycleChain {
        time: t,
        origin,
        links,
    }
}

impl<T> EpicycleChain<T>
where
    T: Real,
{
    /// Reconstructed curve point, the tip of the last link (or the origin if there are no links).
    #[inline]
    pub fn tip(&self) -> Vector2<T> {
        self.links.last().map(|l| l.tip).unwrap_or(self.origin)
    }

    /// Number of rotating links.
    #[inline]
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Flat `[center_x, center_y, radius]` triple per link, the instance layout renderers upload to
    /// draw the circles.
    pub fn circle_instance_data(&self) -> Vec<T> {
        let mut result = Vec::with_capacity(self.links.len() * 3);
        for link in self.links.iter() {
            result.extend_from_slice(&[link.center.x, link.center.y, link.radius]);
        }
        result
    }

    /// Iterate the chain joints: the origin followed by every link tip.
    pub fn iter_joints(&self) -> impl Iterator<Item = Vector2<T>> + '_ {
        std::iter::once(self.origin).chain(self.links.iter().map(|l| l.tip))
    }

    /// Flat `[x, y]` pair per joint (origin then each link tip), a line strip connecting the
    /// rotating vectors.
    pub fn joint_points(&self) -> Vec<T> {
        let mut result = Vec::with_capacity((self.links.len() + 1) * 2);
        for p in self.iter_joints() {
            result.extend_from_slice(&[p.x, p.y]);
        }
        result
    }

    /// Axis aligned bounding box containing every circle of the chain (and the origin).
    pub fn extents(&self) -> AABB<T> {
        let mut result = AABB::new(self.origin.x, self.origin.y, self.origin.x, self.origin.y);
        for link in self.links.iter() {
            let min_x = link.center.x - link.radius;
            let min_y = link.center.y - link.radius;
            let max_x = link.center.x + link.radius;
            let max_y = link.center.y + link.radius;
            result.min_x = num_traits::real::Real::min(result.min_x, min_x);
            result.min_y = num_traits::real::Real::min(result.min_y, min_y);
            result.max_x = num_traits::real::Real::max(result.max_x, max_x);
            result.max_y = num_traits::real::Real::max(result.max_y, max_y);
        }

        result
    }
}
