use crate::core::{math::Vector2, traits::Real};
use std::collections::VecDeque;

/// Two point segment of the trace from the previous frame tip to the current frame tip.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TraceSegment<T = f64> {
    pub previous: Vector2<T>,
    pub current: Vector2<T>,
}

impl<T> TraceSegment<T>
where
    T: Real,
{
    /// Flat `[previous_x, previous_y, current_x, current_y]` line data.
    #[inline]
    pub fn to_flat(&self) -> [T; 4] {
        [
            self.previous.x,
            self.previous.y,
            self.current.x,
            self.current.y,
        ]
    }

    #[inline]
    pub fn length(&self) -> T {
        (self.current - self.previous).length()
    }
}

/// Records the chain tip each frame and emits the newest trace segment.
///
/// Renderers are expected to accumulate the segments into a persistent target, the recorder itself
/// only remembers the previous tip. An optional bounded history of recent tips can be kept for
/// consumers that redraw the whole trail every frame.
#[derive(Debug, Clone)]
pub struct TraceRecorder<T = f64> {
    previous: Option<Vector2<T>>,
    history: VecDeque<Vector2<T>>,
    history_capacity: usize,
}

impl<T> Default for TraceRecorder<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TraceRecorder<T>
where
    T: Real,
{
    /// Create a recorder that keeps no history.
    #[inline]
    pub fn new() -> Self {
        Self::with_history(0)
    }

    /// Create a recorder that keeps the `history_capacity` most recent tips.
    #[inline]
    pub fn with_history(history_capacity: usize) -> Self {
        TraceRecorder {
            previous: None,
            history: VecDeque::with_capacity(history_capacity),
            history_capacity,
        }
    }

    /// Record the chain tip for the current frame.
    ///
    /// Returns the `(previous, current)` segment, or `None` on the first recorded frame since there
    /// is no previous tip yet.
    pub fn record(&mut self, tip: Vector2<T>) -> Option<TraceSegment<T>> {
        if self.history_capacity > 0 {
            if self.history.len() == self.history_capacity {
                self.history.pop_front();
            }
            self.history.push_back(tip);
        }

        self.previous.replace(tip).map(|previous| TraceSegment {
            previous,
            current: tip,
        })
    }

    /// Tip recorded by the last call to [TraceRecorder::record].
    #[inline]
    pub fn last_tip(&self) -> Option<Vector2<T>> {
        self.previous
    }

    /// Most recent tips, oldest first (empty if no history is kept).
    #[inline]
    pub fn history(&self) -> impl ExactSizeIterator<Item = Vector2<T>> + '_ {
        self.history.iter().copied()
    }

    #[inline]
    pub fn history_capacity(&self) -> usize {
        self.history_capacity
    }

    /// Forget the previous tip and any history, the next frame starts a new trace.
    pub fn clear(&mut self) {
        self.previous = None;
        self.history.clear();
    }
}
