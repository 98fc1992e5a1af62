//! Button input sources and edge/level conversion.
//!
//! Gesture detectors want a level ("is it held right now?") for every button
//! on every tick. Some sources deliver levels directly (GPIO), others deliver
//! press/release edges (a host report stream, an interrupt queue).
//! [`EdgeTracker`] turns edges into levels and [`EdgeDetector`] does the
//! reverse.

/// A set of buttons that can be sampled by index.
pub trait ButtonInput {
    /// Number of buttons. Valid indices are `0..button_count()`.
    fn button_count(&self) -> usize;

    /// Whether button `index` is currently held. Out-of-range indices read as released.
    fn is_pressed(&mut self, index: usize) -> bool;
}

/// A press or release of one button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEdge {
    pub button: usize,
    pub pressed: bool,
}

impl ButtonEdge {
    #[must_use]
    pub const fn press(button: usize) -> Self {
        Self {
            button,
            pressed: true,
        }
    }

    #[must_use]
    pub const fn release(button: usize) -> Self {
        Self {
            button,
            pressed: false,
        }
    }
}

/// Keeps the last reported level of `N` buttons from a stream of edges.
#[derive(Debug, Clone)]
pub struct EdgeTracker<const N: usize> {
    levels: [bool; N],
}

impl<const N: usize> EdgeTracker<N> {
    #[must_use]
    pub const fn new() -> Self {
        Self { levels: [false; N] }
    }

    /// Record an edge. Returns `false` if the button index is out of range.
    pub fn apply(&mut self, edge: ButtonEdge) -> bool {
        match self.levels.get_mut(edge.button) {
            Some(level) => {
                *level = edge.pressed;
                true
            }
            None => false,
        }
    }

    /// Current levels, indexed by button.
    #[must_use]
    pub const fn levels(&self) -> &[bool; N] {
        &self.levels
    }
}

impl<const N: usize> Default for EdgeTracker<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ButtonInput for EdgeTracker<N> {
    fn button_count(&self) -> usize {
        N
    }

    fn is_pressed(&mut self, index: usize) -> bool {
        self.levels.get(index).copied().unwrap_or(false)
    }
}

/// Remembers the previous level of `N` buttons and reports changes.
#[derive(Debug, Clone)]
pub struct EdgeDetector<const N: usize> {
    previous: [bool; N],
}

impl<const N: usize> EdgeDetector<N> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            previous: [false; N],
        }
    }

    /// Compare `levels` with the previous sample and return every change,
    /// lowest button index first.
    pub fn update(&mut self, levels: &[bool; N]) -> heapless::Vec<ButtonEdge, N> {
        let edges = self.pending(levels);
        for edge in &edges {
            self.record(*edge);
        }
        edges
    }

    /// Changes between `levels` and the recorded levels, without recording
    /// them. Pair with [`record`](Self::record) once an edge has been handled.
    #[must_use]
    pub fn pending(&self, levels: &[bool; N]) -> heapless::Vec<ButtonEdge, N> {
        let mut edges = heapless::Vec::new();
        for (button, (&prev, &now)) in self.previous.iter().zip(levels).enumerate() {
            if prev != now {
                // At most one edge per button, cannot overflow
                let _ = edges.push(ButtonEdge {
                    button,
                    pressed: now,
                });
            }
        }
        edges
    }

    /// Mark `edge` as handled. Out-of-range buttons are ignored.
    pub fn record(&mut self, edge: ButtonEdge) {
        if let Some(level) = self.previous.get_mut(edge.button) {
            *level = edge.pressed;
        }
    }

    /// Last recorded level of every button.
    #[must_use]
    pub const fn levels(&self) -> &[bool; N] {
        &self.previous
    }
}

impl<const N: usize> Default for EdgeDetector<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sample every button of `input` into a level array.
///
/// Buttons beyond `input.button_count()` read as released.
pub fn sample<I: ButtonInput, const N: usize>(input: &mut I) -> [bool; N] {
    let count = input.button_count().min(N);
    let mut levels = [false; N];
    for (index, level) in levels.iter_mut().enumerate().take(count) {
        *level = input.is_pressed(index);
    }
    levels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_follows_edges() {
        let mut tracker = EdgeTracker::<3>::new();
        assert!(tracker.apply(ButtonEdge::press(1)));
        assert_eq!(tracker.levels(), &[false, true, false]);
        assert!(tracker.is_pressed(1));

        assert!(tracker.apply(ButtonEdge::release(1)));
        assert!(!tracker.is_pressed(1));
    }

    #[test]
    fn test_tracker_ignores_out_of_range() {
        let mut tracker = EdgeTracker::<2>::new();
        assert!(!tracker.apply(ButtonEdge::press(2)));
        assert_eq!(tracker.levels(), &[false, false]);
        assert!(!tracker.is_pressed(7));
    }

    #[test]
    fn test_detector_reports_changes_only() {
        let mut detector = EdgeDetector::<3>::new();
        assert!(detector.update(&[false, false, false]).is_empty());

        let edges = detector.update(&[true, false, true]);
        assert_eq!(edges.as_slice(), &[ButtonEdge::press(0), ButtonEdge::press(2)]);

        assert!(detector.update(&[true, false, true]).is_empty());

        let edges = detector.update(&[false, false, true]);
        assert_eq!(edges.as_slice(), &[ButtonEdge::release(0)]);
    }

    #[test]
    fn test_detector_pending_until_recorded() {
        let mut detector = EdgeDetector::<2>::new();
        let pending = detector.pending(&[true, true]);
        assert_eq!(pending.as_slice(), &[ButtonEdge::press(0), ButtonEdge::press(1)]);

        detector.record(ButtonEdge::press(1));
        assert_eq!(detector.levels(), &[false, true]);
        assert_eq!(detector.pending(&[true, true]).as_slice(), &[ButtonEdge::press(0)]);

        detector.record(ButtonEdge::press(7));
        assert_eq!(detector.levels(), &[false, true]);
    }

    #[test]
    fn test_tracker_and_detector_agree() {
        let mut tracker = EdgeTracker::<4>::new();
        let mut detector = EdgeDetector::<4>::new();
        for edge in [ButtonEdge::press(3), ButtonEdge::press(0), ButtonEdge::release(3)] {
            tracker.apply(edge);
        }
        let edges = detector.update(tracker.levels());
        assert_eq!(edges.as_slice(), &[ButtonEdge::press(0)]);
    }

    #[test]
    fn test_sample_pads_missing_buttons() {
        let mut tracker = EdgeTracker::<2>::new();
        tracker.apply(ButtonEdge::press(1));
        let levels: [bool; 4] = sample(&mut tracker);
        assert_eq!(levels, [false, true, false, false]);
    }
}
