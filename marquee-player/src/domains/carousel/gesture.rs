use super::messages::Direction;

/// Horizontal swipe detection between a touch start and its end.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A second start before an end replaces the first.
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    pub fn is_active(&self) -> bool {
        self.start_x.is_some()
    }

    /// Close the gesture. Leftward travel beyond `threshold` means the next
    /// slide, rightward travel the previous one. An end with no recorded
    /// start is ignored.
    pub fn finish(&mut self, end_x: f32, threshold: f32) -> Option<Direction> {
        let start_x = self.start_x.take()?;
        let delta = start_x - end_x;
        if delta > threshold {
            Some(Direction::Next)
        } else if delta < -threshold {
            Some(Direction::Previous)
        } else {
            None
        }
    }
}
