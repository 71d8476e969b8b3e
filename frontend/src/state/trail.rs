use std::collections::VecDeque;
use std::rc::Rc;

use yew::Reducible;

use crate::config;

#[derive(Clone, Debug, PartialEq)]
pub struct TrailPoint {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    /// Milliseconds since the epoch, as reported by `Date.now()`.
    pub born_at: f64,
}

/// Most recent pointer positions, oldest first. Capacity is enforced on
/// every push, independent of how far each point has faded.
#[derive(Clone, Debug, PartialEq)]
pub struct Trail {
    points: VecDeque<TrailPoint>,
    capacity: usize,
    fade_ms: f64,
    next_id: u64,
}

impl Default for Trail {
    fn default() -> Self {
        Self::new(config::TRAIL_CAPACITY, f64::from(config::TRAIL_FADE_MS))
    }
}

impl Trail {
    pub fn new(capacity: usize, fade_ms: f64) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
            fade_ms,
            next_id: 0,
        }
    }

    /// Appends a point and returns its id.
    pub fn push(&mut self, x: f64, y: f64, now: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.points.push_back(TrailPoint { id, x, y, born_at: now });
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
        id
    }

    /// Drops every point whose fade has finished. Returns whether anything
    /// was removed.
    pub fn sweep(&mut self, now: f64) -> bool {
        let before = self.points.len();
        let fade_ms = self.fade_ms;
        self.points.retain(|point| now - point.born_at < fade_ms);
        self.points.len() != before
    }

    pub fn points(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

pub enum TrailAction {
    Moved { x: f64, y: f64, at: f64 },
    Sweep { now: f64 },
}

impl Reducible for Trail {
    type Action = TrailAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            TrailAction::Moved { x, y, at } => {
                let mut next = (*self).clone();
                next.push(x, y, at);
                Rc::new(next)
            }
            TrailAction::Sweep { now } => {
                // Skip the clone on the common idle tick.
                if self.points().all(|point| now - point.born_at < self.fade_ms) {
                    return self;
                }
                let mut next = (*self).clone();
                next.sweep(now);
                Rc::new(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_before_the_first_move() {
        let trail = Trail::default();
        assert!(trail.is_empty());
        assert_eq!(trail.points().count(), 0);
    }

    #[test]
    fn never_holds_more_than_capacity() {
        let mut trail = Trail::default();
        for i in 0..200 {
            trail.push(i as f64, i as f64, 0.0);
            assert!(trail.len() <= config::TRAIL_CAPACITY);
        }
        assert_eq!(trail.len(), config::TRAIL_CAPACITY);
    }

    #[test]
    fn keeps_the_most_recent_points_in_order() {
        let mut trail = Trail::new(3, 600.0);
        for i in 0..5 {
            trail.push(f64::from(i), 0.0, 0.0);
        }
        let xs: Vec<f64> = trail.points().map(|p| p.x).collect();
        assert_eq!(xs, [2.0, 3.0, 4.0]);
    }

    #[test]
    fn eviction_does_not_wait_for_the_fade() {
        let mut trail = Trail::new(2, 600.0);
        trail.push(0.0, 0.0, 1_000.0);
        trail.push(1.0, 0.0, 1_001.0);
        trail.push(2.0, 0.0, 1_002.0);
        // The first point is still well inside its fade but already gone.
        assert_eq!(trail.points().next().map(|p| p.x), Some(1.0));
        assert_eq!(trail.len(), 2);
    }

    #[test]
    fn ids_are_unique_even_within_one_millisecond() {
        let mut trail = Trail::default();
        let a = trail.push(1.0, 1.0, 5.0);
        let b = trail.push(1.0, 1.0, 5.0);
        assert_ne!(a, b);
    }

    #[test]
    fn sweep_drops_only_faded_points() {
        let mut trail = Trail::new(15, 600.0);
        trail.push(0.0, 0.0, 0.0);
        trail.push(1.0, 0.0, 300.0);

        assert!(!trail.sweep(599.0));
        assert_eq!(trail.len(), 2);

        assert!(trail.sweep(600.0));
        assert_eq!(trail.points().map(|p| p.x).collect::<Vec<_>>(), [1.0]);

        assert!(trail.sweep(900.0));
        assert!(trail.is_empty());
    }

    #[test]
    fn idle_sweep_returns_the_same_state() {
        let trail = Rc::new(Trail::default()).reduce(TrailAction::Moved { x: 3.0, y: 4.0, at: 0.0 });
        let swept = trail.clone().reduce(TrailAction::Sweep { now: 10.0 });
        assert!(Rc::ptr_eq(&trail, &swept));

        let faded = swept.reduce(TrailAction::Sweep { now: 10_000.0 });
        assert!(faded.is_empty());
    }
}
