//! Short-lived "loading" flag raised after each page change.
//!
//! The flag is cosmetic: it lets a view show a spinner while the next page
//! swaps in. Re-arming simply moves the deadline.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct LoadingIndicator {
    delay: Duration,
    until: Option<Instant>,
}

impl LoadingIndicator {
    pub fn new(delay: Duration) -> Self {
        Self { delay, until: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Raise the flag for one delay window starting at `now`.
    pub fn arm_at(&mut self, now: Instant) {
        self.until = if self.delay.is_zero() {
            None
        } else {
            Some(now + self.delay)
        };
    }

    pub fn arm(&mut self) {
        self.arm_at(Instant::now());
    }

    pub fn clear(&mut self) {
        self.until = None;
    }

    pub fn is_loading_at(&self, now: Instant) -> bool {
        self.until.is_some_and(|until| now < until)
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading_at(Instant::now())
    }
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self::new(Duration::from_millis(300))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_settles_after_the_window() {
        let mut loading = LoadingIndicator::new(Duration::from_millis(300));
        let start = Instant::now();
        assert!(!loading.is_loading_at(start));

        loading.arm_at(start);
        assert!(loading.is_loading_at(start));
        assert!(loading.is_loading_at(start + Duration::from_millis(299)));
        assert!(!loading.is_loading_at(start + Duration::from_millis(300)));
    }

    #[test]
    fn rearming_moves_the_deadline() {
        let mut loading = LoadingIndicator::new(Duration::from_millis(300));
        let start = Instant::now();
        loading.arm_at(start);
        loading.arm_at(start + Duration::from_millis(200));
        assert!(loading.is_loading_at(start + Duration::from_millis(450)));
        assert!(!loading.is_loading_at(start + Duration::from_millis(500)));
    }

    #[test]
    fn zero_delay_never_loads() {
        let mut loading = LoadingIndicator::new(Duration::ZERO);
        let start = Instant::now();
        loading.arm_at(start);
        assert!(!loading.is_loading_at(start));
    }

    #[test]
    fn reports_configured_window() {
        assert_eq!(
            LoadingIndicator::new(Duration::from_millis(120)).delay(),
            Duration::from_millis(120)
        );
        assert_eq!(LoadingIndicator::default().delay(), Duration::from_millis(300));
    }

    #[test]
    fn clear_drops_the_flag() {
        let mut loading = LoadingIndicator::default();
        loading.arm();
        loading.clear();
        assert!(!loading.is_loading());
    }
}
