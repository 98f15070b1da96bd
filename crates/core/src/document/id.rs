//! Time-derived id allocation for newly created records.
//!
//! Ids are wall-clock milliseconds, bumped past the last id handed out (or
//! observed on disk) whenever the clock has not advanced. Larger ids are
//! always newer.
use chrono::Utc;

#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    /// Record an id that exists in storage so it is never handed out again.
    pub fn observe(&mut self, id: i64) {
        self.last = self.last.max(id);
    }

    pub fn next_id(&mut self) -> i64 {
        self.next_at(Utc::now().timestamp_millis())
    }

    fn next_at(&mut self, now_millis: i64) -> i64 {
        let id = now_millis.max(self.last.saturating_add(1));
        self.last = id;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_the_clock() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.next_at(1_000), 1_000);
        assert_eq!(ids.next_at(2_500), 2_500);
    }

    #[test]
    fn same_tick_still_increases() {
        let mut ids = IdGenerator::default();
        let a = ids.next_at(1_000);
        let b = ids.next_at(1_000);
        let c = ids.next_at(999);
        assert!(a < b && b < c);
    }

    #[test]
    fn stays_above_observed_ids() {
        let mut ids = IdGenerator::default();
        ids.observe(5_000);
        assert_eq!(ids.next_at(1_000), 5_001);

        ids.observe(9_000);
        assert_eq!(ids.next_at(1_000), 9_001);

        ids.observe(10);
        assert_eq!(ids.next_at(1_000), 9_002);
    }

    #[test]
    fn next_id_is_at_least_now() {
        let mut ids = IdGenerator::default();
        let before = Utc::now().timestamp_millis();
        assert!(ids.next_id() >= before);
    }
}
