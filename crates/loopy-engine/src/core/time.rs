/// Fixed-tick pacing for hosts that receive variable frame times.
///
/// The host feeds wall-clock deltas in and gets back how many whole
/// simulation ticks to run. Leftover time carries into the next frame.
pub struct TickClock {
    /// Seconds per simulation tick.
    dt: f32,
    /// Unspent frame time.
    accumulator: f32,
    /// Upper bound on ticks per frame, so a stall cannot snowball.
    max_ticks: u32,
}

impl TickClock {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            max_ticks: 10,
        }
    }

    /// Override the per-frame tick cap. Zero is treated as one.
    pub fn with_max_ticks(mut self, max_ticks: u32) -> Self {
        self.max_ticks = max_ticks.max(1);
        self
    }

    /// Add frame time and return the number of ticks due.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if self.dt <= 0.0 {
            return 0;
        }
        let cap = self.dt * self.max_ticks as f32;
        self.accumulator = (self.accumulator + frame_dt.max(0.0)).min(cap);
        let ticks = (self.accumulator / self.dt) as u32;
        self.accumulator -= ticks as f32 * self.dt;
        ticks
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Change the tick length. Leftover time is discarded.
    pub fn set_dt(&mut self, dt: f32) {
        self.dt = dt;
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_tick_per_dt() {
        let mut clock = TickClock::new(0.25);
        assert_eq!(clock.accumulate(0.25), 1);
        assert_eq!(clock.accumulate(0.5), 2);
    }

    #[test]
    fn partial_frames_carry_over() {
        let mut clock = TickClock::new(0.25);
        assert_eq!(clock.accumulate(0.125), 0);
        assert_eq!(clock.accumulate(0.125), 1);
    }

    #[test]
    fn stall_is_capped() {
        let mut clock = TickClock::new(0.25).with_max_ticks(4);
        assert_eq!(clock.accumulate(5.0), 4);
    }

    #[test]
    fn zero_dt_never_ticks() {
        let mut clock = TickClock::new(0.0);
        assert_eq!(clock.accumulate(1.0), 0);
    }

    #[test]
    fn set_dt_drops_leftover() {
        let mut clock = TickClock::new(0.25);
        clock.accumulate(0.125);
        clock.set_dt(0.5);
        assert_eq!(clock.accumulate(0.375), 0);
        assert_eq!(clock.accumulate(0.125), 1);
    }
}
