use crate::application::{Engine, InvalidCoordinate};

/// Slowest allowed simulation speed, in steps per second
pub const MIN_SPEED: f32 = 1.0;
/// Fastest allowed simulation speed, in steps per second
pub const MAX_SPEED: f32 = 100.0;

/// Session drives the engine from the frame loop: the running flag,
/// the speed setting, and the timer that schedules steps. This is the
/// application layer that coordinates domain logic.
pub struct Session {
    pub engine: Engine,
    pub running: bool,
    /// Steps per second, in `MIN_SPEED..=MAX_SPEED`
    pub speed: f32,
    pub generation: u64,
    update_timer: f32,
}

impl Session {
    /// Create a session around a fresh engine of the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            engine: Engine::new(rows, cols),
            running: false,
            speed: 50.0,
            generation: 0,
            update_timer: 0.0,
        }
    }

    /// Start the simulation. The current board is remembered as the
    /// reset point on every start, even when already running.
    pub fn start(mut self) -> Self {
        self.engine.save_initial_state();
        self.running = true;
        self
    }

    /// Stop scheduling steps. The in-progress board stays as it is.
    pub fn stop(mut self) -> Self {
        self.running = false;
        self
    }

    /// Toggle between running and stopped
    pub fn toggle_running(self) -> Self {
        if self.running { self.stop() } else { self.start() }
    }

    /// Bring back the board remembered by the last start
    pub fn reset_to_initial(mut self) -> Self {
        self.engine.restore_initial_state();
        self.generation = 0;
        self
    }

    /// Wipe the board and halt the simulation
    pub fn clear(mut self) -> Self {
        self.engine.clear();
        self.generation = 0;
        self.running = false;
        self
    }

    pub fn undo(mut self) -> Self {
        self.engine.undo();
        self
    }

    pub fn redo(mut self) -> Self {
        self.engine.redo();
        self
    }

    /// Set simulation speed, clamped to the allowed range
    pub fn set_speed(mut self, speed: f32) -> Self {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        self
    }

    /// Seconds between scheduled steps at the current speed
    pub fn step_interval(&self) -> f32 {
        1.0 / self.speed
    }

    /// Paint a cell from pointer input
    pub fn place_cell(&mut self, row: usize, col: usize) -> Result<(), InvalidCoordinate> {
        self.engine.place_cell(row, col)
    }

    /// Advance the simulation by one frame. At most one step is taken
    /// per frame; the timer carries the remainder across frames.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.running {
            return self;
        }

        self.update_timer += delta_time;
        if self.update_timer >= self.step_interval() {
            self.engine.step();
            self.generation += 1;
            self.update_timer = 0.0;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_does_nothing_while_stopped() {
        let mut session = Session::new(5, 5);
        session.place_cell(2, 2).unwrap();
        let before = session.engine.grid().clone();

        session = session.tick(1.0);
        assert_eq!(session.engine.grid(), &before);
        assert_eq!(session.generation, 0);
    }

    #[test]
    fn test_tick_steps_once_per_interval() {
        let mut session = Session::new(5, 5).set_speed(50.0);
        session.place_cell(2, 2).unwrap();
        session = session.start();

        // half the interval: no step yet
        session = session.tick(0.01);
        assert_eq!(session.generation, 0);

        // crossing the 1/50 s interval triggers exactly one step
        session = session.tick(0.01);
        assert_eq!(session.generation, 1);

        // the lone cell died on that step
        assert_eq!(session.engine.grid().live_cells(), 0);
    }

    #[test]
    fn test_speed_is_clamped() {
        let session = Session::new(5, 5).set_speed(500.0);
        assert_eq!(session.speed, MAX_SPEED);
        let session = session.set_speed(0.0);
        assert_eq!(session.speed, MIN_SPEED);
        assert_eq!(session.step_interval(), 1.0);
    }

    #[test]
    fn test_start_remembers_the_board_for_reset() {
        let mut session = Session::new(5, 5);
        session.place_cell(2, 1).unwrap();
        session.place_cell(2, 2).unwrap();
        session.place_cell(2, 3).unwrap();
        session = session.start();
        let saved = session.engine.grid().clone();

        // run a few generations, then reset back
        let interval = session.step_interval();
        for _ in 0..3 {
            session = session.tick(interval);
        }
        session = session.reset_to_initial();
        assert_eq!(session.engine.grid(), &saved);
        assert_eq!(session.generation, 0);
    }

    #[test]
    fn test_clear_stops_the_run() {
        let mut session = Session::new(5, 5);
        session.place_cell(1, 1).unwrap();
        session = session.start().clear();
        assert!(!session.running);
        assert_eq!(session.engine.grid().live_cells(), 0);
    }
}
