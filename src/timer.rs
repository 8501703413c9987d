/// Work phase length in seconds (25 minutes)
pub const WORK_SECS: u32 = 25 * 60;
/// Break phase length in seconds (5 minutes)
pub const BREAK_SECS: u32 = 5 * 60;

/// Focus timer phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Work,
    Break,
}

impl Phase {
    /// Configured countdown length for this phase
    pub fn duration_secs(&self) -> u32 {
        match self {
            Phase::Work => WORK_SECS,
            Phase::Break => BREAK_SECS,
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            Phase::Work => Phase::Break,
            Phase::Break => Phase::Work,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Phase::Work => "Work",
            Phase::Break => "Break",
        }
    }
}

/// Injected phase-completion collaborator. Called once per natural phase
/// completion with the phase that just finished; the timer never observes
/// whether the cue succeeded.
pub trait PhaseCue {
    fn phase_complete(&mut self, finished: Phase);
}

/// Adapter so a closure can stand in for a cue (used by tests)
pub struct FnCue<F: FnMut(Phase)>(pub F);

impl<F: FnMut(Phase)> PhaseCue for FnCue<F> {
    fn phase_complete(&mut self, finished: Phase) {
        (self.0)(finished)
    }
}

/// Focus-interval countdown state machine. Starts paused in the work phase;
/// `tick` fires once per elapsed second while running.
#[derive(Debug)]
pub struct FocusTimer {
    phase: Phase,
    remaining_secs: u32,
    running: bool,
    completed_work_cycles: u32,
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusTimer {
    pub fn new() -> Self {
        Self {
            phase: Phase::Work,
            remaining_secs: WORK_SECS,
            running: false,
            completed_work_cycles: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn completed_work_cycles(&self) -> u32 {
        self.completed_work_cycles
    }

    /// Begin counting down; no-op if already running
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop counting down; no-op if already paused
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Start if paused, pause if running (the TUI's single start/stop key)
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Manually flip the phase. Resets the countdown to the new phase's
    /// length, keeps the running flag as-is, and never counts a cycle. This
    /// fully supersedes any automatic transition pending for the same tick.
    pub fn switch_phase(&mut self) {
        self.phase = self.phase.flipped();
        self.remaining_secs = self.phase.duration_secs();
    }

    /// Advance one second. Only acts while running. When the countdown hits
    /// zero the timer pauses itself, counts the cycle if a work phase just
    /// finished, flips to the other phase with a fresh countdown, and fires
    /// the cue.
    pub fn tick(&mut self, cue: &mut dyn PhaseCue) {
        if !self.running {
            return;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return;
        }

        let finished = self.phase;
        self.running = false;
        if finished == Phase::Work {
            self.completed_work_cycles += 1;
        }
        self.phase = finished.flipped();
        self.remaining_secs = self.phase.duration_secs();
        cue.phase_complete(finished);
    }

    /// Zero-padded MM:SS display of the remaining time
    pub fn display(&self) -> String {
        let mins = self.remaining_secs / 60;
        let secs = self.remaining_secs % 60;
        format!("{:02}:{:02}", mins, secs)
    }
}
