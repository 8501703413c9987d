/// Cross-platform notification support
/// Currently only implements macOS notifications
use crate::timer::{Phase, PhaseCue};

#[cfg(target_os = "macos")]
use std::process::Command;

/// Play the phase-completion cue for a finished phase
pub fn notify_phase_complete(finished: Phase) {
    #[cfg(target_os = "macos")]
    {
        let message = match finished {
            Phase::Work => "Work phase complete — time for a break",
            Phase::Break => "Break over — back to work",
        };
        let script = format!(
            r#"display notification "{}" with title "Tempo" sound name "Glass""#,
            message
        );

        let _ = Command::new("osascript")
            .arg("-e")
            .arg(&script)
            .output();
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = finished;
    }
}

/// System-backed cue collaborator injected into the focus timer. Failures
/// (missing binary, blocked playback) are discarded and never reach the
/// timer state machine.
#[derive(Debug, Default)]
pub struct SystemCue;

impl PhaseCue for SystemCue {
    fn phase_complete(&mut self, finished: Phase) {
        notify_phase_complete(finished);
    }
}
