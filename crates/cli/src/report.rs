use crm_housekeeping_jobs::JobOutcome;

use crate::Command;

/// Console line for a finished task. Only the reminder task talks to stdout.
pub fn console_line(command: Command, outcome: &JobOutcome) -> Option<String> {
    if command != Command::OrderReminders {
        return None;
    }
    match outcome {
        JobOutcome::Completed => Some("Order reminders processed!".to_string()),
        JobOutcome::TaskFailed(e) => Some(format!("Error: {}", e)),
        // The runner already logged it at error level.
        JobOutcome::LogWriteFailed(_) => None,
    }
}
