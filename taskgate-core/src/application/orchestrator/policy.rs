use crate::domain::types::ChatMessage;

/// Content-free trace: `"Step k completed"` for `k = 1..=count`.
pub fn step_markers(count: usize) -> Vec<String> {
    (1..=count).map(|step| format!("Step {step} completed")).collect()
}

/// Picks the answer returned to the caller.
///
/// A trailing assistant message wins; otherwise the run's own result text is
/// used. The result may be empty when both sources are.
pub fn final_answer(last_message: Option<&ChatMessage>, raw_result: &str) -> String {
    match last_message {
        Some(message) if message.is_assistant() && !message.content.is_empty() => {
            message.content.clone()
        }
        _ => raw_result.to_string(),
    }
}
