use ynab_client::ClientError;

/// Human-readable failure. Remote errors also show the HTTP status, and
/// failures inside a running command name it.
pub fn render_error(error: &ClientError) -> String {
    let mut lines = vec![
        "Something went wrong, but it's easy to fix.".to_string(),
        String::new(),
    ];
    if let Some(operation) = &error.operation {
        lines.push(format!("  Command:  {operation}"));
    }
    lines.push(format!("  Error:    {}", error.code));
    if let Some(status) = error.http_status() {
        lines.push(format!("  Status:   HTTP {status}"));
    }
    lines.push(format!("  Details:  {}", error.message));
    lines.push(String::new());
    lines.push("What to do next:".to_string());

    if error.recovery_steps.is_empty() {
        lines.push("  1. Retry the command.".to_string());
    } else {
        for (index, step) in error.recovery_steps.iter().enumerate() {
            lines.push(format!("  {}. {step}", index + 1));
        }
    }

    lines.join("\n")
}
