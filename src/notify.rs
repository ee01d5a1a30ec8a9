use colored::*;
use notify_rust::{Notification, Timeout};

/// Transient OS notification with the posture advisory. Fire-and-forget:
/// a failed dispatch is printed and otherwise ignored so the detection
/// loop never stalls on the notification daemon.
pub fn send_posture_alert(message: &str, timeout_secs: u64) {
    let result = Notification::new()
        .summary("Posture Alert")
        .body(message)
        .timeout(Timeout::Milliseconds((timeout_secs * 1000) as u32))
        .show();

    if let Err(e) = result {
        println!("{}", format!("Notification failed: {}", e).yellow());
    }
}
