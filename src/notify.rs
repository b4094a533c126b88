// 📨 Mock notification adapter - stands in for an SMS/WhatsApp gateway

use serde::{Deserialize, Serialize};

/// A message that would be sent to the tourist's phone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub to: Option<String>,
    pub message: String,
}

impl Notification {
    pub fn new(phone: Option<&str>, message: impl Into<String>) -> Self {
        Notification {
            to: phone.map(str::trim).filter(|p| !p.is_empty()).map(str::to_string),
            message: message.into(),
        }
    }

    /// "Send" the notification: only logged, never delivered
    pub fn dispatch(&self) {
        log::info!("Mock notification: {}", self);
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[NOTIFICATION MOCK] To: {} | Message: {}",
            self.to.as_deref().unwrap_or("unknown"),
            self.message
        )
    }
}
