//! Service models: global write lock.

use serde::Serialize;

/// Request body for `POST /locks`.
#[derive(Debug, Clone, Serialize)]
pub struct SetLock {
    /// `true` rejects every write and collection creation.
    pub write: bool,
    /// Message returned to clients whose writes are rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl SetLock {
    pub fn new(write: bool) -> Self {
        Self {
            write,
            error_message: None,
        }
    }

    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unlock_sends_false() {
        assert_eq!(
            serde_json::to_value(SetLock::new(false)).unwrap(),
            json!({ "write": false })
        );
    }
}
