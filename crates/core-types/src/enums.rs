use serde::{Deserialize, Serialize};
use std::fmt;

/// Connectivity of the backing store as reported by the health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreStatus {
    #[serde(rename = "connected")]
    Connected,
    #[serde(rename = "disconnected")]
    Disconnected,
    /// No pool was established at startup.
    #[serde(rename = "not configured")]
    NotConfigured,
}

impl StoreStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreStatus::Connected => "connected",
            StoreStatus::Disconnected => "disconnected",
            StoreStatus::NotConfigured => "not configured",
        }
    }
}

impl fmt::Display for StoreStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_names() {
        assert_eq!(
            serde_json::to_string(&StoreStatus::NotConfigured).unwrap(),
            r#""not configured""#
        );
        assert_eq!(
            serde_json::to_string(&StoreStatus::Connected).unwrap(),
            r#""connected""#
        );
        assert_eq!(StoreStatus::Disconnected.to_string(), "disconnected");
    }
}
