use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by the RigOS hardware-interface layer.
///
/// Every variant represents a static configuration mistake discovered during
/// driver initialisation or controller activation, never a transient runtime
/// fault. Callers should abort the offending component's startup with the
/// error message rather than proceed with an invalid handle; nothing in the
/// hardware layer retries or recovers locally.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HalError {
    /// A resource with this name is already registered on the interface.
    ///
    /// Registering the same name twice is a naming conflict, not an update:
    /// the originally registered resource is left untouched.
    #[error("Duplicate resource '{name}' on {interface}")]
    DuplicateResource { interface: String, name: String },

    /// No resource with this name is registered on the interface.
    ///
    /// Carries both the requested name and the interface label so a
    /// misconfigured controller can be diagnosed from the message alone.
    #[error("Could not find resource '{name}' on {interface}")]
    ResourceNotFound { interface: String, name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_resource_display_names_resource_and_interface() {
        let err = HalError::DuplicateResource {
            interface: "ImuInterface".to_string(),
            name: "imu_base".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("imu_base"));
        assert!(msg.contains("ImuInterface"));
    }

    #[test]
    fn resource_not_found_display_names_resource_and_interface() {
        let err = HalError::ResourceNotFound {
            interface: "ImuInterface".to_string(),
            name: "imu_missing".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Could not find"));
        assert!(msg.contains("imu_missing"));
        assert!(msg.contains("ImuInterface"));
    }

    #[test]
    fn hal_error_serialization_roundtrip() {
        let err = HalError::ResourceNotFound {
            interface: "ImuInterface".to_string(),
            name: "imu_a".to_string(),
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: HalError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
