//! IMU sensor handles and the interface a control loop reads them through.
//!
//! A hardware driver publishes one IMU's reading through a set of
//! [`SensorBuffer`][crate::buffer::SensorBuffer]s, describes them with an
//! [`ImuData`] descriptor, and registers the descriptor on the
//! [`ImuInterface`] during initialisation. A controller looks its sensor up
//! by name once, keeps the returned [`ImuHandle`], and re-reads it every
//! control cycle.
//!
//! # Example
//!
//! ```rust
//! use rigos_hal::buffer::{QuaternionBuffer, Vector3Buffer};
//! use rigos_hal::imu::{Capabilities, ImuData, ImuInterface};
//!
//! // Driver side: allocate storage and register the sensor.
//! let orientation = QuaternionBuffer::new([0.0, 0.0, 0.0, 1.0]);
//! let gyro = Vector3Buffer::zeroed();
//!
//! let mut interface = ImuInterface::new();
//! interface
//!     .register_sensor(
//!         ImuData::new("imu1", "base_imu")
//!             .with_orientation(orientation.clone())
//!             .with_angular_velocity(gyro.clone()),
//!     )
//!     .unwrap();
//!
//! // Controller side: look the handle up once, read it every cycle.
//! let handle = interface.sensor_handle("imu1").unwrap();
//! assert_eq!(
//!     handle.capabilities(),
//!     Capabilities::ORIENTATION | Capabilities::ANGULAR_VELOCITY
//! );
//!
//! gyro.write(&[0.1, 0.0, 0.0]);
//! assert_eq!(handle.angular_velocity(), Some([0.1, 0.0, 0.0]));
//! ```

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use tracing::debug;

use rigos_types::HalError;

use crate::buffer::{CovarianceBuffer, QuaternionBuffer, Vector3Buffer};
use crate::registry::ResourceRegistry;

bitflags! {
    /// Which quantities an IMU publishes.
    ///
    /// Computed once when a handle is constructed, from which descriptor
    /// fields were present, and never recomputed afterwards. The numeric
    /// values are stable and safe to log or put on the wire.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Capabilities: u16 {
        /// Orientation quaternion (x, y, z, w).
        const ORIENTATION = 0x01;
        /// Row-major 3×3 orientation covariance.
        const ORIENTATION_COVARIANCE = 0x02;
        /// Angular velocity (x, y, z) in rad/s.
        const ANGULAR_VELOCITY = 0x04;
        /// Row-major 3×3 angular velocity covariance.
        const ANGULAR_VELOCITY_COVARIANCE = 0x08;
        /// Linear acceleration (x, y, z) in m/s².
        const LINEAR_ACCELERATION = 0x10;
        /// Row-major 3×3 linear acceleration covariance.
        const LINEAR_ACCELERATION_COVARIANCE = 0x20;
    }
}

/// Descriptor a driver hands to [`ImuInterface::register_sensor`].
///
/// Every buffer field is independently optional: an absent field means "this
/// sensor does not provide this quantity", which is normal usage, not an
/// error (an IMU without an orientation estimate simply leaves `orientation`
/// unset). The driver keeps its own clone of every buffer it supplies and
/// writes it for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct ImuData {
    /// Unique sensor name, the registry key.
    pub name: String,
    /// Reference frame readings are expressed in. Passed through unmodified
    /// for downstream coordinate-transform logic; not interpreted here.
    pub frame_id: String,
    /// Orientation quaternion storage, (x, y, z, w) order.
    pub orientation: Option<QuaternionBuffer>,
    /// Row-major 3×3 orientation covariance storage.
    pub orientation_covariance: Option<CovarianceBuffer>,
    /// Angular velocity storage, (x, y, z) in rad/s.
    pub angular_velocity: Option<Vector3Buffer>,
    /// Row-major 3×3 angular velocity covariance storage.
    pub angular_velocity_covariance: Option<CovarianceBuffer>,
    /// Linear acceleration storage, (x, y, z) in m/s².
    pub linear_acceleration: Option<Vector3Buffer>,
    /// Row-major 3×3 linear acceleration covariance storage.
    pub linear_acceleration_covariance: Option<CovarianceBuffer>,
}

impl ImuData {
    /// Descriptor with no published quantities.
    pub fn new(name: impl Into<String>, frame_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frame_id: frame_id.into(),
            orientation: None,
            orientation_covariance: None,
            angular_velocity: None,
            angular_velocity_covariance: None,
            linear_acceleration: None,
            linear_acceleration_covariance: None,
        }
    }

    /// Publish orientation as a quaternion in (x, y, z, w) order.
    pub fn with_orientation(mut self, buffer: QuaternionBuffer) -> Self {
        self.orientation = Some(buffer);
        self
    }

    /// Publish the row-major 3×3 orientation covariance.
    pub fn with_orientation_covariance(mut self, buffer: CovarianceBuffer) -> Self {
        self.orientation_covariance = Some(buffer);
        self
    }

    /// Publish angular velocity (x, y, z) in rad/s.
    pub fn with_angular_velocity(mut self, buffer: Vector3Buffer) -> Self {
        self.angular_velocity = Some(buffer);
        self
    }

    /// Publish the row-major 3×3 angular velocity covariance.
    pub fn with_angular_velocity_covariance(mut self, buffer: CovarianceBuffer) -> Self {
        self.angular_velocity_covariance = Some(buffer);
        self
    }

    /// Publish linear acceleration (x, y, z) in m/s².
    pub fn with_linear_acceleration(mut self, buffer: Vector3Buffer) -> Self {
        self.linear_acceleration = Some(buffer);
        self
    }

    /// Publish the row-major 3×3 linear acceleration covariance.
    pub fn with_linear_acceleration_covariance(mut self, buffer: CovarianceBuffer) -> Self {
        self.linear_acceleration_covariance = Some(buffer);
        self
    }
}

/// A read-only view of one IMU's current reading.
///
/// Handles are cheap to clone and may be handed to several controllers.
/// Clones are shallow with respect to the driver's buffers (every clone reads
/// the driver's latest values) and deep with respect to the owned
/// `name`/`frame_id` strings.
///
/// The handle performs no synchronization against the driver's writes; see
/// the [`buffer`][crate::buffer] module docs for the caller obligations.
#[derive(Debug, Clone)]
pub struct ImuHandle {
    name: String,
    frame_id: String,
    capabilities: Capabilities,
    orientation: Option<QuaternionBuffer>,
    orientation_covariance: Option<CovarianceBuffer>,
    angular_velocity: Option<Vector3Buffer>,
    angular_velocity_covariance: Option<CovarianceBuffer>,
    linear_acceleration: Option<Vector3Buffer>,
    linear_acceleration_covariance: Option<CovarianceBuffer>,
}

impl ImuHandle {
    /// Build a handle over the buffers `data` describes.
    ///
    /// Never fails: an absent field simply leaves the matching capability bit
    /// unset. No numeric data is copied. The handle aliases the driver's
    /// buffers; only the name and frame id strings are owned.
    pub fn new(data: ImuData) -> Self {
        let mut capabilities = Capabilities::empty();
        if data.orientation.is_some() {
            capabilities |= Capabilities::ORIENTATION;
        }
        if data.orientation_covariance.is_some() {
            capabilities |= Capabilities::ORIENTATION_COVARIANCE;
        }
        if data.angular_velocity.is_some() {
            capabilities |= Capabilities::ANGULAR_VELOCITY;
        }
        if data.angular_velocity_covariance.is_some() {
            capabilities |= Capabilities::ANGULAR_VELOCITY_COVARIANCE;
        }
        if data.linear_acceleration.is_some() {
            capabilities |= Capabilities::LINEAR_ACCELERATION;
        }
        if data.linear_acceleration_covariance.is_some() {
            capabilities |= Capabilities::LINEAR_ACCELERATION_COVARIANCE;
        }

        Self {
            name: data.name,
            frame_id: data.frame_id,
            capabilities,
            orientation: data.orientation,
            orientation_covariance: data.orientation_covariance,
            angular_velocity: data.angular_velocity,
            angular_velocity_covariance: data.angular_velocity_covariance,
            linear_acceleration: data.linear_acceleration,
            linear_acceleration_covariance: data.linear_acceleration_covariance,
        }
    }

    /// The sensor's unique name (the registry key).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The reference frame readings are expressed in.
    pub fn frame_id(&self) -> &str {
        &self.frame_id
    }

    /// The quantities this sensor publishes, fixed at construction.
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Current orientation quaternion (x, y, z, w), or `None` if the sensor
    /// does not publish one.
    pub fn orientation(&self) -> Option<[f64; 4]> {
        self.orientation.as_ref().map(|b| b.read())
    }

    /// Current row-major 3×3 orientation covariance, or `None` if absent.
    pub fn orientation_covariance(&self) -> Option<[f64; 9]> {
        self.orientation_covariance.as_ref().map(|b| b.read())
    }

    /// Current angular velocity (x, y, z) in rad/s, or `None` if absent.
    pub fn angular_velocity(&self) -> Option<[f64; 3]> {
        self.angular_velocity.as_ref().map(|b| b.read())
    }

    /// Current row-major 3×3 angular velocity covariance, or `None` if
    /// absent.
    pub fn angular_velocity_covariance(&self) -> Option<[f64; 9]> {
        self.angular_velocity_covariance.as_ref().map(|b| b.read())
    }

    /// Current linear acceleration (x, y, z) in m/s², or `None` if absent.
    pub fn linear_acceleration(&self) -> Option<[f64; 3]> {
        self.linear_acceleration.as_ref().map(|b| b.read())
    }

    /// Current row-major 3×3 linear acceleration covariance, or `None` if
    /// absent.
    pub fn linear_acceleration_covariance(&self) -> Option<[f64; 9]> {
        self.linear_acceleration_covariance.as_ref().map(|b| b.read())
    }
}

/// Name-keyed directory of [`ImuHandle`]s for one hardware interface
/// instance.
///
/// Created once at framework startup. Drivers register sensors during their
/// initialisation; entries persist for the process lifetime (there is no
/// deregistration).
#[derive(Debug)]
pub struct ImuInterface {
    handles: ResourceRegistry<ImuHandle>,
}

impl Default for ImuInterface {
    fn default() -> Self {
        Self::new()
    }
}

impl ImuInterface {
    /// Create an interface with no registered sensors.
    pub fn new() -> Self {
        Self {
            handles: ResourceRegistry::new(std::any::type_name::<Self>()),
        }
    }

    /// Names of all registered sensors, in registration order.
    pub fn sensor_names(&self) -> &[String] {
        self.handles.names()
    }

    /// Register a new IMU sensor described by `data`.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::DuplicateResource`] if a sensor named `data.name`
    /// is already registered; the existing handle is left untouched.
    pub fn register_sensor(&mut self, data: ImuData) -> Result<(), HalError> {
        let name = data.name.clone();
        let handle = ImuHandle::new(data);
        debug!(
            sensor = %name,
            frame_id = %handle.frame_id(),
            capabilities = ?handle.capabilities(),
            "registering IMU sensor"
        );
        self.handles.insert(name, handle)
    }

    /// Look up the handle registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::ResourceNotFound`] naming both the sensor and this
    /// interface if no such sensor is registered.
    pub fn sensor_handle(&self, name: &str) -> Result<ImuHandle, HalError> {
        self.handles.get(name)
    }
}
