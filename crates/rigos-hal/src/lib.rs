//! `rigos-hal` – Hardware Abstraction Layer
//!
//! The read side of the RigOS hardware interface. Drivers publish sensor
//! state through shared buffers; controllers read it through cheap, cloneable
//! handles looked up by name. This layer is passive: it defines no threads
//! and never blocks. Scheduling and write/read ordering belong to the
//! surrounding control framework.
//!
//! # Modules
//!
//! - [`buffer`] – [`SensorBuffer`][buffer::SensorBuffer]:
//!   fixed-size f64 storage shared between a driver-side writer and
//!   handle-side readers, with no internal synchronization.
//! - [`registry`] – [`ResourceRegistry`][registry::ResourceRegistry]:
//!   generic name-keyed directory of hardware handles; duplicate names are a
//!   configuration error, lookups return clones.
//! - [`imu`] – [`ImuHandle`][imu::ImuHandle] / [`ImuInterface`][imu::ImuInterface]:
//!   read-only views of an IMU's orientation, angular velocity, and linear
//!   acceleration (plus covariances), with a capability mask describing which
//!   quantities the sensor publishes.

pub mod buffer;
pub mod imu;
pub mod registry;

pub use buffer::{CovarianceBuffer, QuaternionBuffer, SensorBuffer, Vector3Buffer};
pub use imu::{Capabilities, ImuData, ImuHandle, ImuInterface};
pub use registry::ResourceRegistry;
