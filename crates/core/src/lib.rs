//! `devicekit-core`: primitives shared by both device models.
//!
//! Nothing here performs IO. Devices report what they did through
//! [`Notification`] values and refuse work through [`DeviceError`].

pub mod error;
pub mod model;
pub mod notification;
pub mod operation;

pub use error::{DeviceError, DeviceResult};
pub use model::DeviceModel;
pub use notification::Notification;
pub use operation::Operation;
