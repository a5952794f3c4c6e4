//! Fat-interface device model.
//!
//! All devices implement one [`Device`] trait, including `charge`. The ones
//! that cannot be charged can only say so at runtime.

pub mod demo;
pub mod device;

pub use demo::DemoReport;
pub use device::{Device, DisposableCamera, DisposableFlashlight, Laptop, Phone};
