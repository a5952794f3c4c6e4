//! Segregated-capability device model.
//!
//! Power control ([`PowerControllable`]) and charging ([`Chargeable`]) are
//! separate traits. Rechargeable devices implement both; disposable ones
//! implement power control only, so charging them is a type error rather than
//! a runtime failure:
//!
//! ```compile_fail
//! use devicekit_after::{Chargeable, DisposableCamera};
//!
//! DisposableCamera.charge();
//! ```
//!
//! ```compile_fail
//! use devicekit_after::{Chargeable, DisposableCamera};
//!
//! let charger: &dyn Chargeable = &DisposableCamera;
//! ```
//!
//! A power-only reference has no `charge`, even when the device behind it
//! could be charged:
//!
//! ```compile_fail
//! use devicekit_after::{Chargeable, Phone, PowerControllable};
//!
//! let device: &dyn PowerControllable = &Phone;
//! device.charge();
//! ```
//!
//! Narrowing goes through [`PowerControllable::as_chargeable`]:
//!
//! ```
//! use devicekit_after::{Chargeable, DisposableCamera, Phone, PowerControllable};
//!
//! let phone: &dyn PowerControllable = &Phone;
//! let camera: &dyn PowerControllable = &DisposableCamera;
//!
//! let charged = phone.as_chargeable().map(|c| c.charge().to_string());
//! assert_eq!(charged.as_deref(), Some("Phone is charging."));
//! assert!(camera.as_chargeable().is_none());
//! ```

pub mod capability;
pub mod demo;
pub mod device;

pub use capability::{Chargeable, PowerControllable};
pub use demo::DemoReport;
pub use device::{DisposableCamera, DisposableFlashlight, Laptop, Phone};
