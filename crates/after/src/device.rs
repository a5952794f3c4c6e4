//! Concrete devices, each declaring only the capabilities it has.

use devicekit_core::DeviceModel;

use crate::capability::{Chargeable, PowerControllable};

/// Rechargeable.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Phone;

/// Rechargeable.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Laptop;

/// Power control only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DisposableCamera;

/// Power control only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DisposableFlashlight;

impl DeviceModel for Phone {
    fn display_name(&self) -> &'static str {
        "Phone"
    }
}

impl DeviceModel for Laptop {
    fn display_name(&self) -> &'static str {
        "Laptop"
    }
}

impl DeviceModel for DisposableCamera {
    fn display_name(&self) -> &'static str {
        "Disposable camera"
    }
}

impl DeviceModel for DisposableFlashlight {
    fn display_name(&self) -> &'static str {
        "Disposable flashlight"
    }
}

impl PowerControllable for Phone {
    fn as_chargeable(&self) -> Option<&dyn Chargeable> {
        Some(self)
    }
}

impl Chargeable for Phone {}

impl PowerControllable for Laptop {
    fn as_chargeable(&self) -> Option<&dyn Chargeable> {
        Some(self)
    }
}

impl Chargeable for Laptop {}

impl PowerControllable for DisposableCamera {}

impl PowerControllable for DisposableFlashlight {}
