//! The fat `Device` contract and the devices forced to implement it.

use devicekit_core::{DeviceError, DeviceModel, DeviceResult, Notification, Operation};

/// One contract bundling power control and charging.
///
/// Every implementor must provide `charge`, whether or not it can be charged.
/// A `&dyn Device` therefore always looks chargeable; callers only find out
/// otherwise by invoking it and inspecting the error.
pub trait Device: DeviceModel {
    fn turn_on(&self) -> Notification {
        Notification::of(self, Operation::TurnOn)
    }

    fn turn_off(&self) -> Notification {
        Notification::of(self, Operation::TurnOff)
    }

    fn charge(&self) -> DeviceResult<Notification>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Phone;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Laptop;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DisposableCamera;

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

impl Device for Phone {
    fn charge(&self) -> DeviceResult<Notification> {
        Ok(Notification::of(self, Operation::Charge))
    }
}

impl Device for Laptop {
    fn charge(&self) -> DeviceResult<Notification> {
        Ok(Notification::of(self, Operation::Charge))
    }
}

impl Device for DisposableCamera {
    fn charge(&self) -> DeviceResult<Notification> {
        // Required by `Device`, meaningless for this type.
        Err(DeviceError::unsupported(
            Operation::Charge,
            "Disposable cameras cannot be charged.",
        ))
    }
}

impl Device for DisposableFlashlight {
    fn charge(&self) -> DeviceResult<Notification> {
        Err(DeviceError::unsupported(
            Operation::Charge,
            "Disposable flashlights cannot be charged.",
        ))
    }
}
