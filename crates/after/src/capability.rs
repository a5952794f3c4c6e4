//! Capability traits.
//!
//! Power control and charging are independent. A device implements
//! [`Chargeable`] only if charging it means something; there is no way to
//! reach `charge` from a [`PowerControllable`] reference except through
//! [`PowerControllable::as_chargeable`], which only the chargeable types can
//! answer with `Some`.

use devicekit_core::{DeviceModel, Notification, Operation};

/// Capability: switch a device on and off.
///
/// Both operations always succeed.
pub trait PowerControllable: DeviceModel {
    fn turn_on(&self) -> Notification {
        Notification::of(self, Operation::TurnOn)
    }

    fn turn_off(&self) -> Notification {
        Notification::of(self, Operation::TurnOff)
    }

    /// Narrow to the charging capability, if this device has it.
    ///
    /// Meant for heterogeneous collections. When the concrete type is known,
    /// hold it as `&dyn Chargeable` (or generically) instead.
    fn as_chargeable(&self) -> Option<&dyn Chargeable> {
        None
    }
}

/// Capability: charge a device. Always succeeds.
pub trait Chargeable: DeviceModel {
    fn charge(&self) -> Notification {
        Notification::of(self, Operation::Charge)
    }
}
