//! Device identity for presentation.

/// Every concrete device names itself.
///
/// The name is only used in status lines; no logic branches on it.
pub trait DeviceModel {
    /// Human-readable name, e.g. "Disposable camera".
    fn display_name(&self) -> &'static str;
}

