//! Demonstration driver for the segregated capabilities.
//!
//! Nothing here can fail on a capability mismatch. A device without
//! [`Chargeable`] is skipped after the `as_chargeable` check, and the helpers
//! only accept references that already carry the capability they use.

use std::io::Write;

use anyhow::Context;
use devicekit_core::{DeviceModel, Notification};
use tracing::{debug, info};

use crate::capability::{Chargeable, PowerControllable};
use crate::device::{DisposableCamera, DisposableFlashlight, Laptop, Phone};

/// What a demonstration run did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DemoReport {
    /// Status lines emitted by devices.
    pub notifications: usize,
    /// Charges performed.
    pub charged: usize,
    /// Devices skipped by the capability check.
    pub skipped: usize,
}

impl DemoReport {
    fn merge(&mut self, other: DemoReport) {
        self.notifications += other.notifications;
        self.charged += other.charged;
        self.skipped += other.skipped;
    }
}

/// Run the whole demonstration, writing narration to `out`.
pub fn run(out: &mut impl Write) -> anyhow::Result<DemoReport> {
    info!("segregated-interface demonstration starting");

    let mut report = DemoReport::default();

    line(out, "=== Segregated interfaces: devices implement only what they support ===")?;

    let rechargeable: Vec<Box<dyn PowerControllable>> = vec![Box::new(Phone), Box::new(Laptop)];
    let disposable: Vec<Box<dyn PowerControllable>> =
        vec![Box::new(DisposableCamera), Box::new(DisposableFlashlight)];

    line(out, "")?;
    line(out, "--- Rechargeable devices (PowerControllable + Chargeable) ---")?;
    for device in &rechargeable {
        line(out, "")?;
        line(out, &format!("> {}", device.display_name()))?;
        report.merge(exercise(device.as_ref(), out)?);
    }

    line(out, "")?;
    line(out, "--- Non-rechargeable devices (PowerControllable only) ---")?;
    for device in &disposable {
        line(out, "")?;
        line(out, &format!("> {}", device.display_name()))?;
        report.merge(exercise(device.as_ref(), out)?);
    }

    line(out, "")?;
    line(out, "--- Polymorphism ---")?;
    line(out, "")?;
    line(out, "> Accepts only Chargeable devices:")?;
    let chargers: [Box<dyn Chargeable>; 2] = [Box::new(Phone), Box::new(Laptop)];
    for charger in &chargers {
        report.merge(demonstrate_chargeable(charger.as_ref(), out)?);
    }

    line(out, "")?;
    line(out, "> Accepts any PowerControllable device:")?;
    for device in rechargeable.iter().chain(&disposable) {
        report.merge(demonstrate_power(device.as_ref(), out)?);
    }

    line(out, "")?;
    line(out, "=== Conclusion ===")?;
    line(out, "- Each device implements only the capabilities it supports.")?;
    line(out, "- No operation can fail because a device does not support it.")?;
    line(out, "- Non-rechargeable devices have no charge() to call.")?;

    info!(
        notifications = report.notifications,
        charged = report.charged,
        skipped = report.skipped,
        "segregated-interface demonstration finished"
    );
    Ok(report)
}

/// Power on, charge if the device has the capability, power off.
pub fn exercise(
    device: &dyn PowerControllable,
    out: &mut impl Write,
) -> anyhow::Result<DemoReport> {
    let mut report = DemoReport::default();

    emit(out, device.turn_on(), &mut report)?;

    match device.as_chargeable() {
        Some(charger) => {
            emit(out, charger.charge(), &mut report)?;
            report.charged += 1;
        }
        None => {
            debug!(device = device.display_name(), "no charging capability; skipping");
            line(out, "  (cannot be charged: does not implement Chargeable)")?;
            report.skipped += 1;
        }
    }

    emit(out, device.turn_off(), &mut report)?;
    Ok(report)
}

/// Charge a device. Only chargeable devices can be passed in.
///
/// ```
/// use devicekit_after::{Laptop, Phone, demo};
///
/// let mut out = Vec::new();
/// demo::demonstrate_chargeable(&Phone, &mut out).unwrap();
/// demo::demonstrate_chargeable(&Laptop, &mut out).unwrap();
/// ```
///
/// ```compile_fail
/// use devicekit_after::{DisposableCamera, demo};
///
/// let mut out = Vec::new();
/// demo::demonstrate_chargeable(&DisposableCamera, &mut out).unwrap();
/// ```
pub fn demonstrate_chargeable(
    device: &dyn Chargeable,
    out: &mut impl Write,
) -> anyhow::Result<DemoReport> {
    let mut report = DemoReport::default();
    line(out, "  - charging a rechargeable device...")?;
    emit(out, device.charge(), &mut report)?;
    report.charged += 1;
    Ok(report)
}

/// Turn on any device with power control.
pub fn demonstrate_power(
    device: &dyn PowerControllable,
    out: &mut impl Write,
) -> anyhow::Result<DemoReport> {
    let mut report = DemoReport::default();
    emit(out, device.turn_on(), &mut report)?;
    Ok(report)
}

fn emit(
    out: &mut impl Write,
    notification: Notification,
    report: &mut DemoReport,
) -> anyhow::Result<()> {
    debug!(
        device = notification.subject(),
        operation = %notification.operation(),
        "{notification}"
    );
    writeln!(out, "{notification}").context("failed to write notification")?;
    report.notifications += 1;
    Ok(())
}

fn line(out: &mut impl Write, text: &str) -> anyhow::Result<()> {
    writeln!(out, "{text}").context("failed to write narration")
}
