//! Demonstration driver for the fat interface.
//!
//! `charge` is called on every device through `&dyn Device`. Devices that
//! cannot charge return `DeviceError::Unsupported`; the driver handles it right
//! at the call site, explains the flaw, and carries on with `turn_off`.

use std::io::Write;

use anyhow::Context;
use devicekit_core::{DeviceError, DeviceModel, Notification};
use tracing::{debug, info, warn};

use crate::device::{Device, DisposableCamera, DisposableFlashlight, Laptop, Phone};

/// What a demonstration run did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DemoReport {
    /// Status lines emitted by devices.
    pub notifications: usize,
    /// Unsupported-operation failures caught and narrated.
    pub failures: usize,
}

impl DemoReport {
    fn merge(&mut self, other: DemoReport) {
        self.notifications += other.notifications;
        self.failures += other.failures;
    }
}

/// Fresh devices for one run, in narration order.
pub fn roster() -> Vec<Box<dyn Device>> {
    vec![
        Box::new(Phone),
        Box::new(Laptop),
        Box::new(DisposableCamera),
        Box::new(DisposableFlashlight),
    ]
}

/// Run the whole demonstration, writing narration to `out`.
///
/// Only write failures on `out` are returned as errors.
pub fn run(out: &mut impl Write) -> anyhow::Result<DemoReport> {
    info!("fat-interface demonstration starting");

    writeln!(out, "=== Fat interface: every device must implement charge() ===")
        .context("failed to write narration")?;

    let mut report = DemoReport::default();
    for device in roster() {
        writeln!(out).context("failed to write narration")?;
        writeln!(out, "--- {} ---", device.display_name()).context("failed to write narration")?;
        report.merge(exercise(device.as_ref(), out)?);
    }

    info!(
        notifications = report.notifications,
        failures = report.failures,
        "fat-interface demonstration finished"
    );
    Ok(report)
}

/// Power on, charge unconditionally, power off.
pub fn exercise(device: &dyn Device, out: &mut impl Write) -> anyhow::Result<DemoReport> {
    let mut report = DemoReport::default();

    emit(out, device.turn_on(), &mut report)?;

    match device.charge() {
        Ok(notification) => emit(out, notification, &mut report)?,
        Err(err) => {
            report.failures += 1;
            narrate_failure(device, &err, out)?;
        }
    }

    emit(out, device.turn_off(), &mut report)?;
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

fn narrate_failure(
    device: &dyn Device,
    err: &DeviceError,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    warn!(
        device = device.display_name(),
        operation = %err.operation(),
        reason = err.reason(),
        "device refused an operation its interface promises"
    );

    writeln!(out, "ERROR: {}", err.reason()).context("failed to write narration")?;
    writeln!(
        out,
        "This is the problem: the Device interface forces {} to implement `{}`,",
        device.display_name(),
        err.operation()
    )
    .context("failed to write narration")?;
    writeln!(out, "an operation that makes no sense for it.").context("failed to write narration")?;
    Ok(())
}
