//! Status notifications produced by device operations.
//!
//! Devices never print. Each operation returns a [`Notification`] and the
//! caller decides where the line goes (console, log, test buffer).

use crate::model::DeviceModel;
use crate::operation::Operation;

/// An immutable record of one completed device operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Notification {
    subject: &'static str,
    operation: Operation,
}

impl Notification {
    pub fn new(subject: &'static str, operation: Operation) -> Self {
        Self { subject, operation }
    }

    /// Build a notification for `device`, using its display name as subject.
    pub fn of<D: DeviceModel + ?Sized>(device: &D, operation: Operation) -> Self {
        Self::new(device.display_name(), operation)
    }

    pub fn subject(&self) -> &'static str {
        self.subject
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }
}

impl core::fmt::Display for Notification {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} is {}.", self.subject, self.operation.progressive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Kettle;

    impl DeviceModel for Kettle {
        fn display_name(&self) -> &'static str {
            "Kettle"
        }
    }

    #[test]
    fn renders_one_line_per_operation() {
        let lines: Vec<String> = Operation::ALL
            .iter()
            .map(|op| Notification::of(&Kettle, *op).to_string())
            .collect();

        assert_eq!(
            lines,
            vec![
                "Kettle is turning on.".to_string(),
                "Kettle is turning off.".to_string(),
                "Kettle is charging.".to_string(),
            ]
        );
    }

    #[test]
    fn keeps_subject_and_operation() {
        let n = Notification::of(&Kettle, Operation::Charge);
        assert_eq!(n.subject(), "Kettle");
        assert_eq!(n.operation(), Operation::Charge);
        assert_eq!(n, Notification::new("Kettle", Operation::Charge));
    }
}
