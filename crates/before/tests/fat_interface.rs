use devicekit_before::demo::{self, DemoReport};
use devicekit_before::{Device, DisposableCamera, DisposableFlashlight, Laptop, Phone};
use devicekit_core::{DeviceError, Operation};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Kind {
    Phone,
    Laptop,
    DisposableCamera,
    DisposableFlashlight,
}

impl Kind {
    fn build(self) -> Box<dyn Device> {
        match self {
            Kind::Phone => Box::new(Phone),
            Kind::Laptop => Box::new(Laptop),
            Kind::DisposableCamera => Box::new(DisposableCamera),
            Kind::DisposableFlashlight => Box::new(DisposableFlashlight),
        }
    }

    fn rechargeable(self) -> bool {
        matches!(self, Kind::Phone | Kind::Laptop)
    }
}

fn kind_strategy() -> impl Strategy<Value = Kind> {
    prop::sample::select(vec![
        Kind::Phone,
        Kind::Laptop,
        Kind::DisposableCamera,
        Kind::DisposableFlashlight,
    ])
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop::sample::select(Operation::ALL.to_vec())
}

proptest! {
    #[test]
    fn charge_outcome_depends_only_on_device_type(
        kind in kind_strategy(),
        ops in prop::collection::vec(operation_strategy(), 1..32),
    ) {
        let device = kind.build();
        let rechargeable = kind.rechargeable();
        for op in ops {
            match op {
                Operation::TurnOn => {
                    prop_assert!(!device.turn_on().to_string().is_empty());
                }
                Operation::TurnOff => {
                    prop_assert!(!device.turn_off().to_string().is_empty());
                }
                Operation::Charge => match device.charge() {
                    Ok(n) => {
                        prop_assert!(rechargeable);
                        prop_assert_eq!(n.operation(), Operation::Charge);
                        prop_assert!(!n.to_string().is_empty());
                    }
                    Err(err) => {
                        prop_assert!(!rechargeable);
                        prop_assert_eq!(err.operation(), Operation::Charge);
                        prop_assert!(err.to_string().starts_with("unsupported operation `charge`"));
                        // Recoverable: the device keeps working afterwards.
                        prop_assert_eq!(device.turn_off().operation(), Operation::TurnOff);
                    }
                },
            }
        }
    }
}

#[test]
fn disposable_camera_charge_is_caught_then_turn_off_succeeds() {
    let camera: Box<dyn Device> = Box::new(DisposableCamera);

    camera.turn_on();
    let result = camera.charge();

    assert_eq!(
        result,
        Err(DeviceError::unsupported(
            Operation::Charge,
            "Disposable cameras cannot be charged."
        ))
    );
    assert_eq!(camera.turn_off().to_string(), "Disposable camera is turning off.");
}

#[test]
fn full_run_completes_and_narrates_every_failure() {
    let mut buf = Vec::new();
    let report = demo::run(&mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();

    assert_eq!(
        report,
        DemoReport {
            // turn_on + turn_off for four devices, plus two successful charges.
            notifications: 10,
            failures: 2,
        }
    );

    let expected_in_order = [
        "--- Phone ---",
        "Phone is charging.",
        "--- Laptop ---",
        "Laptop is charging.",
        "--- Disposable camera ---",
        "ERROR: Disposable cameras cannot be charged.",
        "Disposable camera is turning off.",
        "--- Disposable flashlight ---",
        "ERROR: Disposable flashlights cannot be charged.",
        "Disposable flashlight is turning off.",
    ];
    let mut cursor = 0;
    for needle in expected_in_order {
        let found = text[cursor..]
            .find(needle)
            .unwrap_or_else(|| panic!("missing `{needle}` after byte {cursor}:\n{text}"));
        cursor += found + needle.len();
    }
}
