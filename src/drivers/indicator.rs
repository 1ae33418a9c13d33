//! Status LED and wireless-enable line.

use crate::hal::gpio::{Line, PinTransport};

/// Makes the LED pad an output. The LED stays off.
pub fn init_status<P: PinTransport + ?Sized>(pins: &mut P, led: Option<Line>) {
    if let Some(line) = led {
        line.drive_as_output(pins, false);
    }
}

pub fn set_status<P: PinTransport + ?Sized>(pins: &mut P, led: Option<Line>, enabled: bool) {
    if let Some(line) = led {
        line.drive(pins, enabled);
    }
}

/// Level and direction together on every call: the radio is enabled once at
/// early boot and never toggled afterwards.
pub fn set_wireless_enable<P: PinTransport + ?Sized>(
    pins: &mut P,
    line: Option<Line>,
    enabled: bool,
) {
    match line {
        Some(line) => {
            debug!("wireless: {} via {}", if enabled { "on" } else { "off" }, line.pin);
            line.drive_as_output(pins, enabled);
        }
        None => debug!("wireless: no enable line"),
    }
}
