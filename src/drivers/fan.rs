//! PWM fan.
//!
//! [`Fan::setup`] muxes the fan pad, programs the channel at full speed and
//! enables it. The returned handle is the only owner of the channel
//! configuration; [`Fan::set_speed`] rewrites the duty cycle alone, never the
//! period or the enable bit, so it can be called at any rate without the
//! output dropping out.

use crate::drivers::pinmux::PinRef;
use crate::hal::gpio::PinTransport;
use crate::hal::pwm::{PwmChannelId, PwmConfig, PwmTransport};

/// Board wiring of the fan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FanDescriptor {
    pub pad: PinRef,
    pub channel: PwmChannelId,
    pub period_ns: u32,
    pub inverted: bool,
}

pub const FULL_SPEED: u32 = 100;

/// Duty for `percentage` of `period_ns`, rounded down. Percentages above
/// 100 are clamped.
pub const fn duty_ns(period_ns: u32, percentage: u32) -> u32 {
    let percentage = if percentage > FULL_SPEED {
        FULL_SPEED
    } else {
        percentage
    };
    (period_ns as u64 * percentage as u64 / FULL_SPEED as u64) as u32
}

/// Handle to a running fan channel.
#[derive(Debug)]
pub struct Fan {
    config: PwmConfig,
}

impl Fan {
    pub fn setup<H: PinTransport + PwmTransport + ?Sized>(hal: &mut H, desc: &FanDescriptor) -> Fan {
        desc.pad.apply(hal);
        let config = PwmConfig {
            id: desc.channel,
            period_ns: desc.period_ns,
            duty_ns: duty_ns(desc.period_ns, FULL_SPEED),
            inverted: desc.inverted,
        };
        hal.configure_pwm_channel(&config);
        hal.enable_pwm_channel(config.id);
        info!(
            "fan: {:?} on {}, period {} ns, full speed",
            config.id, desc.pad.pin, config.period_ns
        );
        Fan { config }
    }

    pub fn set_speed<W: PwmTransport + ?Sized>(&mut self, pwm: &mut W, percentage: u32) {
        if percentage > FULL_SPEED {
            debug!("fan: {}% clamped to {}%", percentage, FULL_SPEED);
        }
        self.config.duty_ns = duty_ns(self.config.period_ns, percentage);
        pwm.configure_pwm_channel(&self.config);
    }

    pub fn config(&self) -> &PwmConfig {
        &self.config
    }
}
