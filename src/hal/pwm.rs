//! PWM channel description and transport.

/// RK3588 PWM controller instance (four channels each).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmController {
    Pwm0 = 0,
    Pwm1,
    Pwm2,
    Pwm3,
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmChannel {
    Channel0 = 0,
    Channel1,
    Channel2,
    Channel3,
}

/// A single PWM output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PwmChannelId {
    pub controller: PwmController,
    pub channel: PwmChannel,
}

/// Full channel programming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PwmConfig {
    pub id: PwmChannelId,
    pub period_ns: u32,
    pub duty_ns: u32,
    /// Output idles high and the duty phase is low.
    pub inverted: bool,
}

/// The firmware PWM library.
pub trait PwmTransport {
    /// Writes period, duty and polarity. Does not touch the enable bit.
    fn configure_pwm_channel(&mut self, config: &PwmConfig);
    fn enable_pwm_channel(&mut self, id: PwmChannelId);
}
