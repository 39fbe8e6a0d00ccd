use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Axis, button and hat values for one attached joystick.
///
/// Axes are `[-1, 1]`, hats use the POV angle convention (-1 when not
/// pressed, otherwise degrees clockwise from north).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoystickState {
    pub axes: Vec<f32>,
    pub buttons: Vec<bool>,
    pub hats: Vec<i16>,
}

impl JoystickState {
    pub fn new(axes: usize, buttons: usize, hats: usize) -> Self {
        Self {
            axes: vec![0.0; axes],
            buttons: vec![false; buttons],
            hats: vec![-1; hats],
        }
    }
}

/// Registry of attached joysticks.
///
/// The codecs only read it; the HID layer (out of scope here) registers
/// devices and feeds fresh values through the setters. Out-of-range reads
/// return neutral values, which is exactly what the wire formats expect for
/// missing joysticks.
#[derive(Debug, Default)]
pub struct Joysticks {
    sticks: RwLock<Vec<JoystickState>>,
}

impl Joysticks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.sticks.read().len()
    }

    /// Registers a joystick with the given capability counts.
    pub fn add(&self, axes: usize, buttons: usize, hats: usize) {
        self.sticks.write().push(JoystickState::new(axes, buttons, hats));
    }

    /// Drops every registered joystick (e.g. on protocol switch, so the new
    /// codec's capability caps can be re-applied).
    pub fn remove_all(&self) {
        self.sticks.write().clear();
    }

    /// Replaces the whole registry with the HID layer's latest poll.
    pub fn set_states(&self, states: Vec<JoystickState>) {
        *self.sticks.write() = states;
    }

    pub fn num_axes(&self, stick: usize) -> usize {
        self.sticks.read().get(stick).map_or(0, |s| s.axes.len())
    }

    pub fn num_buttons(&self, stick: usize) -> usize {
        self.sticks.read().get(stick).map_or(0, |s| s.buttons.len())
    }

    pub fn num_hats(&self, stick: usize) -> usize {
        self.sticks.read().get(stick).map_or(0, |s| s.hats.len())
    }

    pub fn axis(&self, stick: usize, axis: usize) -> f32 {
        self.sticks
            .read()
            .get(stick)
            .and_then(|s| s.axes.get(axis).copied())
            .unwrap_or(0.0)
    }

    pub fn button(&self, stick: usize, button: usize) -> bool {
        self.sticks
            .read()
            .get(stick)
            .and_then(|s| s.buttons.get(button).copied())
            .unwrap_or(false)
    }

    pub fn hat(&self, stick: usize, hat: usize) -> i16 {
        self.sticks
            .read()
            .get(stick)
            .and_then(|s| s.hats.get(hat).copied())
            .unwrap_or(-1)
    }

    pub fn set_axis(&self, stick: usize, axis: usize, value: f32) {
        if let Some(slot) = self
            .sticks
            .write()
            .get_mut(stick)
            .and_then(|s| s.axes.get_mut(axis))
        {
            *slot = value.clamp(-1.0, 1.0);
        }
    }

    pub fn set_button(&self, stick: usize, button: usize, pressed: bool) {
        if let Some(slot) = self
            .sticks
            .write()
            .get_mut(stick)
            .and_then(|s| s.buttons.get_mut(button))
        {
            *slot = pressed;
        }
    }

    pub fn set_hat(&self, stick: usize, hat: usize, angle: i16) {
        if let Some(slot) = self
            .sticks
            .write()
            .get_mut(stick)
            .and_then(|s| s.hats.get_mut(hat))
        {
            *slot = angle;
        }
    }
}
