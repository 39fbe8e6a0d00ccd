use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlMode {
    Teleoperated,
    Autonomous,
    Test,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alliance {
    Red,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    One,
    Two,
    Three,
}

/// One consistent view of the team state shared between the UI, the
/// scheduler and the protocol codecs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    pub team_number: u16,
    pub control_mode: ControlMode,
    pub alliance: Alliance,
    pub position: Position,
    pub robot_enabled: bool,
    pub emergency_stopped: bool,
    pub fms_comms: bool,
    pub radio_comms: bool,
    pub robot_comms: bool,
    pub robot_code_present: bool,
    pub robot_voltage: f32,
    pub robot_cpu_usage: u8,
    pub robot_ram_usage: u8,
    pub robot_disk_usage: u8,
    pub can_utilization: u8,
}

impl Default for ConfigSnapshot {
    fn default() -> Self {
        Self {
            team_number: 0,
            control_mode: ControlMode::Teleoperated,
            alliance: Alliance::Red,
            position: Position::One,
            robot_enabled: false,
            emergency_stopped: false,
            fms_comms: false,
            radio_comms: false,
            robot_comms: false,
            robot_code_present: false,
            robot_voltage: 0.0,
            robot_cpu_usage: 0,
            robot_ram_usage: 0,
            robot_disk_usage: 0,
            can_utilization: 0,
        }
    }
}

impl ConfigSnapshot {
    /// Latches the emergency stop. E-stop implies not-enabled, so raising it
    /// also drops the enable flag; lowering it leaves the robot disabled
    /// until the operator enables it again.
    pub fn set_emergency_stopped(&mut self, stopped: bool) {
        self.emergency_stopped = stopped;
        if stopped {
            self.robot_enabled = false;
        }
    }
}

/// Registry holding the shared driver-station configuration.
///
/// Readers may observe different fields across separate calls (fields are
/// independent), but every individual read is consistent, and parsers commit
/// all mutations from one datagram in a single [`Config::apply`] call.
#[derive(Debug, Default)]
pub struct Config {
    inner: RwLock<ConfigSnapshot>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clones the whole record, e.g. for pushing to a UI.
    pub fn snapshot(&self) -> ConfigSnapshot {
        self.inner.read().clone()
    }

    /// Runs `f` under the write lock. Packet parsers use this so that every
    /// field mutated by one inbound datagram becomes visible at once.
    pub fn apply<F: FnOnce(&mut ConfigSnapshot)>(&self, f: F) {
        f(&mut self.inner.write());
    }

    pub fn team_number(&self) -> u16 {
        self.inner.read().team_number
    }

    pub fn set_team_number(&self, team: u16) {
        let team = if team > 9999 {
            tracing::warn!("team number {team} out of range, clamping to 9999");
            9999
        } else {
            team
        };
        self.inner.write().team_number = team;
    }

    pub fn control_mode(&self) -> ControlMode {
        self.inner.read().control_mode
    }

    pub fn set_control_mode(&self, mode: ControlMode) {
        self.inner.write().control_mode = mode;
    }

    pub fn alliance(&self) -> Alliance {
        self.inner.read().alliance
    }

    pub fn set_alliance(&self, alliance: Alliance) {
        self.inner.write().alliance = alliance;
    }

    pub fn position(&self) -> Position {
        self.inner.read().position
    }

    pub fn set_position(&self, position: Position) {
        self.inner.write().position = position;
    }

    pub fn robot_enabled(&self) -> bool {
        self.inner.read().robot_enabled
    }

    pub fn set_robot_enabled(&self, enabled: bool) {
        let mut inner = self.inner.write();
        // The e-stop latch wins over any enable request
        inner.robot_enabled = enabled && !inner.emergency_stopped;
    }

    pub fn emergency_stopped(&self) -> bool {
        self.inner.read().emergency_stopped
    }

    pub fn set_emergency_stopped(&self, stopped: bool) {
        self.inner.write().set_emergency_stopped(stopped);
    }

    pub fn fms_comms(&self) -> bool {
        self.inner.read().fms_comms
    }

    pub fn set_fms_comms(&self, connected: bool) {
        self.inner.write().fms_comms = connected;
    }

    pub fn radio_comms(&self) -> bool {
        self.inner.read().radio_comms
    }

    pub fn set_radio_comms(&self, connected: bool) {
        self.inner.write().radio_comms = connected;
    }

    pub fn robot_comms(&self) -> bool {
        self.inner.read().robot_comms
    }

    pub fn set_robot_comms(&self, connected: bool) {
        self.inner.write().robot_comms = connected;
    }

    pub fn robot_code_present(&self) -> bool {
        self.inner.read().robot_code_present
    }

    pub fn set_robot_code_present(&self, present: bool) {
        self.inner.write().robot_code_present = present;
    }

    pub fn robot_voltage(&self) -> f32 {
        self.inner.read().robot_voltage
    }

    pub fn set_robot_voltage(&self, voltage: f32) {
        self.inner.write().robot_voltage = voltage;
    }

    pub fn robot_cpu_usage(&self) -> u8 {
        self.inner.read().robot_cpu_usage
    }

    pub fn robot_ram_usage(&self) -> u8 {
        self.inner.read().robot_ram_usage
    }

    pub fn robot_disk_usage(&self) -> u8 {
        self.inner.read().robot_disk_usage
    }

    pub fn can_utilization(&self) -> u8 {
        self.inner.read().can_utilization
    }
}
