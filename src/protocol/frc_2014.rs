use std::sync::Arc;
use std::time::Duration;

use crate::config::{Alliance, Config, ControlMode, Position};
use crate::joystick::Joysticks;
use crate::protocol::{Protocol, SocketSpec};
use crate::util::{crc32, float_to_signed_byte, static_ip};

const ENABLED: u8 = 0x20;
const TEST_MODE: u8 = 0x02;
const AUTONOMOUS: u8 = 0x10;
const TELEOPERATED: u8 = 0x00;
const FMS_ATTACHED: u8 = 0x08;
const RESYNC_COMMS: u8 = 0x04;
const REBOOT_ROBOT: u8 = 0x80;
const ESTOP_ON: u8 = 0x00;
const ESTOP_OFF: u8 = 0x40;
const POSITION_1: u8 = 0x31;
const POSITION_2: u8 = 0x32;
const POSITION_3: u8 = 0x33;
const ALLIANCE_RED: u8 = 0x52;
const ALLIANCE_BLUE: u8 = 0x42;
const FMS_AUTONOMOUS: u8 = 0x53;
const FMS_TELEOPERATED: u8 = 0x43;

/// Version string reported by the official 16.0.1 Driver Station
const DS_VERSION: &[u8; 8] = b"04011600";

const ROBOT_PACKET_SIZE: usize = 1024;
const FMS_PACKET_MIN: usize = 5;

const MAX_JOYSTICKS: usize = 4;
const MAX_AXES: usize = 6;
const MAX_BUTTONS: usize = 10;
const MAX_HATS: usize = 0;

/// The cRIO-era (2014) protocol.
///
/// Robot packets are a fixed 1024 bytes; the robot replies with the same
/// size. There is no request byte, so reboot and e-stop are folded into the
/// control code itself.
pub struct Frc2014 {
    config: Arc<Config>,
    joysticks: Arc<Joysticks>,
    sent_robot_packets: u16,
    resync: bool,
    reboot: bool,
    restart_code: bool,
}

impl Frc2014 {
    pub fn new(config: Arc<Config>, joysticks: Arc<Joysticks>) -> Self {
        Self {
            config,
            joysticks,
            sent_robot_packets: 0,
            resync: false,
            reboot: false,
            restart_code: false,
        }
    }

    /// Assembles the control code: e-stop state, enabled state, control
    /// mode, FMS link state and the extra commands (resync, reboot).
    ///
    /// The e-stop override zeroes the whole byte; the reboot override is
    /// applied after it, so a pending reboot wins over an active e-stop and
    /// can still reach a latched robot.
    fn control_code(&self) -> u8 {
        let mut code = ESTOP_OFF;
        let enabled = if self.config.robot_enabled() { ENABLED } else { 0x00 };

        code |= match self.config.control_mode() {
            ControlMode::Test => enabled + TEST_MODE,
            ControlMode::Autonomous => enabled + AUTONOMOUS,
            ControlMode::Teleoperated => enabled + TELEOPERATED,
        };

        if self.resync {
            code |= RESYNC_COMMS;
        }

        if self.config.fms_comms() {
            code |= FMS_ATTACHED;
        }

        if self.config.emergency_stopped() {
            code = ESTOP_ON;
        }

        if self.reboot {
            code = REBOOT_ROBOT;
        }

        code
    }

    fn alliance_code(&self) -> u8 {
        match self.config.alliance() {
            Alliance::Red => ALLIANCE_RED,
            Alliance::Blue => ALLIANCE_BLUE,
        }
    }

    fn position_code(&self) -> u8 {
        match self.config.position() {
            Position::One => POSITION_1,
            Position::Two => POSITION_2,
            Position::Three => POSITION_3,
        }
    }

    /// Number of digital inputs connected to the computer. None, ever.
    fn digital_inputs(&self) -> u8 {
        0x00
    }

    /// Serializes all four joystick slots into `data` starting at `offset`.
    ///
    /// The 2014 format always carries four joysticks of six axes and ten
    /// buttons; absent sticks and members read neutral. Button flags are a
    /// 16-bit big-endian field with bit `j` set when button `j` is pressed.
    fn write_joystick_data(&self, data: &mut [u8], mut offset: usize) {
        for stick in 0..MAX_JOYSTICKS {
            for axis in 0..MAX_AXES {
                data[offset] = float_to_signed_byte(self.joysticks.axis(stick, axis), 1.0);
                offset += 1;
            }

            let mut button_flags: u16 = 0;
            for button in 0..MAX_BUTTONS {
                if self.joysticks.button(stick, button) {
                    button_flags |= 1 << button;
                }
            }
            data[offset..offset + 2].copy_from_slice(&button_flags.to_be_bytes());
            offset += 2;
        }
    }
}

impl Protocol for Frc2014 {
    fn name(&self) -> &'static str {
        "FRC 2014"
    }

    /// Assigned when the DS receives the first FMS packet
    fn fms_address(&self) -> String {
        String::new()
    }

    fn radio_address(&self) -> String {
        static_ip(10, self.config.team_number(), 1)
    }

    fn robot_address(&self) -> String {
        static_ip(10, self.config.team_number(), 2)
    }

    /// The 2014 DS never speaks to the FMS; it only listens.
    fn build_fms_packet(&mut self) -> Vec<u8> {
        Vec::new()
    }

    fn build_radio_packet(&mut self) -> Vec<u8> {
        Vec::new()
    }

    fn build_robot_packet(&mut self) -> Vec<u8> {
        let mut data = vec![0u8; ROBOT_PACKET_SIZE];

        data[0..2].copy_from_slice(&self.sent_robot_packets.to_be_bytes());
        data[2] = self.control_code();
        data[3] = self.digital_inputs();
        data[4..6].copy_from_slice(&self.config.team_number().to_be_bytes());
        data[6] = self.alliance_code();
        data[7] = self.position_code();

        self.write_joystick_data(&mut data, 8);

        data[72..80].copy_from_slice(DS_VERSION);

        // Checksum of the whole datagram (with the checksum field zeroed)
        let checksum = crc32(&data);
        data[1020..1024].copy_from_slice(&checksum.to_be_bytes());

        self.sent_robot_packets = self.sent_robot_packets.wrapping_add(1);
        data
    }

    fn read_fms_packet(&mut self, data: &[u8]) -> bool {
        if data.len() < FMS_PACKET_MIN {
            tracing::trace!("discarding runt FMS packet ({} bytes)", data.len());
            return false;
        }

        let robot_mode = data[2];
        let alliance = data[3];
        let position = data[4];

        self.config.apply(|c| {
            // Both mask checks run in order; a byte matching both leaves the
            // DS in teleoperated.
            if robot_mode & FMS_AUTONOMOUS != 0 {
                c.control_mode = ControlMode::Autonomous;
            }
            if robot_mode & FMS_TELEOPERATED != 0 {
                c.control_mode = ControlMode::Teleoperated;
            }

            c.robot_enabled = (robot_mode & ENABLED != 0) && !c.emergency_stopped;

            c.alliance = if alliance == ALLIANCE_RED {
                Alliance::Red
            } else {
                Alliance::Blue
            };
            c.position = match position {
                POSITION_2 => Position::Two,
                POSITION_3 => Position::Three,
                _ => Position::One,
            };
        });

        true
    }

    fn read_radio_packet(&mut self, _data: &[u8]) -> bool {
        false
    }

    fn read_robot_packet(&mut self, data: &[u8]) -> bool {
        if data.len() < ROBOT_PACKET_SIZE {
            tracing::trace!("discarding runt robot packet ({} bytes)", data.len());
            return false;
        }

        // The voltage bytes use the hex-is-decimal convention: 12.14 V
        // arrives as 0x12 0x14. Scaling by 12/0x12 recovers the integer
        // part; the fraction byte rides along with the same rule of three.
        let upper = (data[1] as u32 * 12) / 0x12;
        let lower = (data[2] as u32 * 12) / 0x12;
        let voltage = upper as f32 + lower as f32 / 255.0;

        let estopped = data[0] == ESTOP_ON;

        self.config.apply(|c| {
            c.robot_voltage = voltage;
            c.set_emergency_stopped(estopped);
            // The cRIO reply carries no code flag; assume it is present
            c.robot_code_present = true;
        });

        true
    }

    fn reset_fms(&mut self) {}

    fn reset_radio(&mut self) {}

    fn reset_robot(&mut self) {
        tracing::debug!("robot watchdog expired, requesting resync");
        self.resync = true;
        self.reboot = false;
        self.restart_code = false;
    }

    fn reboot_robot(&mut self) {
        tracing::info!("cRIO reboot requested");
        self.reboot = true;
    }

    /// The 2014 wire format has no restart-code command; the flag is
    /// tracked so the descriptor contract behaves uniformly.
    fn restart_robot_code(&mut self) {
        self.restart_code = true;
    }

    fn fms_interval(&self) -> Duration {
        Duration::from_millis(500)
    }

    fn radio_interval(&self) -> Duration {
        Duration::ZERO
    }

    fn robot_interval(&self) -> Duration {
        Duration::from_millis(20)
    }

    fn max_joysticks(&self) -> usize {
        MAX_JOYSTICKS
    }

    fn max_axes(&self) -> usize {
        MAX_AXES
    }

    fn max_buttons(&self) -> usize {
        MAX_BUTTONS
    }

    fn max_hats(&self) -> usize {
        MAX_HATS
    }

    fn fms_socket(&self) -> SocketSpec {
        SocketSpec::udp(1120, 1160)
    }

    fn radio_socket(&self) -> SocketSpec {
        SocketSpec::disabled()
    }

    fn robot_socket(&self) -> SocketSpec {
        SocketSpec::udp(1150, 1110)
    }

    fn netconsole_socket(&self) -> SocketSpec {
        SocketSpec::disabled()
    }
}
