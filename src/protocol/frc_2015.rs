use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use byteorder::{BigEndian, WriteBytesExt};

use crate::config::{Alliance, Config, ConfigSnapshot, ControlMode, Position};
use crate::joystick::Joysticks;
use crate::protocol::{Protocol, SocketSpec};
use crate::util::{day_of_year, days_to_date, float_to_signed_byte, static_ip};

const TEST_MODE: u8 = 0x01;
const AUTONOMOUS: u8 = 0x02;
const TELEOPERATED: u8 = 0x00;
const ENABLED: u8 = 0x04;
const FMS_ATTACHED: u8 = 0x08;
const EMERGENCY_STOP: u8 = 0x80;

const REQUEST_NORMAL: u8 = 0x80;
const REQUEST_REBOOT: u8 = 0x08;
const REQUEST_RESTART_CODE: u8 = 0x04;
const REQUEST_UNCONNECTED: u8 = 0x00;

const FMS_RADIO_PING: u8 = 0x10;
const FMS_ROBOT_PING: u8 = 0x08;
const FMS_ROBOT_COMMS: u8 = 0x20;
const FMS_DS_VERSION: u8 = 0x00;

const TAG_GENERAL: u8 = 0x01;
const TAG_JOYSTICK: u8 = 0x0c;
const TAG_DATE: u8 = 0x0f;
const TAG_TIMEZONE: u8 = 0x10;

const RED_1: u8 = 0x00;
const RED_2: u8 = 0x01;
const RED_3: u8 = 0x02;
const BLUE_1: u8 = 0x03;
const BLUE_2: u8 = 0x04;
const BLUE_3: u8 = 0x05;

const RTAG_CAN_INFO: u8 = 0x0e;
const RTAG_CPU_INFO: u8 = 0x05;
const RTAG_RAM_INFO: u8 = 0x06;
const RTAG_DISK_INFO: u8 = 0x04;

const REQUEST_TIME: u8 = 0x01;
const ROBOT_HAS_CODE: u8 = 0x20;

const FMS_PACKET_SIZE: usize = 8;
const FMS_PACKET_MIN: usize = 22;
const ROBOT_PACKET_MIN: usize = 8;

const MAX_JOYSTICKS: usize = 6;
const MAX_AXES: usize = 6;
const MAX_BUTTONS: usize = 10;
const MAX_HATS: usize = 1;

/// Reassembles a voltage from its integer and fractional wire bytes.
fn decode_voltage(upper: u8, lower: u8) -> f32 {
    upper as f32 + lower as f32 / 255.0
}

/// Splits a voltage into the integer byte and a fractional byte scaled by
/// 100. Decoding divides by 255, so fractional volts do not survive the
/// round trip exactly; whole volts do.
fn encode_voltage(voltage: f32) -> (u8, u8) {
    let upper = voltage as u8;
    let lower = ((voltage - voltage.floor()) * 100.0).round() as u8;
    (upper, lower)
}

/// Date/time and timezone tag block, from seconds since the Unix epoch.
/// The fields mirror broken-down time: 0-based month, years since 1900,
/// day-of-year truncated to a byte. Decomposition is done in UTC and the
/// zone name is reported accordingly.
fn timezone_data(unix_secs: u64) -> Vec<u8> {
    let tz = "UTC";
    let days = unix_secs / 86_400;
    let (year, month, day) = days_to_date(days);
    let yday = day_of_year(year, month, day);

    let mut data = Vec::with_capacity(12 + tz.len());
    data.push(0x0b);
    data.push(TAG_DATE);
    data.push(0);
    data.push(0);
    data.push((unix_secs % 60) as u8);
    data.push(((unix_secs / 60) % 60) as u8);
    data.push(((unix_secs / 3600) % 24) as u8);
    data.push(yday as u8);
    data.push(month - 1);
    data.push((year.wrapping_sub(1900)) as u8);
    data.push(tz.len() as u8);
    data.push(TAG_TIMEZONE);
    data.extend_from_slice(tz.as_bytes());
    data
}

/// The roboRIO-era (2015) protocol.
///
/// Robot packets are variable length: a six-byte header followed by either
/// a date/time block (when the robot asked for one) or the joystick tags.
/// Reboot and restart-code travel in a dedicated request byte instead of
/// the control code.
pub struct Frc2015 {
    config: Arc<Config>,
    joysticks: Arc<Joysticks>,
    sent_fms_packets: u16,
    sent_robot_packets: u16,
    send_time_data: bool,
    reboot: bool,
    restart_code: bool,
}

impl Frc2015 {
    pub fn new(config: Arc<Config>, joysticks: Arc<Joysticks>) -> Self {
        Self {
            config,
            joysticks,
            sent_fms_packets: 0,
            sent_robot_packets: 0,
            send_time_data: false,
            reboot: false,
            restart_code: false,
        }
    }

    /// Control code reported to the FMS: mode and enable bits as sent to
    /// the robot, plus the radio/robot link state.
    fn fms_control_code(&self) -> u8 {
        let mut code = 0;

        code |= match self.config.control_mode() {
            ControlMode::Test => TEST_MODE,
            ControlMode::Autonomous => AUTONOMOUS,
            ControlMode::Teleoperated => TELEOPERATED,
        };

        if self.config.emergency_stopped() {
            code |= EMERGENCY_STOP;
        }

        if self.config.robot_enabled() {
            code |= ENABLED;
        }

        if self.config.radio_comms() {
            code |= FMS_RADIO_PING;
        }

        if self.config.robot_comms() {
            code |= FMS_ROBOT_COMMS;
            code |= FMS_ROBOT_PING;
        }

        code
    }

    /// Control code sent to the robot: mode, FMS link, e-stop and enable.
    fn control_code(&self) -> u8 {
        let mut code = 0;

        code |= match self.config.control_mode() {
            ControlMode::Test => TEST_MODE,
            ControlMode::Autonomous => AUTONOMOUS,
            ControlMode::Teleoperated => TELEOPERATED,
        };

        if self.config.fms_comms() {
            code |= FMS_ATTACHED;
        }

        if self.config.emergency_stopped() {
            code |= EMERGENCY_STOP;
        }

        if self.config.robot_enabled() {
            code |= ENABLED;
        }

        code
    }

    /// Request code sent to the robot. With no robot link the unconnected
    /// code goes out instead, which makes the robot resync its DS link.
    fn request_code(&self) -> u8 {
        if self.config.robot_comms() {
            if self.reboot {
                REQUEST_REBOOT
            } else if self.restart_code {
                REQUEST_RESTART_CODE
            } else {
                REQUEST_NORMAL
            }
        } else {
            REQUEST_UNCONNECTED
        }
    }

    fn station_code(&self) -> u8 {
        match (self.config.position(), self.config.alliance()) {
            (Position::One, Alliance::Red) => RED_1,
            (Position::Two, Alliance::Red) => RED_2,
            (Position::Three, Alliance::Red) => RED_3,
            (Position::One, Alliance::Blue) => BLUE_1,
            (Position::Two, Alliance::Blue) => BLUE_2,
            (Position::Three, Alliance::Blue) => BLUE_3,
        }
    }

    /// Size byte of one joystick tag. The count covers the size and tag
    /// bytes themselves plus the axis, button and hat sections.
    fn joystick_size(&self, stick: usize) -> u8 {
        let header = 2;
        let buttons = 3;
        let axes = self.joysticks.num_axes(stick) + 1;
        let hats = self.joysticks.num_hats(stick) * 2 + 1;
        (header + buttons + axes + hats) as u8
    }

    /// Joystick tags for every attached joystick. Unlike 2014, only the
    /// sticks actually present are serialized.
    fn joystick_data(&self) -> Vec<u8> {
        let mut data = Vec::new();

        for stick in 0..self.joysticks.count() {
            data.push(self.joystick_size(stick));
            data.push(TAG_JOYSTICK);

            let num_axes = self.joysticks.num_axes(stick);
            data.push(num_axes as u8);
            for axis in 0..num_axes {
                data.push(float_to_signed_byte(self.joysticks.axis(stick, axis), 1.0));
            }

            let num_buttons = self.joysticks.num_buttons(stick);
            let mut button_flags: u16 = 0;
            for button in 0..num_buttons {
                if self.joysticks.button(stick, button) {
                    button_flags |= 1 << button;
                }
            }
            data.push(num_buttons as u8);
            data.extend_from_slice(&button_flags.to_be_bytes());

            let num_hats = self.joysticks.num_hats(stick);
            data.push(num_hats as u8);
            for hat in 0..num_hats {
                let _ = (&mut data as &mut Vec<u8>)
                    .write_i16::<BigEndian>(self.joysticks.hat(stick, hat));
            }
        }

        data
    }

    /// CPU, RAM, disk and CAN tags from an extended robot reply. Only the
    /// first block is consumed; unknown tags are skipped.
    fn read_extended(data: &[u8], offset: usize, c: &mut ConfigSnapshot) {
        if data.len() <= offset + 1 {
            return;
        }

        match data[offset + 1] {
            RTAG_CAN_INFO => {
                if let Some(&utilization) = data.get(10) {
                    c.can_utilization = utilization;
                }
            }
            RTAG_CPU_INFO => c.robot_cpu_usage = data[3],
            RTAG_RAM_INFO => c.robot_ram_usage = data[4],
            RTAG_DISK_INFO => c.robot_disk_usage = data[4],
            other => tracing::trace!("ignoring extended tag 0x{other:02x}"),
        }
    }
}

impl Protocol for Frc2015 {
    fn name(&self) -> &'static str {
        "FRC 2015"
    }

    /// Assigned when the DS receives the first FMS packet
    fn fms_address(&self) -> String {
        String::new()
    }

    fn radio_address(&self) -> String {
        static_ip(10, self.config.team_number(), 1)
    }

    /// The roboRIO is found over mDNS rather than a static address.
    fn robot_address(&self) -> String {
        format!("roboRIO-{}.local", self.config.team_number())
    }

    fn build_fms_packet(&mut self) -> Vec<u8> {
        let mut data = vec![0u8; FMS_PACKET_SIZE];
        let (upper, lower) = encode_voltage(self.config.robot_voltage());

        data[0..2].copy_from_slice(&self.sent_fms_packets.to_be_bytes());
        data[2] = FMS_DS_VERSION;
        data[3] = self.fms_control_code();
        data[4..6].copy_from_slice(&self.config.team_number().to_be_bytes());
        data[6] = upper;
        data[7] = lower;

        self.sent_fms_packets = self.sent_fms_packets.wrapping_add(1);
        data
    }

    fn build_radio_packet(&mut self) -> Vec<u8> {
        Vec::new()
    }

    fn build_robot_packet(&mut self) -> Vec<u8> {
        let mut data = Vec::with_capacity(64);

        data.extend_from_slice(&self.sent_robot_packets.to_be_bytes());
        data.push(TAG_GENERAL);
        data.push(self.control_code());
        data.push(self.request_code());
        data.push(self.station_code());

        if self.send_time_data {
            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0);
            data.extend_from_slice(&timezone_data(now));
        } else if self.sent_robot_packets > 5 {
            data.extend_from_slice(&self.joystick_data());
        }

        self.sent_robot_packets = self.sent_robot_packets.wrapping_add(1);
        data
    }

    fn read_fms_packet(&mut self, data: &[u8]) -> bool {
        if data.len() < FMS_PACKET_MIN {
            tracing::trace!("discarding runt FMS packet ({} bytes)", data.len());
            return false;
        }

        let control = data[3];
        let station = data[5];

        self.config.apply(|c| {
            c.robot_enabled = (control & ENABLED != 0) && !c.emergency_stopped;

            c.control_mode = if control & AUTONOMOUS != 0 {
                ControlMode::Autonomous
            } else if control & TEST_MODE != 0 {
                ControlMode::Test
            } else {
                ControlMode::Teleoperated
            };

            c.alliance = match station {
                BLUE_1 | BLUE_2 | BLUE_3 => Alliance::Blue,
                _ => Alliance::Red,
            };
            c.position = match station {
                RED_2 | BLUE_2 => Position::Two,
                RED_3 | BLUE_3 => Position::Three,
                _ => Position::One,
            };
        });

        true
    }

    fn read_radio_packet(&mut self, _data: &[u8]) -> bool {
        false
    }

    fn read_robot_packet(&mut self, data: &[u8]) -> bool {
        if data.len() < ROBOT_PACKET_MIN {
            tracing::trace!("discarding runt robot packet ({} bytes)", data.len());
            return false;
        }

        let control = data[3];
        let status = data[4];
        let upper = data[5];
        let lower = data[6];
        let request = data[7];

        self.send_time_data = request == REQUEST_TIME;

        self.config.apply(|c| {
            c.robot_code_present = status & ROBOT_HAS_CODE != 0;
            c.set_emergency_stopped(control & EMERGENCY_STOP != 0);
            c.robot_voltage = decode_voltage(upper, lower);

            if data.len() > 9 {
                Self::read_extended(data, 8, c);
            }
        });

        true
    }

    fn reset_fms(&mut self) {}

    fn reset_radio(&mut self) {}

    fn reset_robot(&mut self) {
        tracing::debug!("robot watchdog expired, clearing pending requests");
        self.reboot = false;
        self.restart_code = false;
        self.send_time_data = false;
    }

    fn reboot_robot(&mut self) {
        tracing::info!("roboRIO reboot requested");
        self.reboot = true;
    }

    fn restart_robot_code(&mut self) {
        tracing::info!("robot code restart requested");
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
        SocketSpec::udp_broadcast(6666, 6668)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> Frc2015 {
        Frc2015::new(Arc::new(Config::new()), Arc::new(Joysticks::new()))
    }

    #[test]
    fn addresses_follow_team_number() {
        let proto = codec();
        proto.config.set_team_number(3794);
        assert_eq!(proto.radio_address(), "10.37.94.1");
        assert_eq!(proto.robot_address(), "roboRIO-3794.local");
        assert_eq!(proto.fms_address(), "");
    }

    #[test]
    fn idle_teleop_robot_header() {
        let mut proto = codec();
        proto.config.set_team_number(3794);
        proto.config.set_robot_enabled(true);
        proto.config.set_robot_comms(true);

        let data = proto.build_robot_packet();
        assert_eq!(data, vec![0x00, 0x00, 0x01, 0x04, 0x80, 0x00]);
    }

    #[test]
    fn fms_packet_layout() {
        let mut proto = codec();
        proto.config.set_team_number(3794);
        proto.config.set_robot_enabled(true);
        proto.config.set_robot_comms(true);
        proto.config.set_robot_voltage(12.5);
        proto.sent_fms_packets = 7;

        let data = proto.build_fms_packet();
        assert_eq!(data, vec![0x00, 0x07, 0x00, 0x2c, 0x0e, 0xd2, 0x0c, 0x32]);
        assert_eq!(proto.sent_fms_packets, 8);
    }

    #[test]
    fn control_code_bits() {
        let proto = codec();
        proto.config.set_control_mode(ControlMode::Autonomous);
        proto.config.set_robot_enabled(true);
        proto.config.set_fms_comms(true);
        assert_eq!(proto.control_code(), 0x02 | 0x04 | 0x08);

        proto.config.set_emergency_stopped(true);
        // E-stop drops the enable flag along the way
        assert_eq!(proto.control_code(), 0x02 | 0x08 | 0x80);
    }

    #[test]
    fn fms_control_code_link_bits() {
        let proto = codec();
        proto.config.set_radio_comms(true);
        assert_eq!(proto.fms_control_code(), 0x10);

        proto.config.set_radio_comms(false);
        proto.config.set_robot_comms(true);
        assert_eq!(proto.fms_control_code(), 0x20 | 0x08);
    }

    #[test]
    fn request_code_states() {
        let mut proto = codec();
        // No robot link: unconnected, regardless of pending one-shots
        proto.reboot_robot();
        assert_eq!(proto.request_code(), 0x00);

        proto.config.set_robot_comms(true);
        assert_eq!(proto.request_code(), 0x08);

        proto.reset_robot();
        assert_eq!(proto.request_code(), 0x80);

        proto.restart_robot_code();
        assert_eq!(proto.request_code(), 0x04);

        // Reboot wins over restart-code when both are pending
        proto.reboot_robot();
        assert_eq!(proto.request_code(), 0x08);
    }

    #[test]
    fn station_codes_cover_all_six_slots() {
        let proto = codec();
        let stations = [
            (Alliance::Red, Position::One, 0x00),
            (Alliance::Red, Position::Two, 0x01),
            (Alliance::Red, Position::Three, 0x02),
            (Alliance::Blue, Position::One, 0x03),
            (Alliance::Blue, Position::Two, 0x04),
            (Alliance::Blue, Position::Three, 0x05),
        ];
        for (alliance, position, byte) in stations {
            proto.config.set_alliance(alliance);
            proto.config.set_position(position);
            assert_eq!(proto.station_code(), byte);
        }
    }

    #[test]
    fn station_byte_round_trips_through_fms_parser() {
        for byte in 0x00..=0x05u8 {
            let mut proto = codec();
            let mut packet = vec![0u8; 22];
            packet[5] = byte;
            assert!(proto.read_fms_packet(&packet));
            assert_eq!(proto.station_code(), byte);
        }
    }

    #[test]
    fn voltage_round_trips_for_whole_volts() {
        for v in 0..=16 {
            let (upper, lower) = encode_voltage(v as f32);
            assert!((decode_voltage(upper, lower) - v as f32).abs() <= 1.0 / 255.0);
        }
    }

    #[test]
    fn voltage_encoding_uses_hundredths() {
        assert_eq!(encode_voltage(12.5), (12, 50));
        assert_eq!(encode_voltage(12.0), (12, 0));
        assert_eq!(encode_voltage(0.99), (0, 99));
    }

    #[test]
    fn joysticks_appear_after_the_fifth_packet() {
        let joysticks = Arc::new(Joysticks::new());
        joysticks.add(2, 3, 1);
        let mut proto = Frc2015::new(Arc::new(Config::new()), joysticks.clone());

        for _ in 0..6 {
            assert_eq!(proto.build_robot_packet().len(), 6);
        }

        joysticks.set_axis(0, 1, 1.0);
        joysticks.set_button(0, 2, true);
        joysticks.set_hat(0, 0, 270);

        // sent_robot_packets is now 6: joystick tags start flowing
        let data = proto.build_robot_packet();
        // size = header(2) + buttons(3) + axes(2+1) + hats(2+1)
        assert_eq!(
            &data[6..],
            &[
                11, 0x0c, // size, joystick tag
                2, 0x00, 0x7f, // axes
                3, 0x00, 0x04, // buttons: flag bit 2
                1, 0x01, 0x0e, // one hat at 270
            ]
        );
    }

    #[test]
    fn timezone_block_preempts_joysticks() {
        let joysticks = Arc::new(Joysticks::new());
        joysticks.add(6, 10, 1);
        let mut proto = Frc2015::new(Arc::new(Config::new()), joysticks);
        proto.sent_robot_packets = 100;
        proto.send_time_data = true;

        let data = proto.build_robot_packet();
        assert_eq!(data.len(), 6 + 15);
        assert_eq!(data[6], 0x0b);
        assert_eq!(data[7], 0x0f);
        assert_eq!(&data[8..10], &[0, 0]);
        assert_eq!(data[16], 3);
        assert_eq!(data[17], 0x10);
        assert_eq!(&data[18..21], b"UTC");
    }

    #[test]
    fn timezone_data_epoch_fields() {
        let data = timezone_data(0);
        // sec, min, hour, yday, month (0-based), years since 1900
        assert_eq!(&data[4..10], &[0, 0, 0, 0, 0, 70]);
    }

    #[test]
    fn timezone_data_mid_season_date() {
        // 2015-03-14 09:26:53 UTC
        let data = timezone_data(1_426_325_213);
        assert_eq!(&data[4..10], &[53, 26, 9, 72, 2, 115]);
    }

    #[test]
    fn robot_packet_updates_state() {
        let mut proto = codec();
        let data = [0x00, 0x51, 0x01, 0x00, 0x31, 0x00, 0x01, 0x00];
        assert!(proto.read_robot_packet(&data));

        let snap = proto.config.snapshot();
        assert!(snap.robot_code_present); // status 0x31 carries the code bit
        assert!(!snap.emergency_stopped);
        assert!((snap.robot_voltage - 1.0 / 255.0).abs() < 1e-6);
        assert!(!proto.send_time_data);
    }

    #[test]
    fn robot_packet_time_request_and_estop() {
        let mut proto = codec();
        proto.config.set_robot_enabled(true);
        let data = [0x00, 0x00, 0x01, 0x80, 0x20, 0x0c, 0x21, 0x01];
        assert!(proto.read_robot_packet(&data));

        let snap = proto.config.snapshot();
        assert!(snap.emergency_stopped);
        assert!(!snap.robot_enabled);
        assert!(snap.robot_code_present);
        assert!((snap.robot_voltage - decode_voltage(0x0c, 0x21)).abs() < 1e-6);
        assert!(proto.send_time_data);
    }

    #[test]
    fn runt_robot_packet_is_rejected() {
        let mut proto = codec();
        assert!(!proto.read_robot_packet(&[0x00, 0x51, 0x01, 0x00, 0x31, 0x00, 0x01]));
        assert!(!proto.read_robot_packet(&[]));
        assert_eq!(proto.config.robot_voltage(), 0.0);
    }

    #[test]
    fn extended_can_telemetry() {
        let mut proto = codec();
        let data = [0x00, 0x00, 0x01, 0x00, 0x20, 0x0c, 0x00, 0x80, 0x05, 0x0e, 55];
        assert!(proto.read_robot_packet(&data));
        assert_eq!(proto.config.can_utilization(), 55);
    }

    #[test]
    fn extended_cpu_telemetry() {
        let mut proto = codec();
        let mut data = vec![0u8; 12];
        data[3] = 66; // the tag's payload index overlaps the header
        data[9] = 0x05;
        assert!(proto.read_robot_packet(&data));
        assert_eq!(proto.config.robot_cpu_usage(), 66);
    }

    #[test]
    fn unknown_extended_tag_is_ignored() {
        let mut proto = codec();
        let mut data = vec![0u8; 12];
        data[9] = 0x7a;
        assert!(proto.read_robot_packet(&data));
        assert_eq!(proto.config.can_utilization(), 0);
        assert_eq!(proto.config.robot_cpu_usage(), 0);
    }

    #[test]
    fn fms_packet_sets_mode_enable_and_station() {
        let mut proto = codec();
        let mut data = vec![0u8; 22];
        data[3] = 0x02 | 0x04;
        data[5] = 0x04;
        assert!(proto.read_fms_packet(&data));

        let snap = proto.config.snapshot();
        assert_eq!(snap.control_mode, ControlMode::Autonomous);
        assert!(snap.robot_enabled);
        assert_eq!(snap.alliance, Alliance::Blue);
        assert_eq!(snap.position, Position::Two);
    }

    #[test]
    fn fms_mode_defaults_to_teleoperated() {
        let mut proto = codec();
        proto.config.set_control_mode(ControlMode::Test);
        let data = vec![0u8; 22];
        assert!(proto.read_fms_packet(&data));
        assert_eq!(proto.config.control_mode(), ControlMode::Teleoperated);
    }

    #[test]
    fn runt_fms_packet_is_rejected() {
        let mut proto = codec();
        assert!(!proto.read_fms_packet(&vec![0u8; 21]));
        assert_eq!(proto.config.control_mode(), ControlMode::Teleoperated);
    }

    #[test]
    fn watchdog_reset_clears_time_request() {
        let mut proto = codec();
        proto.send_time_data = true;
        proto.reboot_robot();
        proto.restart_robot_code();
        proto.reset_robot();

        assert!(!proto.send_time_data);
        assert!(!proto.reboot);
        assert!(!proto.restart_code);
    }

    #[test]
    fn robot_counter_advances_once_per_packet() {
        let mut proto = codec();
        for i in 0u16..4 {
            let data = proto.build_robot_packet();
            assert_eq!(&data[0..2], &i.to_be_bytes());
        }
    }

    #[test]
    fn socket_and_interval_table() {
        let proto = codec();
        let fms = proto.fms_socket();
        assert_eq!((fms.in_port, fms.out_port), (1120, 1160));
        let robot = proto.robot_socket();
        assert_eq!((robot.in_port, robot.out_port), (1150, 1110));
        let nc = proto.netconsole_socket();
        assert!(!nc.disabled);
        assert!(nc.broadcast);
        assert_eq!((nc.in_port, nc.out_port), (6666, 6668));
        assert!(proto.radio_socket().disabled);
        assert_eq!(proto.fms_interval(), Duration::from_millis(500));
        assert_eq!(proto.robot_interval(), Duration::from_millis(20));
        assert_eq!(
            (proto.max_joysticks(), proto.max_axes(), proto.max_buttons(), proto.max_hats()),
            (6, 6, 10, 1)
        );
    }
}
