//! Driver station wire protocol core for the 2014 (cRIO) and 2015
//! (roboRIO) FRC control systems.
//!
//! The crate is passive: it builds and parses the UDP datagrams exchanged
//! with the FMS, the radio and the robot, but never touches a socket. A
//! host scheduler owns the transport and the watchdogs, asks the active
//! [`Protocol`] for outbound packets on the advertised intervals, and feeds
//! inbound datagrams back into the matching parser. Parsers write into the
//! shared [`Config`] registry; builders read [`Config`] and [`Joysticks`].

mod config;
mod joystick;
mod protocol;
mod util;

pub use config::{Alliance, Config, ConfigSnapshot, ControlMode, Position};
pub use joystick::{JoystickState, Joysticks};
pub use protocol::frc_2014::Frc2014;
pub use protocol::frc_2015::Frc2015;
pub use protocol::{Protocol, ProtocolKind, SocketKind, SocketSpec};
pub use util::{crc32, float_to_signed_byte, static_ip};
