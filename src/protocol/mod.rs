pub mod frc_2014;
pub mod frc_2015;

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::joystick::Joysticks;
use frc_2014::Frc2014;
use frc_2015::Frc2015;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SocketKind {
    Udp,
    Tcp,
}

/// Describes a transport endpoint the scheduler should open for a peer.
/// The core only publishes these; it never opens sockets itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocketSpec {
    pub kind: SocketKind,
    pub disabled: bool,
    pub broadcast: bool,
    pub in_port: u16,
    pub out_port: u16,
}

impl SocketSpec {
    pub fn udp(in_port: u16, out_port: u16) -> Self {
        Self {
            kind: SocketKind::Udp,
            disabled: false,
            broadcast: false,
            in_port,
            out_port,
        }
    }

    pub fn udp_broadcast(in_port: u16, out_port: u16) -> Self {
        Self {
            broadcast: true,
            ..Self::udp(in_port, out_port)
        }
    }

    pub fn disabled() -> Self {
        Self {
            kind: SocketKind::Udp,
            disabled: true,
            broadcast: false,
            in_port: 0,
            out_port: 0,
        }
    }
}

/// The capabilities a protocol generation publishes to the host scheduler.
///
/// The scheduler periodically asks the active implementation for an outbound
/// packet per peer, transmits it, and feeds received datagrams back into the
/// matching `read_*` method. Builders read the configuration and joystick
/// registries; parsers mutate the configuration registry and return whether
/// the datagram was consumed.
///
/// Implementations do not synchronise internally. A scheduler driving one
/// codec from several timer threads must wrap the descriptor in a single
/// mutex; the `&mut self` receivers make that requirement explicit.
pub trait Protocol: Send {
    fn name(&self) -> &'static str;

    /// Peer host identifiers. An empty string means "accept from any
    /// source" (the FMS address is learned from its first inbound packet).
    fn fms_address(&self) -> String;
    fn radio_address(&self) -> String;
    fn robot_address(&self) -> String;

    fn build_fms_packet(&mut self) -> Vec<u8>;
    fn build_radio_packet(&mut self) -> Vec<u8>;
    fn build_robot_packet(&mut self) -> Vec<u8>;

    fn read_fms_packet(&mut self, data: &[u8]) -> bool;
    fn read_radio_packet(&mut self, data: &[u8]) -> bool;
    fn read_robot_packet(&mut self, data: &[u8]) -> bool;

    /// Watchdog hooks, invoked by the scheduler when a peer misses its
    /// inbound deadline. These clear the pending one-shot commands.
    fn reset_fms(&mut self);
    fn reset_radio(&mut self);
    fn reset_robot(&mut self);

    /// One-shot commands. The pending flag stays visible to every outbound
    /// robot packet built afterwards, until `reset_robot` clears it.
    fn reboot_robot(&mut self);
    fn restart_robot_code(&mut self);

    /// Send cadence per peer. `Duration::ZERO` means the peer is not sent
    /// to at all.
    fn fms_interval(&self) -> Duration;
    fn radio_interval(&self) -> Duration;
    fn robot_interval(&self) -> Duration;

    /// Capability caps the scheduler advertises to the joystick registry.
    fn max_joysticks(&self) -> usize;
    fn max_axes(&self) -> usize;
    fn max_buttons(&self) -> usize;
    fn max_hats(&self) -> usize;

    fn fms_socket(&self) -> SocketSpec;
    fn radio_socket(&self) -> SocketSpec;
    fn robot_socket(&self) -> SocketSpec;
    fn netconsole_socket(&self) -> SocketSpec;
}

/// Supported protocol generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProtocolKind {
    Frc2014,
    Frc2015,
}

impl ProtocolKind {
    /// Builds the codec for this generation against the given registries.
    pub fn instantiate(
        self,
        config: Arc<Config>,
        joysticks: Arc<Joysticks>,
    ) -> Box<dyn Protocol> {
        match self {
            ProtocolKind::Frc2014 => Box::new(Frc2014::new(config, joysticks)),
            ProtocolKind::Frc2015 => Box::new(Frc2015::new(config, joysticks)),
        }
    }
}
