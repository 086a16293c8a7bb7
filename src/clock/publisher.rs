//! Timestamp sinks
//!
//! Every sink is fire-and-forget: the absence of a listener on the other
//! end is not an error.

use std::io::{self, Write};
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};
use std::sync::mpsc::Sender;

use serde::Serialize;

use crate::common::{StampPublisher, ToolError, ToolResult};
use super::Stamp;

/// Wire form of one published message
#[derive(Debug, Serialize)]
struct StampMessage<'a> {
    topic: &'a str,
    secs: u32,
    nsecs: u32,
}

fn encode(topic: &str, stamp: &Stamp) -> ToolResult<Vec<u8>> {
    let message = StampMessage {
        topic,
        secs: stamp.secs,
        nsecs: stamp.nsecs,
    };
    Ok(serde_json::to_vec(&message)?)
}

/// One JSON line per message on any writer
pub struct WriterPublisher<W: Write> {
    writer: W,
}

impl<W: Write> WriterPublisher<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterPublisher<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> StampPublisher for WriterPublisher<W> {
    fn publish(&mut self, topic: &str, stamp: &Stamp) -> ToolResult<()> {
        let mut line = encode(topic, stamp)?;
        line.push(b'\n');
        match self.writer.write_all(&line).and_then(|_| self.writer.flush()) {
            Ok(()) => Ok(()),
            // reader went away
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                log::debug!("Dropped message on {}: {}", topic, e);
                Ok(())
            }
            Err(e) => Err(ToolError::Io(e)),
        }
    }
}

/// One JSON datagram per message to a fixed target
pub struct UdpPublisher {
    socket: UdpSocket,
    target: SocketAddr,
}

impl UdpPublisher {
    pub fn new<A: ToSocketAddrs>(target: A) -> ToolResult<Self> {
        let target = target
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| ToolError::InvalidParameter("UDP target resolved to no address".to_string()))?;
        let bind_addr: SocketAddr = if target.is_ipv4() {
            ([0, 0, 0, 0], 0).into()
        } else {
            (std::net::Ipv6Addr::UNSPECIFIED, 0).into()
        };
        let socket = UdpSocket::bind(bind_addr)?;
        log::info!("Publishing to udp://{}", target);
        Ok(Self { socket, target })
    }

    pub fn target(&self) -> SocketAddr {
        self.target
    }
}

impl StampPublisher for UdpPublisher {
    fn publish(&mut self, topic: &str, stamp: &Stamp) -> ToolResult<()> {
        let datagram = encode(topic, stamp)?;
        if let Err(e) = self.socket.send_to(&datagram, self.target) {
            log::debug!("Dropped message on {}: {}", topic, e);
        }
        Ok(())
    }
}

/// In-process channel
pub struct ChannelPublisher {
    sender: Sender<Stamp>,
}

impl ChannelPublisher {
    pub fn new(sender: Sender<Stamp>) -> Self {
        Self { sender }
    }
}

impl StampPublisher for ChannelPublisher {
    fn publish(&mut self, topic: &str, stamp: &Stamp) -> ToolResult<()> {
        if self.sender.send(*stamp).is_err() {
            log::debug!("No subscriber on {}", topic);
        }
        Ok(())
    }
}
