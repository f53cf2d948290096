//! Recording and wire format for control and telemetry frames.
//!
//! Frames are bincode-encoded [`Message`]s behind a little-endian `u32`
//! length prefix, so a recording is just frames written back to back.

use std::io::{self, Read, Write};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Refuse frames larger than this when reading.
pub const MAX_FRAME_LEN: u32 = 64 * 1024;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("encoding error: {0}")]
    Codec(#[from] bincode::Error),
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("frame of {0} bytes exceeds the frame size limit")]
    FrameTooLarge(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireTack {
    Starboard,
    Port,
}

/// Control inputs held during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlFrame {
    pub trim_in: bool,
    pub trim_out: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

/// Navigation and force snapshot after one integration step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TelemetryFrame {
    pub tick: u64,
    pub position: [f32; 2],
    pub velocity: [f32; 2],
    pub heading: f32,
    pub cog: f32,
    pub sog: f32,
    pub awa: f32,
    pub aws: f32,
    pub tack: WireTack,
    pub trimmed_sail_angle: f32,
    pub sail_angle: f32,
    pub angle_of_attack: f32,
    pub lift_coefficient: f32,
    pub drag_coefficient: f32,
    pub lift_force: [f32; 2],
    pub drag_force: [f32; 2],
    pub drift: [f32; 2],
    pub anti_drift_force: [f32; 2],
    pub water_drag: [f32; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Message {
    Hello { run_id: Uuid, tick_hz: f32, boat: String },
    WindTick { tick: u64, wind: [f32; 2] },
    InputTick { tick: u64, controls: ControlFrame },
    Telemetry(TelemetryFrame),
    Finished { ticks: u64 },
}

pub fn encode(msg: &Message) -> Result<Vec<u8>, ProtocolError> {
    Ok(bincode::serialize(msg)?)
}

pub fn decode(bytes: &[u8]) -> Result<Message, ProtocolError> {
    Ok(bincode::deserialize(bytes)?)
}

pub fn write_frame<W: Write>(w: &mut W, msg: &Message) -> Result<(), ProtocolError> {
    let payload = encode(msg)?;
    let len = payload.len() as u32;
    if len > MAX_FRAME_LEN {
        return Err(ProtocolError::FrameTooLarge(len));
    }
    w.write_all(&len.to_le_bytes())?;
    w.write_all(&payload)?;
    Ok(())
}

/// Read the next frame. `Ok(None)` on a clean end of stream.
pub fn read_frame<R: Read>(r: &mut R) -> Result<Option<Message>, ProtocolError> {
    let mut len_buf = [0u8; 4];
    match r.read_exact(&mut len_buf) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(e.into()),
    }
    let len = u32::from_le_bytes(len_buf);
    if len > MAX_FRAME_LEN {
        return Err(ProtocolError::FrameTooLarge(len));
    }
    let mut payload = vec![0u8; len as usize];
    r.read_exact(&mut payload)?;
    decode(&payload).map(Some)
}

/// Read every frame until end of stream.
pub fn read_all<R: Read>(r: &mut R) -> Result<Vec<Message>, ProtocolError> {
    let mut out = Vec::new();
    while let Some(msg) = read_frame(r)? {
        out.push(msg);
    }
    Ok(out)
}
