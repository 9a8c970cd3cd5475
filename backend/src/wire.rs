use serde::{Deserialize, Serialize};

/// Message framing byte. The actuator firmware splits its receive stream
/// on NUL, so the payload itself must never contain one.
pub const FRAME_DELIMITER: u8 = 0x00;

/// Signed command values for the two actuator axes: `base` pans, `side`
/// tilts. Zero on both axes means hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    pub base: i32,
    pub side: i32,
}

impl Correction {
    pub fn is_hold(&self) -> bool {
        self.base == 0 && self.side == 0
    }

    /// Wire encoding: `{"base": <b>, "side": <s>}` followed by one NUL.
    ///
    /// The firmware parser expects exactly these two fields, in this order,
    /// with this spacing; the bytes are fixed, not serializer output.
    pub fn encode(&self) -> Vec<u8> {
        let mut message =
            format!("{{\"base\": {}, \"side\": {}}}", self.base, self.side).into_bytes();
        message.push(FRAME_DELIMITER);
        message
    }
}
