// src/common/frame.rs

use super::address::{address_byte, Direction, DEVICE_ADDRESS};
use super::command::Command;

/// 16-bit request word: `[15:9]` device address, `[8]` direction, `[7:0]` command code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RequestFrame(u16);

impl RequestFrame {
    const ADDRESS_SHIFT: u16 = 9;
    const DIRECTION_SHIFT: u16 = 8;

    /// Builds the frame for `command` addressed to the SHT21.
    ///
    /// Only [`Command::WriteUserRegister`] produces a write frame; everything else,
    /// including soft reset, is encoded as a read.
    pub const fn build(command: Command) -> Self {
        let direction = match command {
            Command::WriteUserRegister => Direction::Write,
            _ => Direction::Read,
        };
        let bits = ((DEVICE_ADDRESS as u16 & 0x7F) << Self::ADDRESS_SHIFT)
            | ((direction.bit() as u16) << Self::DIRECTION_SHIFT)
            | command.code() as u16;
        RequestFrame(bits)
    }

    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// 7-bit device address.
    #[inline]
    pub const fn address(self) -> u8 {
        (self.0 >> Self::ADDRESS_SHIFT) as u8 & 0x7F
    }

    #[inline]
    pub const fn direction(self) -> Direction {
        Direction::from_bit((self.0 >> Self::DIRECTION_SHIFT) as u8)
    }

    #[inline]
    pub const fn command_code(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Address byte as it appears on the bus for this frame's direction.
    #[inline]
    pub const fn address_byte(self) -> u8 {
        address_byte(self.address(), self.direction())
    }
}

impl From<Command> for RequestFrame {
    fn from(command: Command) -> Self {
        RequestFrame::build(command)
    }
}

impl From<RequestFrame> for u16 {
    fn from(frame: RequestFrame) -> Self {
        frame.bits()
    }
}
