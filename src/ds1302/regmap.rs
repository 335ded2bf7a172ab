//! Command-byte encodings for the clock/calendar registers and the static
//! RAM. These are a fixed contract with the chip and must stay bit-exact.

const CLOCK_BASE: u8 = 0x80;
const RAM_BASE: u8 = 0xC0;

pub const CLOCK_BURST_WRITE: u8 = 0xBE;
pub const CLOCK_BURST_READ: u8 = 0xBF;
/// seconds, minutes, hour, date, month, weekday, year, control
pub const CLOCK_BURST_LEN: usize = 8;

pub const RAM_BURST_WRITE: u8 = 0xFE;
pub const RAM_BURST_READ: u8 = 0xFF;
pub const RAM_SIZE: usize = 31;

/// Bit 7 of the seconds register; while set the oscillator is halted.
pub const CLOCK_HALT_BIT: u8 = 0x80;
/// Bit 7 of the control register; while set all other writes are ignored.
/// Clearing it must come first in any write sequence.
pub const WRITE_PROTECT_BIT: u8 = 0x80;

/// The clock/calendar registers, in burst order. All values are BCD; the
/// hour register additionally carries the 12/24-hour mode flag in bit 7
/// (clear = 24-hour mode).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum ClockField {
	Seconds,
	Minutes,
	Hour,
	Date,
	Month,
	Weekday,
	Year,
	/// write-protect bit lives here
	Control,
}

impl ClockField {
	pub const fn offset(self) -> u8 {
		match self {
			ClockField::Seconds => 0,
			ClockField::Minutes => 1,
			ClockField::Hour => 2,
			ClockField::Date => 3,
			ClockField::Month => 4,
			ClockField::Weekday => 5,
			ClockField::Year => 6,
			ClockField::Control => 7,
		}
	}

	pub const fn write_address(self) -> u8 {
		CLOCK_BASE + 2 * self.offset()
	}

	pub const fn read_address(self) -> u8 {
		self.write_address() | 1
	}
}

pub const fn ram_write_address(cell: usize) -> u8 {
	assert!(cell < RAM_SIZE);
	RAM_BASE + 2 * cell as u8
}

pub const fn ram_read_address(cell: usize) -> u8 {
	ram_write_address(cell) | 1
}

pub const fn bcd_encode(value: u8) -> u8 {
	assert!(value < 100);
	(value / 10) << 4 | (value % 10)
}

pub fn bcd_decode(byte: u8) -> u8 {
	(byte >> 4) * 10 + (byte & 0x0f)
}
