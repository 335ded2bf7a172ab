/// Protocol for the DS1302 timekeeping chip: BCD clock/calendar registers
/// plus 31 bytes of static RAM, driven over a three-wire interface (CE,
/// SCLK, one bidirectional I/O line).
///
/// Every transaction starts with CE going high and a command byte, sent LSB
/// first:
/// - bit 7: always 1
/// - bit 6: 0 = clock/calendar registers, 1 = RAM
/// - bits 5-1: register / cell offset
/// - bit 0: 0 = write, 1 = read
///
/// So even command bytes are writes, odd ones are reads. Offset 0b11111
/// selects burst mode: the transfer continues at ascending offsets without a
/// new command byte for as long as CE stays high (8 bytes for the clock,
/// 31 for RAM).
///
/// The host generates every clock pulse in both directions. On writes the
/// chip samples I/O on the rising SCLK edge; on reads it shifts the next bit
/// out on the falling edge, so the host samples just before raising SCLK.
/// CE must stay high for the whole transaction and drop afterwards.

mod operations;
mod regmap;
mod shift;
mod transaction;

#[cfg(test)]
pub(crate) mod sim;

pub use self::operations::{
	BusOperations,
};

pub use self::regmap::{
	bcd_decode,
	bcd_encode,
	ram_read_address,
	ram_write_address,
	ClockField,
	CLOCK_BURST_LEN,
	CLOCK_BURST_READ,
	CLOCK_BURST_WRITE,
	CLOCK_HALT_BIT,
	RAM_BURST_READ,
	RAM_BURST_WRITE,
	RAM_SIZE,
	WRITE_PROTECT_BIT,
};

pub use self::transaction::{
	ReadTransaction,
	Transaction,
};
