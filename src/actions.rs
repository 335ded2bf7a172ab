//! The fixed action batches behind the command line flags, plus the 1 Hz
//! clock polling loop.

use std::time::Duration;

use crate::ds1302::{
	bcd_decode,
	bcd_encode,
	ram_read_address,
	ram_write_address,
	BusOperations,
	ClockField,
	CLOCK_BURST_LEN,
	CLOCK_BURST_READ,
	CLOCK_HALT_BIT,
	RAM_BURST_READ,
	RAM_BURST_WRITE,
	RAM_SIZE,
};
use crate::pins::{
	reliable_sleep,
	Pins,
};

/// One write per row, consumed in order by `write_setup`. The write-protect
/// clear must stay first: nothing else sticks while the WP bit is set.
pub const SETUP_WRITES: &[(u8, u8)] = &[
	(ClockField::Control.write_address(), 0x00), // clear write-protect
	(ClockField::Seconds.write_address(), bcd_encode(49)), // bit 7 clear: oscillator running
	(ClockField::Minutes.write_address(), bcd_encode(59)),
	(ClockField::Hour.write_address(), bcd_encode(23)), // bit 7 clear: 24-hour mode
	(ClockField::Date.write_address(), bcd_encode(31)),
	(ClockField::Month.write_address(), bcd_encode(3)),
	(ClockField::Weekday.write_address(), bcd_encode(6)),
	(ClockField::Year.write_address(), bcd_encode(24)),
	(ram_write_address(0), 0x01),
	(ram_write_address(1), 0x03),
	(ram_write_address(2), 0x07),
	(ram_write_address(3), 0x0F),
	(ram_write_address(4), 0x1F),
	(ram_write_address(5), 0x3F),
	(ram_write_address(6), 0x7F),
	(ram_write_address(7), 0xFF),
	(ram_write_address(8), 0xFE),
	(ram_write_address(9), 0xFC),
	(ram_write_address(10), 0xF8),
	(ram_write_address(11), 0xF0),
	(ram_write_address(12), 0xE0),
	(ram_write_address(13), 0xC0),
	(ram_write_address(14), 0x80),
];

/// Primes 2..127, one per RAM cell.
pub const RAM_TEST_PATTERN: [u8; RAM_SIZE] = [
	0x02, 0x03, 0x05, 0x07, 0x0B, 0x0D, 0x11, 0x13, 0x17, 0x1D, 0x1F,
	0x25, 0x29, 0x2B, 0x2F, 0x35, 0x3B, 0x3D, 0x43, 0x47, 0x49, 0x4F,
	0x53, 0x59, 0x61, 0x65, 0x67, 0x6B, 0x6D, 0x71, 0x7F,
];

pub const POLL_ITERATIONS: usize = 4 * 60;
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Two-digit uppercase hex, space separated, in transfer order.
pub fn format_burst(bytes: &[u8]) -> String {
	let parts: Vec<String> = bytes.iter().map(|b| format!("{:02X}", b)).collect();
	parts.join(" ")
}

pub fn write_setup<P: Pins + ?Sized>(pins: &mut P) -> crate::AResult<()> {
	for &(address, value) in SETUP_WRITES {
		pins.single_write(address, value)?;
	}
	Ok(())
}

pub fn write_ram_burst<P: Pins + ?Sized>(pins: &mut P) -> crate::AResult<()> {
	pins.burst_write(RAM_BURST_WRITE, &RAM_TEST_PATTERN)
}

pub fn read_clock<P: Pins + ?Sized>(pins: &mut P) -> crate::AResult<Vec<u8>> {
	let burst = pins.burst_read(CLOCK_BURST_READ, CLOCK_BURST_LEN)?;
	debug!(
		"decoded: {:02}:{:02}:{:02} on 20{:02}-{:02}-{:02}",
		bcd_decode(burst[ClockField::Hour.offset() as usize] & 0x3F),
		bcd_decode(burst[ClockField::Minutes.offset() as usize] & 0x7F),
		bcd_decode(burst[ClockField::Seconds.offset() as usize] & !CLOCK_HALT_BIT),
		bcd_decode(burst[ClockField::Year.offset() as usize]),
		bcd_decode(burst[ClockField::Month.offset() as usize] & 0x1F),
		bcd_decode(burst[ClockField::Date.offset() as usize] & 0x3F),
	);
	Ok(burst)
}

pub fn read_clock_once<P: Pins + ?Sized>(pins: &mut P) -> crate::AResult<()> {
	let burst = read_clock(pins)?;
	println!("{}", format_burst(&burst));
	Ok(())
}

/// Repeated clock bursts at a fixed cadence. Each burst fully completes (CE
/// low again) before the delay starts; nothing overlaps.
pub fn poll_clock<P: Pins + ?Sized>(pins: &mut P, iterations: usize, interval: Duration) -> crate::AResult<()> {
	for _ in 0..iterations {
		read_clock_once(pins)?;
		reliable_sleep(interval);
	}
	Ok(())
}

/// Read every RAM cell, one single-byte transaction per cell.
pub fn read_ram_cells<P: Pins + ?Sized>(pins: &mut P) -> crate::AResult<Vec<u8>> {
	let mut cells = Vec::with_capacity(RAM_SIZE);
	for cell in 0..RAM_SIZE {
		cells.push(pins.single_read(ram_read_address(cell))?);
	}
	Ok(cells)
}

/// Full RAM burst, then a byte-by-byte confirmation pass over all 31 cells.
pub fn read_ram<P: Pins + ?Sized>(pins: &mut P) -> crate::AResult<()> {
	let burst = pins.burst_read(RAM_BURST_READ, RAM_SIZE)?;
	println!("{}", format_burst(&burst));
	let confirm = read_ram_cells(pins)?;
	println!("{}", format_burst(&confirm));
	if burst != confirm {
		warn!("burst read and byte-by-byte read disagree");
	}
	Ok(())
}
