//! Test-only DS1302 model sitting behind the `Pins` trait: decodes command
//! bytes from the wire exactly like the chip would, serves reads bit by bit
//! and applies writes per completed byte. Starts write-protected, as a chip
//! fresh from the drawer may well be.

use crate::pins::{
	Direction,
	Line,
	Pins,
};

use super::regmap::{
	CLOCK_BURST_READ,
	CLOCK_BURST_WRITE,
	RAM_BURST_READ,
	RAM_BURST_WRITE,
	RAM_SIZE,
	WRITE_PROTECT_BIT,
};

pub struct SimDevice {
	/// seconds, minutes, hour, date, month, weekday, year, control
	pub clock_regs: [u8; 8],
	pub ram: [u8; RAM_SIZE],
	ce: bool,
	clock: bool,
	data_direction: Direction,
	host_data: bool,
	cur_in: u8,
	in_count: u8,
	command: Option<u8>,
	burst_offset: usize,
	out_bits: Vec<bool>,
	out_pos: usize,
	fail_in: Option<usize>,
}

impl SimDevice {
	pub fn new() -> SimDevice {
		SimDevice {
			clock_regs: [0, 0, 0, 0, 0, 0, 0, WRITE_PROTECT_BIT],
			ram: [0; RAM_SIZE],
			ce: false,
			clock: false,
			data_direction: Direction::Input,
			host_data: false,
			cur_in: 0,
			in_count: 0,
			command: None,
			burst_offset: 0,
			out_bits: Vec::new(),
			out_pos: 0,
			fail_in: None,
		}
	}

	pub fn ce_asserted(&self) -> bool {
		self.ce
	}

	/// Make the pin operation `ops` operations from now fail (once).
	pub fn fail_after(&mut self, ops: usize) {
		self.fail_in = Some(ops);
	}

	fn tick(&mut self) -> crate::AResult<()> {
		if let Some(remaining) = self.fail_in {
			if remaining == 0 {
				self.fail_in = None;
				bail!("simulated pin failure");
			}
			self.fail_in = Some(remaining - 1);
		}
		Ok(())
	}

	fn write_protected(&self) -> bool {
		0 != self.clock_regs[7] & WRITE_PROTECT_BIT
	}

	fn reset_shift(&mut self) {
		self.cur_in = 0;
		self.in_count = 0;
		self.command = None;
		self.burst_offset = 0;
		self.out_bits.clear();
		self.out_pos = 0;
	}

	fn handle_byte(&mut self, byte: u8) {
		match self.command {
			None => {
				debug_assert!(0 != byte & 0x80, "command byte without bit 7");
				self.command = Some(byte);
				if 0 != byte & 1 {
					self.load_output(byte);
				}
			},
			Some(command) => {
				let offset = self.burst_offset;
				self.burst_offset += 1;
				self.apply_write(command, offset, byte);
			},
		}
	}

	fn load_output(&mut self, command: u8) {
		let bytes: Vec<u8> = match command {
			CLOCK_BURST_READ => self.clock_regs.to_vec(),
			RAM_BURST_READ => self.ram.to_vec(),
			0x81..=0x8F => vec![self.clock_regs[(command as usize - 0x81) / 2]],
			0xC1..=0xFD => vec![self.ram[(command as usize - 0xC1) / 2]],
			_ => Vec::new(),
		};
		for byte in bytes {
			for bit in 0..8 {
				self.out_bits.push(0 != byte & (1 << bit));
			}
		}
	}

	fn apply_write(&mut self, command: u8, offset: usize, byte: u8) {
		match command {
			CLOCK_BURST_WRITE => {
				if offset == 7 {
					self.clock_regs[7] = byte;
				} else if offset < 7 && !self.write_protected() {
					self.clock_regs[offset] = byte;
				}
			},
			RAM_BURST_WRITE => {
				if offset < RAM_SIZE && !self.write_protected() {
					self.ram[offset] = byte;
				}
			},
			0x80..=0x8E if offset == 0 => {
				let index = (command as usize - 0x80) / 2;
				if index == 7 {
					// the control register is writable regardless
					self.clock_regs[7] = byte;
				} else if !self.write_protected() {
					self.clock_regs[index] = byte;
				}
			},
			0xC0..=0xFC if offset == 0 => {
				if !self.write_protected() {
					self.ram[(command as usize - 0xC0) / 2] = byte;
				}
			},
			_ => (),
		}
	}
}

impl Pins for SimDevice {
	fn set_direction(&mut self, line: Line, direction: Direction) -> crate::AResult<()> {
		self.tick()?;
		if line == Line::Data {
			self.data_direction = direction;
		}
		Ok(())
	}

	fn write(&mut self, line: Line, level: bool) -> crate::AResult<()> {
		self.tick()?;
		match line {
			Line::Enable => {
				if level && !self.ce {
					self.reset_shift();
				}
				self.ce = level;
			},
			Line::Clock => {
				let rising = level && !self.clock;
				let falling = !level && self.clock;
				self.clock = level;
				if !self.ce {
					// the chip ignores clock edges while CE is low
					return Ok(());
				}
				if rising && self.data_direction == Direction::Output {
					if self.host_data {
						self.cur_in |= 1 << self.in_count;
					}
					self.in_count += 1;
					if self.in_count == 8 {
						let byte = self.cur_in;
						self.cur_in = 0;
						self.in_count = 0;
						self.handle_byte(byte);
					}
				}
				if falling && self.data_direction == Direction::Input {
					self.out_pos += 1;
				}
			},
			Line::Data => {
				assert_eq!(
					Direction::Output, self.data_direction,
					"host drove DATA while it is an input"
				);
				self.host_data = level;
			},
		}
		Ok(())
	}

	fn read(&mut self, line: Line) -> crate::AResult<bool> {
		self.tick()?;
		match line {
			Line::Data => {
				assert_eq!(
					Direction::Input, self.data_direction,
					"host sampled DATA while driving it"
				);
				Ok(self.out_bits.get(self.out_pos).copied().unwrap_or(false))
			},
			_ => Ok(false),
		}
	}

	// simulated time passes instantly
	fn delay(&mut self) {
	}
}
