use crate::pins::{
	Line,
	Pins,
};

/// Byte-level framing on top of raw pin operations. LSB first in both
/// directions; the host generates all clock pulses, the chip shifts its
/// internal register on each one whether it is sending or receiving.
///
/// Callers must have put DATA into the matching direction beforehand; that
/// is the transaction layer's job.
pub(crate) trait Shift: Pins {
	/// Send one byte. Each bit is stable on DATA before the rising SCLK edge
	/// (the chip's sampling instant) and changes only after the falling edge.
	fn emit_byte(&mut self, mut value: u8) -> crate::AResult<()> {
		for _ in 0..8 {
			self.write(Line::Data, 0 != value & 1)?;
			value >>= 1;
			self.delay(); // bit stable before the rising edge
			self.write(Line::Clock, true)?;
			self.delay();
			self.write(Line::Clock, false)?;
		}
		Ok(())
	}

	/// Receive one byte. The chip presents the next bit on the falling SCLK
	/// edge, so each bit is sampled before the host raises the clock.
	fn receive_byte(&mut self) -> crate::AResult<u8> {
		let mut value = 0u8;
		for bit in 0..8 {
			if self.read(Line::Data)? {
				value |= 1 << bit;
			}
			self.write(Line::Clock, true)?;
			self.delay();
			self.write(Line::Clock, false)?;
			self.delay(); // next bit valid after the falling edge
		}
		Ok(value)
	}
}

impl<P: Pins + ?Sized> Shift for P {
}
