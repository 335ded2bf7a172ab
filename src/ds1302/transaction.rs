use crate::pins::{
	Direction,
	Line,
	Pins,
};

use super::shift::Shift;

/// One CE window. Created with DATA driven by the host (command/write-data
/// phase); `start_receive` flips DATA around exactly once, strictly after
/// the last emitted byte and strictly before the first sampled bit.
///
/// Dropping the guard restores the idle state (DATA released, CE low) on
/// every exit path, including failed transfers. Holding the pin controller
/// `&mut` means a second CE window cannot be opened while one is in flight.
pub struct Transaction<'a, P: ?Sized + Pins + 'a> {
	pins: &'a mut P,
}

impl<'a, P: ?Sized + Pins> Transaction<'a, P> {
	pub fn begin(pins: &'a mut P) -> crate::AResult<Transaction<'a, P>> {
		pins.write(Line::Enable, true)?;
		// direction is reset on every transaction; nothing relies on
		// leftover state
		match pins.set_direction(Line::Data, Direction::Output) {
			Ok(()) => Ok(Transaction { pins }),
			Err(e) => {
				// no guard exists yet, deassert manually
				let _ = pins.write(Line::Enable, false);
				Err(e)
			},
		}
	}

	pub fn emit_byte(&mut self, value: u8) -> crate::AResult<()> {
		self.pins.emit_byte(value)
	}

	pub fn start_receive(self) -> crate::AResult<ReadTransaction<'a, P>> {
		self.pins.set_direction(Line::Data, Direction::Input)?;
		Ok(ReadTransaction(self))
	}
}

impl<'a, P: ?Sized + Pins> Drop for Transaction<'a, P> {
	fn drop(&mut self) {
		if let Err(e) = self.pins.set_direction(Line::Data, Direction::Input) {
			error!("failed to release DATA line: {}", e);
		}
		if let Err(e) = self.pins.write(Line::Enable, false) {
			error!("failed to deassert CE: {}", e);
		}
	}
}

pub struct ReadTransaction<'a, P: ?Sized + Pins + 'a>(Transaction<'a, P>);

impl<'a, P: ?Sized + Pins> ReadTransaction<'a, P> {
	pub fn receive_byte(&mut self) -> crate::AResult<u8> {
		self.0.pins.receive_byte()
	}
}
