use super::{
	Direction,
	Line,
	Pins,
};

/// No-op backend for hosts without a GPIO controller: every operation only
/// logs its intent. Lets the full protocol logic run as a dry run.
pub struct InertPins {
	_private: (),
}

impl InertPins {
	pub fn new() -> InertPins {
		InertPins {
			_private: (),
		}
	}
}

impl Default for InertPins {
	fn default() -> Self {
		InertPins::new()
	}
}

impl Pins for InertPins {
	fn set_direction(&mut self, line: Line, direction: Direction) -> crate::AResult<()> {
		debug!("inert: set_direction({:?}, {:?})", line, direction);
		Ok(())
	}

	fn write(&mut self, line: Line, level: bool) -> crate::AResult<()> {
		debug!("inert: write({:?}, {})", line, level);
		Ok(())
	}

	fn read(&mut self, line: Line) -> crate::AResult<bool> {
		debug!("inert: read({:?}) -> false", line);
		Ok(false)
	}

	// nothing to wait for
	fn delay(&mut self) {
	}
}
