use rppal::gpio::{
	Gpio,
	IoPin,
	Mode,
};

use super::{
	Direction,
	Line,
	PinConfig,
	Pins,
};

/// Real backend: three `IoPin`s on the Raspberry Pi GPIO controller.
///
/// All pins start out as inputs; `Pins::begin` establishes the idle state.
/// rppal resets pins to input when they are dropped, so even a panic leaves
/// the bus released.
pub struct RpiPins {
	clock: IoPin,
	enable: IoPin,
	data: IoPin,
}

impl RpiPins {
	pub fn open(config: &PinConfig) -> crate::AResult<RpiPins> {
		let gpio = Gpio::new()?;
		let clock = open_pin(&gpio, config.clock, "CLK")?;
		let enable = open_pin(&gpio, config.enable, "CE")?;
		let data = open_pin(&gpio, config.data, "I/O")?;
		Ok(RpiPins {
			clock,
			enable,
			data,
		})
	}

	fn pin_mut(&mut self, line: Line) -> &mut IoPin {
		match line {
			Line::Clock => &mut self.clock,
			Line::Enable => &mut self.enable,
			Line::Data => &mut self.data,
		}
	}
}

fn open_pin(gpio: &Gpio, number: u8, name: &str) -> crate::AResult<IoPin> {
	with_context!(("open GPIO {} ({})", number, name), {
		Ok(gpio.get(number)?.into_io(Mode::Input))
	})
}

impl Pins for RpiPins {
	fn set_direction(&mut self, line: Line, direction: Direction) -> crate::AResult<()> {
		let mode = match direction {
			Direction::Input => Mode::Input,
			Direction::Output => Mode::Output,
		};
		self.pin_mut(line).set_mode(mode);
		Ok(())
	}

	fn write(&mut self, line: Line, level: bool) -> crate::AResult<()> {
		let pin = self.pin_mut(line);
		if level {
			pin.set_high();
		} else {
			pin.set_low();
		}
		Ok(())
	}

	fn read(&mut self, line: Line) -> crate::AResult<bool> {
		Ok(self.pin_mut(line).is_high())
	}
}
