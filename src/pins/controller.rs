use std::thread;
use std::time::{
	Duration,
	Instant,
};

// minimum half clock period; the DS1302 wants ~1us per edge at 2V supply
const CLOCK_EDGE: Duration = Duration::from_micros(1);

/// Sleep at least `duration`, even if the first sleep comes back early.
pub fn reliable_sleep(mut duration: Duration) {
	loop {
		let now = Instant::now();
		thread::sleep(duration);
		let elapsed = now.elapsed();
		if elapsed >= duration {
			return;
		}
		duration -= elapsed;
	}
}

// `thread::sleep` can overshoot by milliseconds, which would stretch a
// 31-byte burst into seconds; the edge time is short enough to burn in place.
fn spin_delay(duration: Duration) {
	let start = Instant::now();
	while start.elapsed() < duration {}
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Line {
	Clock,
	Enable,
	Data,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Direction {
	Input,
	Output,
}

/// BCM pin numbers for the three lines.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct PinConfig {
	pub clock: u8,
	pub enable: u8,
	pub data: u8,
}

impl Default for PinConfig {
	fn default() -> Self {
		PinConfig {
			clock: 11,
			enable: 9,
			data: 10,
		}
	}
}

pub trait Pins {
	fn set_direction(&mut self, line: Line, direction: Direction) -> crate::AResult<()>;
	fn write(&mut self, line: Line, level: bool) -> crate::AResult<()>;
	fn read(&mut self, line: Line) -> crate::AResult<bool>;

	// delay for (at least) one clock edge
	fn delay(&mut self) {
		spin_delay(CLOCK_EDGE);
	}

	/// Idle/safe state: CE driven low, DATA released, CLK driven low.
	fn begin(&mut self) -> crate::AResult<()> {
		self.set_direction(Line::Enable, Direction::Output)?;
		self.write(Line::Enable, false)?;
		self.set_direction(Line::Data, Direction::Input)?;
		self.set_direction(Line::Clock, Direction::Output)?;
		self.write(Line::Clock, false)?;
		Ok(())
	}

	/// Release all lines so the process doesn't keep driving the bus.
	fn end(&mut self) -> crate::AResult<()> {
		self.set_direction(Line::Enable, Direction::Input)?;
		self.set_direction(Line::Data, Direction::Input)?;
		self.set_direction(Line::Clock, Direction::Input)?;
		Ok(())
	}
}
