/// The three logical lines of the DS1302 interface, mapped 1:1 to host GPIO
/// pins. Which physical pins they land on is deployment configuration
/// (`PinConfig`); everything above this module only talks about `Line`s.
///
/// Two backends exist: `RpiPins` drives the real GPIO controller, `InertPins`
/// only logs what it would have done. `open` picks one at startup; callers
/// cannot tell them apart.
mod controller;
mod inert;
mod rpi;

pub use self::controller::{
	reliable_sleep,
	Direction,
	Line,
	PinConfig,
	Pins,
};

pub use self::inert::{
	InertPins,
};

pub use self::rpi::{
	RpiPins,
};

/// Open the real GPIO backend, falling back to the inert one when no GPIO
/// controller is available (development host, missing permissions).
pub fn open(config: &PinConfig) -> Box<dyn Pins> {
	match RpiPins::open(config) {
		Ok(pins) => Box::new(pins),
		Err(e) => {
			warn!("no GPIO backend available ({}), pin operations will only be logged", e);
			Box::new(InertPins::new())
		},
	}
}
