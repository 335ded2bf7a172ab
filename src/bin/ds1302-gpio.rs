#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

extern crate ds1302_gpio;
use ds1302_gpio::*;

use std::process::exit;

fn get_pin(matches: &clap::ArgMatches, name: &str, default: u8) -> AResult<u8> {
	let param = match matches.value_of(name) {
		Some(p) => p,
		None => return Ok(default),
	};
	param.parse::<u8>().map_err(|e| {
		let e = failure::Error::from(e);
		let msg = format!("invalid parameter {}: {}", name, e);
		e.context(msg).into()
	})
}

fn run_actions(matches: &clap::ArgMatches, pins: &mut dyn pins::Pins) -> AResult<bool> {
	let mut selected = false;

	if matches.is_present("write_once") {
		actions::write_setup(pins)?;
		selected = true;
	}
	if matches.is_present("write_ram_burst") {
		actions::write_ram_burst(pins)?;
		selected = true;
	}
	if matches.is_present("read_clock") {
		actions::read_clock_once(pins)?;
		selected = true;
	}
	if matches.is_present("loop_clock") {
		actions::poll_clock(pins, actions::POLL_ITERATIONS, actions::POLL_INTERVAL)?;
		selected = true;
	}
	if matches.is_present("read_ram") {
		actions::read_ram(pins)?;
		selected = true;
	}

	Ok(selected)
}

fn main_app() -> AResult<()> {
	let app = clap_app!(@app (app_from_crate!())
		(@arg write_once: --("write-once") "Write the initial clock registers and a RAM test pattern")
		(@arg write_ram_burst: --("write-ram-burst") "Write a 31-byte test pattern to RAM in one burst")
		(@arg read_clock: --("read-clock") "Read the clock registers in one burst")
		(@arg loop_clock: --("loop-clock") "Read the clock registers once per second for four minutes")
		(@arg read_ram: --("read-ram") "Read all RAM in one burst, then byte by byte")
		(@arg clock_pin: --("clock-pin") +takes_value "BCM pin number of SCLK (default 11)")
		(@arg enable_pin: --("enable-pin") +takes_value "BCM pin number of CE (default 9)")
		(@arg data_pin: --("data-pin") +takes_value "BCM pin number of I/O (default 10)")
	);
	let matches = app.clone().get_matches();

	let defaults = pins::PinConfig::default();
	let config = pins::PinConfig {
		clock: get_pin(&matches, "clock_pin", defaults.clock)?,
		enable: get_pin(&matches, "enable_pin", defaults.enable)?,
		data: get_pin(&matches, "data_pin", defaults.data)?,
	};

	let mut pins = pins::open(&config);
	pins.begin()?;

	let result = run_actions(&matches, pins.as_mut());

	// release the lines even when an action failed
	if let Err(e) = pins.end() {
		error!("pin shutdown failed: {}", e);
	}

	if !result? {
		let mut app = app;
		app.print_long_help()?;
		println!();
	}

	Ok(())
}

fn main() {
	env_logger::from_env(env_logger::Env::default().default_filter_or("info")).init();

	if let Err(e) = main_app() {
		error!("Error: {}", e);
		exit(1);
	}
}
