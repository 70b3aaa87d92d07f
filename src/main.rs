mod cli;

use std::io::{self, Write};
use std::process;

use clap::Parser;
use fixtuple::clock::time_decomposition;
use fixtuple::{fixed_tuple, FixedTuple};
use log::{debug, error};

use crate::cli::{CliArgs, Command};

fn main() {
    env_logger::init();
    let args = CliArgs::parse();
    debug!("{:?}", args);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match args.command {
        Command::Create => create(&mut out),
        Command::Access => access(&mut out),
        Command::Decompose { seconds } => decompose(&mut out, seconds),
    };
    if let Err(err) = result.and_then(|()| out.flush()) {
        error!("failed to write output: {}", err);
        process::exit(1);
    }
}

fn create(out: &mut impl Write) -> io::Result<()> {
    // Slot types stated up front.
    let time = FixedTuple::<(i32, i32, i32)>::from_values((1, 42, 30));
    // Slot types deduced from the values.
    let another_time = fixed_tuple!(1, 22, 60);
    // Name, age, height.
    let person = fixed_tuple!("Pwatpwat", 22, 8.2);
    debug!("built {:?}, {:?} and {:?}", time, another_time, person);

    writeln!(out, "time: {}", time)?;
    writeln!(out, "another time: {}", another_time)?;
    writeln!(out, "person: {}", person)
}

fn access(out: &mut impl Write) -> io::Result<()> {
    let mut time = fixed_tuple!(1, 42, 30);
    *time.get_mut::<1>() = 59;
    debug!("time is now {:?}", time);

    writeln!(out, "Hours: {}", time.get::<0>())?;
    writeln!(out, "Minutes: {}", time.get::<1>())?;
    writeln!(out, "Seconds: {}", time.get::<2>())?;

    let (h, m, s) = time.to_tuple();
    writeln!(out, "{}h {}m {}s", h, m, s)
}

fn decompose(out: &mut impl Write, seconds: u32) -> io::Result<()> {
    let time = time_decomposition(seconds);
    debug!("{} seconds decomposed to {:?}", seconds, time);

    let (h, m, s) = time.into_inner();
    writeln!(out, "{} seconds equals to:", seconds)?;
    writeln!(out, "{}h {}m {}s", h, m, s)
}
