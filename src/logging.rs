/*!

Global control over verbose messaging.

Messages are written to a channel at a level. A message is only emitted if the global verbosity is at least the
message's level, so the default verbosity of 0 silences everything. By convention, construction failures are logged
at level 1, the individual rewrite steps of the engine at levels 4 and 5.

*/

use std::{
  io::{stderr, Stderr, Write},
  sync::{
    atomic::{AtomicI32, Ordering},
    Mutex,
    PoisonError
  }
};

use lazy_static::lazy_static;
use strum_macros::{Display, IntoStaticStr};
use yansi::Paint;


#[derive(Copy, Clone, PartialEq, Eq, Debug, Display, IntoStaticStr)]
pub enum Channel {
  Error,
  Warning,
  Info,
  Debug,
}

static VERBOSITY: AtomicI32 = AtomicI32::new(0);

lazy_static! {
  static ref VERBOSE_STREAM: Mutex<Stderr> = Mutex::new(stderr());
}


pub fn set_verbosity(new_value: i32) {
  VERBOSITY.store(new_value, Ordering::Relaxed);
}

pub fn verbosity() -> i32 {
  VERBOSITY.load(Ordering::Relaxed)
}

/// Callers use this to skip building expensive messages that would be discarded.
pub fn verbosity_is_at_least(level: i32) -> bool {
  verbosity() >= level
}

fn channel_label(channel: Channel) -> Paint<&'static str> {
  let name: &'static str = channel.into();
  match channel {
    Channel::Error   => Paint::red(name).bold(),
    Channel::Warning => Paint::yellow(name).bold(),
    Channel::Info    => Paint::green(name),
    Channel::Debug   => Paint::blue(name),
  }
}

pub(crate) fn verbose_emit(channel: Channel, msg: &str) {
  let mut stream = VERBOSE_STREAM.lock().unwrap_or_else(PoisonError::into_inner);
  // A failed diagnostic write is not worth reporting.
  let _ = writeln!(stream, "{}: {}", channel_label(channel), msg);
}

/// Only emits a message if the verbosity level is at least `level`.
pub fn log(channel: Channel, level: i32, msg: &str) {
  if verbosity_is_at_least(level) {
    verbose_emit(channel, msg);
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn channel_names() {
    assert_eq!(Channel::Error.to_string(), "Error");
    let name: &'static str = Channel::Debug.into();
    assert_eq!(name, "Debug");
  }

  #[test]
  fn verbosity_gates_levels() {
    // Verbosity is global, and this is the only test in the crate that changes it.
    set_verbosity(2);
    assert_eq!(verbosity(), 2);
    assert!(verbosity_is_at_least(2));
    assert!(!verbosity_is_at_least(3));

    set_verbosity(0);
    assert_eq!(verbosity(), 0);
    assert!(verbosity_is_at_least(-1));
    assert!(!verbosity_is_at_least(1));
  }
}
