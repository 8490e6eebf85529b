//! Testing infrastructure (mock interfaces, delays, serial sinks).

pub(crate) mod mock;

pub(crate) use mock::{MockDelay, MockInterface, MockSerial, Transaction};
