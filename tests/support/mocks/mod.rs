// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod gateway;
pub mod time;

pub use gateway::{FailingGateway, RecordingGateway};
pub use time::{StepClock, fixed_now};
