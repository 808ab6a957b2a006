//! Holiday calendars.

mod target;

pub use target::{easter_monday, Target};
