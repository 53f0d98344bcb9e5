pub mod schedule;
pub mod trip;
