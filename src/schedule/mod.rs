pub mod editor;
pub mod history;
pub mod persist;
pub mod time;

pub use editor::{add_place, add_schedule, remove_schedule, update_entry};
pub use history::ScheduleHistory;
pub use persist::{from_detail_rows, to_persistable};
pub use time::normalize_time;
