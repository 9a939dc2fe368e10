mod month;
pub use month::*;
mod date;
pub use date::*;
mod date_time;
pub use date_time::*;
mod week_day;
pub use week_day::*;
mod year;
pub use year::*;
mod year_month;
pub use year_month::*;
mod time_stamp;
pub use time_stamp::*;
