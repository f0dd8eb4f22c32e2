//! Application service layer.
//!
//! Services hold the business rules that sit on top of the stored data.
//! Currently this is the weekly birthday notification rule used by the
//! birthday registry.

pub mod schedule;

pub use schedule::{
    classify, format_notification_date, notification_date, ScheduleCase,
    NOTIFICATION_DATE_FORMAT, WINDOW_DAYS,
};
