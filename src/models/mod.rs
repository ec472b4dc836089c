pub mod body_metrics;
pub mod from_row;
pub mod target;
pub mod workout;

pub use body_metrics::{BodyMetrics, CreateBodyMetrics};
pub use from_row::FromSqliteRow;
pub use target::OverloadTarget;
pub use workout::{CreateWorkout, Workout};
