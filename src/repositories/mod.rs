pub mod metrics_repo;
pub mod workout_repo;

pub use metrics_repo::MetricsRepository;
pub use workout_repo::WorkoutRepository;
