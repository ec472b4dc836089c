use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hitlog::config::Config;
use hitlog::handlers::{metrics, target, workouts};
use hitlog::repositories::{MetricsRepository, WorkoutRepository};
use hitlog::{db, migrations, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hitlog=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    tracing::info!("Connecting to database: {}", config.database_url);

    // A store that cannot be opened or migrated is fatal at startup.
    let pool = db::create_pool(&config.database_url)?;
    migrations::run_migrations(&pool)?;

    let workout_repo = WorkoutRepository::new(pool.clone());
    let metrics_repo = MetricsRepository::new(pool.clone());

    let workouts_state = workouts::WorkoutsState {
        workout_repo: workout_repo.clone(),
    };
    let target_state = target::TargetState { workout_repo };
    let metrics_state = metrics::MetricsState { metrics_repo };

    let app = routes::create_router(workouts_state, target_state, metrics_state);

    let addr = config.server_addr();
    tracing::info!("Starting server at http://{}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
