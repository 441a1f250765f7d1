use n8n_launcher::{
    ChildEnvironment, HealthProber, HealthState, KeepAliveScheduler, KeepAliveSettings,
    Supervisor, SupervisorSettings, build_router, fault_handler, health, logger,
};

use std::error::Error;
use std::sync::Arc;
use std::time::Instant;

use log::{error, info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    let started_at = Instant::now();

    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = launcher_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(&config.logging)?;

    info!("Starting n8n-launcher v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let child_env = ChildEnvironment::from_config(&config);
    child_env.log_summary();

    let keep_alive = if config.keep_alive.enabled {
        let prober = HealthProber::new(
            config.keep_alive.probe_path.clone(),
            config.keep_alive.timeout(),
        )?;
        Some(Arc::new(KeepAliveScheduler::new(
            KeepAliveSettings::from_config(&config),
            Arc::new(prober),
        )))
    } else {
        warn!("Keep-alive DISABLED - the platform may idle this service");
        None
    };

    #[cfg(unix)]
    fault_handler::install_signal_handlers(keep_alive.clone())?;
    fault_handler::install_panic_hook(keep_alive.clone());

    let health_task = if config.health_endpoint.enabled {
        let listener = health::bind(&config.health_endpoint).await?;
        let router = build_router(HealthState::from_config(
            started_at,
            &config.health_endpoint,
        ));
        Some(fault_handler::watch_task(
            "health endpoint",
            tokio::spawn(health::serve(listener, router)),
        ))
    } else {
        None
    };

    let supervisor = Supervisor::new(
        SupervisorSettings::from_config(&config)?,
        child_env,
        keep_alive.clone(),
    );

    if let Err(e) = supervisor.run().await {
        error!("{e}");
        error!("{}", e.recovery_hint());

        if let Some(ref keep_alive) = keep_alive {
            keep_alive.stop();
        }

        log::logger().flush();
        std::process::exit(e.exit_code());
    }

    // n8n stopped on its own; stay up for the health endpoint until signalled
    if let Some(health_task) = health_task {
        info!("n8n is down, launcher stays up for health checks");
        let _ = health_task.await;
    }

    Ok(())
}
