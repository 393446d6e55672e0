use std::process::ExitCode;

use configs::AppConfig;
use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

const SERVICE: &str = "expense-server";

fn main() -> ExitCode {
    // .env before the subscriber so RUST_LOG and LOG_FORMAT apply
    dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let service_id = Uuid::new_v4();
    let pid = std::process::id();

    std::panic::set_hook(Box::new(move |info| {
        error!(service = SERVICE, event = "panic", %service_id, pid, message = %info, "unhandled panic occurred");
    }));

    let cfg = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = SERVICE, event = "config_invalid", error = %e, "no usable configuration");
            return ExitCode::FAILURE;
        }
    };

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(threads) = cfg.server.worker_threads {
        builder.worker_threads(threads);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = SERVICE, event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service = SERVICE,
        event = "start",
        %service_id,
        pid,
        version = env!("CARGO_PKG_VERSION"),
        threads = cfg.server.worker_threads.unwrap_or_default(),
        host = %cfg.server.host,
        port = cfg.server.port,
        "expense server starting"
    );

    match rt.block_on(server::run(cfg, server::startup::ctrl_c())) {
        Ok(()) => {
            info!(service = SERVICE, event = "stop", %service_id, pid, "server stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = SERVICE, event = "run_failed", %service_id, error = %e, "server exited with error");
            ExitCode::FAILURE
        }
    }
}
