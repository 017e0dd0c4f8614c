use clap::Parser;
use dotenvy::dotenv;

use launch_dashboard::cli::Cli;
use launch_dashboard::config::{DEFAULT_CONFIG_PATH, get_config, init_config, update_config};
use launch_dashboard::runtime::modes::{self, Mode};
use launch_dashboard::system::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    init_config(cli.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH));
    if let Some(dataset) = cli.dataset.clone() {
        let mut config = (*get_config()).clone();
        config.dataset.path = dataset;
        update_config(config);
    }

    match modes::detect_mode(cli.command.as_ref()) {
        Mode::Server => {
            let config = get_config();
            // guard 必须存活到进程结束，否则缓冲日志会丢失
            let _guard = init_logging(&config.logging)?;
            if let Err(e) = modes::run_server().await {
                let err = launch_dashboard::errors::DashboardError::server(format!("{:#}", e));
                eprintln!("{}", err.format_colored());
                std::process::exit(1);
            }
        }
        Mode::Cli => {
            let Some(command) = cli.command else {
                return Ok(());
            };
            if let Err(e) = modes::run_cli(command) {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
        }
        Mode::Unknown => {
            eprintln!("No execution mode available; enable the `server` feature");
            std::process::exit(1);
        }
    }

    Ok(())
}
