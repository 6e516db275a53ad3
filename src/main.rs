use clap::Parser;
use subset_sum::domain::ports::ReportSink;
use subset_sum::utils::{logger, validation::Validate};
use subset_sum::{CliConfig, ConsoleSink, FileSink, SolverEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting subset-sum CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let console = ConsoleSink::new(config.format);
    let file_sink = config.output.clone().map(FileSink::new);
    let engine = SolverEngine::new_with_monitoring(config, monitor_enabled);

    // 找到與找不到都是正常結束
    let result = engine
        .run_and_report(&console)
        .and_then(|report| match &file_sink {
            Some(sink) => sink.emit(&report),
            None => Ok(()),
        });

    if let Err(e) = result {
        tracing::error!(
            "❌ Search failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}
