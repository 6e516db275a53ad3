use anyhow::Context;
use clap::Parser;
use subset_sum::config::toml_config::TomlConfig;
use subset_sum::domain::model::BaseCase;
use subset_sum::domain::ports::ReportSink;
use subset_sum::utils::{logger, validation::Validate};
use subset_sum::{ConsoleSink, FileSink, SolverEngine};

#[derive(Parser)]
#[command(name = "toml-subset-sum")]
#[command(about = "Subset-sum search driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "subset-sum.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Dry run - show the problem and pruning bounds without searching
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based subset search");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No search will be performed");
        return perform_dry_run(config);
    }

    // 命令列參數優先於設定檔
    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let console = ConsoleSink::new(config.output_format());
    let file_sink = config.output_path().map(FileSink::new);
    tracing::info!("🔎 Solving problem '{}'", config.problem_name());

    let engine = SolverEngine::new_with_monitoring(config, monitor_enabled);

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

fn perform_dry_run(config: TomlConfig) -> anyhow::Result<()> {
    let name = config.problem_name().to_string();
    let format = config.output_format();
    let report_path = config.output_path().map(str::to_string);

    let plan = SolverEngine::new(config)
        .plan()
        .with_context(|| format!("analysing problem '{}'", name))?;

    println!("🔍 Dry Run Analysis:");
    println!();
    println!("📋 Problem: {}", name);
    println!("  Values: {}", plan.value_count);
    println!("  Total: {}", plan.total);
    println!("  Target: {}", plan.target);
    println!("  Pruning: {}", plan.prune);

    match (plan.base_case, plan.first_searched_size) {
        (Some(BaseCase::FullSet), _) => println!("  ✅ The full set matches the target"),
        (Some(BaseCase::ZeroTarget), _) => println!("  ✅ Zero target matches the empty subset"),
        (Some(BaseCase::Unreachable), _) => {
            println!("  ❌ Target exceeds the total; no subset can match")
        }
        (None, Some(first)) => {
            println!();
            println!("✂️ Pruning Bounds:");
            if first > 0 {
                println!("  Sizes 0..{} skipped", first);
            }
            println!("  Search starts at size {}", first);
        }
        (None, None) => {}
    }

    println!();
    println!("💾 Output Configuration:");
    println!("  Format: {:?}", format);
    if let Some(path) = report_path {
        println!("  Report file: {}", path);
    }

    println!();
    println!("✅ Dry run analysis complete. Use --verbose for more details during actual run.");

    Ok(())
}
