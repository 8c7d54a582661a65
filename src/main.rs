use keepup_scanner::adapters::outbound::console::StderrProgressReporter;
use keepup_scanner::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemWriter, StdoutPresenter,
};
use keepup_scanner::adapters::outbound::kubernetes::KubeWorkloadSource;
use keepup_scanner::adapters::outbound::network::ApiReportSink;
use keepup_scanner::application::dto::{DeliveryStatus, ScanRequest};
use keepup_scanner::application::factories::FormatterFactory;
use keepup_scanner::application::use_cases::ScanClusterUseCase;
use keepup_scanner::cli::Args;
use keepup_scanner::config::{load_env_file, ScannerConfig};
use keepup_scanner::detection::services::RuleStore;
use keepup_scanner::ports::outbound::OutputPresenter;
use keepup_scanner::shared::error::ExitCode;
use keepup_scanner::shared::Result;
use std::path::Path;
use std::process;

const DOTENV_FILE: &str = ".env";

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run().await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run() -> Result<()> {
    // Settings from ./.env unless APP_ENV marks a managed environment
    load_env_file(Path::new(DOTENV_FILE))?;

    // Parse command-line arguments and environment
    let args = Args::parse_args();
    let config = ScannerConfig::from_args(&args)?;

    // Load detection rules before any cluster connection is attempted
    eprintln!(
        "📖 Loading detection rules from: {}",
        config.rules_path.display()
    );
    let rules = RuleStore::load(&FileSystemReader::new(), &config.rules_path)?;

    // Create adapters (Dependency Injection)
    let workload_source = KubeWorkloadSource::connect(config.kubeconfig.as_deref()).await?;
    let report_sink = match config.sink_settings() {
        Some(settings) => Some(ApiReportSink::new(&settings.url, &settings.token)?),
        None if config.upload_suppressed() => {
            log::info!("Upload disabled by --no-upload");
            None
        }
        None => {
            log::info!("API_URL and API_TOKEN are not set; the report will not be uploaded");
            None
        }
    };

    let use_case = ScanClusterUseCase::new(
        workload_source.clone(),
        workload_source,
        report_sink,
        StderrProgressReporter::new(),
    );

    let request = ScanRequest::new(rules, config.cluster_name.clone());
    let response = use_case.execute(request).await?;

    if let DeliveryStatus::Failed(details) = &response.delivery {
        log::warn!("Continuing without upload: {}", details);
    }

    // Format and present locally
    eprintln!("{}", FormatterFactory::progress_message(config.format));
    let formatted_output = FormatterFactory::create(config.format).format(&response.report)?;

    let presenter: Box<dyn OutputPresenter> = match &config.output {
        Some(path) => Box::new(FileSystemWriter::new(path.clone())),
        None => Box::new(StdoutPresenter::new()),
    };
    presenter.present(&formatted_output)?;

    Ok(())
}
