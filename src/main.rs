mod cli;

use clap::Parser;
use cli::Args;
use nuget_depguard::adapters::outbound::console::StderrProgressReporter;
use nuget_depguard::adapters::outbound::dotnet::DotNetGraphResolver;
use nuget_depguard::adapters::outbound::filesystem::{FileSystemProjectLocator, FileSystemReader};
use nuget_depguard::application::dto::{ScanOutcome, ScanRequest};
use nuget_depguard::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use nuget_depguard::application::read_models::MatchReportReadModelBuilder;
use nuget_depguard::application::use_cases::ScanDependenciesUseCase;
use nuget_depguard::shared::error::ExitCode;
use nuget_depguard::shared::Result;
use std::process;

#[tokio::main]
async fn main() {
    // clap exits with status 2 on invalid arguments and 0 for --help/--version
    let args = Args::parse();

    match run(args).await {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::for_error(&e).as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    // Create adapters (Dependency Injection)
    let config_reader = FileSystemReader::new();
    let project_locator = FileSystemProjectLocator::new();
    let graph_resolver = DotNetGraphResolver::new();
    let progress_reporter = StderrProgressReporter::new();

    let use_case = ScanDependenciesUseCase::new(
        config_reader,
        project_locator,
        graph_resolver,
        progress_reporter,
    );

    let request = ScanRequest::new(
        args.path.clone(),
        args.config.clone(),
        args.resolve_options(),
    );
    let response = use_case.execute(request).await?;

    // Stdout carries the report only when something matched
    if let ScanOutcome::MatchesFound(projects) = &response.outcome {
        let read_model = MatchReportReadModelBuilder::build(projects);
        let formatter = FormatterFactory::create(args.format);
        let formatted_output = formatter.format(&read_model)?;

        let presenter = PresenterFactory::create(PresenterType::from(args.output));
        presenter.present(&formatted_output)?;
    }

    Ok(response.exit_code())
}
