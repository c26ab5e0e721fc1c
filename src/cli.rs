use clap::Parser;
use nuget_depguard::application::dto::OutputFormat;
use nuget_depguard::config::CONFIG_FILENAME;
use nuget_depguard::ports::outbound::{ResolveOptions, DEFAULT_TRANSITIVE_DEPTH};
use std::path::PathBuf;

/// Detect denylisted NuGet packages in the resolved dependency graph of a .NET project
#[derive(Parser, Debug)]
#[command(name = "nuget-depguard")]
#[command(version)]
#[command(
    about = "Detect denylisted NuGet packages in the resolved dependency graph of a .NET project",
    long_about = None
)]
pub struct Args {
    /// Solution, project file, or directory containing one (defaults to current directory)
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Policy file listing the denylisted packages
    #[arg(short, long, value_name = "FILE", default_value = CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Skip `dotnet restore` and read the existing project.assets.json files
    #[arg(long)]
    pub no_restore: bool,

    /// Levels of transitive packages to check below direct references (0 checks direct references only)
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TRANSITIVE_DEPTH)]
    pub transitive_depth: usize,
}

impl Args {
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            restore: !self.no_restore,
            transitive_depth: self.transitive_depth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["nuget-depguard"]).unwrap();

        assert_eq!(args.path, PathBuf::from("."));
        assert_eq!(args.config, PathBuf::from(".depguard.json"));
        assert_eq!(args.format, OutputFormat::Text);
        assert!(args.output.is_none());
        assert_eq!(args.resolve_options(), ResolveOptions::default());
    }

    #[test]
    fn test_args_all_options() {
        let args = Args::try_parse_from([
            "nuget-depguard",
            "src/App.sln",
            "-c",
            "policy.json",
            "--format",
            "JSON",
            "-o",
            "report.json",
            "--no-restore",
            "--transitive-depth",
            "3",
        ])
        .unwrap();

        assert_eq!(args.path, PathBuf::from("src/App.sln"));
        assert_eq!(args.config, PathBuf::from("policy.json"));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.output, Some(PathBuf::from("report.json")));
        assert_eq!(
            args.resolve_options(),
            ResolveOptions {
                restore: false,
                transitive_depth: 3,
            }
        );
    }

    #[test]
    fn test_args_invalid_format() {
        let err = Args::try_parse_from(["nuget-depguard", "-f", "xml"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("Please specify 'text' or 'json'"));
    }

    #[test]
    fn test_args_invalid_depth() {
        let err =
            Args::try_parse_from(["nuget-depguard", "--transitive-depth", "-1"]).unwrap_err();
        assert!(err.use_stderr());
    }

    #[test]
    fn test_args_version_flag() {
        let err = Args::try_parse_from(["nuget-depguard", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }
}
