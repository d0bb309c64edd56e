use clap::{Parser, ValueEnum};
use commit_opener::env::Environment;
use commit_opener::exec::SystemRunner;
use commit_opener::{browser, pipeline, MatchMode, OpenError, RouteOptions};
use log::LevelFilter;
use std::ffi::OsString;
use std::path::Path;

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;

const DEFAULT_PROGRAM: &str = "commit-opener";

/// How commit messages are matched to pull requests
#[derive(ValueEnum, Clone, Copy, Debug)]
enum MatchArg {
    /// Any `#123` in the message
    Loose,
    /// Only messages starting with `Merge pull request #123`
    Strict,
}

impl From<MatchArg> for MatchMode {
    fn from(arg: MatchArg) -> Self {
        match arg {
            MatchArg::Loose => MatchMode::Loose,
            MatchArg::Strict => MatchMode::Strict,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "commit-opener")]
#[command(about = "Open a commit, or the pull request that merged it, on GitHub", long_about = None)]
#[command(version)]
struct Cli {
    /// Always open the commit view, even when the message names a pull request
    #[arg(short, long)]
    commit: bool,

    /// Pull request detection strategy
    #[arg(short, long = "match", value_enum, default_value_t = MatchArg::Loose)]
    match_mode: MatchArg,

    /// Print the URL instead of opening a browser
    #[arg(short, long)]
    print: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Commit hash, abbreviation, branch or tag
    reference: Option<String>,
}

fn main() {
    let args: Vec<OsString> = std::env::args_os().collect();
    let program = program_name(&args);

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { EXIT_FAILURE } else { EXIT_SUCCESS });
        }
    };

    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        match e.downcast_ref::<OpenError>() {
            Some(OpenError::Usage) => eprintln!("usage: {} [OPTIONS] <REFERENCE>", program),
            _ => eprintln!("{:#}", e),
        }
        std::process::exit(EXIT_FAILURE);
    }
    std::process::exit(EXIT_SUCCESS);
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let reference = cli.reference.as_deref().ok_or(OpenError::Usage)?;
    let env = Environment::from_process()?;
    let options = RouteOptions {
        force_commit: cli.commit,
        match_mode: cli.match_mode.into(),
    };

    if cli.print {
        let target = pipeline::resolve(reference, options, &env, &SystemRunner)?;
        println!("{}", target.url);
    } else {
        pipeline::open(reference, options, &env, &SystemRunner, browser::on_path)?;
    }
    Ok(())
}

fn program_name(args: &[OsString]) -> String {
    args.first()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string())
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_module("commit_opener", LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}
