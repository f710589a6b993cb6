use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    AppServices, Clock, LookupService, NounQuizService, SentenceQuizService, VerbQuizService,
};
use storage::http::{API_URL_ENV, ApiConfig};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::ChronoLocal;
use ui::{App, UiApp, build_app_context};

const LOG_LEVEL_ENV: &str = "QUIZ_LOG_LEVEL";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiUrl { raw: String },
    InvalidSeed { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw:?}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn sentence_quiz(&self) -> Arc<SentenceQuizService> {
        self.services.sentence_quiz()
    }

    fn noun_quiz(&self) -> Arc<NounQuizService> {
        self.services.noun_quiz()
    }

    fn verb_quiz(&self) -> Arc<VerbQuizService> {
        self.services.verb_quiz()
    }

    fn lookup(&self) -> Arc<LookupService> {
        self.services.lookup()
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    api: ApiConfig,
    seed: Option<u64>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>] [--seed <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url {}", storage::http::DEFAULT_API_URL);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {API_URL_ENV}, {LOG_LEVEL_ENV}");
}

impl Args {
    /// `--api-url` wins over the environment; the environment wins over the default.
    fn parse(
        args: impl IntoIterator<Item = String>,
        env_config: ApiConfig,
    ) -> Result<Parsed, ArgsError> {
        let mut args = args.into_iter();
        let mut api = env_config;
        let mut seed = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    let value = require_value(&mut args, "--api-url")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidApiUrl { raw: value });
                    }
                    api = ApiConfig::new(value.trim());
                }
                "--seed" => {
                    let value = require_value(&mut args, "--seed")?;
                    let parsed: u64 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?;
                    seed = Some(parsed);
                }
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(Self { api, seed }))
    }
}

fn init_tracing_subscriber() {
    let mut filter = EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    for directive in ["reqwest=warn", "hyper=warn", "hyper_util=warn", "rustls=warn"] {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv = std::env::args().skip(1);
    let args = match Args::parse(argv, ApiConfig::from_env()) {
        Ok(Parsed::Run(args)) => args,
        Ok(Parsed::Help) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return Err(err.into());
        }
    };

    init_tracing_subscriber();
    tracing::info!(api_url = %args.api.base_url, seed = ?args.seed, "starting quiz app");

    let services = AppServices::new_http(&args.api, Clock::default_clock(), args.seed)?;
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("German Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
