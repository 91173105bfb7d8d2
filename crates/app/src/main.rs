use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{DrillLoopService, RecognitionService, SynthesisService};
use storage::CsvVocabFile;
use ui::{App, UiApp, build_app_context};

const DEFAULT_VOCAB_FILE: &str = "german_vocab.csv";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidVocabPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidVocabPath { raw } => write!(f, "invalid --vocab value: {raw}"),
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
    drill: Arc<DrillLoopService>,
}

impl UiApp for DesktopApp {
    fn drill_loop(&self) -> Arc<DrillLoopService> {
        Arc::clone(&self.drill)
    }
}

struct Args {
    vocab_path: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--vocab <csv path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --vocab {DEFAULT_VOCAB_FILE}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  SPRICH_VOCAB               Vocabulary CSV path (same as --vocab)");
    eprintln!("  SPRICH_TTS_BASE_URL        Text-to-speech endpoint");
    eprintln!("  SPRICH_TTS_LANG            Spoken language for synthesis (default: de)");
    eprintln!("  SPRICH_STT_BASE_URL        Speech-recognition endpoint");
    eprintln!("  SPRICH_STT_API_KEY         Speech-recognition API key");
    eprintln!("  SPRICH_STT_LANG            Recognition locale (default: de-DE)");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut vocab_path = std::env::var("SPRICH_VOCAB")
            .ok()
            .unwrap_or_else(|| DEFAULT_VOCAB_FILE.into());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--vocab" => {
                    let value = require_value(args, "--vocab")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidVocabPath { raw: value });
                    }
                    vocab_path = value;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { vocab_path })
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Keep service wiring in the binary glue so core/services stay pure.
    let vocab = CsvVocabFile::new(parsed.vocab_path.as_str());
    let drill = Arc::new(DrillLoopService::new(
        Arc::new(vocab),
        Arc::new(SynthesisService::from_env()),
        Arc::new(RecognitionService::from_env()),
    ));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { drill });
    let context = build_app_context(&app);

    // Explicitly disable always-on-top so the app doesn't behave like a
    // modal window in dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Sprich")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
