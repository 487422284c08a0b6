//! `ifsc-finder` command line: look up, validate and read out IFSC codes.

mod clipboard;
mod render;
mod speech;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand};
use ifsc_finder_bank_data::provider::razorpay::DEFAULT_BASE_URL;
use ifsc_finder_bank_data::{BankDataProvider, CapabilityPolicy, RazorpayProvider};
use ifsc_finder_core::ifsc::{check_submission, format_warning, normalize_input};
use ifsc_finder_core::lookup::{BranchDetails, LookupForm, LookupService, LookupServiceTrait};
use ifsc_finder_core::speech::{select_voice, ReadoutPlayer, SpeechEngine};
use tracing_subscriber::EnvFilter;

use crate::clipboard::{default_clipboard_command, CommandClipboard};
use crate::speech::CommandSpeechEngine;

const EXIT_NO_RESULT: u8 = 1;
const EXIT_INVALID: u8 = 2;

#[derive(Parser)]
#[command(name = "ifsc-finder", version, about = "Look up Indian bank branches by IFSC code")]
struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[arg(long, env = "IFSC_PROVIDER_URL", default_value = DEFAULT_BASE_URL, global = true)]
    provider_url: String,

    #[arg(long, env = "IFSC_PROVIDER_TIMEOUT_MS", global = true)]
    provider_timeout_ms: Option<u64>,

    /// How provider payment flags are interpreted: optimistic or reported
    #[arg(long, env = "IFSC_CAPABILITY_POLICY", default_value = "optimistic", global = true)]
    capability_policy: CapabilityPolicy,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch and print the branch for an IFSC code
    Lookup(LookupArgs),
    /// Check an IFSC code's format without contacting the provider
    Validate { code: String },
    /// List the voices offered by the speech command
    Voices {
        #[arg(long, env = "IFSC_TTS_COMMAND", default_value = "espeak-ng")]
        tts_command: String,
    },
}

#[derive(Args)]
struct LookupArgs {
    code: String,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
    /// Read the result aloud
    #[arg(long)]
    speak: bool,
    /// Copy the IFSC code to the clipboard
    #[arg(long)]
    copy: bool,
    #[arg(long, env = "IFSC_TTS_COMMAND", default_value = "espeak-ng")]
    tts_command: String,
    #[arg(long, env = "IFSC_CLIPBOARD_COMMAND")]
    clipboard_command: Option<String>,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Lookup(args) => {
            let provider = RazorpayProvider::new(
                cli.provider_url.clone(),
                cli.capability_policy,
                cli.provider_timeout_ms.map(Duration::from_millis),
            );
            tracing::debug!(
                "Provider {} at {} (capability policy: {})",
                provider.id(),
                cli.provider_url,
                cli.capability_policy
            );
            lookup(Arc::new(provider), args).await
        }
        Command::Validate { code } => Ok(validate(&code)),
        Command::Voices { tts_command } => voices(&tts_command),
    }
}

async fn lookup(
    provider: Arc<dyn BankDataProvider>,
    args: LookupArgs,
) -> anyhow::Result<ExitCode> {
    let service = LookupService::new(provider);

    let mut form = LookupForm::new();
    form.set_input(&args.code);
    if let Some(warning) = form.format_warning() {
        eprintln!("{}", warning);
    }
    let (code, ticket) = match form.submit() {
        Ok(submitted) => submitted,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(ExitCode::from(EXIT_INVALID));
        }
    };

    let result = service.fetch_branch(&code).await;
    form.complete(ticket, result);

    let Some(record) = form.branch().cloned() else {
        if let Some(message) = form.error() {
            eprintln!("{}", message);
        }
        return Ok(ExitCode::from(EXIT_NO_RESULT));
    };

    let details = BranchDetails::from(record.clone());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&details)?);
    } else {
        print!("{}", render::render_details(&details));
    }

    if args.copy {
        let command = args
            .clipboard_command
            .as_deref()
            .unwrap_or(default_clipboard_command());
        match CommandClipboard::new(command).and_then(|sink| form.copy_ifsc(&sink, Instant::now()))
        {
            Ok(message) => eprintln!("{}", message),
            Err(e) => tracing::warn!("Copy failed: {}", e),
        }
    }

    if args.speak {
        // Playback continues in the spawned TTS process after we exit
        let engine: Arc<dyn SpeechEngine> = Arc::new(CommandSpeechEngine::new(args.tts_command));
        let mut player = ReadoutPlayer::new(Some(engine));
        match player.read(&record) {
            Ok(true) => {}
            Ok(false) => tracing::warn!("No speech voice available; skipping readout"),
            Err(e) => tracing::warn!("{}", e),
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn validate(raw: &str) -> ExitCode {
    let code = normalize_input(raw);
    if let Some(warning) = format_warning(&code) {
        eprintln!("{}", warning);
    }
    match check_submission(&code) {
        Ok(code) => {
            println!(
                "{} is a valid IFSC code (bank {}, branch {})",
                code,
                code.bank_code(),
                code.branch_code()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(EXIT_INVALID)
        }
    }
}

fn voices(tts_command: &str) -> anyhow::Result<ExitCode> {
    let engine = CommandSpeechEngine::new(tts_command);
    let voices = engine.voices()?;
    let selected = select_voice(&voices);
    for voice in &voices {
        let marker = if Some(voice) == selected.as_ref() { "*" } else { " " };
        println!(
            "{} {:<40} {}",
            marker,
            voice.name,
            voice.language.as_deref().unwrap_or("")
        );
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_lookup_flags() {
        let cli = Cli::try_parse_from([
            "ifsc-finder",
            "-vv",
            "--capability-policy",
            "reported",
            "lookup",
            "hdfc0000053",
            "--json",
            "--copy",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.capability_policy, CapabilityPolicy::Reported);
        match cli.command {
            Command::Lookup(args) => {
                assert_eq!(args.code, "hdfc0000053");
                assert!(args.json);
                assert!(!args.speak);
                assert!(args.copy);
            }
            _ => panic!("expected lookup"),
        }
    }

    #[test]
    fn test_validate_exit_codes() {
        assert_eq!(validate(" sbin0001234 "), ExitCode::SUCCESS);
        assert_eq!(validate("ABCD1234567"), ExitCode::from(EXIT_INVALID));
        assert_eq!(validate(""), ExitCode::from(EXIT_INVALID));
    }
}
