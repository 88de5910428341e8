//! Terminal client: posts text to a running Hookforge server and prints the
//! five variations as numbered cards.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hookforge::client::controller::{FormController, SubmitOutcome};
use hookforge::client::http::HttpTransformApi;
use hookforge::client::terminal::{render_cards, CommandClipboard, StderrNotifier};
use hookforge::client::{Clipboard, Notifier};
use hookforge::transform::prompts::{BRAND_VOICE_PRESETS, DEFAULT_BRAND_VOICE};

#[derive(Debug, Parser)]
#[command(name = "hookforge-cli", version, about = "Turn a raw thought into 5 LinkedIn post variations")]
struct Cli {
    /// Raw thought or brain dump to transform.
    text: Vec<String>,

    /// Brand voice; any text is accepted, presets are listed by --list-voices.
    #[arg(short, long, default_value = DEFAULT_BRAND_VOICE)]
    voice: String,

    /// Copy card N (1-5) to the clipboard after generating.
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
    copy: Option<u8>,

    /// Server base URL.
    #[arg(long, env = "HOOKFORGE_SERVER", default_value = "http://localhost:8080")]
    server: String,

    /// Copy command, e.g. "xclip -selection clipboard". Detected when unset.
    #[arg(long, env = "HOOKFORGE_CLIPBOARD")]
    clipboard_cmd: Option<String>,

    /// Print the preset voices and exit.
    #[arg(long)]
    list_voices: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if cli.list_voices {
        for voice in BRAND_VOICE_PRESETS {
            println!("{voice}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let clipboard: Arc<dyn Clipboard> = match cli.clipboard_cmd.as_deref() {
        Some(command) => match CommandClipboard::from_command_line(command) {
            Some(clipboard) => Arc::new(clipboard),
            None => bail!("--clipboard-cmd must not be empty"),
        },
        None => Arc::new(CommandClipboard::detect()),
    };

    let controller = FormController::new(
        Arc::new(HttpTransformApi::new(&cli.server)?),
        clipboard,
        Arc::new(StderrNotifier),
    );
    controller.set_text(cli.text.join(" "));
    controller.set_brand_voice(cli.voice);

    match controller.submit().await {
        SubmitOutcome::Succeeded => {}
        SubmitOutcome::Skipped => bail!("nothing to transform: text is blank"),
        SubmitOutcome::Failed => return Ok(ExitCode::FAILURE),
    }

    if let Some(n) = cli.copy {
        // The marker's expiry is irrelevant once the cards are printed.
        if let Err(e) = controller.copy(usize::from(n) - 1) {
            StderrNotifier.alert(&e.to_string());
        }
    }

    let state = controller.snapshot();
    print!("{}", render_cards(&state.variations, state.copied_index));
    Ok(ExitCode::SUCCESS)
}
