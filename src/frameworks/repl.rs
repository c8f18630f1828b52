use crate::domain::{ImportSink, SystemsProvider};
use crate::frameworks::config;
use crate::interface_adapters::clients::EdsmClient;
use crate::interface_adapters::commands::dispatch;
use crate::interface_adapters::files::ImportFile;
use crate::use_cases::SphereExportUseCase;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

pub const PROMPT: &str = "dzhnv>";

fn init_tracing() {
    // Quiet by default: log lines share the terminal with the prompt.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Reads commands from `input` until `exit` or end of input.
pub fn run_session<R, W, P, S>(
    mut input: R,
    output: &mut W,
    sphere: &SphereExportUseCase<P, S>,
) -> io::Result<()>
where
    R: BufRead,
    W: Write + ?Sized,
    P: SystemsProvider,
    S: ImportSink,
{
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input behaves like `exit`; finish the prompt line first.
            writeln!(output)?;
            tracing::debug!("end of input, closing session.");
            return Ok(());
        }

        let command = dispatch(line.trim_end_matches(['\r', '\n']));
        tracing::debug!(kind = ?command.kind(), "dispatching command.");
        if command.execute(sphere, output)? {
            return Ok(());
        }
    }
}

pub fn run() -> ExitCode {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config_dir = match config::config_dir() {
        Ok(dir) => dir,
        Err(error) => {
            tracing::error!(%error, "failed to locate config directory");
            return ExitCode::FAILURE;
        }
    };

    let config = match config::load(&config_dir) {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    let edsm_url = config::edsm_api_url();
    tracing::debug!(edsm_url = %edsm_url, "edsm client configured.");
    let sphere = SphereExportUseCase::new(
        EdsmClient::new(edsm_url),
        ImportFile::in_dir(&config.output_dir),
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(error) = run_session(stdin.lock(), &mut stdout, &sphere) {
        tracing::error!(%error, "console i/o failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
