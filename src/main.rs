use std::process::ExitCode;

use clap::{ArgAction, Parser};
use time::macros::format_description;
use tracing::Level;
use tracing_appender::non_blocking;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::fmt::time::LocalTime;

use digestium::{HashAlgorithm, Sha1};

#[derive(Parser, Debug)]
#[command(name="sha1", version, about="Print the SHA-1 digest of each TEXT argument")]
struct Args {
    #[arg(short, long, help="Print digests in uppercase hex")]
    upper: bool,

    #[arg(short, long, action=ArgAction::Count, help="Log more (-v info, -vv debug, -vvv trace)")]
    verbose: u8,

    #[arg(long, value_name="DIR", help="Write logs to DIR/sha1.log instead of stderr")]
    log_dir: Option<String>,

    text: Vec<String>,
}

fn file_appender(dir: &str) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("sha1.log")
        .build(dir)
}

fn render_line(hasher: &impl HashAlgorithm, text: &str, upper: bool) -> digestium::Result<String> {
    let hex = hasher.hash_str(text)?;
    let hex = if upper { hex.to_uppercase() } else { hex };
    Ok(format!("{hex}  {text}"))
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let timer = LocalTime::new(
        format_description!("[month]/[day]/[year] [hour repr:24]:[minute]:[second].[subsecond digits:4]"));
    let _guard = match &args.log_dir {
        Some(dir) => {
            let appender = match file_appender(dir) {
                Ok(appender) => appender,
                Err(e) => {
                    eprintln!("Unable to open log directory: {e}");
                    return ExitCode::FAILURE;
                }
            };
            let (non_blocking, guard) = non_blocking(appender);
            tracing_subscriber::fmt().with_writer(non_blocking).with_ansi(false).with_timer(timer).with_max_level(level).init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt().with_writer(std::io::stderr).with_timer(timer).with_max_level(level).init();
            None
        }
    };

    let hasher = Sha1;
    let inputs = if args.text.is_empty() { vec![String::new()] } else { args.text };
    tracing::info!(algorithm = hasher.name(), count = inputs.len(), "hashing arguments");

    for text in &inputs {
        match render_line(&hasher, text, args.upper) {
            Ok(line) => println!("{line}"),
            Err(e) => {
                eprintln!("Unable to hash input: {e}");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
