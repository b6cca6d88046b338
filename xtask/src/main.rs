use std::fs;
use std::path::PathBuf;
use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};
use hello_core::contract::build_hello_response;
use serde_json::Value;

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the hello handler workspace",
    long_about = "A unified CLI for running CI checks and invoking the hello\n\
                  handler locally against a JSON event."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run CI checks (fmt, clippy, tests)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
    /// Run the handler on a JSON event and print the response envelope
    Invoke {
        /// Inline JSON event
        #[arg(long, conflicts_with = "event_file")]
        event: Option<String>,
        /// Path to a file holding the JSON event
        #[arg(long, env = "HELLO_EVENT_FILE")]
        event_file: Option<PathBuf>,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting and clippy
    Lint,
    /// Workspace tests
    Test,
    /// Lint + test
    Check,
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    Command::new("cargo")
        .args(args)
        .status()
        .expect("failed to execute cargo")
}

fn run_cargo(args: &[&str]) {
    let status = cargo(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn fail(message: &str) -> ! {
    eprintln!("error: {message}");
    exit(1);
}

fn read_event(event: Option<String>, event_file: Option<PathBuf>) -> Result<Value, String> {
    let raw = match (event, event_file) {
        (Some(inline), _) => inline,
        (None, Some(path)) => fs::read_to_string(&path)
            .map_err(|error| format!("failed to read event file '{}': {error}", path.display()))?,
        (None, None) => return Ok(Value::Object(Default::default())),
    };

    serde_json::from_str(&raw).map_err(|error| format!("event is not valid JSON: {error}"))
}

fn invoke(event: Option<String>, event_file: Option<PathBuf>) {
    let event = read_event(event, event_file).unwrap_or_else(|message| fail(&message));
    let response = build_hello_response(&event).unwrap_or_else(|error| fail(error.message()));
    let rendered = serde_json::to_string_pretty(&response)
        .unwrap_or_else(|error| fail(&format!("failed to render envelope: {error}")));
    println!("{rendered}");
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_lint() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);
}

fn ci_test() {
    step("Test hello_core");
    run_cargo(&["test", "-p", "hello_core"]);

    step("Test hello_lambda");
    run_cargo(&["test", "-p", "hello_lambda"]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ci { job } => {
            match job {
                CiJob::Lint => ci_lint(),
                CiJob::Test => ci_test(),
                CiJob::Check => {
                    ci_lint();
                    ci_test();
                }
            }
            eprintln!("\nCI job passed.");
        }
        Commands::Invoke { event, event_file } => invoke(event, event_file),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;

    use super::*;

    #[test]
    fn missing_event_defaults_to_empty_object() {
        let event = read_event(None, None).expect("default event");
        assert_eq!(event, json!({}));
    }

    #[test]
    fn inline_event_is_parsed() {
        let event = read_event(Some(r#"{"a": 1, "b": [1, 2, 3]}"#.to_string()), None)
            .expect("inline event");
        assert_eq!(event, json!({"a": 1, "b": [1, 2, 3]}));
    }

    #[test]
    fn invalid_inline_event_is_rejected() {
        let error = read_event(Some("{".to_string()), None).expect_err("invalid json");
        assert!(error.contains("event is not valid JSON"));
    }

    #[test]
    fn event_file_is_read() {
        let path = std::env::temp_dir().join(format!("xtask-event-{}.json", std::process::id()));
        let mut file = fs::File::create(&path).expect("create event file");
        file.write_all(b"null").expect("write event file");

        let event = read_event(None, Some(path.clone())).expect("file event");
        fs::remove_file(&path).expect("remove event file");

        assert_eq!(event, Value::Null);
    }

    #[test]
    fn missing_event_file_is_reported() {
        let error = read_event(None, Some(PathBuf::from("does/not/exist.json")))
            .expect_err("missing file");
        assert!(error.contains("failed to read event file"));
    }
}
