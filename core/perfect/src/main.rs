mod adapter;
mod cli;
mod domain;
mod ports;
mod wiring;


use std::process;
use std::sync::Arc;

use adapter::StdConsole;
use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use common::adapter::StdEnvResolver;
use common::domain::{ModelCatalog, ModelId, PerfectionResult, RawPrompt};
use common::error::Error;
use common::ports::outbound::{log_event, EnvResolver, LogLevel};
use domain::PerfectCommand;
use ports::inbound::UseCaseRunner;
use ports::outbound::Console;
use serde_json::json;
use wiring::wire_perfect;

const INPUT_LABEL: &str = "Enter a prompt: ";
const PROGRESS_MESSAGE: &str = "\n... Perfection in progress...\n";

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    env: Arc<dyn EnvResolver>,
    console: Arc<dyn Console>,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let verbose = config.verbose;
        match config_to_command(config) {
            PerfectCommand::Help => {
                print_help();
                Ok(0)
            }
            PerfectCommand::ListModels => {
                print_models(&ModelCatalog::builtin());
                Ok(0)
            }
            PerfectCommand::Perfect { provider, model } => {
                self.perfect(provider.as_deref(), &model, verbose)
            }
        }
    }
}

impl Runner {
    /// 1 行読み、1 回だけ改善して出力する
    ///
    /// リモート呼び出しの失敗はエラーテキストを出力して 0 で終わる。
    fn perfect(&self, provider: Option<&str>, model: &ModelId, verbose: bool) -> Result<i32, Error> {
        let app = wire_perfect(self.env.as_ref(), provider, verbose)?;
        log_event(
            app.log.as_ref(),
            LogLevel::Info,
            "cli",
            "lifecycle",
            "command started",
            vec![
                ("model", json!(model.as_ref())),
                ("model_label", json!(ModelCatalog::builtin().option_for(model).label)),
            ],
        );

        // 入力を受け付けた後の失敗はリモート失敗と同じく表示して 0 で終わる
        let line = match self.console.read_line(INPUT_LABEL) {
            Ok(line) => line.unwrap_or_default(),
            Err(e) => {
                log_event(
                    app.log.as_ref(),
                    LogLevel::Warn,
                    "cli",
                    "error",
                    "failed to read prompt",
                    vec![("error", json!(e.to_string()))],
                );
                self.console
                    .print_result(PerfectionResult::failure(&e).text())?;
                return Ok(0);
            }
        };
        let prompt = match RawPrompt::parse(line) {
            Some(p) => p,
            None => {
                log_event(
                    app.log.as_ref(),
                    LogLevel::Info,
                    "cli",
                    "lifecycle",
                    "empty prompt, nothing sent",
                    vec![],
                );
                return Ok(0);
            }
        };

        self.console.print_status(PROGRESS_MESSAGE);
        let result = app.service.perfect(&prompt, model);
        self.console.print_result(result.text())?;

        log_event(
            app.log.as_ref(),
            LogLevel::Info,
            "cli",
            "lifecycle",
            "command finished",
            vec![
                ("success", json!(result.is_success())),
                ("exit_code", json!(0)),
            ],
        );
        Ok(0)
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("perfect: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    StdEnvResolver::load_dotenv();
    let runner = Runner {
        env: Arc::new(StdEnvResolver),
        console: Arc::new(StdConsole),
    };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: perfect [options] < prompt");
}

fn print_models(catalog: &ModelCatalog) {
    let default_id = catalog.default_option().id.clone();
    for option in catalog.options() {
        let marker = if option.id == default_id { " (default)" } else { "" };
        println!(
            "{}\t{}\t{}{}",
            option.id,
            option.label,
            option.tier.details().join(", "),
            marker
        );
    }
}

fn print_help() {
    println!("Usage: perfect [options]");
    println!("Reads one line from standard input and prints a perfected version of the prompt.");
    println!();
    println!("Options:");
    println!("  -h, --help                Show this help message");
    println!("  -L, --list-models         List the selectable models");
    println!("  -m, --model <model>       Model identifier (default: gemini-2.5-flash)");
    println!("  -p, --provider <provider> LLM provider: gemini (default) or echo (offline, no API key)");
    println!("  -v, --verbose             Mirror structured logs to stderr");
    println!("  --generate <shell>        Generate shell completion script (bash, zsh, fish, ...)");
    println!();
    println!("Environment:");
    println!("  GOOGLE_API_KEY             API key for the Gemini API (required for the gemini provider).");
    println!("                             A .env file in the current directory is loaded if present.");
    println!("  PERFECTER_HOME             Home directory: template.txt override and log/perfecter.jsonl.");
    println!("                             If unset, $XDG_CONFIG_HOME/perfecter (e.g. ~/.config/perfecter) is used.");
    println!("  PERFECTER_PROVIDER         Default provider (gemini, echo).");
    println!("  PERFECTER_GEMINI_BASE_URL  Override of https://generativelanguage.googleapis.com");
    println!();
    println!("Examples:");
    println!("  echo 'write a story about a cat' | perfect");
    println!("  perfect -m gemini-2.5-pro");
}
