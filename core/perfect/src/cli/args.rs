use crate::domain::PerfectCommand;
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::domain::model::DEFAULT_MODEL_ID;
use common::domain::ModelId;
use common::error::Error;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    /// -L / --list-models: 選択可能なモデル一覧を表示
    pub list_models: bool,
    /// -v / --verbose: 構造化ログを stderr にも出力する
    pub verbose: bool,
    /// -p / --provider: gemini / echo（未指定時は PERFECTER_PROVIDER、なければ gemini）
    pub provider: Option<String>,
    /// -m / --model: モデル識別子（未指定時は gemini-2.5-flash）
    pub model: Option<ModelId>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("perfect")
        .about("Rewrite a simple prompt into a detailed, effective prompt")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("list-models")
                .short('L')
                .long("list-models")
                .help("List the selectable models")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Mirror structured logs to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("provider")
                .short('p')
                .long("provider")
                .value_name("provider")
                .help("LLM provider (gemini, echo)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("model")
                .short('m')
                .long("model")
                .value_name("model")
                .help("Model identifier (default: gemini-2.5-flash)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        list_models: matches.get_flag("list-models"),
        verbose: matches.get_flag("verbose"),
        provider: matches.get_one::<String>("provider").cloned(),
        model: matches
            .get_one::<String>("model")
            .map(|s| ModelId::new(s.clone())),
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let matches = build_clap_command()
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[String]) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "perfect", &mut std::io::stdout());
}

/// Config を PerfectCommand に変換する
pub fn config_to_command(config: Config) -> PerfectCommand {
    if config.help {
        return PerfectCommand::Help;
    }

    if config.list_models {
        return PerfectCommand::ListModels;
    }

    PerfectCommand::Perfect {
        provider: config.provider,
        model: config
            .model
            .unwrap_or_else(|| ModelId::new(DEFAULT_MODEL_ID)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.help);
        assert!(!config.list_models);
        assert!(!config.verbose);
        assert!(config.provider.is_none());
        assert!(config.model.is_none());
    }

    #[test]
    fn test_parse_args_no_args() {
        let config = parse_args_from(&args(&["perfect"])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_args_help_short_and_long() {
        assert!(parse_args_from(&args(&["perfect", "-h"])).unwrap().help);
        assert!(parse_args_from(&args(&["perfect", "--help"])).unwrap().help);
    }

    #[test]
    fn test_parse_args_model_and_provider() {
        let config =
            parse_args_from(&args(&["perfect", "-m", "gemini-2.5-pro", "--provider", "echo", "-v"]))
                .unwrap();
        assert_eq!(config.model, Some(ModelId::new("gemini-2.5-pro")));
        assert_eq!(config.provider.as_deref(), Some("echo"));
        assert!(config.verbose);
    }

    #[test]
    fn test_parse_args_unknown_option() {
        let err = parse_args_from(&args(&["perfect", "--unknown"])).unwrap_err();
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_parse_args_rejects_positional() {
        // プロンプトは標準入力から読む
        let err = parse_args_from(&args(&["perfect", "write", "a", "story"])).unwrap_err();
        assert!(err.is_usage());
    }

    #[test]
    fn test_config_to_command_default_model() {
        let cmd = config_to_command(Config::default());
        assert_eq!(
            cmd,
            PerfectCommand::Perfect {
                provider: None,
                model: ModelId::new("gemini-2.5-flash"),
            }
        );
    }

    #[test]
    fn test_config_to_command_help_wins() {
        let config = Config {
            help: true,
            list_models: true,
            ..Default::default()
        };
        assert_eq!(config_to_command(config), PerfectCommand::Help);
    }

    #[test]
    fn test_config_to_command_list_models() {
        let config = Config {
            list_models: true,
            ..Default::default()
        };
        assert_eq!(config_to_command(config), PerfectCommand::ListModels);
    }
}
