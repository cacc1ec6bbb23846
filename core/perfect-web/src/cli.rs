use std::net::SocketAddr;
use std::time::Duration;

use clap::builder::ArgAction;
use clap::value_parser;
use common::error::Error;

/// 既定の待ち受けアドレス
pub const DEFAULT_BIND: &str = "127.0.0.1:8501";
/// 既定のセッション有効期間（最終アクセスからの秒数）
pub const DEFAULT_SESSION_TTL_SECS: u64 = 3600;

#[derive(Debug, Clone, PartialEq)]
pub struct WebConfig {
    pub bind: SocketAddr,
    /// -p / --provider: gemini / echo（未指定時は PERFECTER_PROVIDER、なければ gemini）
    pub provider: Option<String>,
    pub session_ttl: Duration,
    /// -v / --verbose: 構造化ログを stderr にも出力する
    pub verbose: bool,
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("perfect-web")
        .about("Serve the prompt perfecter as a browser form")
        .arg(
            clap::Arg::new("bind")
                .long("bind")
                .value_name("addr")
                .help("Address to listen on")
                .default_value(DEFAULT_BIND)
                .value_parser(value_parser!(SocketAddr))
                .num_args(1),
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
            clap::Arg::new("session-ttl-secs")
                .long("session-ttl-secs")
                .value_name("secs")
                .help("Evict sessions idle for longer than this")
                .default_value("3600")
                .value_parser(value_parser!(u64).range(1..))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Mirror structured logs to stderr")
                .action(ArgAction::SetTrue),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Result<WebConfig, Error> {
    let bind = matches
        .get_one::<SocketAddr>("bind")
        .copied()
        .ok_or_else(|| Error::invalid_argument("--bind is required"))?;
    let ttl = matches
        .get_one::<u64>("session-ttl-secs")
        .copied()
        .unwrap_or(DEFAULT_SESSION_TTL_SECS);
    Ok(WebConfig {
        bind,
        provider: matches.get_one::<String>("provider").cloned(),
        session_ttl: Duration::from_secs(ttl),
        verbose: matches.get_flag("verbose"),
    })
}

/// コマンドラインを解析する。--help のときはヘルプを表示して None を返す。
pub fn parse_args() -> Result<Option<WebConfig>, Error> {
    match build_clap_command().try_get_matches() {
        Ok(matches) => matches_to_config(&matches).map(Some),
        Err(e) if e.kind() == clap::error::ErrorKind::DisplayHelp => {
            let _ = e.print();
            Ok(None)
        }
        Err(e) => Err(Error::invalid_argument(e.to_string())),
    }
}

/// 引数スライスから解析する（--help も InvalidArgument になる）
#[allow(dead_code)]
pub fn parse_args_from<I, T>(args: I) -> Result<WebConfig, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    matches_to_config(&matches)
}
