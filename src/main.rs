// SPDX-License-Identifier: MPL-2.0
use movie_title_translator::app::{self, paths, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
Movie Title Translator

USAGE:
  movie_title_translator [OPTIONS]

OPTIONS:
  --lang <LOCALE>        Interface language (en-US, pt-BR)
  --api-key <KEY>        Movie database API key (overrides TMDB_API_KEY)
  --config-dir <PATH>    Directory holding settings.toml
  --query <TITLE>        Search this title at startup
  -h, --help             Print this help

ENVIRONMENT:
  TMDB_API_KEY                  Movie database API key
  MOVIE_TRANSLATOR_CONFIG_DIR   Directory holding settings.toml
  RUST_LOG                      Log filter (default: movie_title_translator=info)
";

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_title_translator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: opt_value(&mut args, "--lang"),
        api_key: opt_value(&mut args, "--api-key"),
        config_dir: opt_value(&mut args, "--config-dir"),
        query: opt_value(&mut args, "--query"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}

fn opt_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|error| {
        tracing::warn!(%error, option = key, "ignoring invalid option value");
        None
    })
}
