// SPDX-License-Identifier: MPL-2.0
use iced_slides::app::{self, paths, Flags};
use iced_slides::carousel::location::parse_fragment;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_slides

USAGE:
  iced_slides [OPTIONS] [DECK[#slide-N]]

OPTIONS:
  --lang <LOCALE>       UI language (en-US, pt-BR)
  --at <N>              Start on slide N (also accepts #slide-N)
  --config-dir <DIR>    Directory holding settings.toml
  --data-dir <DIR>      Directory holding session state
  --i18n-dir <DIR>      Extra .ftl translation files
  -h, --help            Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("iced_slides=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = option(&mut args, "--lang");
    let at = option(&mut args, "--at").and_then(|raw| {
        let slide = raw.parse::<usize>().ok().or_else(|| parse_fragment(&raw).ok());
        if slide.is_none() {
            tracing::warn!(value = %raw, "ignoring --at");
        }
        slide
    });
    let config_dir = option(&mut args, "--config-dir");
    let data_dir = option(&mut args, "--data-dir");
    let i18n_dir = option(&mut args, "--i18n-dir");

    let deck = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    paths::init_cli_overrides(data_dir, config_dir);

    app::run(Flags {
        lang,
        deck,
        at,
        i18n_dir,
    })
}

fn option(args: &mut pico_args::Arguments, name: &'static str) -> Option<String> {
    args.opt_value_from_str(name).unwrap_or_else(|err| {
        tracing::warn!(%err, option = name, "ignoring invalid option");
        None
    })
}
