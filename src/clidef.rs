use clap::{Arg, ArgAction, Command};
use clap::{ArgMatches, builder::styling};
use colored::Colorize;

pub static APPNAME: &str = "chatfmt";

/// Define CLI arguments and styling
pub fn cli(version: &'static str) -> Command {
    let styles = styling::Styles::styled()
        .header(styling::AnsiColor::Yellow.on_default())
        .usage(styling::AnsiColor::Yellow.on_default())
        .literal(styling::AnsiColor::BrightGreen.on_default())
        .placeholder(styling::AnsiColor::BrightMagenta.on_default());

    Command::new(APPNAME)
        .version(version)
        .about(format!("{} - {}", APPNAME.bright_magenta().bold(), "resolves &-color codes and &#RRGGBB hex colors of chat messages"))
        .override_usage(format!("{APPNAME} [OPTIONS] [MESSAGE]"))

        // Message
        .next_help_heading("Message")
        .arg(
            Arg::new("message")
                .help("Message to format. Reads lines from STDIN if omitted or \"-\"")
                .required(false)
                .index(1)
        )
        .arg(
            Arg::new("placeholders")
                .short('p')
                .long("placeholders")
                .help("Placeholders as comma-separated token,value pairs, e.g. \"%p,Steve,%n,5\"")
        )
        .arg(
            Arg::new("strip")
                .short('s')
                .long("strip")
                .action(ArgAction::SetTrue)
                .help("Remove all color codes instead of resolving them")
                .conflicts_with_all(["raw", "broadcast"])
        )
        .arg(
            Arg::new("raw")
                .short('r')
                .long("raw")
                .action(ArgAction::SetTrue)
                .help("Print resolved section-sign codes instead of terminal colors")
        )

        // Delivery
        .next_help_heading("Delivery")
        .arg(
            Arg::new("broadcast")
                .short('b')
                .long("broadcast")
                .action(ArgAction::SetTrue)
                .help("Deliver the message to the audience from the configuration")
        )
        .arg(
            Arg::new("permission")
                .short('P')
                .long("permission")
                .requires("broadcast")
                .help("Deliver only to those holding this permission")
        )

        // Time
        .next_help_heading("Time")
        .arg(
            Arg::new("duration")
                .long("duration")
                .value_parser(clap::value_parser!(u64))
                .help("Print milliseconds as a duration, like \"1h 20m 15s\"")
        )
        .arg(
            Arg::new("offset")
                .long("offset")
                .help("Print the date after an offset from now: 10s, 5m, 2h or 1d")
        )
        .arg(
            Arg::new("date")
                .long("date")
                .value_parser(clap::value_parser!(i64))
                .allow_hyphen_values(true)
                .help("Print epoch milliseconds as a date")
        )

        // Other
        .next_help_heading("Other")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Specify alternative configuration")
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .action(ArgAction::Count)
                .help("Set debug mode for more verbose output. Increase this flag for more verbosity."),
        )
        .arg(
            Arg::new("help")
                .short('h')
                .long("help")
                .action(ArgAction::SetTrue)
                .help("Display help"),
        )
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .action(ArgAction::SetTrue)
                .help("Get current version."),
        )
        .disable_help_flag(true) // Otherwise it is displayed in a wrong position
        .disable_version_flag(true)
        .disable_colored_help(false)
        .styles(styles)
}

/// Parse comma-separated values
pub fn split_by(am: &ArgMatches, id: &str, sep: Option<char>) -> Vec<String> {
    am.get_one::<String>(id)
        .map(|s| s.split(sep.unwrap_or(',')).map(|s| s.to_string()).collect::<Vec<String>>())
        .unwrap_or_default()
}
