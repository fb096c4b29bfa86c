use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser};
use log::debug;
use yourlibrary_html::converter::{ConfigBuilder, Converter, DEFAULT_LIBRARY_FILE};
use yourlibrary_html::library::errors::{Error, Result};

#[derive(Parser, Debug)]
#[command(name = "yourlibrary-html")]
#[command(about = "Convert a Spotify YourLibrary.json export into an HTML table", long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// spotify library file (required)
    #[arg(
        short = 'f',
        long = "file",
        default_value = DEFAULT_LIBRARY_FILE,
        overrides_with = "file",
        allow_hyphen_values = true
    )]
    pub file: PathBuf,

    /// Write the page here instead of next to the library file
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Escape HTML special characters in track values
    #[arg(long = "escape-html")]
    pub escape_html: bool,

    /// Print usage
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    pub help: bool,

    // Parsing stops at the first positional; whatever follows is ignored
    #[arg(hide = true, trailing_var_arg = true)]
    pub rest: Vec<OsString>,
}

/// Usage text printed after every usage error.
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

/// Parse the full argument list, program name included.
pub fn parse_args<I, T>(args: I) -> Result<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() < 2 {
        args.push(format!("-f={DEFAULT_LIBRARY_FILE}").into());
    }

    if args.get(1).is_some_and(|a| a == "-h") {
        return Err(Error::usage(""));
    }

    let cli = Cli::try_parse_from(args).map_err(|e| {
        // The usage text is printed separately, keep only the error line
        let rendered = e.render().to_string();
        let line = rendered.lines().next().unwrap_or_default();
        Error::usage(format!("{line}\n"))
    })?;
    if cli.help {
        return Err(Error::usage(""));
    }
    if !cli.rest.is_empty() {
        debug!("Ignoring trailing arguments: {:?}", cli.rest);
    }
    Ok(cli)
}

pub fn run() -> Result<()> {
    let cli = parse_args(std::env::args_os())?;

    let mut builder = ConfigBuilder::new()
        .input(cli.file)
        .escape_html(cli.escape_html);
    if let Some(output) = cli.output {
        builder = builder.output(output);
    }
    let config = builder.build()?;
    debug!("Resolved library file {:?}", config.input);

    Converter::new(config).convert()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn usage_message(args: &[&str]) -> String {
        match parse_args(args) {
            Err(Error::Usage { message }) => message,
            other => panic!("expected usage error, got {other:?}"),
        }
    }

    #[test]
    fn no_arguments_uses_default_file() {
        let cli = parse_args(["yourlibrary-html"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("YourLibrary.json"));
        assert_eq!(cli.output, None);
        assert!(!cli.escape_html);
    }

    #[test]
    fn file_flag_forms() {
        for args in [
            vec!["prog", "-f", "export.json"],
            vec!["prog", "-f=export.json"],
            vec!["prog", "--file", "export.json"],
            vec!["prog", "--file=export.json"],
        ] {
            let cli = parse_args(&args).unwrap();
            assert_eq!(cli.file, PathBuf::from("export.json"), "args: {args:?}");
        }
    }

    #[test]
    fn help_as_first_argument_is_usage_error() {
        assert_eq!(usage_message(&["prog", "-h"]), "");
        assert_eq!(usage_message(&["prog", "-h", "-f", "x.json"]), "");
    }

    #[test]
    fn help_later_is_usage_error() {
        assert_eq!(usage_message(&["prog", "-f", "x.json", "--help"]), "");
    }

    #[test]
    fn unknown_flag_is_usage_error() {
        let message = usage_message(&["prog", "-x"]);
        assert!(message.contains("-x"), "message: {message}");
        assert_eq!(message.lines().count(), 1, "message: {message}");
        assert!(!message.contains("Usage"), "message: {message}");
    }

    #[test]
    fn repeated_file_flag_keeps_last() {
        let cli = parse_args(["prog", "-f", "a.json", "-f", "b.json"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("b.json"));
    }

    #[test]
    fn file_value_may_start_with_hyphen() {
        let cli = parse_args(["prog", "-f", "-weird.json"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("-weird.json"));
    }

    #[test]
    fn missing_flag_value_is_usage_error() {
        let message = usage_message(&["prog", "-f"]);
        assert!(!message.is_empty());
    }

    #[test]
    fn trailing_positionals_are_ignored() {
        let cli = parse_args(["prog", "-f", "a.json", "extra", "more"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("a.json"));
        assert_eq!(cli.rest, vec![OsString::from("extra"), OsString::from("more")]);
    }

    #[test]
    fn optional_flags() {
        let cli = parse_args(["prog", "-o", "out.html", "--escape-html"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("YourLibrary.json"));
        assert_eq!(cli.output, Some(PathBuf::from("out.html")));
        assert!(cli.escape_html);
    }

    #[test]
    fn usage_mentions_file_flag() {
        let text = usage();
        assert!(text.contains("-f"));
        assert!(text.contains("YourLibrary.json"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
