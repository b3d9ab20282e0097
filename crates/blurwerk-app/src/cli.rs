// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line parsing. Positional input/output paths, a mask-size option
// and an optional JSON config file; flags override file values.

use std::ffi::OsString;
use std::path::PathBuf;

use blurwerk_core::error::{BlurwerkError, Result};
use blurwerk_core::{BlurConfig, MaskSize};
use clap::Parser;
use clap::error::ErrorKind;

/// Raw command-line values before they are merged with the config file.
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(name = "blurwerk", version)]
#[command(about = "Apply a box blur to INPUT and write the result to OUTPUT as PNG")]
#[command(after_help = "Logging is controlled with RUST_LOG (default: info).")]
pub struct Cli {
    /// Image to blur [default: lenna.png]
    pub input: Option<OsString>,
    /// PNG file to write [default: lenna-blurred.png]
    pub output: Option<OsString>,
    /// Side length of the square blur window [default: 3]
    #[arg(short, long, value_name = "N", value_parser = parse_mask)]
    pub mask: Option<MaskSize>,
    /// Read settings from a JSON config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Blur on a single thread
    #[arg(long)]
    pub sequential: bool,
    /// Write the effective settings as JSON to FILE instead of blurring
    #[arg(long, value_name = "FILE")]
    pub write_config: Option<PathBuf>,
}

/// What the user asked for.
#[derive(Debug)]
pub enum Command {
    Run(Cli),
    /// Rendered `--help` or `--version` text.
    Info(String),
}

impl Cli {
    /// Load the config file (if any) and apply command-line overrides.
    ///
    /// Empty positional paths fall back to the configured values.
    pub fn into_config(self) -> Result<BlurConfig> {
        let mut config = match &self.config {
            Some(path) => BlurConfig::load(path)?,
            None => BlurConfig::default(),
        };
        if let Some(input) = non_empty(self.input) {
            config.input = input;
        }
        if let Some(output) = non_empty(self.output) {
            config.output = output;
        }
        if let Some(mask) = self.mask {
            config.mask_size = mask;
        }
        if self.sequential {
            config.parallel = false;
        }
        Ok(config)
    }
}

/// Parse arguments, including the program name as the first item.
pub fn parse_args<I, T>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Command::Run(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                Ok(Command::Info(err.render().to_string()))
            }
            _ => Err(BlurwerkError::Usage(err.render().to_string().trim_end().to_string())),
        },
    }
}

fn non_empty(path: Option<OsString>) -> Option<PathBuf> {
    path.filter(|p| !p.is_empty()).map(PathBuf::from)
}

fn parse_mask(value: &str) -> std::result::Result<MaskSize, String> {
    let size: u32 = value
        .parse()
        .map_err(|_| format!("mask size must be a positive integer, got {value:?}"))?;
    MaskSize::new(size).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command> {
        parse_args(std::iter::once("blurwerk").chain(args.iter().copied()))
    }

    fn run_args(args: &[&str]) -> Cli {
        match parse(args).unwrap() {
            Command::Run(cli) => cli,
            Command::Info(text) => panic!("unexpected info output: {text}"),
        }
    }

    #[test]
    fn no_arguments_uses_defaults() {
        let config = run_args(&[]).into_config().unwrap();
        assert_eq!(config, BlurConfig::default());
    }

    #[test]
    fn positionals_set_input_and_output() {
        let config = run_args(&["photo.png", "soft.png"]).into_config().unwrap();
        assert_eq!(config.input, PathBuf::from("photo.png"));
        assert_eq!(config.output, PathBuf::from("soft.png"));
    }

    #[test]
    fn empty_positionals_fall_back_to_defaults() {
        let config = run_args(&["", "out.png"]).into_config().unwrap();
        assert_eq!(config.input, PathBuf::from("lenna.png"));
        assert_eq!(config.output, PathBuf::from("out.png"));
    }

    #[test]
    fn double_dash_allows_paths_starting_with_dash() {
        let config = run_args(&["--", "-dash.png", "-out.png"]).into_config().unwrap();
        assert_eq!(config.input, PathBuf::from("-dash.png"));
        assert_eq!(config.output, PathBuf::from("-out.png"));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_paths_are_accepted() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"in\xff.png".to_vec());
        let args = vec![OsString::from("blurwerk"), raw.clone()];
        let cli = match parse_args(args).unwrap() {
            Command::Run(cli) => cli,
            Command::Info(text) => panic!("unexpected info output: {text}"),
        };
        assert_eq!(cli.into_config().unwrap().input, PathBuf::from(raw));
    }

    #[test]
    fn mask_accepts_short_long_attached_and_inline_forms() {
        let five = Some(MaskSize::new(5).unwrap());
        assert_eq!(run_args(&["-m", "5"]).mask, five);
        assert_eq!(run_args(&["-m5"]).mask, five);
        assert_eq!(run_args(&["--mask", "5"]).mask, five);
        assert_eq!(run_args(&["--mask=5"]).mask, five);
    }

    #[test]
    fn bad_mask_values_are_usage_errors() {
        let cases: [&[&str]; 4] = [
            &["--mask", "abc"],
            &["--mask", "-3"],
            &["--mask", "0"],
            &["--mask"],
        ];
        for args in cases {
            assert!(
                matches!(parse(args), Err(BlurwerkError::Usage(_))),
                "{args:?} should be rejected"
            );
        }
    }

    #[test]
    fn unknown_options_and_extra_paths_are_rejected() {
        assert!(matches!(parse(&["--radius", "2"]), Err(BlurwerkError::Usage(_))));
        assert!(matches!(
            parse(&["a.png", "b.png", "c.png"]),
            Err(BlurwerkError::Usage(_))
        ));
    }

    #[test]
    fn help_and_version_render_text() {
        match parse(&["in.png", "--help"]).unwrap() {
            Command::Info(text) => assert!(text.contains("--mask"), "{text}"),
            Command::Run(cli) => panic!("expected help, got {cli:?}"),
        }
        assert!(matches!(parse(&["-V"]).unwrap(), Command::Info(_)));
    }

    #[test]
    fn write_config_flag_is_parsed() {
        let cli = run_args(&["--write-config", "settings.json"]);
        assert_eq!(cli.write_config, Some(PathBuf::from("settings.json")));
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blurwerk.json");
        std::fs::write(
            &path,
            r#"{ "mask_size": 9, "input": "from-file.png", "parallel": true }"#,
        )
        .unwrap();
        let path_arg = path.to_string_lossy().into_owned();

        let config = run_args(&["--config", &path_arg, "--mask", "5", "--sequential"])
            .into_config()
            .unwrap();
        assert_eq!(config.mask_size.get(), 5);
        assert_eq!(config.input, PathBuf::from("from-file.png"));
        assert_eq!(config.output, PathBuf::from("lenna-blurred.png"));
        assert!(!config.parallel);
    }
}
