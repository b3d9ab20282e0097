// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error reports for the command-line operator.
//
// Every technical error is mapped to a plain message, a suggestion and the
// process exit code the binary should return.

use crate::error::BlurwerkError;

/// Which stage of a run an error belongs to. Drives the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Bad arguments or configuration; nothing was read.
    Setup,
    /// The input image could not be read or decoded.
    Input,
    /// The output image could not be encoded or written.
    Output,
}

impl Stage {
    pub fn exit_code(self) -> u8 {
        match self {
            Stage::Setup => 2,
            Stage::Input => 3,
            Stage::Output => 4,
        }
    }
}

/// A human-readable error with a plain message and an actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// One-line summary.
    pub message: String,
    /// What the operator should try next.
    pub suggestion: String,
    pub stage: Stage,
}

impl HumanError {
    pub fn exit_code(&self) -> u8 {
        self.stage.exit_code()
    }
}

impl std::fmt::Display for HumanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n  hint: {}", self.message, self.suggestion)
    }
}

/// Convert a `BlurwerkError` into a `HumanError` for the terminal.
pub fn humanize_error(err: &BlurwerkError) -> HumanError {
    match err {
        BlurwerkError::InvalidMaskSize(size) => HumanError {
            message: format!("Mask size {size} is not usable."),
            suggestion: "Pass a positive integer with --mask, for example --mask 3.".into(),
            stage: Stage::Setup,
        },

        BlurwerkError::Usage(detail) => HumanError {
            message: format!("Invalid arguments: {detail}"),
            suggestion: "Run `blurwerk --help` to see the accepted options.".into(),
            stage: Stage::Setup,
        },

        BlurwerkError::Config(detail) => HumanError {
            message: "The configuration file could not be used.".into(),
            suggestion: format!(
                "Check that the file is valid JSON with a positive mask_size. ({detail})"
            ),
            stage: Stage::Setup,
        },

        BlurwerkError::InputNotFound(path) => HumanError {
            message: format!("Cannot find the input image {path}."),
            suggestion: "Check the path, or pass the image as the first argument.".into(),
            stage: Stage::Input,
        },

        BlurwerkError::Decode(detail) => HumanError {
            message: "The input file is not a readable image.".into(),
            suggestion: format!(
                "Convert it to PNG or another common format and try again. ({detail})"
            ),
            stage: Stage::Input,
        },

        BlurwerkError::InvalidGrid(detail) => HumanError {
            message: "The input image has no pixels to blur.".into(),
            suggestion: format!("Use an image that is at least 1x1. ({detail})"),
            stage: Stage::Input,
        },

        BlurwerkError::Encode(detail) => HumanError {
            message: "The blurred image could not be encoded.".into(),
            suggestion: format!("No output file was written. ({detail})"),
            stage: Stage::Output,
        },

        BlurwerkError::Io(io) => HumanError {
            message: "A file could not be read or written.".into(),
            suggestion: format!(
                "Check file permissions and that the output directory exists. ({io})"
            ),
            stage: Stage::Output,
        },

        BlurwerkError::Serialization(detail) => HumanError {
            message: "The configuration could not be serialized.".into(),
            suggestion: format!("Report this as a bug. ({detail})"),
            stage: Stage::Setup,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_errors_exit_with_two() {
        let human = humanize_error(&BlurwerkError::Usage("unknown option --foo".into()));
        assert_eq!(human.stage, Stage::Setup);
        assert_eq!(human.exit_code(), 2);
        assert!(human.message.contains("--foo"));
    }

    #[test]
    fn missing_input_is_an_input_error() {
        let human = humanize_error(&BlurwerkError::InputNotFound("lenna.png".into()));
        assert_eq!(human.exit_code(), 3);
        assert!(human.message.contains("lenna.png"));
    }

    #[test]
    fn write_failure_is_an_output_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let human = humanize_error(&BlurwerkError::Io(io));
        assert_eq!(human.stage, Stage::Output);
        assert_eq!(human.exit_code(), 4);
    }

    #[test]
    fn zero_mask_is_a_setup_error() {
        let human = humanize_error(&BlurwerkError::InvalidMaskSize(0));
        assert_eq!(human.stage, Stage::Setup);
        assert!(human.to_string().contains("hint:"));
    }
}
