//! Clipboard sink backed by a platform copy command.

use std::io::Write;
use std::process::{Command, Stdio};

use ifsc_finder_core::clipboard::ClipboardSink;
use ifsc_finder_core::errors::ClipboardError;

pub fn default_clipboard_command() -> &'static str {
    if cfg!(target_os = "macos") {
        "pbcopy"
    } else if cfg!(target_os = "windows") {
        "clip"
    } else {
        "xclip -selection clipboard"
    }
}

/// Pipes copied text into the stdin of a command such as `wl-copy`.
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(command_line: &str) -> Result<Self, ClipboardError> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| ClipboardError::Failed("empty clipboard command".to_string()))?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }
}

impl ClipboardSink for CommandClipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ClipboardError::Failed(format!("{}: {}", self.program, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| ClipboardError::Failed(e.to_string()))?;
        }

        let status = child
            .wait()
            .map_err(|e| ClipboardError::Failed(e.to_string()))?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Failed(format!(
                "{} exited with {}",
                self.program, status
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_is_split() {
        let clipboard = CommandClipboard::new("xclip -selection clipboard").unwrap();
        assert_eq!(clipboard.program, "xclip");
        assert_eq!(clipboard.args, vec!["-selection", "clipboard"]);
    }

    #[test]
    fn test_empty_command_is_rejected() {
        assert!(CommandClipboard::new("   ").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_through_command() {
        let clipboard = CommandClipboard::new("cat").unwrap();
        assert!(clipboard.copy("HDFC0000053").is_ok());

        let failing = CommandClipboard::new("false").unwrap();
        assert!(failing.copy("HDFC0000053").is_err());
    }
}
