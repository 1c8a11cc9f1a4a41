//! # Share
//!
//! Hands a quote's text to the system by piping it into a clipboard tool.

use std::io::{self, Write};
use std::process::{Command, Stdio};

use log::{debug, info};

/// External command that receives the shared text on stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ShareCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Clipboard tool for the current platform.
    pub fn platform_default() -> Self {
        if cfg!(target_os = "macos") {
            Self::new("pbcopy", Vec::new())
        } else if cfg!(target_os = "windows") {
            Self::new("clip", Vec::new())
        } else {
            Self::new("xclip", vec!["-selection".to_string(), "clipboard".to_string()])
        }
    }

    /// Runs the command, writes `text` to its stdin and waits for it to exit.
    ///
    /// Blocking; call from a blocking task when on the runtime.
    pub fn share(&self, text: &str) -> io::Result<()> {
        debug!("Sharing {} bytes via {} {:?}", text.len(), self.program, self.args);
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        // stdin is dropped before waiting so the tool sees EOF
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        let status = child.wait()?;
        if let Err(e) = written {
            debug!("{} exited with {} before reading all input", self.program, status);
            return Err(e);
        }
        if !status.success() {
            return Err(io::Error::other(format!(
                "{} exited with {}",
                self.program, status
            )));
        }
        info!("Shared quote via {}", self.program);
        Ok(())
    }
}

impl Default for ShareCommand {
    fn default() -> Self {
        Self::platform_default()
    }
}
