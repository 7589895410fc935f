//! Announcement sinks: terminal output and spoken text

use crate::config::SpeechConfig;
use crate::error::AnnounceError;
use async_trait::async_trait;
use chrono::Local;
use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;
use tokio::process::Command;
use tracing::{debug, warn};

#[async_trait]
pub trait Announcer: Send + Sync {
    async fn announce(&self, text: &str) -> Result<(), AnnounceError>;
}

/// Prints each announcement with the local time
pub struct ConsoleAnnouncer;

#[async_trait]
impl Announcer for ConsoleAnnouncer {
    async fn announce(&self, text: &str) -> Result<(), AnnounceError> {
        println!("[{}] {}", Local::now().format("%H:%M"), text);
        Ok(())
    }
}

/// Speaks each announcement through an external TTS command (espeak, say, ...)
pub struct SpeechAnnouncer {
    pub binary: PathBuf,
    pub args: Vec<String>,
    pub rate_flag: String,
    pub rate: Option<u32>,
    pub wait: bool,
}

impl SpeechAnnouncer {
    fn command(&self, text: &str) -> Command {
        // Use string for PATH lookup if not an absolute/relative path
        let binary_str = self.binary.to_string_lossy();
        let mut cmd = if binary_str.contains('/') || binary_str.contains('\\') {
            Command::new(&self.binary)
        } else {
            Command::new(binary_str.as_ref())
        };

        cmd.args(&self.args);
        if let Some(rate) = self.rate {
            cmd.arg(&self.rate_flag).arg(rate.to_string());
        }
        cmd.arg(text);
        cmd.stdin(Stdio::null());
        cmd
    }
}

#[async_trait]
impl Announcer for SpeechAnnouncer {
    async fn announce(&self, text: &str) -> Result<(), AnnounceError> {
        let mut cmd = self.command(text);

        if self.wait {
            let output = cmd.output().await?;
            if !output.status.success() {
                return Err(AnnounceError::NonZeroExit {
                    code: output.status.code().unwrap_or(-1),
                    stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
                });
            }
            return Ok(());
        }

        // Fire and forget: reap the child in the background
        cmd.stdout(Stdio::null()).stderr(Stdio::null());
        let mut child = cmd.spawn()?;
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) if !status.success() => warn!("Speech command exited with {}", status),
                Ok(_) => {}
                Err(e) => warn!("Failed to wait for speech command: {}", e),
            }
        });
        Ok(())
    }
}

/// Sends every announcement to each sink in order
pub struct Announcers(pub Vec<Arc<dyn Announcer>>);

#[async_trait]
impl Announcer for Announcers {
    async fn announce(&self, text: &str) -> Result<(), AnnounceError> {
        let mut first_error = None;
        for sink in &self.0 {
            if let Err(e) = sink.announce(text).await {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

/// Build the announcement sinks from config. Falls back to the console when
/// both printing and speech are off.
pub fn create_announcer(config: &SpeechConfig) -> Announcers {
    let mut sinks: Vec<Arc<dyn Announcer>> = Vec::new();

    if config.print || !config.enabled {
        sinks.push(Arc::new(ConsoleAnnouncer));
    }
    if config.enabled {
        debug!("Speaking announcements with {:?}", config.binary);
        sinks.push(Arc::new(SpeechAnnouncer {
            binary: config.binary.clone(),
            args: config.args.clone(),
            rate_flag: config.rate_flag.clone(),
            rate: config.rate,
            wait: config.wait_for_speech,
        }));
    }

    Announcers(sinks)
}
