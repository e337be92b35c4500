use crate::config::PlayerConfig;
use crate::errors::{AppError, AppResult};
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Hands a playback URL to the configured desktop player.
pub struct PlayerLauncher<'a> {
    player: &'a PlayerConfig,
}

impl<'a> PlayerLauncher<'a> {
    pub fn new(player: &'a PlayerConfig) -> Self {
        Self { player }
    }

    pub fn launch(&self, url: &str) -> AppResult<()> {
        match self.player {
            PlayerConfig::Osascript { app } => run_osascript(&applescript(app, url)),
            PlayerConfig::Command { program, args } => {
                debug!(program, ?args, "spawning player");
                Command::new(program)
                    .args(args)
                    .arg(url)
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .spawn()
                    .map_err(|e| AppError::Player(format!("cannot start '{program}': {e}")))?;
                info!(program, "player started");
                Ok(())
            }
        }
    }
}

/// Activate `app`, open `url`, bring it to front.
pub fn applescript(app: &str, url: &str) -> String {
    format!(
        "tell application \"{}\"\n   activate\n   open location \"{}\"\n   activate\nend tell\n",
        escape(app),
        escape(url)
    )
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

fn run_osascript(script: &str) -> AppResult<()> {
    let mut child = Command::new("osascript")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| AppError::Player(format!("cannot start osascript: {e}")))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(script.as_bytes())?;
    }

    let output = child.wait_with_output()?;
    if !output.status.success() {
        return Err(AppError::Player(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }

    info!("player opened through osascript");
    Ok(())
}
