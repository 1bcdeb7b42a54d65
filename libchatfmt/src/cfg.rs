/*
Config reader
 */

use crate::{
    dispatch::{ConsoleRecipient, StaticAudience},
    placeholders::Placeholders,
};
use indexmap::IndexMap;
use libcommon::{ChatError, timefmt::DatePolicy};
use nix::unistd::Uid;
use serde::Deserialize;
use serde_yaml::{Value, from_str, from_value};
use std::{env, fs, path::PathBuf};

pub const APP_CONF: &str = "chatfmt.conf";
pub const APP_DOTCONF: &str = ".chatfmt";

/// Root key of the configuration document
pub const CFG_ROOT: &str = "config";

/// Select app conf
pub fn select_config(p: Option<PathBuf>) -> Result<PathBuf, ChatError> {
    // Override path from options
    if let Some(ovrp) = p {
        if ovrp.exists() {
            return Ok(ovrp);
        }
        log::warn!("Config {} does not exist, looking elsewhere", ovrp.display());
    }

    // Current
    let cfp: PathBuf = env::current_dir()?.join(APP_CONF);
    if cfp.exists() {
        return Ok(cfp);
    }

    // Dot-file
    let cfp = env::var_os("HOME").map(PathBuf::from).unwrap_or(PathBuf::from(format!("/home/{}", Uid::current()))).join(APP_DOTCONF);
    if cfp.exists() {
        return Ok(cfp);
    }

    // Global conf
    let cfp = PathBuf::from(format!("/etc/{APP_CONF}"));
    if cfp.exists() {
        return Ok(cfp);
    }

    Err(ChatError::ConfigError("No config has been found".to_string()))
}

/// Someone listed in the config to receive broadcasts
#[derive(Debug, Deserialize, Default, Clone)]
pub struct RecipientDef {
    name: String,

    #[serde(default)]
    permissions: Vec<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ChatConfig {
    /// Render resolved codes to ANSI colors.
    /// Default: true
    #[serde(rename = "render.ansi")]
    render_ansi: Option<bool>,

    /// Timezone of the rendered dates: "utc" or "local".
    /// Default: utc
    #[serde(rename = "time.zone")]
    time_zone: Option<DatePolicy>,

    /// Placeholders applied to every message, in the given order
    #[serde(rename = "placeholders")]
    placeholders: Option<IndexMap<String, String>>,

    /// Broadcast audience
    #[serde(rename = "audience")]
    audience: Option<Vec<RecipientDef>>,
}

impl ChatConfig {
    pub fn new(p: PathBuf) -> Result<ChatConfig, ChatError> {
        if !p.exists() {
            return Err(ChatError::ConfigError(format!("File not found: {}", p.display())));
        }

        if let Some(cfgv) = from_str::<Value>(&fs::read_to_string(&p)?)?.get(CFG_ROOT) {
            return Ok(from_value::<ChatConfig>(cfgv.to_owned())?);
        }

        Err(ChatError::ConfigError(format!("Unable to read config at: {}", p.display())))
    }

    /// Render to ANSI or plain text
    pub fn ansi(&self) -> bool {
        self.render_ansi.unwrap_or(true)
    }

    pub fn set_ansi(&mut self, ansi: bool) {
        self.render_ansi = Some(ansi);
    }

    /// Timezone policy for dates
    pub fn date_policy(&self) -> DatePolicy {
        self.time_zone.unwrap_or_default()
    }

    /// Configured placeholders, in order of the document
    pub fn placeholders(&self) -> Placeholders {
        self.placeholders.clone().unwrap_or_default().into_iter().collect()
    }

    /// Build the broadcast audience
    pub fn audience(&self) -> StaticAudience {
        let mut aud = StaticAudience::new();
        for r in self.audience.clone().unwrap_or_default() {
            aud.add(Box::new(ConsoleRecipient::new(&r.name, r.permissions, self.ansi())));
        }

        aud
    }
}
