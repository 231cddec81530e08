use serde::Serialize;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

/// Renders command results either as human-readable text or as JSON.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    pub fn render<T: Serialize>(&self, text: &str, json_value: &T) -> AppResult<String> {
        match self.mode {
            OutputMode::Text => Ok(text.trim_end().to_string()),
            OutputMode::Json => Ok(serde_json::to_string_pretty(json_value)?),
        }
    }

    pub fn emit<T: Serialize>(&self, text: &str, json_value: &T) -> AppResult<()> {
        let rendered = self.render(text, json_value)?;
        println!("{rendered}");
        Ok(())
    }
}
