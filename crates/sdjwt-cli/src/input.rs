//! # Input Loading
//!
//! Claims, frames, payloads and disclosure lists are read from JSON or YAML
//! files. The format is chosen by extension: `.yaml`/`.yml` is YAML,
//! anything else is JSON. `-` reads JSON from stdin.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use serde_json::Value;

/// Load a JSON or YAML document.
pub fn load_document(path: &Path) -> Result<Value> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return serde_json::from_str(&buf).context("stdin is not valid JSON");
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    if is_yaml(path) {
        serde_yaml::from_str(&text).with_context(|| format!("{} is not valid YAML", path.display()))
    } else {
        serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
    }
}

/// Load a text file, trimmed. Used for compact SD-JWTs.
pub fn load_text(path: &Path) -> Result<String> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
    };
    Ok(text.trim().to_string())
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref(),
        Some("yaml" | "yml")
    )
}

/// A blinded payload and the disclosures presented with it.
#[derive(Args, Debug, Clone)]
pub struct PresentationArgs {
    /// Blinded payload (JSON object, may carry `_sd_alg`).
    #[arg(long)]
    pub payload: PathBuf,

    /// Encoded disclosures (JSON or YAML array of strings). Omit for none.
    #[arg(long)]
    pub disclosures: Option<PathBuf>,
}

impl PresentationArgs {
    pub fn load(&self) -> Result<(Value, Vec<String>)> {
        let payload = load_document(&self.payload)?;
        if !payload.is_object() {
            bail!("{} must contain a JSON object", self.payload.display());
        }
        let disclosures = match &self.disclosures {
            Some(path) => load_disclosures(path)?,
            None => Vec::new(),
        };
        Ok((payload, disclosures))
    }
}

fn load_disclosures(path: &Path) -> Result<Vec<String>> {
    let doc = load_document(path)?;
    serde_json::from_value(doc)
        .with_context(|| format!("{} must be an array of disclosure strings", path.display()))
}

/// Print a JSON value, pretty or compact.
pub fn print_json(value: &impl serde::Serialize, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}
