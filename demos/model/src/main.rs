use anyhow::{Context, Result};
use eventive_rs::config::EmitterConfig;
use eventive_rs::{Emitter, EventBus, init_logging};
use serde_json::{Value, json};
use std::path::PathBuf;

const DEFAULT_CONFIG: &str = r#"{
    // events a document announces
    events: ["onUpdate", "onError"],
    report_level: "warn",
}"#;

struct Document {
    title: String,
    events: EventBus,
}

impl Document {
    fn new(title: &str, config: &EmitterConfig) -> Self {
        Self {
            title: title.to_string(),
            events: EventBus::from_config(config),
        }
    }

    fn rename(&mut self, title: &str) -> Result<()> {
        let previous = std::mem::replace(&mut self.title, title.to_string());
        self.emit("onUpdate", json!({ "from": previous, "to": title }))?;
        Ok(())
    }
}

impl Emitter for Document {
    fn event_bus(&self) -> &EventBus {
        &self.events
    }
}

fn main() -> Result<()> {
    init_logging();

    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => {
            let display = path.display().to_string();
            EmitterConfig::load_from_path(&path)
                .with_context(|| format!("failed to load emitter config at {display}"))?
        }
        None => EmitterConfig::load_from_str(DEFAULT_CONFIG).context("invalid built-in config")?,
    };

    let mut document = Document::new("untitled", &config);
    let id = document.on("onUpdate", |args| {
        println!("[{}] {} {}", args.fire_time, args.name, args.data);
    })?;
    document.on("onError", |args| {
        eprintln!("error: {}", args.data);
        true
    })?;

    document.rename("draft")?;
    document.off("onUpdate", id)?;
    document.rename("final")?;

    // Refused calls are logged and returned, never raised.
    if let Err(err) = document.emit("onDelete", Value::Null) {
        println!("refused: {err}");
    }

    let handled = document.emit("onError", json!("disk full"))?;
    println!("error handled: {}", handled.unwrap_or(false));
    Ok(())
}
