//! Terminal command handlers: the stand-in for the browser front end.
//! Each handler owns its own output; the dispatch loop in `main` only
//! parses and routes.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use tracing::{info, warn};

use crate::analyzer;
use crate::assembler;
use crate::catalog::{self, Category, ALL_CATEGORIES};
use crate::refine;
use crate::selection::PromptMode;
use crate::state::Session;

pub fn help() {
    println!("Commands:");
    println!("  show                     preview the assembled prompt");
    println!("  options <category>       list choices for a category");
    println!("  set <category> <id>      pick an option (categories: {})", category_labels());
    println!("  subject <text>           set the scene description");
    println!("  exposure <ev>            exposure compensation, e.g. -1.5");
    println!("  aperture <f>             aperture f-number, e.g. 2.8");
    println!("  shutter <label>          shutter speed label, e.g. 1/250");
    println!("  mode <both|technical|creative>");
    println!("  random                   randomize the photographic choices");
    println!("  thinking <on|off>        toggle AI refinement of generated prompts");
    println!("  generate                 build (and optionally refine) the prompt");
    println!("  analyze <path>           describe an image file and suggest settings");
    println!("  history                  list previously generated prompts");
    println!("  recall <n>               re-display history entry n");
    println!("  clear-history            drop all history entries");
    println!("  quit");
}

fn category_labels() -> String {
    ALL_CATEGORIES
        .iter()
        .map(|category| category.label())
        .collect::<Vec<_>>()
        .join(", ")
}

fn parse_category(label: &str) -> Result<Category> {
    Category::from_label(label)
        .ok_or_else(|| anyhow!("unknown category '{label}' (expected one of: {})", category_labels()))
}

pub fn show(session: &Session) {
    let selection = &session.selection;
    println!("subject:  {}", if selection.subject.trim().is_empty() {
        "(none)"
    } else {
        selection.subject.trim()
    });
    for category in ALL_CATEGORIES {
        let id = selection.id_for(category);
        let name = catalog::find(category, id)
            .map(|record| record.name)
            .unwrap_or("(stale id)");
        println!("{:<9} {} [{}]", format!("{}:", category.label()), name, id);
    }
    println!(
        "exposure: {} EV  aperture: f/{}  shutter: {}s  mode: {}  thinking: {}",
        selection.exposure,
        selection.aperture,
        selection.shutter_speed,
        selection.mode.label(),
        if session.thinking_mode { "on" } else { "off" }
    );
    let preview = assembler::assemble(selection);
    println!("\n{}", preview.main_text);
}

pub fn list_options(label: &str) -> Result<()> {
    let category = parse_category(label)?;
    for record in catalog::records(category) {
        println!("{:<20} {:<24} {}", record.id, record.name, record.description);
    }
    Ok(())
}

pub fn select(session: &mut Session, label: &str, id: &str) -> Result<()> {
    let category = parse_category(label)?;
    if !session.selection.select(category, id) {
        return Err(anyhow!(
            "'{id}' is not a known {} id; try 'options {}'",
            category.label(),
            category.label()
        ));
    }
    Ok(())
}

pub fn set_subject(session: &mut Session, text: &str) {
    session.selection.subject = text.trim().to_string();
}

pub fn set_exposure(session: &mut Session, value: &str) -> Result<()> {
    session.selection.exposure = value
        .parse::<f32>()
        .map_err(|_| anyhow!("invalid exposure value: {value}"))?;
    Ok(())
}

pub fn set_aperture(session: &mut Session, value: &str) -> Result<()> {
    session.selection.aperture = value
        .parse::<f32>()
        .map_err(|_| anyhow!("invalid aperture value: {value}"))?;
    Ok(())
}

pub fn set_shutter(session: &mut Session, label: &str) {
    session.selection.shutter_speed = label.trim().to_string();
}

pub fn set_mode(session: &mut Session, label: &str) -> Result<()> {
    session.selection.mode = PromptMode::from_label(label)
        .ok_or_else(|| anyhow!("mode must be both, technical or creative"))?;
    Ok(())
}

pub fn set_thinking(session: &mut Session, value: &str) -> Result<()> {
    session.thinking_mode = match value.trim().to_lowercase().as_str() {
        "on" | "true" => true,
        "off" | "false" => false,
        other => return Err(anyhow!("expected on or off, got '{other}'")),
    };
    Ok(())
}

pub fn randomize(session: &mut Session) {
    session.selection.randomize(&mut rand::thread_rng());
    println!("Re-rolled the photographic selections.");
    show(session);
}

/// Builds the prompt and, in thinking mode, runs the two-pass refinement.
/// Refinement failures degrade to the raw assembled prompt.
pub async fn generate(session: &mut Session) {
    if !session.begin_refine() {
        println!("A generation is already in flight; try again when it finishes.");
        return;
    }

    let base = assembler::assemble(&session.selection);
    let thinking = session.thinking_mode;
    info!(thinking, "Generating prompt");
    let result = refine::refine(&base, thinking).await;
    session.finish_refine();

    if thinking && !result.refined {
        println!("(refinement unavailable, showing the unrefined prompt)");
    }
    println!("\nMain prompt:\n{}", result.main_text);
    println!("\nNegative prompt:\n{}", result.negative_text);
    session.complete_generation(result);
}

/// Reads an image file, sends it for analysis and merges the suggestions
/// into the current selection.
pub async fn analyze_file(session: &mut Session, path: &str) -> Result<()> {
    if !session.begin_analyze() {
        println!("An analysis is already in flight; try again when it finishes.");
        return Ok(());
    }

    let result = run_analysis(session, path).await;
    session.finish_analyze();
    result
}

async fn run_analysis(session: &mut Session, path: &str) -> Result<()> {
    let bytes = tokio::fs::read(Path::new(path))
        .await
        .with_context(|| format!("failed to read {path}"))?;
    let mime_type = analyzer::detect_mime_type(&bytes)
        .ok_or_else(|| anyhow!("{path} does not look like an image file"))?;
    if !mime_type.starts_with("image/") {
        return Err(anyhow!("{path} is {mime_type}, not an image"));
    }

    println!("Analyzing {path} ({mime_type}, {} bytes)...", bytes.len());
    let analysis = analyzer::analyze(&bytes, &mime_type).await;
    if analysis.is_empty() {
        warn!("Image analysis returned nothing usable for {path}");
        println!("No usable analysis came back; selections are unchanged.");
        return Ok(());
    }

    analysis.apply_to(&mut session.selection);
    if let Some(subject) = &analysis.subject {
        println!("Suggested subject: {subject}");
    }
    show(session);
    Ok(())
}

pub fn history(session: &Session) {
    if session.history.is_empty() {
        println!("No history yet.");
        return;
    }
    for (index, entry) in session.history.entries().iter().enumerate() {
        let line = entry.split('\n').next().unwrap_or(entry);
        let short: String = line.chars().take(100).collect();
        println!("{index:>2}: {short}");
    }
}

pub fn recall(session: &Session, index_arg: &str) -> Result<()> {
    let index = index_arg
        .parse::<usize>()
        .map_err(|_| anyhow!("invalid history index: {index_arg}"))?;
    match session.history.recall(index) {
        Some(entry) => {
            println!("{entry}");
            Ok(())
        }
        None => Err(anyhow!("no history entry {index}")),
    }
}

pub fn clear_history(session: &mut Session) {
    session.history.clear();
    println!("History cleared.");
}
