// UI layer: runs the health check, upload, rendering, persistence and
// optional export in sequence, printing progress to `out`. Any fatal step
// prints a message and returns an error; the binary turns that into exit
// status 1.

use crate::api::ApiClient;
use crate::args::Invocation;
use crate::error::ClientError;
use crate::model::AnalysisResult;
use crate::persist;
use crate::prompt::Prompt;
use crate::render;
use anyhow::{Context, Result};
use crossterm::style::Stylize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const EXPORT_QUESTION: &str = "Generate the PowerPoint deck now? (y/n)";

/// Where artifacts go and how the console looks.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub curriculum_path: PathBuf,
    pub export_path: PathBuf,
    /// Colour section headers (only when stdout is a terminal).
    pub styled: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            curriculum_path: PathBuf::from(persist::DEFAULT_CURRICULUM_FILE),
            export_path: PathBuf::from(persist::DEFAULT_EXPORT_FILE),
            styled: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub path: PathBuf,
    pub size: u64,
}

/// What a successful run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub curriculum_path: PathBuf,
    pub export: Option<ExportReport>,
}

/// Full workflow. Export failures are reported but do not fail the run.
pub fn run(
    api: &ApiClient,
    invocation: &Invocation,
    options: &RunOptions,
    prompt: &mut dyn Prompt,
    out: &mut dyn Write,
) -> Result<RunSummary> {
    header(out, "Course generation API test", options.styled)?;
    for label in &invocation.overridden_labels {
        writeln!(
            out,
            "Warning: industry '{}' ignored, using '{}'",
            label, invocation.industry
        )?;
    }

    check_health(api, out, options.styled)?;

    let analysis = upload_documents(api, invocation, out, options.styled)?;

    header(out, "Analysis results", options.styled)?;
    render::render_analysis(&analysis, out)?;

    if !analysis.analysis.has_curriculum() {
        writeln!(out)?;
        writeln!(out, "The response does not contain a curriculum, nothing to save")?;
        return Err(ClientError::MissingCurriculum.into());
    }
    let curriculum = &analysis.analysis.curriculum;
    persist::save_curriculum(curriculum, &options.curriculum_path).with_context(|| {
        format!("Failed to write {}", options.curriculum_path.display())
    })?;
    writeln!(out)?;
    writeln!(out, "Curriculum saved: {}", options.curriculum_path.display())?;

    writeln!(out)?;
    let export = if prompt.confirm(EXPORT_QUESTION)? {
        export_presentation(api, curriculum, &options.export_path, out, options.styled)?
    } else {
        tracing::debug!("export declined");
        None
    };

    header(out, "Tests finished", options.styled)?;
    writeln!(out, "Generated files:")?;
    writeln!(out, "  - {} (JSON data)", options.curriculum_path.display())?;
    if let Some(report) = &export {
        writeln!(out, "  - {} (PowerPoint deck)", report.path.display())?;
    }
    writeln!(out)?;
    writeln!(out, "Next steps:")?;
    if let Some(report) = &export {
        writeln!(out, "  - Open {} in PowerPoint", report.path.display())?;
    }
    writeln!(
        out,
        "  - Edit {} and export the deck again",
        options.curriculum_path.display()
    )?;
    writeln!(out, "  - Use the data in your frontend")?;

    Ok(RunSummary {
        curriculum_path: options.curriculum_path.clone(),
        export,
    })
}

/// Probe `/health`, printing remediation hints when the API is down.
pub fn check_health(api: &ApiClient, out: &mut dyn Write, styled: bool) -> Result<()> {
    header(out, "API health check", styled)?;
    let err = match api.health() {
        Ok(()) => {
            writeln!(out, "API is reachable and running")?;
            return Ok(());
        }
        Err(ClientError::Status { status, .. }) => {
            writeln!(out, "API answered with status {}", status.as_u16())?;
            anyhow::anyhow!("health check failed with status {}", status.as_u16())
        }
        Err(e @ ClientError::Timeout { .. }) => {
            report_failure(out, &e, "Health check failed")?;
            anyhow::Error::new(e).context("health check failed")
        }
        Err(e) => {
            writeln!(out, "Cannot reach the API: {}", e)?;
            anyhow::Error::new(e).context("health check failed")
        }
    };
    writeln!(out)?;
    writeln!(out, "Make sure the backend is running:")?;
    writeln!(out, "   docker-compose up --build")?;
    writeln!(out, "   or")?;
    writeln!(out, "   mvn spring-boot:run")?;
    Err(err)
}

/// Keep the paths that exist, listing each with its size and warning
/// about the others.
pub fn existing_documents(files: &[PathBuf], out: &mut dyn Write) -> Result<Vec<PathBuf>> {
    let mut found = Vec::with_capacity(files.len());
    for path in files {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => {
                writeln!(
                    out,
                    "{} ({:.2} KB)",
                    display_name(path),
                    meta.len() as f64 / 1024.0
                )?;
                found.push(path.clone());
            }
            _ => {
                tracing::warn!("skipping missing file {}", path.display());
                writeln!(out, "File not found: {}", path.display())?;
            }
        }
    }
    Ok(found)
}

/// Upload the documents that exist and return the parsed analysis.
pub fn upload_documents(
    api: &ApiClient,
    invocation: &Invocation,
    out: &mut dyn Write,
    styled: bool,
) -> Result<AnalysisResult> {
    header(
        out,
        &format!("Uploading {} files", invocation.files.len()),
        styled,
    )?;
    let documents = existing_documents(&invocation.files, out)?;
    if documents.is_empty() {
        writeln!(out)?;
        writeln!(out, "No valid file to upload")?;
        return Err(ClientError::NoValidFiles.into());
    }

    writeln!(out)?;
    writeln!(out, "Sending to the API...")?;
    let spinner = spinner("Analysing documents...");
    let outcome = api.analyze_documents(&documents, &invocation.industry);
    spinner.finish_and_clear();

    match outcome {
        Ok(result) => {
            writeln!(out)?;
            writeln!(out, "Analysis completed successfully!")?;
            Ok(result)
        }
        Err(e) => {
            writeln!(out)?;
            report_failure(out, &e, "Upload failed")?;
            Err(anyhow::Error::new(e).context("document analysis failed"))
        }
    }
}

/// Request the deck and write it. A failed request yields `Ok(None)`;
/// nothing is written in that case.
pub fn export_presentation(
    api: &ApiClient,
    curriculum: &serde_json::Value,
    path: &Path,
    out: &mut dyn Write,
    styled: bool,
) -> Result<Option<ExportReport>> {
    header(out, "PowerPoint export", styled)?;
    writeln!(out, "Generating the PowerPoint deck...")?;

    let spinner = spinner("Waiting for the deck...");
    let outcome = api.export_presentation(curriculum);
    spinner.finish_and_clear();

    let bytes = match outcome {
        Ok(bytes) => bytes,
        Err(e) => {
            writeln!(out)?;
            report_failure(out, &e, "Export failed")?;
            tracing::warn!("export failed: {}", e);
            return Ok(None);
        }
    };

    let size = persist::write_export(&bytes, path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    writeln!(out)?;
    writeln!(out, "PowerPoint generated successfully!")?;
    writeln!(out, "File: {}", path.display())?;
    writeln!(out, "Size: {:.2} KB", size as f64 / 1024.0)?;

    Ok(Some(ExportReport {
        path: path.to_path_buf(),
        size,
    }))
}

fn report_failure(out: &mut dyn Write, err: &ClientError, what: &str) -> std::io::Result<()> {
    match err {
        ClientError::Status { status, body, .. } => {
            writeln!(out, "HTTP error {}", status.as_u16())?;
            writeln!(out, "{}", body)
        }
        ClientError::Timeout { timeout, .. } => writeln!(
            out,
            "Timeout: no answer after {}s, the server is taking too long",
            timeout.as_secs()
        ),
        other => writeln!(out, "{}: {}", what, other),
    }
}

fn header(out: &mut dyn Write, title: &str, styled: bool) -> std::io::Result<()> {
    let rule = "=".repeat(60);
    writeln!(out)?;
    if styled {
        writeln!(out, "{}", rule.as_str().dark_cyan())?;
        writeln!(out, "  {}", title.bold())?;
        writeln!(out, "{}", rule.as_str().dark_cyan())?;
    } else {
        writeln!(out, "{}", rule)?;
        writeln!(out, "  {}", title)?;
        writeln!(out, "{}", rule)?;
    }
    writeln!(out)
}

fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
