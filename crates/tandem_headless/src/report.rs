//! Report output model for headless scenario runs.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use tandem_core::ScrollOffset;

/// Report status for a headless scenario run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Passed,
    Failed,
}

/// Machine-readable result of a headless scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlessReport {
    pub status: ReportStatus,
    pub failed_step_index: Option<usize>,
    pub assertion: Option<String>,
    pub message: Option<String>,
    pub steps_executed: usize,
    pub animation_frames: u64,
    /// Host scroll position when the run stopped
    pub host_offset: ScrollOffset,
    /// Rendering-engine offset when the run stopped
    pub rendering_offset: ScrollOffset,
}

impl HeadlessReport {
    pub fn passed(
        steps_executed: usize,
        animation_frames: u64,
        host_offset: ScrollOffset,
        rendering_offset: ScrollOffset,
    ) -> Self {
        Self {
            status: ReportStatus::Passed,
            failed_step_index: None,
            assertion: None,
            message: None,
            steps_executed,
            animation_frames,
            host_offset,
            rendering_offset,
        }
    }

    pub fn failed(
        assertion: &str,
        failed_step_index: usize,
        message: String,
        animation_frames: u64,
        host_offset: ScrollOffset,
        rendering_offset: ScrollOffset,
    ) -> Self {
        Self {
            status: ReportStatus::Failed,
            failed_step_index: Some(failed_step_index),
            assertion: Some(assertion.to_string()),
            message: Some(message),
            steps_executed: failed_step_index + 1,
            animation_frames,
            host_offset,
            rendering_offset,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.status == ReportStatus::Failed
    }

    /// Write the report as pretty JSON to a relative path.
    ///
    /// The file is written next to its destination and renamed into place,
    /// so a reader never sees a half-written report.
    pub fn write_to_path(&self, path: &Path) -> Result<ReportStatus> {
        check_report_path(path)?;
        persist(path, &self.to_json()?)?;
        Ok(self.status)
    }

    /// Write the report as pretty JSON followed by a newline.
    pub fn write_to_writer<W: Write>(&self, writer: &mut W) -> Result<ReportStatus> {
        writeln!(writer, "{}", self.to_json()?)?;
        Ok(self.status)
    }

    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn check_report_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        bail!("report path is empty");
    }
    for component in path.components() {
        match component {
            Component::RootDir | Component::Prefix(_) => {
                bail!("report path {} must be relative", path.display())
            }
            Component::ParentDir => {
                bail!("report path {} cannot contain '..'", path.display())
            }
            Component::CurDir | Component::Normal(_) => {}
        }
    }
    Ok(())
}

fn persist(path: &Path, payload: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let mut staging = path.as_os_str().to_owned();
    staging.push(".partial");
    let staging = PathBuf::from(staging);

    fs::write(&staging, payload)
        .with_context(|| format!("failed to write {}", staging.display()))?;
    if let Err(err) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(err).with_context(|| format!("failed to move report to {}", path.display()));
    }
    Ok(())
}
