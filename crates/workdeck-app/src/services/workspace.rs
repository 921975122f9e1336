//! Workspace export as a gzip tarball

use std::fs::File;
use std::path::{Component, Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use tar::Builder;
use tracing::info;
use workdeck_core::prelude::*;

use super::WorkspaceExporter;

/// Writes `<output_dir>/<archive_name>` from the workspace root
#[derive(Debug, Clone)]
pub struct ArchiveExporter {
    workspace: PathBuf,
    output_dir: PathBuf,
    archive_name: String,
}

impl ArchiveExporter {
    pub fn new(
        workspace: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        archive_name: impl Into<String>,
    ) -> Self {
        Self {
            workspace: workspace.into(),
            output_dir: output_dir.into(),
            archive_name: archive_name.into(),
        }
    }

    pub fn archive_path(&self) -> PathBuf {
        self.output_dir.join(&self.archive_name)
    }

    /// The archive name must be a single plain file name so the archive
    /// lands directly in the download directory
    fn check_archive_name(&self) -> Result<()> {
        let mut components = Path::new(&self.archive_name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(()),
            _ => Err(Error::export(format!(
                "archive name {:?} must be a plain file name",
                self.archive_name
            ))),
        }
    }

    /// Name of the top-level directory inside the archive
    fn root_name(&self) -> String {
        self.workspace
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "workspace".to_string())
    }

    fn write_archive(&self, target: &Path) -> Result<()> {
        let file = File::create(target)?;
        let encoder = GzEncoder::new(file, Compression::default());
        let mut builder = Builder::new(encoder);
        builder.follow_symlinks(false);
        builder.append_dir_all(self.root_name(), &self.workspace)?;
        let encoder = builder.into_inner()?;
        encoder.finish()?;
        Ok(())
    }
}

impl WorkspaceExporter for ArchiveExporter {
    fn download_workspace(&self) -> Result<PathBuf> {
        if !self.workspace.is_dir() {
            return Err(Error::workspace_not_found(&self.workspace));
        }
        self.check_archive_name()?;

        // An archive written inside the tree it is reading would include itself
        let workspace = self.workspace.canonicalize()?;
        std::fs::create_dir_all(&self.output_dir)?;
        let output_dir = self.output_dir.canonicalize()?;
        if output_dir.starts_with(&workspace) {
            return Err(Error::export(format!(
                "download directory {} is inside the workspace",
                output_dir.display()
            )));
        }

        let target = self.archive_path();
        let partial = target.with_extension("partial");
        if let Err(err) = self.write_archive(&partial) {
            let _ = std::fs::remove_file(&partial);
            return Err(err);
        }
        std::fs::rename(&partial, &target)?;

        info!("Workspace archived to {}", target.display());
        Ok(target)
    }
}
