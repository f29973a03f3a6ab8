use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::ext::{ACCEPTED_ANIMATED_IMAGE_EXTENSIONS, ACCEPTED_VIDEO_EXTENSIONS};

/// Still-image extensions recognized out of the box; the loaded catalog
/// appends the discovered video container formats to this seed list.
pub const STILL_IMAGE_FORMATS: &[&str] = &["jpg", "png", "gif", "webp", "apng", "mjpeg"];

/// Sentinel VAE choice meaning "use the VAE baked into the checkpoint".
pub const BAKED_VAE: &str = "Baked VAE";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to list video formats directory {path}")]
    VideoFormatsDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("model path resolver failed for category {category:?}")]
    Resolver {
        category: String,
        #[source]
        source: io::Error,
    },
}

/// Host-side service that enumerates model files for a category
/// (e.g. `"vae"`). Results are consumed verbatim, in the order given.
pub trait ModelPathResolver {
    fn filename_list(&self, category: &str) -> io::Result<Vec<String>>;
}

/// Read-only format and model choice lists, built once at startup and passed
/// by reference to whatever needs them. No mutation API is exposed.
#[derive(Debug, Clone, Serialize)]
pub struct FormatCatalog {
    still_image_formats: Vec<String>,
    video_container_formats: Vec<String>,
    accepted_video_extensions: Vec<String>,
    accepted_animated_image_extensions: Vec<String>,
    vae_choices: Vec<String>,
}

impl FormatCatalog {
    /// Builds the catalog from the video-formats configuration directory and
    /// the host's model-path resolver.
    ///
    /// Each filename in `video_formats_dir` (extension stripped, directory
    /// listing order) becomes a recognized video container format; contents
    /// are never read. Either collaborator failing is fatal: no retry, no
    /// partial catalog.
    pub fn load(
        video_formats_dir: &Path,
        resolver: &dyn ModelPathResolver,
    ) -> Result<Self, CatalogError> {
        let dir_error = |source| CatalogError::VideoFormatsDir {
            path: video_formats_dir.to_path_buf(),
            source,
        };

        let mut video_container_formats = Vec::new();
        for entry in fs::read_dir(video_formats_dir).map_err(dir_error)? {
            let entry = entry.map_err(dir_error)?;
            if let Some(stem) = entry.path().file_stem().and_then(|stem| stem.to_str()) {
                video_container_formats.push(stem.to_string());
            }
        }
        debug!(
            count = video_container_formats.len(),
            "discovered video container formats"
        );

        let mut still_image_formats: Vec<String> =
            STILL_IMAGE_FORMATS.iter().map(ToString::to_string).collect();
        still_image_formats.extend(video_container_formats.iter().cloned());

        let vae_files =
            resolver
                .filename_list("vae")
                .map_err(|source| CatalogError::Resolver {
                    category: "vae".to_string(),
                    source,
                })?;
        let mut vae_choices = vec![BAKED_VAE.to_string()];
        vae_choices.extend(vae_files);
        debug!(count = vae_choices.len(), "collected VAE choices");

        Ok(Self {
            still_image_formats,
            video_container_formats,
            accepted_video_extensions: ACCEPTED_VIDEO_EXTENSIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
            accepted_animated_image_extensions: ACCEPTED_ANIMATED_IMAGE_EXTENSIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
            vae_choices,
        })
    }

    pub fn still_image_formats(&self) -> &[String] {
        &self.still_image_formats
    }

    pub fn video_container_formats(&self) -> &[String] {
        &self.video_container_formats
    }

    pub fn accepted_video_extensions(&self) -> &[String] {
        &self.accepted_video_extensions
    }

    pub fn accepted_animated_image_extensions(&self) -> &[String] {
        &self.accepted_animated_image_extensions
    }

    pub fn vae_choices(&self) -> &[String] {
        &self.vae_choices
    }
}
