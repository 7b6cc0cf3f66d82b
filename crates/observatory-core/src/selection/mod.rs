//! Mapping from a selected class label to its property-combination plot.
//!
//! Labels look like `schema:Product`. The plot for a class lives at
//! `<plots_dir>/<ClassName><suffix>`, e.g. `assets/plots/Product_plot.svg`.
//! Resolution only builds the path; whether the image exists is left to
//! whoever renders it.

mod catalog;
mod error;

pub use catalog::{ClassCatalog, ClassSource, TOP_TARGET_CLASSES};
pub use error::SelectionError;

use serde::Serialize;
use tracing::info;

use crate::config::AssetsConfig;

/// Separator between namespace prefix and class name.
pub const NAMESPACE_SEPARATOR: char = ':';

/// A class label split into namespace and class name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassLabel<'a> {
    pub namespace: &'a str,
    pub class_name: &'a str,
}

impl<'a> ClassLabel<'a> {
    /// Split a label at the first namespace separator.
    pub fn parse(label: &'a str) -> Result<Self, SelectionError> {
        let (namespace, class_name) = label
            .split_once(NAMESPACE_SEPARATOR)
            .ok_or_else(|| SelectionError::MissingSeparator(label.to_string()))?;

        if namespace.is_empty() {
            return Err(SelectionError::EmptyNamespace(label.to_string()));
        }
        if class_name.is_empty() {
            return Err(SelectionError::EmptyClassName(label.to_string()));
        }

        Ok(Self {
            namespace,
            class_name,
        })
    }
}

/// Outcome of resolving a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlotSelection {
    pub label: String,
    pub class_name: String,
    pub image_path: String,
}

/// Resolves labels to plot paths under a configurable plots directory.
#[derive(Debug, Clone)]
pub struct PlotResolver {
    plots_dir: String,
    suffix: String,
}

impl PlotResolver {
    pub fn new(plots_dir: impl Into<String>, suffix: impl Into<String>) -> Self {
        let plots_dir = plots_dir.into();
        Self {
            plots_dir: plots_dir.trim_end_matches('/').to_string(),
            suffix: suffix.into(),
        }
    }

    pub fn from_config(config: &AssetsConfig) -> Self {
        Self::new(config.plots_url_path(), &config.plot_suffix)
    }

    pub fn plot_path(&self, class_name: &str) -> String {
        format!("{}/{}{}", self.plots_dir, class_name, self.suffix)
    }

    /// Resolve a selected label to the image to show.
    pub fn resolve(&self, label: &str) -> Result<PlotSelection, SelectionError> {
        let parsed = ClassLabel::parse(label)?;
        let image_path = self.plot_path(parsed.class_name);

        info!(label, image = %image_path, "selected class");

        Ok(PlotSelection {
            label: label.to_string(),
            class_name: parsed.class_name.to_string(),
            image_path,
        })
    }
}

impl Default for PlotResolver {
    fn default() -> Self {
        Self::from_config(&AssetsConfig::default())
    }
}

/// Resolve a label with the default asset layout.
pub fn resolve_plot_path(label: &str) -> Result<String, SelectionError> {
    PlotResolver::default()
        .resolve(label)
        .map(|selection| selection.image_path)
}
