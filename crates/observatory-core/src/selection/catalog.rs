//! The set of classes offered in the selection dropdown.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::SelectionError;
use super::NAMESPACE_SEPARATOR;

/// The twenty most frequent target classes in the WebDataCommons extract.
pub const TOP_TARGET_CLASSES: &[&str] = &[
    "schema:ListItem",
    "schema:ImageObject",
    "schema:BreadcrumbList",
    "schema:Organization",
    "schema:WebPage",
    "schema:SearchAction",
    "schema:Offer",
    "schema:Person",
    "schema:ReadAction",
    "schema:Product",
    "schema:EntryPoint",
    "schema:PostalAddress",
    "schema:Article",
    "schema:WebSite",
    "schema:CollectionPage",
    "schema:NewsArticle",
    "schema:SiteNavigationElement",
    "schema:ContactPoint",
    "schema:Rating",
    "schema:Place",
];

/// Where the selectable labels come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassSource {
    /// The built-in [`TOP_TARGET_CLASSES`] list.
    #[default]
    Fixed,
    /// One label per plot image found on disk.
    Assets,
}

impl std::str::FromStr for ClassSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fixed" => Ok(ClassSource::Fixed),
            "assets" => Ok(ClassSource::Assets),
            other => Err(format!("unknown class source '{}' (expected 'fixed' or 'assets')", other)),
        }
    }
}

/// Ordered list of selectable class labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassCatalog {
    classes: Vec<String>,
}

impl ClassCatalog {
    /// The fixed top-20 list, in its curated order.
    pub fn fixed() -> Self {
        Self {
            classes: TOP_TARGET_CLASSES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Build labels from the plot images in `plots_dir`.
    ///
    /// Every file named `<ClassName><suffix>` yields `<namespace>:<ClassName>`.
    /// Other entries are skipped. Labels are sorted alphabetically.
    pub fn scan(
        plots_dir: impl AsRef<Path>,
        suffix: &str,
        namespace: &str,
    ) -> Result<Self, SelectionError> {
        let plots_dir = plots_dir.as_ref();
        let entries =
            fs::read_dir(plots_dir).map_err(|e| SelectionError::asset_scan(plots_dir, e))?;

        let mut classes = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SelectionError::asset_scan(plots_dir, e))?;
            if !entry.path().is_file() {
                continue;
            }

            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                debug!(path = %entry.path().display(), "skipping non UTF-8 file name");
                continue;
            };

            match file_name.strip_suffix(suffix) {
                Some(class_name) if !class_name.is_empty() => {
                    classes.push(format!("{}{}{}", namespace, NAMESPACE_SEPARATOR, class_name));
                }
                _ => debug!(file = file_name, "not a plot image, skipping"),
            }
        }
        classes.sort();

        info!(
            dir = %plots_dir.display(),
            classes = classes.len(),
            "discovered plot images"
        );

        Ok(Self { classes })
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn contains(&self, label: &str) -> bool {
        self.classes.iter().any(|c| c == label)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
