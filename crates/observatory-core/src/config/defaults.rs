//! Default values for observatory configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// Data Defaults
// ============================================================================

/// Class usage-count tree, relative to the working directory.
pub const DEFAULT_HIERARCHY_FILE: &str = "data/count.json";

// ============================================================================
// Asset Defaults
// ============================================================================

/// Directory of static assets on disk.
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// URL prefix the assets directory is served under.
pub const ASSETS_ROUTE: &str = "assets";

/// Plot images subdirectory inside the assets directory.
pub const DEFAULT_PLOTS_DIR: &str = "plots";

/// File name suffix of a per-class plot image.
pub const DEFAULT_PLOT_SUFFIX: &str = "_plot.svg";

// ============================================================================
// Server Defaults
// ============================================================================

/// Default bind address.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port.
pub const DEFAULT_PORT: u16 = 8050;

// ============================================================================
// Selection Defaults
// ============================================================================

/// Class selected when the dashboard first loads.
pub const DEFAULT_CLASS: &str = "schema:Product";

/// Namespace prefix given to labels derived from plot file names.
pub const DEFAULT_NAMESPACE: &str = "schema";

// ============================================================================
// Page Text
// ============================================================================

pub const PAGE_TITLE: &str = "Schema.org structured data observatory";

pub const PAGE_SUBTITLE: &str = "Deep dive into WebDataCommons JSON-LD markup";

pub const CHART_CAPTION: &str =
    "Schema.org class hierarchy. The count of typed entities is displayed through the 'value' attribute.";
