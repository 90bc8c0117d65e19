//! Global Constants
//!
//! Built-in defaults for configuration. The core never reads these directly;
//! they only seed `Config::default()`.

/// Outline source defaults
pub mod outline {
    /// Default outline location, relative to the working directory
    pub const DEFAULT_PATH: &str = "src/views/resources/docs_outline.txt";

    /// Leading spaces per hierarchy level
    pub const INDENT_UNIT: usize = 2;
}

/// Scaffold tree defaults
pub mod scaffold {
    /// Base directory that mirrors the outline hierarchy
    pub const DEFAULT_ROOT: &str = "src/views/resources/autogen";

    /// Placeholder content unit file name, one per section directory
    pub const INDEX_NAME: &str = "Index.vue";

    /// Aggregator document file name, written inside the scaffold root
    pub const AGGREGATOR_NAME: &str = "ROOT.vue";

    /// File-name prefix reserved for the aggregator output
    pub const RESERVED_PREFIX: &str = "ROOT";
}

/// Naming transform defaults
pub mod naming {
    /// Namespace prefix for anchor identifiers
    pub const ANCHOR_PREFIX: &str = "rawdocs-";

    /// Suffix appended to every symbolic component name
    pub const COMPONENT_SUFFIX: &str = "Section";

    /// Token used when a path yields no alphanumeric tokens
    pub const FALLBACK_TOKEN: &str = "Section";

    /// Prepended when a component name would start with a digit
    pub const DIGIT_PREFIX: &str = "C";

    /// Directory name used when a title sanitizes to nothing
    pub const FS_PLACEHOLDER: &str = "Section";

    /// Substitute for `/` inside directory names (FULLWIDTH SOLIDUS)
    pub const SLASH_SUBSTITUTE: char = '\u{FF0F}';

    /// Deepest heading level the output format supports
    pub const MAX_HEADING_LEVEL: usize = 6;
}

/// Release manifest defaults
pub mod manifest {
    /// Directory the manifest paths are made relative to
    pub const PUBLIC_DIR: &str = "public";

    /// One subdirectory per released version
    pub const RELEASES_DIR: &str = "public/releases";

    /// Manifest output file
    pub const OUTPUT_FILE: &str = "public/releases.json";
}
