/// Constants used throughout the application
///
/// This module centralises the on-disk naming conventions, the external
/// tool names and the command-line help texts.

/// Infix inserted before the extension of a page to name its temporary output
///
/// External tooling inspects this name, so it must never change.
pub const RESERVED_INFIX: &str = ".bookworm.";

/// Subdirectory created next to a PDF to hold its unpacked pages
///
/// External tooling inspects this name, so it must never change.
pub const RESERVED_SUBDIRECTORY: &str = "__bookworm__";

/// Raster resolution used when unpacking PDF pages
pub const DEFAULT_UNPACK_RESOLUTION: u32 = 600;

/// File name pattern handed to ghostscript for unpacked pages
pub const UNPACKED_PAGE_PATTERN: &str = "_Page_%04d.tiff";

/// Canonical name of the ImageMagick converter
pub const CONVERT_PROGRAM: &str = "convert";

/// Canonical name of the ghostscript interpreter
pub const GHOSTSCRIPT_PROGRAM: &str = "gs";

/// Extension of the page images processed in a directory
pub const DEFAULT_PAGE_EXTENSION: &str = "tiff";

/// Extension of the documents processed in a directory
pub const DEFAULT_PDF_EXTENSION: &str = "pdf";

/// Fill colour used when expanding a page
pub const FILL_COLOUR: &str = "white";

/// Gravity used when expanding a page
pub const FILL_GRAVITY: &str = "Center";

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Stallmanifold";

/// Application name used for identification
pub const APPLICATION: &str = "bookworm";

/// Name of the settings file looked up in the configuration directory
pub const SETTINGS_FILE_NAME: &str = "bookworm.yaml";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read settings from a specific YAML file";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Print the commands without running them";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write the log to this file";

pub const INPUT_HELP: &str = "Input file or directory";
pub const OUTPUT_HELP: &str = "Output file or directory";
pub const RESOLUTION_HELP: &str = "The value for RESOLUTION";
pub const UNITS_HELP: &str = "The units for RESOLUTION";
pub const DIMENSIONS_HELP: &str = "Dimensions to set the page to, as WIDTHxHEIGHT";
pub const EXTENSION_HELP: &str = "Only process files with this extension when INPUT is a directory";

pub const UNPACK_PDF_ABOUT: &str = "Unpack an input PDF file to the output directory";
pub const CHANGE_RESOLUTION_ABOUT: &str =
    "Change the resolution of the pages in INPUT to RESOLUTION in UNITS";
pub const RESAMPLE_PAGE_ABOUT: &str =
    "Rescale a page by changing its resolution and resampling the image";
pub const EXPAND_PAGE_ABOUT: &str =
    "Expand the pages in INPUT to WIDTH and HEIGHT in pixels, filling with white";
