//! Unpack a PDF into one TIFF file per page

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::constants::{GHOSTSCRIPT_PROGRAM, UNPACKED_PAGE_PATTERN};
use crate::discovery::FileListing;
use crate::errors::Result;
use crate::utils::temp_directory;

use super::render::Token;
use super::{Action, ActionSet, CommandArguments, expand_input};

/// Renders every page of a PDF into `target_dir` through ghostscript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnpackPdf {
    source_pdf: PathBuf,
    target_dir: PathBuf,
    resolution: u32,
}

impl UnpackPdf {
    pub fn new(source_pdf: &Path, target_dir: &Path, resolution: u32) -> Self {
        UnpackPdf {
            source_pdf: source_pdf.to_path_buf(),
            target_dir: target_dir.to_path_buf(),
            resolution,
        }
    }

    pub fn source_pdf(&self) -> &Path {
        &self.source_pdf
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Pattern ghostscript expands into one file name per page
    pub fn output_pattern(&self) -> PathBuf {
        self.target_dir.join(UNPACKED_PAGE_PATTERN)
    }

    pub(super) fn tokens(&self) -> Vec<Token> {
        vec![
            Token::plain(GHOSTSCRIPT_PROGRAM),
            Token::plain("-q"),
            Token::plain("-dNOPAUSE"),
            Token::plain("-dBATCH"),
            Token::plain("-sDEVICE=tiff24nc"),
            Token::plain("-sCompression=lzw"),
            Token::plain(format!("-r{0}x{0}", self.resolution)),
            Token::PrefixedPath("-sOutputFile=".to_string(), self.output_pattern()),
            Token::path(&self.source_pdf),
        ]
    }
}

/// Default target of a PDF: the reserved subdirectory next to it
pub fn default_target_dir(source_pdf: &Path, settings: &Settings) -> PathBuf {
    let parent = source_pdf.parent().unwrap_or_else(|| Path::new(""));
    temp_directory(parent, &settings.reserved_subdirectory)
}

/// Creates an unpack action
///
/// The raster resolution always comes from the settings (600 dpi) and cannot
/// be chosen per call.
pub fn make(source_pdf: &Path, target_dir: Option<&Path>, settings: &Settings) -> Action {
    let target_dir = match target_dir {
        Some(target_dir) if !target_dir.as_os_str().is_empty() => target_dir.to_path_buf(),
        _ => default_target_dir(source_pdf, settings),
    };

    Action::UnpackPdf(UnpackPdf::new(
        source_pdf,
        &target_dir,
        settings.unpack_resolution,
    ))
}

/// Creates one unpack action per listed PDF, keyed by file name
///
/// Each PDF gets its own `<base>/<file stem>` directory so the runs never
/// share a target. `base` is `output` or the reserved subdirectory of the
/// listed directory.
pub fn multi_unpack_pdf(
    listing: &FileListing,
    output: Option<&Path>,
    settings: &Settings,
) -> BTreeMap<String, Action> {
    let base = match output {
        Some(output) => output.to_path_buf(),
        None => temp_directory(&listing.path, &settings.reserved_subdirectory),
    };

    listing
        .files
        .iter()
        .map(|name| {
            let stem = Path::new(name.as_str())
                .file_stem()
                .map(|stem| stem.to_os_string())
                .unwrap_or_else(|| name.into());
            let action = make(&listing.path.join(name), Some(&base.join(stem)), settings);
            (name.clone(), action)
        })
        .collect()
}

/// Builds unpack actions from `input` and an optional `output` directory
pub fn process_args(args: &CommandArguments, settings: &Settings) -> Result<ActionSet> {
    let input = args.input_path()?;
    let output = args.output_path();
    let extension = args.extension_or(&settings.pdf_extension);

    expand_input(
        &input,
        extension,
        |source| make(source, output.as_deref(), settings),
        |listing| multi_unpack_pdf(listing, output.as_deref(), settings),
    )
}
