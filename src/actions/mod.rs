//! Actions module
//!
//! An action is an immutable description of one external tool invocation.
//! Each transformation has its own variant, a `make` factory and a
//! `process_args` entry point that turns command arguments into one action
//! or a batch of actions.

mod arguments;
pub mod change_resolution;
pub mod expand_page;
mod render;
pub mod resample_page;
pub mod unpack_pdf;

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::config::Settings;
use crate::constants::{CONVERT_PROGRAM, GHOSTSCRIPT_PROGRAM};
use crate::discovery::{FileListing, list_directory, with_extension};
use crate::errors::{Error, Result, invalid_value_error, not_found_error};
use crate::runner::{PageRunner, PdfRunner, Runner};
use crate::utils::temp_file_name;

pub use arguments::CommandArguments;
pub use change_resolution::ChangeResolution;
pub use expand_page::ExpandPageWithFill;
pub use resample_page::ResamplePage;
pub use unpack_pdf::UnpackPdf;

use render::Token;

/// One transformation, ready to be handed to its runner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ChangeResolution(ChangeResolution),
    ResamplePage(ResamplePage),
    ExpandPageWithFill(ExpandPageWithFill),
    UnpackPdf(UnpackPdf),
}

impl Action {
    /// Subcommand name of the transformation
    pub fn name(&self) -> &'static str {
        match self {
            Action::ChangeResolution(_) => Operation::ChangeResolution.as_str(),
            Action::ResamplePage(_) => Operation::ResamplePage.as_str(),
            Action::ExpandPageWithFill(_) => Operation::ExpandPage.as_str(),
            Action::UnpackPdf(_) => Operation::UnpackPdf.as_str(),
        }
    }

    /// The file read by the external tool
    pub fn source(&self) -> &Path {
        match self {
            Action::ChangeResolution(action) => action.source(),
            Action::ResamplePage(action) => action.source(),
            Action::ExpandPageWithFill(action) => action.source(),
            Action::UnpackPdf(action) => action.source_pdf(),
        }
    }

    /// The file or directory written by the external tool
    pub fn target(&self) -> &Path {
        match self {
            Action::ChangeResolution(action) => action.target(),
            Action::ResamplePage(action) => action.target(),
            Action::ExpandPageWithFill(action) => action.target(),
            Action::UnpackPdf(action) => action.target_dir(),
        }
    }

    /// Whether a successful run replaces the source with the target
    pub fn is_in_place(&self) -> bool {
        match self {
            Action::ChangeResolution(action) => action.is_in_place(),
            Action::ResamplePage(action) => action.is_in_place(),
            Action::ExpandPageWithFill(action) => action.is_in_place(),
            Action::UnpackPdf(_) => false,
        }
    }

    /// Canonical name of the external program the action invokes
    pub fn program(&self) -> &'static str {
        match self {
            Action::UnpackPdf(_) => GHOSTSCRIPT_PROGRAM,
            _ => CONVERT_PROGRAM,
        }
    }

    /// The runner that knows how to carry this action out
    pub fn runner(&self) -> &'static dyn Runner {
        match self {
            Action::ChangeResolution(_) | Action::ResamplePage(_) | Action::ExpandPageWithFill(_) => {
                &PageRunner
            }
            Action::UnpackPdf(_) => &PdfRunner,
        }
    }

    fn tokens(&self) -> Vec<Token> {
        match self {
            Action::ChangeResolution(action) => action.tokens(),
            Action::ResamplePage(action) => action.tokens(),
            Action::ExpandPageWithFill(action) => action.tokens(),
            Action::UnpackPdf(action) => action.tokens(),
        }
    }

    /// Argument vector for direct process invocation, program name first
    ///
    /// The program is always the canonical `convert` or `gs`; runners map it
    /// to the configured executable.
    pub fn as_subprocess(&self) -> Vec<String> {
        render::to_argv(&self.tokens())
    }

    /// Same as [`Action::as_subprocess`] without lossy path conversion
    pub fn as_os_args(&self) -> Vec<OsString> {
        render::to_os_args(&self.tokens())
    }

    /// Single-line shell equivalent of the invocation, paths quoted
    pub fn as_terminal_command(&self) -> String {
        render::to_terminal_command(&self.tokens())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_terminal_command())
    }
}

/// Source and target of a page-mutating action
///
/// `in_place` is set when the target was derived from the source, in which
/// case committing the action replaces the source with the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTarget {
    source: PathBuf,
    target: PathBuf,
    in_place: bool,
}

impl PageTarget {
    /// Uses `target` as given; the source is left alone on commit
    pub fn explicit(source: &Path, target: &Path) -> Self {
        PageTarget {
            source: source.to_path_buf(),
            target: target.to_path_buf(),
            in_place: false,
        }
    }

    /// Resolves the target for a factory call
    ///
    /// A missing or empty target, or one equal to the source, becomes the
    /// temporary sibling of the source and marks the transform as in-place.
    pub fn resolve(source: &Path, target: Option<&Path>, settings: &Settings) -> Self {
        match target {
            Some(target) if !target.as_os_str().is_empty() && target != source => {
                PageTarget::explicit(source, target)
            }
            _ => PageTarget {
                source: source.to_path_buf(),
                target: temp_file_name(source, &settings.reserved_infix),
                in_place: true,
            },
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn is_in_place(&self) -> bool {
        self.in_place
    }
}

/// What `process_args` produced for an input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionSet {
    /// The input was a single file
    Single(Action),
    /// The input was a directory; one action per matching file, keyed by file name
    Batch(BTreeMap<String, Action>),
}

impl ActionSet {
    pub fn len(&self) -> usize {
        match self {
            ActionSet::Single(_) => 1,
            ActionSet::Batch(actions) => actions.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The actions in execution order
    pub fn actions(&self) -> Vec<&Action> {
        match self {
            ActionSet::Single(action) => vec![action],
            ActionSet::Batch(actions) => actions.values().collect(),
        }
    }
}

/// The transformations offered on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    UnpackPdf,
    ChangeResolution,
    ExpandPage,
    ResamplePage,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::UnpackPdf,
        Operation::ChangeResolution,
        Operation::ExpandPage,
        Operation::ResamplePage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::UnpackPdf => "unpack-pdf",
            Operation::ChangeResolution => "change-resolution",
            Operation::ExpandPage => "expand-page",
            Operation::ResamplePage => "resample-page",
        }
    }

    /// Builds the actions for this operation from command arguments
    pub fn process_args(&self, args: &CommandArguments, settings: &Settings) -> Result<ActionSet> {
        match self {
            Operation::UnpackPdf => unpack_pdf::process_args(args, settings),
            Operation::ChangeResolution => change_resolution::process_args(args, settings),
            Operation::ExpandPage => expand_page::process_args(args, settings),
            Operation::ResamplePage => resample_page::process_args(args, settings),
        }
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Operation::ALL
            .into_iter()
            .find(|operation| operation.as_str() == s)
            .ok_or_else(|| invalid_value_error("command", s, "is not a known command"))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Turns an input path into one action or a batch of actions
///
/// A file yields `single(input)`. A directory is listed, filtered by
/// `extension`, and handed to `batch`.
///
/// # Errors
/// Returns a not-found error if `input` is neither a file nor a directory
pub(crate) fn expand_input<S, B>(input: &Path, extension: &str, single: S, batch: B) -> Result<ActionSet>
where
    S: FnOnce(&Path) -> Action,
    B: FnOnce(&FileListing) -> BTreeMap<String, Action>,
{
    if input.is_dir() {
        let listing = with_extension(extension, &list_directory(input)?);
        Ok(ActionSet::Batch(batch(&listing)))
    } else if input.is_file() {
        Ok(ActionSet::Single(single(input)))
    } else {
        Err(not_found_error(input.to_path_buf()))
    }
}
