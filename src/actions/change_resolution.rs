//! Change a page's resolution metadata without touching its pixels

use std::collections::BTreeMap;
use std::path::Path;

use crate::config::Settings;
use crate::constants::CONVERT_PROGRAM;
use crate::discovery::FileListing;
use crate::errors::Result;
use crate::values::{Resolution, make_resolution};

use super::render::Token;
use super::{Action, ActionSet, CommandArguments, PageTarget, expand_input};

/// `convert -density <value> -units <units> <source> <target>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeResolution {
    page: PageTarget,
    resolution: Resolution,
}

impl ChangeResolution {
    /// Creates the action with exactly the given paths
    pub fn new(source: &Path, target: &Path, resolution: Resolution) -> Self {
        ChangeResolution {
            page: PageTarget::explicit(source, target),
            resolution,
        }
    }

    pub fn source(&self) -> &Path {
        self.page.source()
    }

    pub fn target(&self) -> &Path {
        self.page.target()
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn is_in_place(&self) -> bool {
        self.page.is_in_place()
    }

    pub(super) fn tokens(&self) -> Vec<Token> {
        vec![
            Token::plain(CONVERT_PROGRAM),
            Token::plain("-density"),
            Token::plain(self.resolution.value().to_string()),
            Token::plain("-units"),
            Token::plain(self.resolution.units().as_str()),
            Token::path(self.source()),
            Token::path(self.target()),
        ]
    }
}

/// Creates a change-resolution action
///
/// Without a target the page is transformed in place through its temporary
/// sibling. No file system access happens here.
pub fn make(
    resolution: Resolution,
    source: &Path,
    target: Option<&Path>,
    settings: &Settings,
) -> Action {
    Action::ChangeResolution(ChangeResolution {
        page: PageTarget::resolve(source, target, settings),
        resolution,
    })
}

/// Creates one action per listed page, keyed by file name
///
/// With `output`, each page is written to `output/<file name>`; otherwise
/// every page is changed in place.
pub fn multi_change_resolution(
    resolution: Resolution,
    listing: &FileListing,
    output: Option<&Path>,
    settings: &Settings,
) -> BTreeMap<String, Action> {
    listing
        .files
        .iter()
        .map(|name| {
            let target = output.map(|output| output.join(name));
            let action = make(
                resolution,
                &listing.path.join(name),
                target.as_deref(),
                settings,
            );
            (name.clone(), action)
        })
        .collect()
}

/// Builds change-resolution actions from command arguments
///
/// Needs `input`, `resolution` and `units`; `output` and `extension` are
/// optional.
///
/// # Errors
/// * Returns a not-found error if an argument or the input is missing
/// * Returns a type or value error if the resolution is invalid
pub fn process_args(args: &CommandArguments, settings: &Settings) -> Result<ActionSet> {
    let input = args.input_path()?;
    let resolution = make_resolution(args.resolution()?, args.units()?)?;
    let output = args.output_path();
    let extension = args.extension_or(&settings.page_extension);

    expand_input(
        &input,
        extension,
        |source| make(resolution, source, output.as_deref(), settings),
        |listing| multi_change_resolution(resolution, listing, output.as_deref(), settings),
    )
}
