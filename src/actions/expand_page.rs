//! Expand a page to new dimensions by padding it with a white fill
//!
//! The page is centred on the new canvas and is not resampled.

use std::collections::BTreeMap;
use std::path::Path;

use crate::config::Settings;
use crate::constants::{CONVERT_PROGRAM, FILL_COLOUR, FILL_GRAVITY};
use crate::discovery::FileListing;
use crate::errors::Result;
use crate::values::{Dimensions, parse_dimensions};

use super::render::Token;
use super::{Action, ActionSet, CommandArguments, PageTarget, expand_input};

/// `convert -extent WxH -background white -gravity Center <source> <target>[WxH]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandPageWithFill {
    page: PageTarget,
    dimensions: Dimensions,
}

impl ExpandPageWithFill {
    pub fn new(source: &Path, target: &Path, dimensions: Dimensions) -> Self {
        ExpandPageWithFill {
            page: PageTarget::explicit(source, target),
            dimensions,
        }
    }

    pub fn source(&self) -> &Path {
        self.page.source()
    }

    pub fn target(&self) -> &Path {
        self.page.target()
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width()
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height()
    }

    pub fn is_in_place(&self) -> bool {
        self.page.is_in_place()
    }

    pub(super) fn tokens(&self) -> Vec<Token> {
        let extent = self.dimensions.to_string();
        vec![
            Token::plain(CONVERT_PROGRAM),
            Token::plain("-extent"),
            Token::plain(extent.clone()),
            Token::plain("-background"),
            Token::plain(FILL_COLOUR),
            Token::plain("-gravity"),
            Token::plain(FILL_GRAVITY),
            Token::path(self.source()),
            Token::PathWithSuffix(self.target().to_path_buf(), format!("[{extent}]")),
        ]
    }
}

/// Creates an expand-page action
///
/// Without a target the page is expanded in place through its temporary
/// sibling.
pub fn make(
    dimensions: Dimensions,
    source: &Path,
    target: Option<&Path>,
    settings: &Settings,
) -> Action {
    Action::ExpandPageWithFill(ExpandPageWithFill {
        page: PageTarget::resolve(source, target, settings),
        dimensions,
    })
}

/// Creates one expand-page action per listed page, keyed by file name
pub fn multi_expand_page(
    dimensions: Dimensions,
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
                dimensions,
                &listing.path.join(name),
                target.as_deref(),
                settings,
            );
            (name.clone(), action)
        })
        .collect()
}

/// Builds expand-page actions from command arguments
///
/// Needs `input` and `dimensions` (`WIDTHxHEIGHT`).
///
/// # Errors
/// * Returns a not-found error if an argument or the input is missing
/// * Returns a format, type or value error if the dimensions are invalid
pub fn process_args(args: &CommandArguments, settings: &Settings) -> Result<ActionSet> {
    let input = args.input_path()?;
    let dimensions = parse_dimensions(args.dimensions()?)?;
    let output = args.output_path();
    let extension = args.extension_or(&settings.page_extension);

    expand_input(
        &input,
        extension,
        |source| make(dimensions, source, output.as_deref(), settings),
        |listing| multi_expand_page(dimensions, listing, output.as_deref(), settings),
    )
}
