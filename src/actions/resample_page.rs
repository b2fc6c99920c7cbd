//! Resample a page to a new resolution, changing its pixel count

use std::collections::BTreeMap;
use std::path::Path;

use crate::config::Settings;
use crate::constants::CONVERT_PROGRAM;
use crate::discovery::FileListing;
use crate::errors::Result;
use crate::values::{Resolution, make_resolution};

use super::render::Token;
use super::{Action, ActionSet, CommandArguments, PageTarget, expand_input};

/// `convert -resample <value> -units <units> <source> <target>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResamplePage {
    page: PageTarget,
    resolution: Resolution,
}

impl ResamplePage {
    pub fn new(source: &Path, target: &Path, resolution: Resolution) -> Self {
        ResamplePage {
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
            Token::plain("-resample"),
            Token::plain(self.resolution.value().to_string()),
            Token::plain("-units"),
            Token::plain(self.resolution.units().as_str()),
            Token::path(self.source()),
            Token::path(self.target()),
        ]
    }
}

pub fn make(
    resolution: Resolution,
    source: &Path,
    target: Option<&Path>,
    settings: &Settings,
) -> Action {
    Action::ResamplePage(ResamplePage {
        page: PageTarget::resolve(source, target, settings),
        resolution,
    })
}

pub fn multi_resample_page(
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

/// Builds resample actions from `input`, `resolution` and `units`
pub fn process_args(args: &CommandArguments, settings: &Settings) -> Result<ActionSet> {
    let input = args.input_path()?;
    let resolution = make_resolution(args.resolution()?, args.units()?)?;
    let output = args.output_path();
    let extension = args.extension_or(&settings.page_extension);

    expand_input(
        &input,
        extension,
        |source| make(resolution, source, output.as_deref(), settings),
        |listing| multi_resample_page(resolution, listing, output.as_deref(), settings),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_subprocess() {
        let resolution = make_resolution("150", "PixelsPerInch").unwrap();
        let action = Action::ResamplePage(ResamplePage::new(
            Path::new("p1.tiff"),
            Path::new("p1.small.tiff"),
            resolution,
        ));

        assert_eq!(
            action.as_subprocess(),
            ["convert", "-resample", "150", "-units", "PixelsPerInch", "p1.tiff", "p1.small.tiff"]
        );
    }

    #[test]
    fn test_make_without_target() {
        let settings = Settings::default();
        let resolution = make_resolution("150", "PixelsPerInch").unwrap();
        let action = make(resolution, Path::new("p1.tiff"), None, &settings);

        assert_eq!(action.target(), Path::new("p1.bookworm.tiff"));
        assert_eq!(action.name(), "resample-page");
    }
}
