//! Rendering of actions into process arguments
//!
//! Every action is described once as a list of tokens. The argument vector and
//! the terminal command are both produced from that list so they always
//! describe the same invocation.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::utils::quote;

/// One element of an external tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// Program name, flag or flag value
    Plain(String),
    /// A file system path
    Path(PathBuf),
    /// A path followed by a literal suffix, like `out.tiff[10x20]`
    PathWithSuffix(PathBuf, String),
    /// A literal prefix followed by a path, like `-sOutputFile=dir/page.tiff`
    PrefixedPath(String, PathBuf),
}

impl Token {
    pub(crate) fn plain(value: impl Into<String>) -> Self {
        Token::Plain(value.into())
    }

    pub(crate) fn path(path: &Path) -> Self {
        Token::Path(path.to_path_buf())
    }

    fn to_os_string(&self) -> OsString {
        match self {
            Token::Plain(value) => OsString::from(value),
            Token::Path(path) => path.as_os_str().to_os_string(),
            Token::PathWithSuffix(path, suffix) => {
                let mut arg = path.as_os_str().to_os_string();
                arg.push(suffix);
                arg
            }
            Token::PrefixedPath(prefix, path) => {
                let mut arg = OsString::from(prefix);
                arg.push(path.as_os_str());
                arg
            }
        }
    }

    fn to_display_string(&self) -> String {
        self.to_os_string().to_string_lossy().into_owned()
    }

    fn to_terminal_string(&self) -> String {
        match self {
            Token::Plain(value) => value.clone(),
            Token::Path(path) => quote(&path.to_string_lossy()),
            Token::PathWithSuffix(path, suffix) => {
                format!("{}{suffix}", quote(&path.to_string_lossy()))
            }
            Token::PrefixedPath(prefix, path) => {
                format!("{prefix}{}", quote(&path.to_string_lossy()))
            }
        }
    }
}

pub(crate) fn to_os_args(tokens: &[Token]) -> Vec<OsString> {
    tokens.iter().map(Token::to_os_string).collect()
}

pub(crate) fn to_argv(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(Token::to_display_string).collect()
}

pub(crate) fn to_terminal_command(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_terminal_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tokens() -> Vec<Token> {
        vec![
            Token::plain("convert"),
            Token::path(Path::new("my scans/p1.tiff")),
            Token::PathWithSuffix(PathBuf::from("out.tiff"), "[10x20]".to_string()),
            Token::PrefixedPath("-sOutputFile=".to_string(), PathBuf::from("dir/p.tiff")),
        ]
    }

    #[test]
    fn test_to_argv() {
        assert_eq!(
            to_argv(&sample_tokens()),
            [
                "convert",
                "my scans/p1.tiff",
                "out.tiff[10x20]",
                "-sOutputFile=dir/p.tiff"
            ]
        );
    }

    #[test]
    fn test_to_terminal_command_quotes_paths_only() {
        assert_eq!(
            to_terminal_command(&sample_tokens()),
            "convert \"my scans/p1.tiff\" \"out.tiff\"[10x20] -sOutputFile=\"dir/p.tiff\""
        );
    }

    #[test]
    fn test_os_args_match_argv() {
        let tokens = sample_tokens();
        let os_args: Vec<String> = to_os_args(&tokens)
            .into_iter()
            .map(|arg| arg.into_string().unwrap())
            .collect();

        assert_eq!(os_args, to_argv(&tokens));
    }
}
