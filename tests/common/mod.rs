//! Shell scripts standing in for `convert` and `gs`
#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use tempfile::TempDir;

use bookworm::prelude::Settings;

const CONVERT_OK: &str = r#"#!/bin/sh
for arg; do last="$arg"; done
# a trailing [WxH] on the output is a size hint, not part of the file name
case "$last" in
  *\]) last="${last%\[*}" ;;
esac
printf 'transformed' > "$last"
"#;

const CONVERT_FAIL: &str = r#"#!/bin/sh
for arg; do last="$arg"; done
# a trailing [WxH] on the output is a size hint, not part of the file name
case "$last" in
  *\]) last="${last%\[*}" ;;
esac
printf 'partial' > "$last"
echo "convert: unable to open image" >&2
exit 1
"#;

const GS_OK: &str = r#"#!/bin/sh
for arg; do
  case "$arg" in
    -sOutputFile=*) pattern="${arg#-sOutputFile=}" ;;
  esac
done
for page in 1 2 3; do
  printf 'page' > "$(printf "$pattern" "$page")"
done
"#;

const GS_FAIL: &str = r#"#!/bin/sh
for arg; do
  case "$arg" in
    -sOutputFile=*) pattern="${arg#-sOutputFile=}" ;;
  esac
done
printf 'page' > "$(printf "$pattern" 1)"
echo "gs: Unrecoverable error" >&2
exit 1
"#;

pub struct FakeTools {
    _dir: TempDir,
    pub convert_ok: PathBuf,
    pub convert_fail: PathBuf,
    pub gs_ok: PathBuf,
    pub gs_fail: PathBuf,
}

/// Written once, before any test spawns a process, so that no script is
/// still open for writing when another thread executes it.
pub static FAKE_TOOLS: Lazy<FakeTools> = Lazy::new(|| {
    let dir = TempDir::new().unwrap();
    let convert_ok = write_script(dir.path(), "convert-ok", CONVERT_OK);
    let convert_fail = write_script(dir.path(), "convert-fail", CONVERT_FAIL);
    let gs_ok = write_script(dir.path(), "gs-ok", GS_OK);
    let gs_fail = write_script(dir.path(), "gs-fail", GS_FAIL);

    FakeTools {
        _dir: dir,
        convert_ok,
        convert_fail,
        gs_ok,
        gs_fail,
    }
});

fn write_script(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

pub fn settings_with(convert: &Path, gs: &Path) -> Settings {
    Settings {
        convert_program: convert.to_string_lossy().into_owned(),
        ghostscript_program: gs.to_string_lossy().into_owned(),
        ..Settings::default()
    }
}

pub fn succeeding_settings() -> Settings {
    settings_with(&FAKE_TOOLS.convert_ok, &FAKE_TOOLS.gs_ok)
}

pub fn failing_settings() -> Settings {
    settings_with(&FAKE_TOOLS.convert_fail, &FAKE_TOOLS.gs_fail)
}

/// Names of the entries of `dir`, sorted
pub fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
