// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error as TeError;

use crate::patch::splice::{self, SpliceError};

pub const TRANSLATE_START_MARKER: &str = "export function translate";
pub const TRANSLATE_END_MARKER: &str = "export function registerTranslation";

/// Replacement body for the `translate()` helper. Urdu entries in the
/// dictionary were stored as mojibake, so the patched helper runs them
/// through a best-effort re-decode before returning them.
pub const PATCHED_TRANSLATE_BLOCK: &str = "export function translate(
  language: LanguageCode,
  englishPhrase: string,
  fallbackUrdu?: string
): string {
  const fixMojibake = (value: string) => {
    try {
      const decoded = Buffer.from(value, 'binary').toString('utf8');
      const hasArabic = /[\u{0600}-\u{06ff}]/.test(decoded);
      if (hasArabic) {
        return decoded;
      }
    } catch {
      // ignore decode issues
    }
    return value;
  };

  const entry = TRANSLATION_DICTIONARY[englishPhrase];

  if (entry) {
    if (language === 'english') {
      return entry[0];
    }
    if (language === 'urdu') {
      return fixMojibake(entry[1]);
    }
    return entry[0];
  }

  if (language === 'urdu') {
    return fixMojibake(fallbackUrdu ?? englishPhrase);
  }

  return englishPhrase;
}
";

#[derive(TeError, Debug)]
pub enum CmdError {
    #[error("Provided file {0:?} does not exist")]
    FileNotFound(PathBuf),
    #[error("Fail to read file {0:?} because: {1}")]
    ReadFile(PathBuf, #[source] std::io::Error),
    #[error("Fail to write file {0:?} because: {1}")]
    WriteFile(PathBuf, #[source] std::io::Error),
    #[error("Fail to locate the translate block because: {0}")]
    Splice(#[from] SpliceError),
}

/// Replace the `translate()` function body in the given translation helper
/// with [`PATCHED_TRANSLATE_BLOCK`]. The file is only written when the
/// splice actually changes it, so re-running on a patched file is a no-op.
pub fn subcmd_patch_translate(translations_file: &Path) -> Result<(), CmdError> {
    if !translations_file.is_file() {
        return Err(CmdError::FileNotFound(translations_file.to_path_buf()));
    }
    let text = fs::read_to_string(translations_file)
        .map_err(|e| CmdError::ReadFile(translations_file.to_path_buf(), e))?;

    let patched = splice::replace_between_markers(
        &text,
        TRANSLATE_START_MARKER,
        TRANSLATE_END_MARKER,
        PATCHED_TRANSLATE_BLOCK,
    )?;

    if patched == text {
        println!("Note: translate block in {} is already patched, nothing to do.", translations_file.display());
        return Ok(());
    }

    fs::write(translations_file, patched)
        .map_err(|e| CmdError::WriteFile(translations_file.to_path_buf(), e))?;
    println!("translate block rewritten");

    Ok(())
}
