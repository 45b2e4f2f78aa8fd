// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error as TeError;

use crate::patch::splice::{self, SpliceError};

#[derive(TeError, Debug)]
pub enum CmdError {
    #[error("Provided file {0:?} does not exist")]
    FileNotFound(PathBuf),
    #[error("Fail to read file {0:?} because: {1}")]
    ReadFile(PathBuf, #[source] std::io::Error),
    #[error("Fail to write file {0:?} because: {1}")]
    WriteFile(PathBuf, #[source] std::io::Error),
    #[error("Old block not found in {0:?}, file left unchanged")]
    BlockNotFound(PathBuf),
}

/// Presence-guarded literal replacement: swap every occurrence of the old
/// block (read from `old_block_file`) with the new one. An absent old block
/// aborts before any write, so the target is never half-patched.
pub fn subcmd_replace_block(
    target_file: &Path,
    old_block_file: &Path,
    new_block_file: &Path,
) -> Result<(), CmdError> {
    if !target_file.is_file() {
        return Err(CmdError::FileNotFound(target_file.to_path_buf()));
    }
    let text = fs::read_to_string(target_file)
        .map_err(|e| CmdError::ReadFile(target_file.to_path_buf(), e))?;
    let old_block = fs::read_to_string(old_block_file)
        .map_err(|e| CmdError::ReadFile(old_block_file.to_path_buf(), e))?;
    let new_block = fs::read_to_string(new_block_file)
        .map_err(|e| CmdError::ReadFile(new_block_file.to_path_buf(), e))?;

    // replace_literal_block only ever reports BlockNotFound.
    let (patched, occurrences) = splice::replace_literal_block(&text, &old_block, &new_block)
        .map_err(|_: SpliceError| CmdError::BlockNotFound(target_file.to_path_buf()))?;

    fs::write(target_file, patched)
        .map_err(|e| CmdError::WriteFile(target_file.to_path_buf(), e))?;
    println!("replaced {occurrences} occurrence(s)");

    Ok(())
}
