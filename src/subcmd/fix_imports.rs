// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error as TeError;

use crate::patch::splice::{self, SpliceError};

/// The stale import block in the vendor account modal starts and ends with a
/// bare `import {` line left behind by a botched merge.
pub const IMPORT_BLOCK_MARKER: &str = "import {";

/// Consolidated import header, plus a trailing blank line separating it from
/// the rest of the file.
pub const VENDOR_ACCOUNT_HEADER: [&str; 4] = [
    "import React, { useEffect, useMemo, useState } from 'react';",
    "import * as ImagePicker from 'expo-image-picker';",
    "import { Alert, KeyboardAvoidingView, Modal, Platform, ScrollView, StyleSheet, Text, TextInput, TouchableOpacity, View, Image } from 'react-native';",
    "",
];

#[derive(TeError, Debug)]
pub enum CmdError {
    #[error("Provided file {0:?} does not exist")]
    FileNotFound(PathBuf),
    #[error("Fail to read file {0:?} because: {1}")]
    ReadFile(PathBuf, #[source] std::io::Error),
    #[error("Fail to write file {0:?} because: {1}")]
    WriteFile(PathBuf, #[source] std::io::Error),
    #[error("Fail to locate the import block because: {0}")]
    Splice(#[from] SpliceError),
}

/// Drop the broken import block at the top of the given file and prepend the
/// consolidated header. The patched file no longer contains a bare marker
/// line, so a rerun fails with a marker-not-found error instead of eating
/// into the component body.
pub fn subcmd_fix_imports(target_file: &Path) -> Result<(), CmdError> {
    if !target_file.is_file() {
        return Err(CmdError::FileNotFound(target_file.to_path_buf()));
    }
    let text = fs::read_to_string(target_file)
        .map_err(|e| CmdError::ReadFile(target_file.to_path_buf(), e))?;

    let patched = splice::splice_header_lines(&text, IMPORT_BLOCK_MARKER, &VENDOR_ACCOUNT_HEADER)?;

    fs::write(target_file, patched)
        .map_err(|e| CmdError::WriteFile(target_file.to_path_buf(), e))?;
    println!("rewrote header");

    Ok(())
}
