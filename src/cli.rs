// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use clap::{Parser, Subcommand};
use thiserror::Error as TeError;


#[derive(Debug, Parser)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
#[command(
    version = env!("GIT_DESCRIBE_OR_CARGO_PKG_VERSION"),
    about = "A commandline tool to apply the one-shot source patches used in the app's translation maintenance workflow.",
)]
pub enum Commands {
    #[command(name = "patch-translate")]
    #[command(
        about = "Rewrites the translate() helper with the mojibake-aware version",
        long_about = "Rewrites the translate() function in the translation helper with the version that \
            repairs mojibake Urdu entries before returning them.\n\n\
            The region between the 'export function translate' and 'export function registerTranslation' \
            markers is replaced in place. Re-running on an already patched file is a no-op.",
    )]
    PatchTranslate {
        #[arg(default_value = "lib/translations.ts")]
        translations_file: PathBuf,
    },

    #[command(name = "fix-imports")]
    #[command(
        about = "Replaces the broken import block of the vendor account modal",
        long_about = "Drops everything from the first bare 'import {' line through the second one inclusive \
            and prepends the consolidated import header.\n\n\
            The patched file contains no bare marker line anymore, so re-running fails with a \
            marker-not-found error instead of mutating the file further.",
    )]
    FixImports {
        #[arg(default_value = "app/modals/vendor-account.tsx")]
        target_file: PathBuf,
    },

    #[command(name = "replace-block")]
    #[command(
        about = "Replaces every occurrence of an exact literal block in a file",
        long_about = "Replaces every occurrence of the old block (read from OLD_BLOCK_FILE) with the new \
            block (read from NEW_BLOCK_FILE) in the target file.\n\n\
            If the old block is absent the target file is left byte-for-byte unchanged.",
    )]
    ReplaceBlock {
        target_file: PathBuf,
        old_block_file: PathBuf,
        new_block_file: PathBuf,
    },

    #[command(name = "fix-mojibake")]
    #[command(
        about = "Repairs mojibake Urdu text and prints the result",
        long_about = "Re-decodes the given text as UTF-8 bytes that were mis-read as a single-byte encoding.\n\n\
            The repaired text is printed to stdout when the re-decode yields Arabic-script characters, \
            otherwise the input is printed unchanged.",
    )]
    FixMojibake {
        content: String,
    },
}

#[derive(TeError, Debug)]
#[error("{0}")]
pub enum CliError {
    PatchTranslate(#[from] crate::subcmd::patch_translate::CmdError),
    FixImports(#[from] crate::subcmd::fix_imports::CmdError),
    ReplaceBlock(#[from] crate::subcmd::replace_block::CmdError),
}

pub fn execute() -> Result<(), CliError> {
    let args = Cli::parse();

    use crate::subcmd;
    match args.command {
        Commands::PatchTranslate { translations_file } => {
            subcmd::subcmd_patch_translate(&translations_file)?;
        },
        Commands::FixImports { target_file } => {
            subcmd::subcmd_fix_imports(&target_file)?;
        },
        Commands::ReplaceBlock { target_file, old_block_file, new_block_file } => {
            subcmd::subcmd_replace_block(&target_file, &old_block_file, &new_block_file)?;
        },
        Commands::FixMojibake { content } => {
            subcmd::subcmd_fix_mojibake(&content);
        },
    }

    Ok(())
}
