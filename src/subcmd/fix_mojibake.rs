// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

use crate::patch::mojibake;

/// Run the mojibake repair heuristic over the given text and print the
/// result to stdout. Text that cannot be repaired is printed as-is.
pub fn subcmd_fix_mojibake(content: &str) {
    println!("{}", mojibake::fix_mojibake(content));
}
