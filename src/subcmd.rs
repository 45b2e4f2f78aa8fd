// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

pub mod patch_translate;
pub mod fix_imports;
pub mod replace_block;
pub mod fix_mojibake;

pub use patch_translate::subcmd_patch_translate;
pub use fix_imports::subcmd_fix_imports;
pub use replace_block::subcmd_replace_block;
pub use fix_mojibake::subcmd_fix_mojibake;
