// SPDX-FileCopyrightText: 2025 UnionTech Software Technology Co., Ltd.
//
// SPDX-License-Identifier: MIT

/// Outcome of re-decoding a suspected mojibake string.
///
/// Mojibake Urdu entries in the translation helper are UTF-8 byte sequences
/// that were decoded as a single-byte encoding, so every original byte shows
/// up as one char in U+0000..=U+00FF. Reversing that mapping and re-decoding
/// as UTF-8 recovers the Arabic-script text. A failed decode is an expected,
/// ordinary outcome here, not an error.
#[derive(Debug, PartialEq)]
pub enum DecodeAttempt {
    /// Re-decode succeeded and the text contains at least one character in
    /// the Arabic block (U+0600..=U+06FF, which covers Urdu).
    Arabic(String),
    /// Re-decode succeeded but no Arabic-range character was found,
    /// e.g. plain ASCII decodes to itself.
    NoArabic(String),
    /// Some char is above U+00FF (not a byte-per-char string, likely already
    /// correct text), or the reassembled bytes are not valid UTF-8.
    Failed,
}

pub fn reinterpret_as_utf8(value: &str) -> DecodeAttempt {
    let mut bytes: Vec<u8> = Vec::with_capacity(value.len());
    for ch in value.chars() {
        let code_point = ch as u32;
        if code_point > 0xFF {
            return DecodeAttempt::Failed;
        }
        bytes.push(code_point as u8);
    }

    match String::from_utf8(bytes) {
        Ok(decoded) => {
            let arabic_block = regex::Regex::new(r"[\u{0600}-\u{06FF}]").unwrap();
            if arabic_block.is_match(&decoded) {
                DecodeAttempt::Arabic(decoded)
            } else {
                DecodeAttempt::NoArabic(decoded)
            }
        },
        Err(_) => DecodeAttempt::Failed,
    }
}

/// Best-effort mojibake repair: return the re-decoded text only when it
/// yields Arabic-script characters, otherwise hand back the input unchanged.
pub fn fix_mojibake(value: &str) -> String {
    match reinterpret_as_utf8(value) {
        DecodeAttempt::Arabic(decoded) => decoded,
        DecodeAttempt::NoArabic(_) | DecodeAttempt::Failed => value.to_string(),
    }
}
