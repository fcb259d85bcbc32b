/*
 * Copyright 2021 Constantin A. <emoji.builder@c1710.de>
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */
//! The main data struct for single emojis.

use std::cmp::Ordering;
use std::fmt;
use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::emojis::emoji_status::EmojiStatus;

/// One entry of the registry: an emoji (which might be a sequence) together
/// with the metadata captured from its `emoji-test.txt` line.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Emoji {
    /// The sequence of Unicode® character codepoints that represents this emoji
    pub sequence: Vec<u32>,
    /// The codepoint sequence decoded to a string
    pub text: String,
    /// The human readable name, e.g. `grinning face`
    pub description: String,
    /// The qualification status of the code sequence
    pub status: EmojiStatus,
    /// The emoji version this entry was introduced in, e.g. `(1, 0)` for `E1.0`
    pub version: (u32, u32),
}

impl Emoji {
    /// Builds an emoji from a codepoint sequence.
    /// The sequence has to be non-empty and every codepoint has to be a valid
    /// Unicode® scalar value.
    /// # Examples
    /// ```
    /// use emoji_registry_gen::emojis::emoji::Emoji;
    /// use emoji_registry_gen::emojis::emoji_status::EmojiStatus;
    ///
    /// let grinning = Emoji::from_u32_sequence(
    ///     vec![0x1f600],
    ///     "grinning face",
    ///     EmojiStatus::FullyQualified,
    ///     (1, 0),
    /// ).unwrap();
    ///
    /// assert_eq!(grinning.text, "😀");
    /// ```
    /// ```
    /// use emoji_registry_gen::emojis::emoji::{Emoji, EmojiError};
    /// use emoji_registry_gen::emojis::emoji_status::EmojiStatus;
    ///
    /// let surrogate = Emoji::from_u32_sequence(
    ///     vec![0xd800],
    ///     "not a scalar value",
    ///     EmojiStatus::Unqualified,
    ///     (1, 0),
    /// );
    ///
    /// assert_eq!(surrogate, Err(EmojiError::InvalidCodepoint(0xd800)));
    /// ```
    pub fn from_u32_sequence(
        sequence: Vec<u32>,
        description: &str,
        status: EmojiStatus,
        version: (u32, u32),
    ) -> Result<Emoji, EmojiError> {
        if sequence.is_empty() {
            return Err(EmojiError::EmptySequence);
        }
        let text: String = sequence
            .iter()
            .map(|codepoint| std::char::from_u32(*codepoint).ok_or(EmojiError::InvalidCodepoint(*codepoint)))
            .collect::<Result<_, _>>()?;
        Ok(Emoji {
            sequence,
            text,
            description: description.to_owned(),
            status,
            version,
        })
    }

    /// The codepoint that the first character of this emoji decodes to.
    /// This is the codepoint the range table is built over.
    pub fn leading_codepoint(&self) -> u32 {
        // The sequence is checked to be non-empty on construction
        self.sequence[0]
    }

    /// Re-encodes the sequence as space separated, uppercase hexadecimal
    /// tokens, i.e. the format of the codepoint column in `emoji-test.txt`.
    /// # Examples
    /// ```
    /// use emoji_registry_gen::emojis::emoji::Emoji;
    /// use emoji_registry_gen::emojis::emoji_status::EmojiStatus;
    ///
    /// let keycap = Emoji::from_u32_sequence(
    ///     vec![0x23, 0xfe0f, 0x20e3],
    ///     "keycap",
    ///     EmojiStatus::FullyQualified,
    ///     (0, 6),
    /// ).unwrap();
    ///
    /// assert_eq!(keycap.hex_sequence(), "23 FE0F 20E3");
    /// ```
    pub fn hex_sequence(&self) -> String {
        self.sequence
            .iter()
            .map(|codepoint| format!("{:X}", codepoint))
            .join(" ")
    }
}

impl Display for Emoji {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.description, self.text)
    }
}

impl Emoji {
    /// Compares two emojis by their codepoint sequence, which is the same
    /// order as comparing the decoded strings character by character.
    pub fn cmp_sequence(&self, other: &Self) -> Ordering {
        self.sequence.cmp(&other.sequence)
    }
}

/// Anything that can go wrong when constructing an [Emoji]
#[derive(Debug, PartialEq, Eq)]
pub enum EmojiError {
    /// The codepoint sequence was empty
    EmptySequence,
    /// A codepoint is not a valid Unicode® scalar value
    InvalidCodepoint(u32),
}
