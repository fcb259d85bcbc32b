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

use std::str::FromStr;

/// The status of an emoji according to `emoji-test.txt`
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EmojiStatus {
    /// A single codepoint that only appears as part of sequences (e.g. skin tones)
    Component,
    /// It is a regular, RGI emoji
    FullyQualified,
    /// A variant that is missing an `FE0F` somewhere in the middle
    MinimallyQualified,
    /// Not actually displayed as an emoji/not RGI
    Unqualified,
}

impl EmojiStatus {
    /// Whether an entry with this status ends up in the generated registry.
    /// Only the canonical, complete code sequence of an emoji qualifies.
    /// # Examples
    /// ```
    /// use emoji_registry_gen::emojis::emoji_status::EmojiStatus;
    ///
    /// assert!(EmojiStatus::FullyQualified.is_registry_entry());
    /// assert!(!EmojiStatus::Unqualified.is_registry_entry());
    /// assert!(!EmojiStatus::Component.is_registry_entry());
    /// ```
    pub fn is_registry_entry(&self) -> bool {
        matches!(self, Self::FullyQualified)
    }
}

impl Default for EmojiStatus {
    fn default() -> Self {
        Self::Unqualified
    }
}

impl ToString for EmojiStatus {
    fn to_string(&self) -> String {
        match self {
            Self::Component => "component".to_string(),
            Self::Unqualified => "unqualified".to_string(),
            Self::FullyQualified => "fully-qualified".to_string(),
            Self::MinimallyQualified => "minimally-qualified".to_string(),
        }
    }
}

impl FromStr for EmojiStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "component" => Ok(Self::Component),
            "unqualified" => Ok(Self::Unqualified),
            "fully-qualified" => Ok(Self::FullyQualified),
            "minimally-qualified" => Ok(Self::MinimallyQualified),
            other => Err(other.to_string()),
        }
    }
}
