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
 *
 */

use std::convert::TryFrom;

use itertools::Itertools;
use regex::{Captures, Regex};

const EMOJI_SEQUENCE_REGEX: &str = r"(?P<sequence>([A-F0-9a-f]{1,8})(\s+([A-F0-9a-f]{1,8}))*)";
const EMOJI_STATUS_REGEX: &str =
    r"(?P<status>component|fully-qualified|minimally-qualified|unqualified)";
const EMOJI_NAME_REGEX: &str =
    r"(?P<emoji>.*)?\s*E(?P<version_major>\d+)\.(?P<version_minor>\d+)\s+(?P<description>.+)";

/// A captured data line of `emoji-test.txt`.
/// The syntax of these lines is:
/// `Codepoints ; ("component"|"fully-qualified"|"minimally-qualified"|"unqualified") # Emoji "E"Version Emoji name`
#[derive(Debug)]
pub struct EmojiTest<'a> {
    pub sequence: &'a str,
    pub status: &'a str,
    pub emoji: Option<&'a str>,
    pub version_major: &'a str,
    pub version_minor: &'a str,
    pub description: &'a str,
}

impl<'a> From<Captures<'a>> for EmojiTest<'a> {
    fn from(captures: Captures<'a>) -> Self {
        let (sequence, status, version_major, version_minor, description) =
            vec!["sequence", "status", "version_major", "version_minor", "description"]
                .iter()
                .map(|name| captures.name(name).unwrap().as_str())
                .collect_tuple()
                .unwrap();
        let emoji = captures.name("emoji").map(|match_| match_.as_str());

        Self {
            sequence,
            status,
            emoji,
            version_major,
            version_minor,
            description,
        }
    }
}

impl<'a> TryFrom<&'a str> for EmojiTest<'a> {
    type Error = ();

    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        let captures = test_regex().captures(value).ok_or(())?;
        Ok(Self::from(captures))
    }
}

pub fn test_regex() -> &'static Regex {
    lazy_static! {
        static ref EMOJI_TEST_REGEX: Regex = Regex::new(&format!(
            r"(?i)^{}\s*;\s*{}\s*#\s*{}$",
            EMOJI_SEQUENCE_REGEX, EMOJI_STATUS_REGEX, EMOJI_NAME_REGEX
        ))
        .unwrap();
    };
    &*EMOJI_TEST_REGEX
}

pub fn group_regex() -> &'static Regex {
    lazy_static! {
        static ref GROUP_REGEX: Regex = Regex::new(r"^#\s*group:\s*(?P<name>.+)$").unwrap();
    };
    &*GROUP_REGEX
}

pub fn subgroup_regex() -> &'static Regex {
    lazy_static! {
        static ref SUBGROUP_REGEX: Regex = Regex::new(r"^#\s*subgroup:\s*(?P<name>.+)$").unwrap();
    };
    &*SUBGROUP_REGEX
}

/// Parses a whitespace separated list of hexadecimal codepoints
pub fn sequence_from_str(raw_codepoints: &str) -> Vec<u32> {
    lazy_static! {
        static ref HEX_SEQUENCE: Regex = Regex::new(r"[a-fA-F0-9]{1,8}").unwrap();
    }

    let matches = HEX_SEQUENCE.find_iter(raw_codepoints);
    matches
        .map(|token| token.as_str())
        // The tokens are already built from a regular expression that only matches
        // hexadecimal strings of at most 8 digits
        .map(|token| u32::from_str_radix(token, 16).unwrap())
        .collect()
}

/// One meaningful line of `emoji-test.txt`
#[derive(Debug)]
pub enum TestFileLine<'a> {
    /// A `# group:` marker with the group name
    Group(&'a str),
    /// A `# subgroup:` marker with the subgroup name
    Subgroup(&'a str),
    /// A data line
    Entry(EmojiTest<'a>),
}

/// Classifies a (trimmed) line of `emoji-test.txt`.
/// Returns `None` for anything that carries no data, i.e. generic comments,
/// blank lines and lines that don't match the data line syntax.
pub fn match_line(line: &str) -> Option<TestFileLine> {
    if let Some(captures) = group_regex().captures(line) {
        return Some(TestFileLine::Group(captures.name("name").unwrap().as_str()));
    }
    if let Some(captures) = subgroup_regex().captures(line) {
        return Some(TestFileLine::Subgroup(captures.name("name").unwrap().as_str()));
    }
    let entry = EmojiTest::try_from(line).ok().map(TestFileLine::Entry);
    debug!("Parsed: {:?}", entry);
    entry
}
