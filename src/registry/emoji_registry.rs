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
//! A module that parses the [Unicode® emoji test data file][unicode] into the
//! group/subgroup hierarchy that the generated table is built from.
//!
//! [unicode]: https://unicode.org/Public/emoji/13.0/emoji-test.txt

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::emojis::emoji::Emoji;
use crate::emojis::emoji_status::EmojiStatus;
use crate::registry::errors::RegistryError;
use crate::registry::ranges;
use crate::registry::ranges::CodeRange;
use crate::registry::regexes::{match_line, sequence_from_str, EmojiTest, TestFileLine};

/// Variant forms with modifiers are explicitly unsupported
const SKIN_TONE_MARKER: &str = "skin tone";

/// A category of emojis as marked by a `# group:` line, e.g. `Smileys & Emotion`
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Group {
    pub name: String,
    pub subgroups: Vec<Subgroup>,
}

/// A subcategory inside a [Group] as marked by a `# subgroup:` line,
/// e.g. `face-smiling`
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Subgroup {
    pub name: String,
    pub emojis: Vec<Emoji>,
}

/// Parses `emoji-test.txt`-like data in a single pass.
///
/// The group/subgroup cursor lives in this accumulator, so parsing carries no
/// state beyond the value itself: a `# group:` marker appends a group (and
/// thereby resets the subgroup cursor), a `# subgroup:` marker appends a
/// subgroup to the newest group and data lines append to the newest subgroup.
#[derive(Debug, Default)]
pub struct RegistryParser {
    accept_all_statuses: bool,
    groups: Vec<Group>,
}

impl RegistryParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps entries of any qualification status instead of only
    /// `fully-qualified` ones. This reproduces the behavior of earlier
    /// revisions of the generator and has to be requested explicitly.
    pub fn accept_all_statuses(mut self) -> Self {
        self.accept_all_statuses = true;
        self
    }

    /// Consumes the reader and returns the finished registry, i.e. the pruned
    /// hierarchy together with its compressed code ranges.
    /// Lines that fail to parse are skipped (and logged), not treated as errors.
    pub fn parse<I: BufRead>(mut self, reader: I) -> EmojiRegistry {
        for line in reader.lines().filter_map(|line| line.ok()) {
            self.parse_line(line.trim());
        }
        self.finish()
    }

    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<EmojiRegistry, RegistryError> {
        let file = File::open(path)?;
        Ok(self.parse(BufReader::new(file)))
    }

    fn parse_line(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }
        if line.contains(SKIN_TONE_MARKER) {
            debug!("Skipping skin tone variant: {}", line);
            return;
        }
        match match_line(line) {
            Some(TestFileLine::Group(name)) => self.groups.push(Group {
                name: name.to_owned(),
                subgroups: Vec::new(),
            }),
            Some(TestFileLine::Subgroup(name)) => match self.groups.last_mut() {
                Some(group) => group.subgroups.push(Subgroup {
                    name: name.to_owned(),
                    emojis: Vec::new(),
                }),
                None => warn!("Subgroup marker before the first group: {}", line),
            },
            Some(TestFileLine::Entry(entry)) => self.push_entry(entry, line),
            None => {
                if !line.starts_with('#') {
                    warn!("Malformed line in emoji-test.txt: {}", line);
                }
            }
        }
    }

    fn push_entry(&mut self, entry: EmojiTest, line: &str) {
        let status = EmojiStatus::from_str(entry.status).unwrap_or_default();
        if !self.accept_all_statuses && !status.is_registry_entry() {
            debug!("Skipping {} entry: {}", status.to_string(), line);
            return;
        }
        let subgroup = match self
            .groups
            .last_mut()
            .and_then(|group| group.subgroups.last_mut())
        {
            Some(subgroup) => subgroup,
            None => {
                warn!("Data line outside of a subgroup: {}", line);
                return;
            }
        };
        let version = (
            entry.version_major.parse().unwrap_or_default(),
            entry.version_minor.parse().unwrap_or_default(),
        );
        let sequence = sequence_from_str(entry.sequence);
        match Emoji::from_u32_sequence(sequence, base_description(entry.description), status, version)
        {
            Ok(emoji) => subgroup.emojis.push(emoji),
            Err(error) => warn!("Skipping undecodable line {}: {:?}", line, error),
        }
    }

    /// Prunes empty subgroups and then empty groups (order-preserving) and
    /// compresses the leading codepoints of everything that survived.
    fn finish(self) -> EmojiRegistry {
        let mut groups = self.groups;
        for group in &mut groups {
            group.subgroups.retain(|subgroup| !subgroup.emojis.is_empty());
        }
        groups.retain(|group| !group.subgroups.is_empty());
        let ranges = compute_ranges(&groups);
        EmojiRegistry { groups, ranges }
    }
}

/// Cuts a description like `flag: England` down to its base name (`flag`),
/// i.e. drops the qualifier clause after the first colon.
fn base_description(description: &str) -> &str {
    match description.find(':') {
        Some(index) => &description[..index],
        None => description,
    }
}

fn compute_ranges(groups: &[Group]) -> Vec<CodeRange> {
    let mut emojis: Vec<&Emoji> = groups
        .iter()
        .flat_map(|group| &group.subgroups)
        .flat_map(|subgroup| &subgroup.emojis)
        .collect();
    emojis.sort_by(|a, b| a.cmp_sequence(b));
    ranges::compress(emojis.iter().map(|emoji| emoji.leading_codepoint()))
}

/// The parsed registry: all retained groups in file order plus the compressed
/// ranges of the leading codepoints of their emojis.
///
/// Every subgroup in here has at least one emoji and every group at least one
/// subgroup; the ranges are sorted, disjoint and maximal.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct EmojiRegistry {
    groups: Vec<Group>,
    ranges: Vec<CodeRange>,
}

impl EmojiRegistry {
    /// Parses a registry from an `emoji-test.txt`-like file with the default
    /// (fully-qualified only) policy.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<EmojiRegistry, RegistryError> {
        RegistryParser::new().parse_file(path)
    }

    /// Parses a registry from anything line-readable with the default
    /// (fully-qualified only) policy.
    /// # Examples
    /// ```
    /// use emoji_registry_gen::registry::emoji_registry::EmojiRegistry;
    ///
    /// let data = "\
    /// ## group: Smileys & Emotion
    /// ## subgroup: face-smiling
    /// 1F600 ; fully-qualified # 😀 E1.0 grinning face
    /// ";
    ///
    /// let registry = EmojiRegistry::from_reader(data.as_bytes());
    ///
    /// assert_eq!(registry.len(), 1);
    /// assert_eq!(registry.groups()[0].name, "Smileys & Emotion");
    /// assert!(registry.is_emoji('😀'));
    /// assert!(!registry.is_emoji('a'));
    /// ```
    pub fn from_reader<I: BufRead>(reader: I) -> EmojiRegistry {
        RegistryParser::new().parse(reader)
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn ranges(&self) -> &[CodeRange] {
        &self.ranges
    }

    /// Whether a character is the leading character of any registry emoji.
    /// This is the range table lookup that the consumer of the generated
    /// table performs.
    pub fn is_emoji(&self, character: char) -> bool {
        ranges::contains(&self.ranges, character as u32)
    }

    /// All emojis across all groups and subgroups, in file order
    pub fn iter(&self) -> impl Iterator<Item = &Emoji> {
        self.groups
            .iter()
            .flat_map(|group| &group.subgroups)
            .flat_map(|subgroup| &subgroup.emojis)
    }

    /// The number of emojis in the registry
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Checks whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
