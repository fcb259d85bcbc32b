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

use std::cmp::Ordering;

/// An inclusive run of consecutive codepoints, e.g. `{128512, 128591}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeRange {
    pub start: u32,
    pub end: u32,
}

impl CodeRange {
    fn single(codepoint: u32) -> Self {
        CodeRange {
            start: codepoint,
            end: codepoint,
        }
    }

    pub fn contains(&self, codepoint: u32) -> bool {
        self.start <= codepoint && codepoint <= self.end
    }
}

/// Compresses an ascending walk of codepoints into maximal inclusive ranges.
/// A codepoint that equals the end of the open range (duplicate) or is exactly
/// one past it extends that range, anything else closes it and opens a new one.
/// An empty iterator yields an empty range list.
/// # Examples
/// ```
/// use emoji_registry_gen::registry::ranges::{compress, CodeRange};
///
/// let ranges = compress(vec![0x23, 0x1f600, 0x1f600, 0x1f601, 0x1f603]);
/// assert_eq!(ranges, vec![
///     CodeRange { start: 0x23, end: 0x23 },
///     CodeRange { start: 0x1f600, end: 0x1f601 },
///     CodeRange { start: 0x1f603, end: 0x1f603 },
/// ]);
///
/// assert!(compress(std::iter::empty()).is_empty());
/// ```
pub fn compress<I: IntoIterator<Item = u32>>(codepoints: I) -> Vec<CodeRange> {
    let mut ranges = Vec::new();
    let mut open: Option<CodeRange> = None;
    for codepoint in codepoints {
        match open.as_mut() {
            Some(range) if codepoint == range.end || codepoint == range.end + 1 => {
                range.end = codepoint
            }
            Some(range) => {
                ranges.push(*range);
                open = Some(CodeRange::single(codepoint));
            }
            None => open = Some(CodeRange::single(codepoint)),
        }
    }
    ranges.extend(open);
    ranges
}

/// Binary search over a sorted, disjoint range list, the same lookup the
/// consumer of the generated table performs.
pub fn contains(ranges: &[CodeRange], codepoint: u32) -> bool {
    ranges
        .binary_search_by(|range| {
            if codepoint < range.start {
                Ordering::Greater
            } else if codepoint > range.end {
                Ordering::Less
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}
