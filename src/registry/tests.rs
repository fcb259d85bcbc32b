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

use std::convert::TryFrom;

use crate::emojis::emoji_status::EmojiStatus;
use crate::registry::emoji_registry::{EmojiRegistry, RegistryParser};
use crate::registry::ranges::{compress, contains, CodeRange};
use crate::registry::regexes::{match_line, EmojiTest, TestFileLine};

/// A shortened emoji-test.txt with the line shapes that matter:
/// header comments, group/subgroup markers, skin tone variants,
/// non-fully-qualified entries and a truncatable description.
const TEST_DATA: &str = "\
# emoji-test.txt
# Date: 2020-09-12, 22:19:50 GMT
# © 2020 Unicode®, Inc.
# Format: code points; status # emoji name

# group: Smileys & Emotion

# subgroup: face-smiling
1F600                                                  ; fully-qualified     # 😀 E1.0 grinning face
1F601                                                  ; fully-qualified     # 😁 E0.6 beaming face with smiling eyes

# subgroup: face-affection
263A FE0F                                              ; fully-qualified     # ☺️ E0.6 smiling face
263A                                                   ; unqualified         # ☺ E0.6 smiling face

# group: People & Body

# subgroup: hand-fingers-open
1F44B                                                  ; fully-qualified     # 👋 E0.6 waving hand
1F44B 1F3FB                                            ; fully-qualified     # 👋🏻 E1.0 waving hand: light skin tone

# subgroup: person
1F9D1                                                  ; fully-qualified     # 🧑 E5.0 person
1F9D1 200D 1F384                                       ; fully-qualified     # 🧑‍🎄 E13.0 mx claus

# group: Component

# subgroup: skin-tone
1F3FB                                                  ; component           # 🏻 E1.0 light skin tone

# group: Flags

# subgroup: subdivision-flag
1F3F4 E0067 E0062 E0065 E006E E0067 E007F              ; fully-qualified     # 🏴󠁧󠁢󠁥󠁮󠁧󠁿 E5.0 flag: England

#EOF
";

fn test_registry() -> EmojiRegistry {
    EmojiRegistry::from_reader(TEST_DATA.as_bytes())
}

#[test]
fn single_entry() {
    let data = "\
# group: Smileys & Emotion
# subgroup: face-smiling
1F600                                                  ; fully-qualified     # 😀 E1.0 grinning face
";
    let registry = EmojiRegistry::from_reader(data.as_bytes());

    assert_eq!(registry.groups().len(), 1);
    let group = &registry.groups()[0];
    assert_eq!(group.name, "Smileys & Emotion");
    assert_eq!(group.subgroups.len(), 1);
    let subgroup = &group.subgroups[0];
    assert_eq!(subgroup.name, "face-smiling");
    assert_eq!(subgroup.emojis.len(), 1);
    let emoji = &subgroup.emojis[0];
    assert_eq!(emoji.text, "😀");
    assert_eq!(emoji.description, "grinning face");
    assert_eq!(emoji.version, (1, 0));
    assert_eq!(
        registry.ranges(),
        &[CodeRange {
            start: 0x1f600,
            end: 0x1f600
        }]
    );
}

#[test]
fn hierarchy_follows_file_order() {
    let registry = test_registry();

    let group_names: Vec<_> = registry
        .groups()
        .iter()
        .map(|group| group.name.as_str())
        .collect();
    // "Component" only contained a skin tone entry and is pruned
    assert_eq!(group_names, vec!["Smileys & Emotion", "People & Body", "Flags"]);

    let smileys = &registry.groups()[0];
    let subgroup_names: Vec<_> = smileys
        .subgroups
        .iter()
        .map(|subgroup| subgroup.name.as_str())
        .collect();
    assert_eq!(subgroup_names, vec!["face-smiling", "face-affection"]);
}

#[test]
fn file_order_is_preserved_within_a_subgroup() {
    let data = "\
# group: Smileys & Emotion
# subgroup: face-smiling
1F601                                                  ; fully-qualified     # 😁 E0.6 beaming face with smiling eyes
1F600                                                  ; fully-qualified     # 😀 E1.0 grinning face
";
    let registry = EmojiRegistry::from_reader(data.as_bytes());

    let texts: Vec<_> = registry.iter().map(|emoji| emoji.text.as_str()).collect();
    assert_eq!(texts, vec!["😁", "😀"]);
    // ...while the ranges are computed over the sorted codepoints
    assert_eq!(
        registry.ranges(),
        &[CodeRange {
            start: 0x1f600,
            end: 0x1f601
        }]
    );
}

#[test]
fn skin_tone_lines_are_skipped() {
    let registry = test_registry();

    assert!(registry.iter().all(|emoji| !emoji.description.contains("skin tone")));
    assert!(registry.iter().all(|emoji| emoji.text != "👋🏻"));
    // The component codepoint never makes it into the ranges either
    assert!(!registry.is_emoji('\u{1f3fb}'));
}

#[test]
fn non_fully_qualified_entries_are_dropped() {
    let registry = test_registry();

    let affection = &registry.groups()[0].subgroups[1];
    assert_eq!(affection.emojis.len(), 1);
    assert_eq!(affection.emojis[0].sequence, vec![0x263a, 0xfe0f]);
    assert_eq!(affection.emojis[0].status, EmojiStatus::FullyQualified);
}

#[test]
fn all_statuses_mode_keeps_unqualified_entries() {
    let registry = RegistryParser::new()
        .accept_all_statuses()
        .parse(TEST_DATA.as_bytes());

    let affection = &registry.groups()[0].subgroups[1];
    assert_eq!(affection.emojis.len(), 2);
    // Skin tone lines stay excluded even in this mode
    assert!(registry.iter().all(|emoji| !emoji.description.contains("skin tone")));
}

#[test]
fn empty_subgroups_and_groups_are_pruned() {
    let data = "\
# group: Smileys & Emotion
# subgroup: face-smiling
# subgroup: face-affection
263A                                                   ; unqualified         # ☺ E0.6 smiling face
# group: Symbols
";
    let registry = EmojiRegistry::from_reader(data.as_bytes());

    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
    assert!(registry.ranges().is_empty());
}

#[test]
fn empty_input_yields_empty_registry_and_no_ranges() {
    let registry = EmojiRegistry::from_reader("".as_bytes());

    assert!(registry.is_empty());
    assert!(registry.ranges().is_empty());
}

#[test]
fn description_is_truncated_at_the_first_colon() {
    let registry = test_registry();

    let flags = &registry.groups()[2];
    assert_eq!(flags.subgroups[0].emojis[0].description, "flag");
}

#[test]
fn ranges_are_sorted_disjoint_and_maximal() {
    let registry = test_registry();
    let ranges = registry.ranges();

    assert!(!ranges.is_empty());
    for range in ranges {
        assert!(range.start <= range.end);
    }
    for window in ranges.windows(2) {
        // If the gap were smaller, the two ranges would have been merged
        assert!(window[0].end + 1 < window[1].start);
    }
}

#[test]
fn duplicate_leading_codepoints_share_one_range() {
    let registry = test_registry();

    // 🧑 and 🧑‍🎄 both lead with U+1F9D1
    let person_ranges: Vec<_> = registry
        .ranges()
        .iter()
        .filter(|range| range.contains(0x1f9d1))
        .collect();
    assert_eq!(
        person_ranges,
        vec![&CodeRange {
            start: 0x1f9d1,
            end: 0x1f9d1
        }]
    );
}

#[test]
fn every_emitted_subgroup_and_group_is_non_empty() {
    let registry = test_registry();

    for group in registry.groups() {
        assert!(!group.subgroups.is_empty());
        for subgroup in &group.subgroups {
            assert!(!subgroup.emojis.is_empty());
        }
    }
}

#[test]
fn hex_sequences_round_trip() {
    let registry = test_registry();

    let flag = registry
        .iter()
        .find(|emoji| emoji.description == "flag")
        .unwrap();
    assert_eq!(flag.hex_sequence(), "1F3F4 E0067 E0062 E0065 E006E E0067 E007F");

    // Lower case and leading zeroes are normalized away
    let data = "\
# group: Smileys & Emotion
# subgroup: face-smiling
01f600                                                 ; fully-qualified     # 😀 E1.0 grinning face
";
    let registry = EmojiRegistry::from_reader(data.as_bytes());
    assert_eq!(registry.iter().next().unwrap().hex_sequence(), "1F600");
}

#[test]
fn lookup_hits_every_leading_codepoint() {
    let registry = test_registry();

    for emoji in registry.iter() {
        let leading = std::char::from_u32(emoji.leading_codepoint()).unwrap();
        assert!(registry.is_emoji(leading));
    }
    assert!(registry.is_emoji('☺'));
    assert!(!registry.is_emoji('a'));
    assert!(!registry.is_emoji('\u{1f602}'));
}

#[test]
fn compress_merges_only_adjacent_or_equal_codepoints() {
    let ranges = compress(vec![0x23, 0x2a, 0x2b, 0x2b, 0x2d, 0x1f600]);

    assert_eq!(
        ranges,
        vec![
            CodeRange { start: 0x23, end: 0x23 },
            CodeRange { start: 0x2a, end: 0x2b },
            CodeRange { start: 0x2d, end: 0x2d },
            CodeRange {
                start: 0x1f600,
                end: 0x1f600
            },
        ]
    );
}

#[test]
fn compress_does_not_emit_a_sentinel_range() {
    assert!(compress(std::iter::empty()).is_empty());
    // A walk that starts at codepoint zero stays correct
    assert_eq!(
        compress(vec![0, 1, 5]),
        vec![
            CodeRange { start: 0, end: 1 },
            CodeRange { start: 5, end: 5 },
        ]
    );
}

#[test]
fn contains_uses_the_range_bounds() {
    let ranges = compress(vec![0x23, 0x30, 0x31, 0x32, 0x1f600]);

    assert!(contains(&ranges, 0x23));
    assert!(contains(&ranges, 0x30));
    assert!(contains(&ranges, 0x32));
    assert!(contains(&ranges, 0x1f600));
    assert!(!contains(&ranges, 0x22));
    assert!(!contains(&ranges, 0x24));
    assert!(!contains(&ranges, 0x33));
    assert!(!contains(&ranges, 0x1f601));
}

#[test]
fn match_line_classifies_markers_and_entries() {
    match match_line("# group: Smileys & Emotion") {
        Some(TestFileLine::Group(name)) => assert_eq!(name, "Smileys & Emotion"),
        other => panic!("Expected a group marker, got {:?}", other),
    }
    match match_line("# subgroup: face-smiling") {
        Some(TestFileLine::Subgroup(name)) => assert_eq!(name, "face-smiling"),
        other => panic!("Expected a subgroup marker, got {:?}", other),
    }
    match match_line("1F600 ; fully-qualified # 😀 E1.0 grinning face") {
        Some(TestFileLine::Entry(entry)) => {
            assert_eq!(entry.sequence, "1F600");
            assert_eq!(entry.status, "fully-qualified");
            assert_eq!(entry.version_major, "1");
            assert_eq!(entry.version_minor, "0");
            assert_eq!(entry.description, "grinning face");
        }
        other => panic!("Expected a data line, got {:?}", other),
    }
    assert!(match_line("# Date: 2020-09-12, 22:19:50 GMT").is_none());
    assert!(match_line("this is not a data line").is_none());
}

#[test]
fn captures_convert_to_an_emoji_test_entry() {
    let entry =
        EmojiTest::try_from("263A FE0F ; fully-qualified # ☺️ E0.6 smiling face").unwrap();

    assert_eq!(entry.sequence, "263A FE0F");
    assert_eq!(entry.status, "fully-qualified");
    assert_eq!(entry.emoji.unwrap().trim(), "☺️");
    assert_eq!(entry.version_major, "0");
    assert_eq!(entry.version_minor, "6");
    assert_eq!(entry.description, "smiling face");

    assert!(EmojiTest::try_from("# group: Flags").is_err());
}
