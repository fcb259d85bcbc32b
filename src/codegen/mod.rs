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
//! Serializes an [EmojiRegistry] into the generated C++ source tables that the
//! consuming build compiles in: a nested `db` vector with the group hierarchy
//! and a `ranges` map with the compressed leading codepoints.
//!
//! The tables are built as an in-memory [Initializer] tree first and written
//! in a second step, so the data shape stays independent of the output syntax.

use std::io;
use std::io::Write;

use crate::emojis::emoji::Emoji;
use crate::registry::emoji_registry::{EmojiRegistry, Group, Subgroup};
use crate::registry::ranges::CodeRange;


/// The name the generated-file banner points the reader to
pub const GENERATOR_NAME: &str = "emoji-registry-gen";

/// The marker macro that wraps group names for the translation extractor
const TR_MACRO: &str = "QT_TR_NOOP";

const INDENT: &str = "    ";

/// One node of the brace initializer tree that makes up a generated table
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Initializer {
    /// A quoted string literal
    Str(String),
    /// A marker macro call wrapping a quoted string literal, e.g. `QT_TR_NOOP("...")`
    Macro(&'static str, String),
    /// A `{start, end}` pair, written on a single line
    Pair(u32, u32),
    /// A braced list of nested initializers, one per line
    List(Vec<Initializer>),
}

impl Initializer {
    /// Writes this node at the given nesting level.
    /// Lists put every item on its own line, indented one level deeper;
    /// everything else is written inline.
    fn write<W: Write>(&self, writer: &mut W, level: usize) -> io::Result<()> {
        match self {
            Initializer::Str(string) => write!(writer, "\"{}\"", escape(string)),
            Initializer::Macro(name, string) => write!(writer, "{}(\"{}\")", name, escape(string)),
            Initializer::Pair(start, end) => write!(writer, "{{{}, {}}}", start, end),
            Initializer::List(items) => {
                writeln!(writer, "{{")?;
                for (index, item) in items.iter().enumerate() {
                    write!(writer, "{}", INDENT.repeat(level + 1))?;
                    item.write(writer, level + 1)?;
                    if index + 1 < items.len() {
                        write!(writer, ",")?;
                    }
                    writeln!(writer)?;
                }
                write!(writer, "{}}}", INDENT.repeat(level))
            }
        }
    }
}

fn escape(string: &str) -> String {
    string.replace('\\', "\\\\").replace('"', "\\\"")
}

fn emoji_initializer(emoji: &Emoji) -> Initializer {
    Initializer::List(vec![
        Initializer::Str(emoji.text.clone()),
        Initializer::Str(emoji.description.clone()),
    ])
}

fn subgroup_initializer(subgroup: &Subgroup) -> Initializer {
    Initializer::List(vec![
        Initializer::Str(subgroup.name.clone()),
        Initializer::List(subgroup.emojis.iter().map(emoji_initializer).collect()),
    ])
}

fn group_initializer(group: &Group) -> Initializer {
    Initializer::List(vec![
        // Group names are shown to the user, so they go through the translator
        Initializer::Macro(TR_MACRO, group.name.clone()),
        Initializer::List(group.subgroups.iter().map(subgroup_initializer).collect()),
    ])
}

/// The initializer tree for the `db` table of a registry
pub fn db_initializer(registry: &EmojiRegistry) -> Initializer {
    Initializer::List(registry.groups().iter().map(group_initializer).collect())
}

/// The initializer tree for the `ranges` table
pub fn ranges_initializer(ranges: &[CodeRange]) -> Initializer {
    Initializer::List(
        ranges
            .iter()
            .map(|range| Initializer::Pair(range.start, range.end))
            .collect(),
    )
}

/// Writes the complete generated source file for a registry.
pub fn render<W: Write>(registry: &EmojiRegistry, writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "// This is a generated file. See {} for details",
        GENERATOR_NAME
    )?;
    writeln!(writer, "// clang-format off")?;
    write!(writer, "static std::vector<EmojiRegistry::Group> db = ")?;
    db_initializer(registry).write(writer, 0)?;
    writeln!(writer, ";")?;
    writeln!(writer)?;
    write!(writer, "static std::map<quint32, quint32> ranges = ")?;
    ranges_initializer(registry.ranges()).write(writer, 0)?;
    writeln!(writer, ";")?;
    writeln!(writer)?;
    writeln!(writer, "// clang-format on")?;
    Ok(())
}

/// Renders the generated source file into a string
pub fn render_to_string(registry: &EmojiRegistry) -> String {
    let mut buffer = Vec::new();
    // Writing to a Vec cannot fail
    render(registry, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}
