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
//! The main crate for emoji_registry_gen containing all the logic

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

/// Emitting the generated source-code table for a parsed registry
pub mod codegen;
/// Data structs for single emojis
pub mod emojis;
/// The emoji registry parsed from `emoji-test.txt`, including its code ranges
pub mod registry;
