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

use std::collections::HashMap;
use std::sync::RwLock;

use crate::registry::emoji_registry::{EmojiRegistry, RegistryParser};
use crate::registry::errors::RegistryError;

pub const EMOJI_TEST: &str = "emoji-test.txt";

/// This function is equivalent to creating a default [RegistryParser] and
/// calling [load_online_registry_with] with it.
pub fn load_online_registry(version: (u32, u32)) -> Result<EmojiRegistry, RegistryError> {
    load_online_registry_with(RegistryParser::new(), version)
}

/// Parses a registry with fresh data from the internet for the given version.
/// # Arguments
/// - `version`: the main and sub version of the desired emoji set (e.g. `(13, 0)`
///   for Emoji 13.0 or `(12, 1)` for Emoji 12.1).
///
/// It will load `emoji-test.txt` from
/// `https://unicode.org/Public/emoji/<version>` (e.g.
/// `https://unicode.org/Public/emoji/13.0`).
pub fn load_online_registry_with(
    parser: RegistryParser,
    version: (u32, u32),
) -> Result<EmojiRegistry, RegistryError> {
    let client_builder = reqwest::blocking::ClientBuilder::new();
    let client = client_builder.build()?;
    let reader = get_test_file_online(&client, version)?;
    Ok(parser.parse(reader))
}

/// A simple helper function to build the URL for the test file.
#[inline]
fn build_url(version: (u32, u32)) -> String {
    format!(
        "https://unicode.org/Public/emoji/{}.{}/{}",
        version.0, version.1, EMOJI_TEST
    )
}

pub fn get_test_file_online(
    client: &reqwest::blocking::Client,
    version: (u32, u32),
) -> Result<std::io::Cursor<bytes::Bytes>, reqwest::Error> {
    // Check if we can return the file from the cache already
    let cache = (&*TEST_FILE_CACHE as &TestFileCache).read();
    if let Ok(cache) = cache {
        if let Some(cached) = cache.get(&version) {
            return Ok(std::io::Cursor::new(cached.clone()));
        }
    }
    let request = client.get(&build_url(version)).send();
    let bytes = request?.bytes()?;

    // Insert data into the cache
    let cache = (&*TEST_FILE_CACHE as &TestFileCache).write();
    if let Ok(mut cache) = cache {
        // We need to check again here, since we didn't hold the Lock for some time
        if !cache.contains_key(&version) {
            cache.insert(version, bytes.clone());
        }
    }

    Ok(std::io::Cursor::new(bytes))
}

type TestFileCache = RwLock<HashMap<(u32, u32), bytes::Bytes>>;

// 14 Unicode/emoji main versions * 2 minor versions ~= 32 versions we could possibly cache
lazy_static! {
    static ref TEST_FILE_CACHE: TestFileCache = RwLock::new(HashMap::with_capacity(32));
}
