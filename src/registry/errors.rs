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

/// An error that occurs while loading an
/// [EmojiRegistry][crate::registry::emoji_registry::EmojiRegistry]
#[derive(Debug)]
pub enum RegistryError {
    /// Wrapper for [std::io::Error]
    Io(std::io::Error),
    #[cfg(feature = "online")]
    /// Wrapper for [reqwest::Error]
    Reqwest(reqwest::Error),
}

impl From<std::io::Error> for RegistryError {
    fn from(err: std::io::Error) -> Self {
        RegistryError::Io(err)
    }
}

#[cfg(feature = "online")]
impl From<reqwest::Error> for RegistryError {
    fn from(err: reqwest::Error) -> Self {
        RegistryError::Reqwest(err)
    }
}
