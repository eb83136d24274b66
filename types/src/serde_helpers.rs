//! Serde helpers for Cow<'static, str> deserialization
//!
//! These helpers allow column and table descriptions to use
//! `Cow<'static, str>` while still being deserializable from JSON (where
//! strings become `Cow::Owned`).

use std::borrow::Cow;

use serde::{Deserialize, Deserializer};

/// Deserialize a String into Cow<'static, str>
pub fn cow_from_string<'de, D>(deserializer: D) -> Result<Cow<'static, str>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(Cow::Owned(s))
}

/// Deserialize a Vec<String> into Vec<Cow<'static, str>>
pub fn cow_vec_from_strings<'de, D>(deserializer: D) -> Result<Vec<Cow<'static, str>>, D::Error>
where
    D: Deserializer<'de>,
{
    let vec: Vec<String> = Vec::deserialize(deserializer)?;
    Ok(vec.into_iter().map(Cow::Owned).collect())
}
