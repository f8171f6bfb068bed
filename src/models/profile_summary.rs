use serde::{Deserialize, Deserializer};

/// The part of a GitHub user payload we care about.
/// Missing or null fields fall back to their zero value, unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, rename = "public_repos", deserialize_with = "null_as_default")]
    pub public_repo_count: u64,
}

// GitHub sends `"name": null` for accounts without a display name.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
