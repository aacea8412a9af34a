//! Avatar image URLs derived from the author's Twitter name.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

/// Build the profile-image URL for a username.
pub fn avatar_url(username: &str) -> String {
    format!("https://twitter.com/{username}/profile_image?size=original")
}
