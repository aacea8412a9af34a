use super::*;

#[test]
fn avatar_url_embeds_username() {
    assert_eq!(
        avatar_url("bob"),
        "https://twitter.com/bob/profile_image?size=original"
    );
}
