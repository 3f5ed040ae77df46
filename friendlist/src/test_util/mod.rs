use crate::model::FriendRecord;
use crate::view::DisplayItem;

pub mod source;

pub const NESTED_PAYLOAD: &str = r#"{
    "friends": [
        {
            "friends": [
                { "name": "Stuart Raymond", "jobTitle": "Designer", "companyName": "Initech", "topFriend": false },
                { "name": "Jamie Cowhan", "image": "/images/jamie.png", "jobTitle": "Engineer", "companyName": "Acme", "topFriend": true },
                { "name": "Madonna" }
            ]
        }
    ]
}"#;

pub const FLAT_PAYLOAD: &str = r#"{
    "friends": [
        { "name": "Stuart Raymond", "jobTitle": "Designer", "companyName": "Initech", "topFriend": false },
        { "name": "Jamie Cowhan", "image": "/images/jamie.png", "jobTitle": "Engineer", "companyName": "Acme", "topFriend": true },
        { "name": "Madonna" }
    ]
}"#;

pub fn friend(name: &str, top_friend: bool) -> FriendRecord {
    FriendRecord {
        name: Some(name.to_string()),
        top_friend,
        ..Default::default()
    }
}

pub fn display_names(items: &[DisplayItem]) -> Vec<&str> {
    items
        .iter()
        .map(|item| item.display_name.as_str())
        .collect()
}
