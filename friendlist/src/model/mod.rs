use serde::{Deserialize, Deserializer, Serialize};

pub use name::*;
pub use order::*;

mod name;
mod order;

/// A single friend as delivered by the data source. Never mutated after decoding.
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FriendRecord {
    pub name: Option<String>,
    pub image: Option<String>,
    pub job_title: Option<String>,
    pub company_name: Option<String>,

    /// Favorite marker. Missing and `null` both decode as `false`.
    #[serde(deserialize_with = "null_as_false")]
    pub top_friend: bool,
}

impl FriendRecord {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The image URI, treating an empty string as no image.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref().filter(|uri| !uri.is_empty())
    }

    pub fn last_name(&self) -> &str {
        last_name(self.name())
    }

    pub fn initials(&self) -> String {
        initials(self.name())
    }
}

fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// The friends of the current user in the order the data source returned them.
///
/// A [FriendList] only changes by being replaced with the result of a new fetch. Presentation
/// sorts a copy, see [sorted].
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct FriendList {
    records: Vec<FriendRecord>,
}

impl FriendList {
    pub fn new(records: Vec<FriendRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[FriendRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<FriendRecord>> for FriendList {
    fn from(records: Vec<FriendRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<FriendRecord> for FriendList {
    fn from_iter<T: IntoIterator<Item = FriendRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    mod deserialize {
        use anyhow::Result;

        use crate::model::FriendRecord;

        #[test]
        fn camel_case_fields() -> Result<()> {
            let record: FriendRecord = serde_json::from_str(
                r#"{
                    "name": "Jamie Cowhan",
                    "image": "/images/jamie.png",
                    "jobTitle": "Engineer",
                    "companyName": "Acme",
                    "topFriend": true
                }"#,
            )?;
            assert_eq!(
                record,
                FriendRecord {
                    name: Some("Jamie Cowhan".to_string()),
                    image: Some("/images/jamie.png".to_string()),
                    job_title: Some("Engineer".to_string()),
                    company_name: Some("Acme".to_string()),
                    top_friend: true,
                }
            );
            Ok(())
        }

        #[test]
        fn missing_fields_default() -> Result<()> {
            let record: FriendRecord = serde_json::from_str("{}")?;
            assert_eq!(record, FriendRecord::default());
            Ok(())
        }

        #[test]
        fn nulls_are_absent() -> Result<()> {
            let record: FriendRecord = serde_json::from_str(
                r#"{ "name": null, "image": null, "topFriend": null }"#,
            )?;
            assert_eq!(record, FriendRecord::default());
            Ok(())
        }

        #[test]
        fn unknown_fields_ignored() -> Result<()> {
            let record: FriendRecord =
                serde_json::from_str(r#"{ "id": 7, "email": "a@b.c", "name": "Amy" }"#)?;
            assert_eq!(record.name(), Some("Amy"));
            Ok(())
        }

        #[test]
        fn wrong_type_errors() {
            assert!(serde_json::from_str::<FriendRecord>(r#"{ "topFriend": "yes" }"#).is_err());
            assert!(serde_json::from_str::<FriendRecord>(r#"{ "name": 12 }"#).is_err());
        }
    }

    #[test]
    fn empty_image_is_no_image() {
        use crate::model::FriendRecord;

        let record = FriendRecord {
            image: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(record.image(), None);
    }
}
