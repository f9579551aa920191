use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// The directory view of a student, as supplied by the student directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub class_name: Option<String>,
    /// Missing or unparseable dates of birth are treated as age 0.
    #[serde(default, deserialize_with = "lenient_date")]
    #[ts(type = "string | null")]
    pub date_of_birth: Option<jiff::civil::Date>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StaffMember {
    pub id: Uuid,
    pub name: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Text(String),
    Other(IgnoredAny),
}

/// Accept `YYYY-MM-DD` or any string starting with it. Anything else,
/// including non-string values, is `None`.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<jiff::civil::Date>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawDate> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawDate::Text(s)) => {
            let s = s.trim();
            s.get(..10).unwrap_or(s).parse().ok()
        }
        Some(RawDate::Other(_)) | None => None,
    })
}
