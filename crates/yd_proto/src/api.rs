//! Typed request/response payloads, one per API operation.
//! These are the plaintext JSON objects carried inside the envelope
//! `encrypt` field; field names match the platform wire format.

use serde::{Deserialize, Serialize};

// ── Group ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSummary {
    pub id: String,
    pub name: String,
}

/// Payload of `group/list`. The platform omits `groupList` entirely when
/// there are no groups to report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupListResponse {
    #[serde(default, rename = "groupList")]
    pub group_list: Vec<GroupSummary>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateGroupRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGroupResponse {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateGroupRequest {
    pub id: String,
    pub name: String,
}

/// Membership mutation payload for `group/addmember` and `group/delmember`.
#[derive(Debug, Serialize, Deserialize)]
pub struct GroupMembersRequest {
    pub id: String,
    #[serde(rename = "userList")]
    pub user_list: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupInfoResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Member user ids; omitted by the platform for empty groups.
    #[serde(default, rename = "userList")]
    pub user_list: Vec<String>,
}

/// Payload of `group/ismember`. `belong` is omitted for non-members.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IsMemberResponse {
    #[serde(default)]
    pub belong: bool,
}

// ── Media ────────────────────────────────────────────────────────────────────

/// Kind of an uploaded artifact. Anything outside this enumeration is
/// rejected before any network activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    File,
    Image,
    Voice,
    Video,
}

impl FileKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "file" => Some(Self::File),
            "image" => Some(Self::Image),
            "voice" => Some(Self::Voice),
            "video" => Some(Self::Video),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Image => "image",
            Self::Voice => "voice",
            Self::Video => "video",
        }
    }
}

/// Metadata sealed alongside the staged file on upload.
#[derive(Debug, Serialize, Deserialize)]
pub struct MediaUploadMeta {
    #[serde(rename = "type")]
    pub kind: FileKind,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaUploadResponse {
    #[serde(default, rename = "mediaId")]
    pub media_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MediaDownloadRequest {
    #[serde(rename = "mediaId")]
    pub media_id: String,
}

/// Decrypted content of the `Encrypt` response header on download.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaFileMeta {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MediaInfoRequest {
    #[serde(rename = "mediaId")]
    pub media_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaInfoResponse {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_kind_parses_the_fixed_enumeration() {
        assert_eq!(FileKind::parse("file"), Some(FileKind::File));
        assert_eq!(FileKind::parse("image"), Some(FileKind::Image));
        assert_eq!(FileKind::parse("voice"), Some(FileKind::Voice));
        assert_eq!(FileKind::parse("video"), Some(FileKind::Video));
        assert_eq!(FileKind::parse("pdf"), None);
        assert_eq!(FileKind::parse("FILE"), None);
    }

    #[test]
    fn upload_meta_serializes_kind_as_type() {
        let meta = MediaUploadMeta { kind: FileKind::Image, name: "logo.png".into() };
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json, serde_json::json!({"type": "image", "name": "logo.png"}));
    }

    #[test]
    fn defaults_cover_omitted_wire_fields() {
        let list: GroupListResponse = serde_json::from_str("{}").unwrap();
        assert!(list.group_list.is_empty());

        let member: IsMemberResponse = serde_json::from_str("{}").unwrap();
        assert!(!member.belong);

        let upload: MediaUploadResponse = serde_json::from_str("{}").unwrap();
        assert!(upload.media_id.is_empty());

        let info: GroupInfoResponse =
            serde_json::from_str(r#"{"id": "g1", "name": "ops"}"#).unwrap();
        assert!(info.user_list.is_empty());
    }

    #[test]
    fn wire_names_roundtrip() {
        let req = GroupMembersRequest { id: "g1".into(), user_list: vec!["u1".into()] };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"id": "g1", "userList": ["u1"]}));

        let resp: MediaUploadResponse =
            serde_json::from_str(r#"{"mediaId": "m-42"}"#).unwrap();
        assert_eq!(resp.media_id, "m-42");
    }
}
