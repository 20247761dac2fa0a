//! Group resource client.
//!
//! Read-only operations go out as plain query parameters; mutations carry
//! the `{buin, appId, encrypt}` envelope. Every call is a single round trip.

use tracing::debug;

use yd_proto::api::{
    CreateGroupRequest, CreateGroupResponse, GroupInfoResponse, GroupListResponse,
    GroupMembersRequest, GroupSummary, IsMemberResponse, UpdateGroupRequest,
};

use crate::app::App;
use crate::error::Result;

pub struct Group {
    app: App,
}

impl Group {
    pub(crate) fn new(app: App) -> Self {
        Self { app }
    }

    /// List groups, optionally only those the given user belongs to.
    /// A payload without `groupList` is an empty listing, not an error.
    pub async fn list(&self, user_id: Option<&str>) -> Result<Vec<GroupSummary>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(user_id) = user_id {
            query.push(("userId", user_id.to_string()));
        }
        let resp = self
            .app
            .transport()
            .get(&self.app.build_url("/cgi/group/list"), &query)
            .await?;
        let payload: GroupListResponse = self.app.open_response(&resp)?;
        Ok(payload.group_list)
    }

    /// Create a group, returning its platform-assigned id.
    pub async fn create(&self, name: &str) -> Result<String> {
        let encrypt = self.app.seal(&CreateGroupRequest { name: name.to_string() })?;
        let resp = self
            .app
            .transport()
            .post_form(&self.app.build_url("/cgi/group/create"), &self.app.request_form(encrypt))
            .await?;
        let payload: CreateGroupResponse = self.app.open_response(&resp)?;
        debug!(target: "yd_client", event = "group_created", id = %payload.id);
        Ok(payload.id)
    }

    /// Delete a group. Success carries no payload by design, so there is
    /// nothing to decrypt; the errcode alone decides.
    pub async fn delete(&self, group_id: &str) -> Result<()> {
        let query = [("groupId", group_id.to_string())];
        let resp = self
            .app
            .transport()
            .get(&self.app.build_url("/cgi/group/delete"), &query)
            .await?;
        App::ensure_ok(&resp)?;
        debug!(target: "yd_client", event = "group_deleted", id = %group_id);
        Ok(())
    }

    /// Rename a group.
    pub async fn update(&self, group_id: &str, name: &str) -> Result<()> {
        let encrypt = self.app.seal(&UpdateGroupRequest {
            id: group_id.to_string(),
            name: name.to_string(),
        })?;
        let resp = self
            .app
            .transport()
            .post_form(&self.app.build_url("/cgi/group/update"), &self.app.request_form(encrypt))
            .await?;
        App::ensure_ok(&resp)
    }

    /// Full group detail.
    pub async fn info(&self, group_id: &str) -> Result<GroupInfoResponse> {
        let query = [("id", group_id.to_string())];
        let resp = self
            .app
            .transport()
            .get(&self.app.build_url("/cgi/group/info"), &query)
            .await?;
        self.app.open_response(&resp)
    }

    /// Add members to a group.
    pub async fn add_member(&self, group_id: &str, members: &[String]) -> Result<()> {
        self.change_members("/cgi/group/addmember", group_id, members).await
    }

    /// Remove members from a group.
    pub async fn del_member(&self, group_id: &str, members: &[String]) -> Result<()> {
        self.change_members("/cgi/group/delmember", group_id, members).await
    }

    async fn change_members(&self, path: &str, group_id: &str, members: &[String]) -> Result<()> {
        let encrypt = self.app.seal(&GroupMembersRequest {
            id: group_id.to_string(),
            user_list: members.to_vec(),
        })?;
        let resp = self
            .app
            .transport()
            .post_form(&self.app.build_url(path), &self.app.request_form(encrypt))
            .await?;
        App::ensure_ok(&resp)
    }

    /// Whether `user_id` belongs to the group. A payload without `belong`
    /// means no.
    pub async fn is_member(&self, group_id: &str, user_id: &str) -> Result<bool> {
        let query = [("id", group_id.to_string()), ("userId", user_id.to_string())];
        let resp = self
            .app
            .transport()
            .get(&self.app.build_url("/cgi/group/ismember"), &query)
            .await?;
        let payload: IsMemberResponse = self.app.open_response(&resp)?;
        Ok(payload.belong)
    }
}
