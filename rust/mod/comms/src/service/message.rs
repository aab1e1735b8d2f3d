use campus_auth::model::Identity;
use campus_core::{ListResult, PageParams, new_id, now_rfc3339};
use campus_groups::GroupOp;
use campus_store::{Value, docs};

use crate::model::{Message, SendMessage};
use crate::service::{CommsError, CommsService};

impl CommsService {
    /// Send a message into a group the caller belongs to.
    ///
    /// The full authorization sequence (admin exclusion, field
    /// validation, membership lookup) runs before anything is written.
    pub fn send_message(
        &self,
        identity: &Identity,
        input: SendMessage,
    ) -> Result<Message, CommsError> {
        let op = GroupOp::Send { has_content: !input.content.is_empty() };
        let (kind, group_id) = self.groups.authorize_group_operation(
            identity,
            op,
            input.group_type.as_deref(),
            input.group_id.as_deref(),
        )?;

        let message = Message {
            id: new_id(),
            sender: identity.id.clone(),
            group_type: kind,
            group_id,
            content: input.content,
            timestamp: now_rfc3339(),
        };
        docs::insert_doc(
            self.store.as_ref(),
            "messages",
            &message.id,
            &[
                ("sender", Value::Text(message.sender.clone())),
                ("group_type", Value::Text(message.group_type.to_string())),
                ("group_id", Value::Text(message.group_id.clone())),
                ("created_at", Value::Text(message.timestamp.clone())),
            ],
            &message,
        )?;
        Ok(message)
    }

    /// List a group's messages, newest first.
    pub fn list_messages(
        &self,
        identity: &Identity,
        group_type: Option<&str>,
        group_id: Option<&str>,
        page: &PageParams,
    ) -> Result<ListResult<Message>, CommsError> {
        let (kind, group_id) =
            self.groups
                .authorize_group_operation(identity, GroupOp::Read, group_type, group_id)?;

        let (items, total) = docs::list_docs(
            self.store.as_ref(),
            "messages",
            &[
                ("group_type", Value::Text(kind.to_string())),
                ("group_id", Value::Text(group_id)),
            ],
            page.limit(),
            page.offset(),
        )?;
        Ok(ListResult { items, total })
    }
}
