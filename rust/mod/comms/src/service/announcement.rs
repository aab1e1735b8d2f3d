use campus_auth::model::Identity;
use campus_core::{ListResult, PageParams, new_id, now_rfc3339};
use campus_groups::model::GroupKind;
use campus_store::{Value, docs};

use crate::model::{Announcement, PostAnnouncement};
use crate::service::{CommsError, CommsService};

impl CommsService {
    /// Post an announcement into a group the author belongs to. The
    /// route gate restricts this to teaching staff; membership is
    /// checked here.
    pub fn post_announcement(
        &self,
        identity: &Identity,
        input: PostAnnouncement,
    ) -> Result<Announcement, CommsError> {
        const MISSING: &str = "Please provide groupType, groupId, title and content";
        let group_type = input.group_type.as_deref().filter(|s| !s.is_empty());
        let group_id = input.group_id.as_deref().filter(|s| !s.is_empty());
        let (Some(group_type), Some(group_id)) = (group_type, group_id) else {
            return Err(CommsError::Validation(MISSING.into()));
        };
        if input.title.is_empty() || input.content.is_empty() {
            return Err(CommsError::Validation(MISSING.into()));
        }

        let denied = || {
            CommsError::Forbidden(
                "You do not have permission to post announcements in this group".into(),
            )
        };
        let Ok(kind) = group_type.parse::<GroupKind>() else {
            return Err(denied());
        };
        if !self.groups.has_access(identity, kind, group_id)? {
            return Err(denied());
        }

        let announcement = Announcement {
            id: new_id(),
            author: identity.id.clone(),
            group_type: kind,
            group_id: group_id.to_string(),
            title: input.title,
            content: input.content,
            created_at: now_rfc3339(),
        };
        docs::insert_doc(
            self.store.as_ref(),
            "announcements",
            &announcement.id,
            &[
                ("author", Value::Text(announcement.author.clone())),
                ("group_type", Value::Text(announcement.group_type.to_string())),
                ("group_id", Value::Text(announcement.group_id.clone())),
                ("created_at", Value::Text(announcement.created_at.clone())),
            ],
            &announcement,
        )?;
        Ok(announcement)
    }

    /// List a group's announcements, newest first. Same membership rule
    /// as reading messages.
    pub fn list_announcements(
        &self,
        identity: &Identity,
        group_type: Option<&str>,
        group_id: Option<&str>,
        page: &PageParams,
    ) -> Result<ListResult<Announcement>, CommsError> {
        let group_type = group_type.filter(|s| !s.is_empty());
        let group_id = group_id.filter(|s| !s.is_empty());
        let (Some(group_type), Some(group_id)) = (group_type, group_id) else {
            return Err(CommsError::Validation("Please provide groupType and groupId".into()));
        };

        let denied = || {
            CommsError::Forbidden(
                "You do not have permission to read announcements from this group".into(),
            )
        };
        let Ok(kind) = group_type.parse::<GroupKind>() else {
            return Err(denied());
        };
        if !self.groups.has_access(identity, kind, group_id)? {
            return Err(denied());
        }

        let (items, total) = docs::list_docs(
            self.store.as_ref(),
            "announcements",
            &[
                ("group_type", Value::Text(kind.to_string())),
                ("group_id", Value::Text(group_id.to_string())),
            ],
            page.limit(),
            page.offset(),
        )?;
        Ok(ListResult { items, total })
    }
}

#[cfg(test)]
mod tests {
    use campus_core::PageParams;

    use crate::model::PostAnnouncement;
    use crate::service::CommsError;
    use crate::service::testutil::TestCampus;

    fn post_input(group_id: &str, title: &str) -> PostAnnouncement {
        PostAnnouncement {
            group_type: Some("Department".into()),
            group_id: Some(group_id.into()),
            title: title.into(),
            content: "details inside".into(),
        }
    }

    #[test]
    fn test_member_posts_and_students_read() {
        let campus = TestCampus::new();
        campus
            .comms
            .post_announcement(&campus.faculty, post_input(&campus.dept_id, "Exam schedule"))
            .unwrap();

        let listed = campus
            .comms
            .list_announcements(
                &campus.student,
                Some("Department"),
                Some(&campus.dept_id),
                &PageParams::default(),
            )
            .unwrap();
        assert_eq!(listed.total, 1);
        assert_eq!(listed.items[0].title, "Exam schedule");
        assert_eq!(listed.items[0].author, campus.faculty.id);
    }

    #[test]
    fn test_non_member_cannot_post() {
        let campus = TestCampus::new();
        let err = campus
            .comms
            .post_announcement(&campus.outsider, post_input(&campus.dept_id, "Exam schedule"))
            .unwrap_err();
        match err {
            CommsError::Forbidden(reason) => {
                assert_eq!(
                    reason,
                    "You do not have permission to post announcements in this group"
                );
            }
            other => panic!("expected Forbidden, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_title_rejected() {
        let campus = TestCampus::new();
        let err = campus
            .comms
            .post_announcement(&campus.faculty, post_input(&campus.dept_id, ""))
            .unwrap_err();
        match err {
            CommsError::Validation(reason) => {
                assert_eq!(reason, "Please provide groupType, groupId, title and content");
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_read_requires_membership() {
        let campus = TestCampus::new();
        let err = campus
            .comms
            .list_announcements(
                &campus.outsider,
                Some("Department"),
                Some(&campus.dept_id),
                &PageParams::default(),
            )
            .unwrap_err();
        assert!(matches!(err, CommsError::Forbidden(_)));
    }
}
