use campus_auth::model::{Identity, Role};
use campus_core::{ListResult, PageParams, new_id, now_rfc3339};
use campus_store::{Value, docs};

use crate::model::{Audience, Circular, PostCircular};
use crate::service::{CommsError, CommsService};

impl CommsService {
    /// Publish a circular. The route gate restricts this to principals
    /// and admins.
    pub fn publish_circular(
        &self,
        identity: &Identity,
        input: PostCircular,
    ) -> Result<Circular, CommsError> {
        let audience_raw = input.audience.as_deref().filter(|s| !s.is_empty());
        let Some(audience_raw) = audience_raw else {
            return Err(CommsError::Validation(
                "Please provide title, body and audience".into(),
            ));
        };
        if input.title.is_empty() || input.body.is_empty() {
            return Err(CommsError::Validation(
                "Please provide title, body and audience".into(),
            ));
        }
        let audience = audience_raw.parse::<Audience>().map_err(|_| {
            CommsError::Validation(format!("Audience ({audience_raw}) is not valid"))
        })?;

        let circular = Circular {
            id: new_id(),
            author: identity.id.clone(),
            title: input.title,
            body: input.body,
            audience,
            created_at: now_rfc3339(),
        };
        docs::insert_doc(
            self.store.as_ref(),
            "circulars",
            &circular.id,
            &[
                ("author", Value::Text(circular.author.clone())),
                ("audience", Value::Text(circular.audience.to_string())),
                ("created_at", Value::Text(circular.created_at.clone())),
            ],
            &circular,
        )?;
        Ok(circular)
    }

    /// List circulars visible to the caller, newest first. Students see
    /// `all` and `students`; staff roles see `all` and `staff`; admins
    /// see everything.
    pub fn list_circulars(
        &self,
        identity: &Identity,
        page: &PageParams,
    ) -> Result<ListResult<Circular>, CommsError> {
        let audiences: &[&str] = match identity.role {
            Role::Admin => &[],
            Role::Student => &["all", "students"],
            Role::Faculty | Role::Hod | Role::Principal => &["all", "staff"],
        };
        let (filter, params) = if audiences.is_empty() {
            (String::new(), Vec::new())
        } else {
            let placeholders: Vec<String> =
                (1..=audiences.len()).map(|i| format!("?{i}")).collect();
            let params: Vec<Value> = audiences
                .iter()
                .map(|a| Value::Text((*a).to_string()))
                .collect();
            (format!(" WHERE audience IN ({})", placeholders.join(", ")), params)
        };

        let count_sql = format!("SELECT COUNT(*) AS n FROM circulars{filter}");
        let total = self
            .store
            .query(&count_sql, &params)?
            .first()
            .and_then(|r| r.get_i64("n"))
            .unwrap_or(0) as usize;

        let sql = format!(
            "SELECT data FROM circulars{filter} ORDER BY created_at DESC LIMIT {} OFFSET {}",
            page.limit(),
            page.offset()
        );
        let rows = self.store.query(&sql, &params)?;
        let mut items = Vec::with_capacity(rows.len());
        for row in &rows {
            if let Some(data) = row.get_str("data") {
                let circular: Circular = serde_json::from_str(data)
                    .map_err(|e| CommsError::Internal(e.to_string()))?;
                items.push(circular);
            }
        }
        Ok(ListResult { items, total })
    }
}
