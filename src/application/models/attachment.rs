use crate::resource_kind;

resource_kind! {
    /// A file attached to an entity
    ///
    /// Attachments are read-only here. Those of a job are listed with
    /// `list_scoped("job", job_id, page, per_page)`.
    Attachment {
        segment: "attachment",
        list_key: "attachments",
        capabilities: [Findable, Listable],
        fields: {
            name: str,
            description: str,
            file_type: str,
            content_type: str,
            size: i64,
            created: i64,
            updated: i64,
            category: str,
            purpose: str,
            url: str,
            content_url: str,
            job: value,
            location: value,
            uploaded_by: value,
        }
    }
}
