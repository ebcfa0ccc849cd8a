use crate::resource_kind;

resource_kind! {
    /// A webhook subscription
    Webhook {
        segment: "webhook",
        list_key: "webhooks",
        capabilities: [Findable, Creatable, Listable, Updatable, Deletable],
        fields: {
            hook_url: str,
            enabled: bool,
            confirmed: bool,
            include_changesets: bool,
            entity_events: value,
            created: i64,
            updated: i64,
        }
    }
}
