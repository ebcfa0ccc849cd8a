use crate::resource_kind;

resource_kind! {
    /// An entry of the parts and services catalog
    LibItem {
        segment: "libitem",
        list_key: "libItems",
        capabilities: [Findable, Creatable, Listable, Updatable, Deletable],
        fields: {
            name: str,
            item_type("type"): str,
            code: str,
            is_generic: bool,
            created: i64,
            updated: i64,
        }
    }
}
