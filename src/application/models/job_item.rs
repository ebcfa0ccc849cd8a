use crate::resource_kind;

resource_kind! {
    /// A part or labor line used on a job
    JobItem {
        segment: "jobitem",
        list_key: "jobItems",
        capabilities: [Findable, Creatable, Listable, Updatable, Deletable],
        fields: {
            description: str,
            cost: f64,
            used_on: i64,
            created: i64,
            updated: i64,
            job: value,
            lib_item: value,
            vendor: value,
            quantity: f64,
            unit_price: f64,
            total: f64,
            item_type("type"): str,
            notes: str,
        }
    }
}
