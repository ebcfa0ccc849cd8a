use crate::resource_kind;

resource_kind! {
    /// A request for service, tracked through `open`, `in_progress`, `closed`,
    /// `void` and `canceled`
    ServiceRequest {
        segment: "servicerequest",
        list_key: "serviceRequests",
        capabilities: [Findable, Creatable, Listable, Updatable, Deletable],
        fields: {
            description: str,
            status: str,
            completion_status: str,
            estimated_price: f64,
            duration: i64,
            window_start: i64,
            window_end: i64,
            created: i64,
            updated: i64,
            job: value,
            appointment: value,
            asset: value,
            service_line: value,
            location: value,
            vendor: value,
            customer: value,
            assigned_user: value,
        }
    }
}
