use crate::resource_kind;

resource_kind! {
    /// An appointment: a scheduled visit for a job
    Appointment {
        segment: "appointment",
        list_key: "appointments",
        capabilities: [Findable, Creatable, Listable, Updatable, Deletable],
        fields: {
            status: str,
            scheduled_date: value,
            scheduled_time: value,
            duration: i64,
            description: str,
            created: i64,
            updated: i64,
            job: value,
            vendor: value,
            customer: value,
            location: value,
            assigned_to: value,
            assigned_office: value,
            notes: value,
        }
    }
}
