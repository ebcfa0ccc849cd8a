use crate::resource_kind;

resource_kind! {
    /// A service line, the trade a piece of work belongs to
    ServiceLine {
        segment: "serviceline",
        list_key: "servicelines",
        capabilities: [Findable, Listable],
        fields: {
            name: str,
            trade: str,
            abbr: str,
            icon: str,
        }
    }
}
