/// Contact form intents.
#[derive(Debug, Clone)]
pub(crate) enum ContactIntent {
    NameChanged(String),
    EmailChanged(String),
    MessageChanged(String),
    Submit,
    Completed {
        generation: u64,
        result: Result<(), String>,
    },
    Cancel,
}

/// Contact form effects consumed by the app router.
#[derive(Debug, Clone)]
pub(crate) enum ContactEffect {
    Delivered,
    Failed { cause: String },
}

/// Contact event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum ContactEvent {
    Intent(ContactIntent),
    Effect(ContactEffect),
}
