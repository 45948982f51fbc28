pub(crate) const FILL_ALL_FIELDS: &str = "Please fill in all fields.";
pub(crate) const SEND_FAILED: &str =
    "Failed to send message. Please try again.";
pub(crate) const SENT_NOTICE: &str =
    "Message sent successfully! I'll get back to you soon.";

/// Submission status shown under the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

impl SubmitStatus {
    pub(crate) fn is_sending(&self) -> bool {
        matches!(self, SubmitStatus::Sending)
    }
}

/// Form field values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ContactFields {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) message: String,
}

impl ContactFields {
    pub(crate) fn has_blank(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .any(|value| value.trim().is_empty())
    }
}

/// Read-only snapshot for the form view.
#[derive(Debug, Clone)]
pub(crate) struct ContactViewModel {
    pub(crate) fields: ContactFields,
    pub(crate) status: SubmitStatus,
}

#[cfg(test)]
mod tests {
    use super::ContactFields;

    #[test]
    fn given_whitespace_only_field_when_checked_then_form_has_blank() {
        let fields = ContactFields {
            name: String::from("Ada"),
            email: String::from("   "),
            message: String::from("Hi"),
        };
        assert!(fields.has_blank());
    }

    #[test]
    fn given_all_fields_filled_when_checked_then_form_is_complete() {
        let fields = ContactFields {
            name: String::from("Ada"),
            email: String::from("ada@example.com"),
            message: String::from("Hi"),
        };
        assert!(!fields.has_blank());
    }
}
