use iced::task::Handle;

use super::model::{
    ContactFields, FILL_ALL_FIELDS, SEND_FAILED, SubmitStatus,
};

/// Outcome of a submit request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum SubmitDecision {
    Ignored,
    Invalid,
    Start { generation: u64 },
}

/// Form values, status, and the in-flight request handle.
#[derive(Default)]
pub(super) struct ContactState {
    fields: ContactFields,
    status: SubmitStatus,
    generation: u64,
    request: Option<Handle>,
}

impl ContactState {
    pub(super) fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub(super) fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub(super) fn generation(&self) -> u64 {
        self.generation
    }

    pub(super) fn edit(&mut self, update: impl FnOnce(&mut ContactFields)) {
        update(&mut self.fields);
        if matches!(self.status, SubmitStatus::Sent | SubmitStatus::Failed(_)) {
            self.status = SubmitStatus::Idle;
        }
    }

    pub(super) fn begin_submit(&mut self) -> SubmitDecision {
        if self.status.is_sending() {
            return SubmitDecision::Ignored;
        }
        if self.fields.has_blank() {
            self.status = SubmitStatus::Failed(String::from(FILL_ALL_FIELDS));
            return SubmitDecision::Invalid;
        }

        self.status = SubmitStatus::Sending;
        self.generation = self.generation.wrapping_add(1);
        SubmitDecision::Start {
            generation: self.generation,
        }
    }

    pub(super) fn set_request(&mut self, handle: Handle) {
        self.request = Some(handle);
    }

    /// Apply a finished request. Returns `false` when the result is stale.
    pub(super) fn complete(
        &mut self,
        generation: u64,
        result: &Result<(), String>,
    ) -> bool {
        if generation != self.generation || !self.status.is_sending() {
            return false;
        }
        self.request = None;

        match result {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.status = SubmitStatus::Sent;
            },
            Err(_) => {
                self.status = SubmitStatus::Failed(String::from(SEND_FAILED));
            },
        }
        true
    }

    /// Abort the in-flight request. Returns `true` if one was pending.
    pub(super) fn cancel(&mut self) -> bool {
        if let Some(handle) = self.request.take() {
            handle.abort();
        }
        if !self.status.is_sending() {
            return false;
        }

        self.generation = self.generation.wrapping_add(1);
        self.status = SubmitStatus::Idle;
        true
    }
}
