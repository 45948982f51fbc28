use codefolio_mail::SendEmailRequest;
use iced::Task;

use super::client::ContactClient;
use super::event::{ContactEffect, ContactEvent, ContactIntent};
use super::state::{ContactState, SubmitDecision};

/// Read-only context for contact form reduction.
pub(crate) struct ContactCtx<'a> {
    pub(crate) client: &'a ContactClient,
}

/// Reduce a contact intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut ContactState,
    event: ContactIntent,
    ctx: &ContactCtx<'_>,
) -> Task<ContactEvent> {
    match event {
        ContactIntent::NameChanged(value) => {
            state.edit(|fields| fields.name = value);
            Task::none()
        },
        ContactIntent::EmailChanged(value) => {
            state.edit(|fields| fields.email = value);
            Task::none()
        },
        ContactIntent::MessageChanged(value) => {
            state.edit(|fields| fields.message = value);
            Task::none()
        },
        ContactIntent::Submit => submit(state, ctx),
        ContactIntent::Completed { generation, result } => {
            if !state.complete(generation, &result) {
                return Task::none();
            }
            let effect = match result {
                Ok(()) => ContactEffect::Delivered,
                Err(cause) => ContactEffect::Failed { cause },
            };
            Task::done(ContactEvent::Effect(effect))
        },
        ContactIntent::Cancel => {
            if state.cancel() {
                log::debug!("contact submission cancelled");
            }
            Task::none()
        },
    }
}

fn submit(state: &mut ContactState, ctx: &ContactCtx<'_>) -> Task<ContactEvent> {
    let generation = match state.begin_submit() {
        SubmitDecision::Start { generation } => generation,
        SubmitDecision::Ignored | SubmitDecision::Invalid => {
            return Task::none();
        },
    };

    let fields = state.fields();
    let request = SendEmailRequest {
        name: fields.name.trim().to_string(),
        email: fields.email.trim().to_string(),
        message: fields.message.trim().to_string(),
    };
    let client = ctx.client.clone();

    let (task, handle) = Task::perform(
        async move { client.send(&request).await.map_err(|err| err.to_string()) },
        move |result| {
            ContactEvent::Intent(ContactIntent::Completed { generation, result })
        },
    )
    .abortable();
    state.set_request(handle);
    task
}

#[cfg(test)]
mod tests {
    use super::{ContactCtx, reduce};
    use crate::widgets::contact::ContactIntent;
    use crate::widgets::contact::client::ContactClient;
    use crate::widgets::contact::model::{
        FILL_ALL_FIELDS, SEND_FAILED, SubmitStatus,
    };
    use crate::widgets::contact::state::ContactState;

    fn client() -> ContactClient {
        ContactClient::new("http://127.0.0.1:9")
    }

    fn filled(client: &ContactClient) -> ContactState {
        let mut state = ContactState::default();
        let ctx = ContactCtx { client };
        for intent in [
            ContactIntent::NameChanged(String::from("Ada")),
            ContactIntent::EmailChanged(String::from("ada@example.com")),
            ContactIntent::MessageChanged(String::from("Hello")),
        ] {
            let _task = reduce(&mut state, intent, &ctx);
        }
        state
    }

    #[test]
    fn given_blank_field_when_submitted_then_fill_all_fields_is_shown() {
        let client = client();
        let ctx = ContactCtx { client: &client };
        let mut state = ContactState::default();
        let _task = reduce(
            &mut state,
            ContactIntent::NameChanged(String::from("Ada")),
            &ctx,
        );

        let _task = reduce(&mut state, ContactIntent::Submit, &ctx);

        assert_eq!(
            state.status(),
            &SubmitStatus::Failed(String::from(FILL_ALL_FIELDS))
        );
        assert_eq!(state.generation(), 0);
    }

    #[test]
    fn given_filled_form_when_submitted_then_status_is_sending() {
        let client = client();
        let ctx = ContactCtx { client: &client };
        let mut state = filled(&client);

        let _task = reduce(&mut state, ContactIntent::Submit, &ctx);

        assert_eq!(state.status(), &SubmitStatus::Sending);
        assert_eq!(state.generation(), 1);
    }

    #[test]
    fn given_sending_form_when_submitted_again_then_request_is_not_restarted() {
        let client = client();
        let ctx = ContactCtx { client: &client };
        let mut state = filled(&client);
        let _task = reduce(&mut state, ContactIntent::Submit, &ctx);

        let _task = reduce(&mut state, ContactIntent::Submit, &ctx);

        assert_eq!(state.generation(), 1);
    }

    #[test]
    fn given_successful_completion_when_applied_then_fields_clear_and_sent() {
        let client = client();
        let ctx = ContactCtx { client: &client };
        let mut state = filled(&client);
        let _task = reduce(&mut state, ContactIntent::Submit, &ctx);

        let _task = reduce(
            &mut state,
            ContactIntent::Completed {
                generation: 1,
                result: Ok(()),
            },
            &ctx,
        );

        assert_eq!(state.status(), &SubmitStatus::Sent);
        assert!(state.fields().name.is_empty());
        assert!(state.fields().email.is_empty());
        assert!(state.fields().message.is_empty());
    }

    #[test]
    fn given_failed_completion_when_applied_then_fields_are_kept() {
        let client = client();
        let ctx = ContactCtx { client: &client };
        let mut state = filled(&client);
        let _task = reduce(&mut state, ContactIntent::Submit, &ctx);

        let _task = reduce(
            &mut state,
            ContactIntent::Completed {
                generation: 1,
                result: Err(String::from("relay down")),
            },
            &ctx,
        );

        assert_eq!(
            state.status(),
            &SubmitStatus::Failed(String::from(SEND_FAILED))
        );
        assert_eq!(state.fields().name, "Ada");
    }

    #[test]
    fn given_cancelled_submission_when_late_result_arrives_then_it_is_ignored() {
        let client = client();
        let ctx = ContactCtx { client: &client };
        let mut state = filled(&client);
        let _task = reduce(&mut state, ContactIntent::Submit, &ctx);

        let _task = reduce(&mut state, ContactIntent::Cancel, &ctx);
        let _task = reduce(
            &mut state,
            ContactIntent::Completed {
                generation: 1,
                result: Ok(()),
            },
            &ctx,
        );

        assert_eq!(state.status(), &SubmitStatus::Idle);
        assert_eq!(state.fields().name, "Ada");
    }

    #[test]
    fn given_failed_status_when_field_edited_then_status_returns_to_idle() {
        let client = client();
        let ctx = ContactCtx { client: &client };
        let mut state = ContactState::default();
        let _task = reduce(&mut state, ContactIntent::Submit, &ctx);

        let _task = reduce(
            &mut state,
            ContactIntent::MessageChanged(String::from("Hi")),
            &ctx,
        );

        assert_eq!(state.status(), &SubmitStatus::Idle);
    }
}
