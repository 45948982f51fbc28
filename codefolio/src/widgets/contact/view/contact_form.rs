use iced::widget::{Column, button, column, container, text, text_input};
use iced::{Element, Length};

use crate::shared::ui::style::{accent_button_style, text_input_style};
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::contact::model::{
    ContactViewModel, SENT_NOTICE, SubmitStatus,
};
use crate::widgets::contact::{ContactEvent, ContactIntent};

const TITLE_FONT_SIZE: f32 = 28.0;
const LABEL_FONT_SIZE: f32 = 13.0;
const BODY_FONT_SIZE: f32 = 14.0;
const FORM_MAX_WIDTH: f32 = 560.0;

/// Props for the contact page.
#[derive(Debug, Clone)]
pub(crate) struct ContactFormProps<'a> {
    pub(crate) vm: ContactViewModel,
    pub(crate) mailbox: &'a str,
    pub(crate) theme: ThemeProps<'a>,
}

pub(crate) fn view<'a>(props: ContactFormProps<'a>) -> Element<'a, ContactEvent> {
    let palette = props.theme.palette();
    let sending = props.vm.status.is_sending();
    let fields = props.vm.fields;

    let intro = column![
        text("Get In Touch")
            .size(TITLE_FONT_SIZE)
            .color(palette.bright_foreground),
        text(format!(
            "Have a question or want to work together? Reach me at {} or \
             leave a message below.",
            props.mailbox
        ))
        .size(BODY_FONT_SIZE)
        .color(palette.dim_foreground),
    ]
    .spacing(8);

    let name = labeled(
        "Name",
        input(
            "Your name",
            &fields.name,
            palette,
            sending,
            ContactIntent::NameChanged,
        ),
        palette,
    );
    let email = labeled(
        "Email",
        input(
            "you@example.com",
            &fields.email,
            palette,
            sending,
            ContactIntent::EmailChanged,
        ),
        palette,
    );
    let message = labeled(
        "Message",
        input(
            "What would you like to talk about?",
            &fields.message,
            palette,
            sending,
            ContactIntent::MessageChanged,
        ),
        palette,
    );

    let label = if sending { "Sending..." } else { "Send Message" };
    let submit = button(text(label).size(BODY_FONT_SIZE))
        .padding([8, 20])
        .on_press_maybe(
            (!sending).then_some(ContactEvent::Intent(ContactIntent::Submit)),
        )
        .style(accent_button_style(palette));

    let mut form = Column::new()
        .push(intro)
        .push(name)
        .push(email)
        .push(message)
        .push(submit)
        .spacing(16)
        .max_width(FORM_MAX_WIDTH);

    if let Some(notice) = status_line(&props.vm.status, palette) {
        form = form.push(notice);
    }

    container(form)
        .padding(32)
        .width(Length::Fill)
        .into()
}

fn input<'a>(
    placeholder: &'a str,
    value: &str,
    palette: IcedColorPalette,
    sending: bool,
    on_input: fn(String) -> ContactIntent,
) -> iced::widget::TextInput<'a, ContactEvent> {
    let field = text_input(placeholder, value)
        .size(BODY_FONT_SIZE)
        .padding(8)
        .style(text_input_style(palette));

    if sending {
        field
    } else {
        field
            .on_input(move |value| ContactEvent::Intent(on_input(value)))
            .on_submit(ContactEvent::Intent(ContactIntent::Submit))
    }
}

fn labeled<'a>(
    label: &'a str,
    field: impl Into<Element<'a, ContactEvent>>,
    palette: IcedColorPalette,
) -> Element<'a, ContactEvent> {
    column![
        text(label).size(LABEL_FONT_SIZE).color(palette.dim_foreground),
        field.into(),
    ]
    .spacing(4)
    .into()
}

fn status_line<'a>(
    status: &SubmitStatus,
    palette: IcedColorPalette,
) -> Option<Element<'a, ContactEvent>> {
    let (message, color) = match status {
        SubmitStatus::Idle | SubmitStatus::Sending => return None,
        SubmitStatus::Sent => (String::from(SENT_NOTICE), palette.green),
        SubmitStatus::Failed(message) => (message.clone(), palette.red),
    };

    Some(text(message).size(BODY_FONT_SIZE).color(color).into())
}
