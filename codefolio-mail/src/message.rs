use crate::wire::SendEmailRequest;

/// Notification handed to the mail transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl OutgoingMail {
    /// Build the notification for a contact form submission addressed to
    /// `mailbox`.
    pub fn compose(request: &SendEmailRequest, mailbox: &str) -> Self {
        let name = request.name.trim();
        let email = request.email.trim();
        let message = request.message.trim();

        let text =
            format!("Name: {name}\nEmail: {email}\n\nMessage:\n{message}\n");
        let html = format!(
            "<h3>New Contact Form Submission</h3>\
             <p><strong>Name:</strong> {}</p>\
             <p><strong>Email:</strong> {}</p>\
             <p><strong>Message:</strong></p>\
             <p>{}</p>",
            escape_html(name),
            escape_html(email),
            escape_html(message).replace('\n', "<br>"),
        );

        Self {
            from: email.to_string(),
            to: mailbox.to_string(),
            reply_to: email.to_string(),
            subject: format!("New Contact Form Submission from {name}"),
            text,
            html,
        }
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
