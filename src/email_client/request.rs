use serde::Serialize;

/// Body of a v3 `mail/send` call.
#[derive(Serialize)]
pub struct EmailRequest<'a> {
    pub personalizations: Vec<Personalization<'a>>,
    pub from: Address<'a>,
    pub subject: &'a str,
    pub content: Vec<Content<'a>>,
}

#[derive(Serialize)]
pub struct Personalization<'a> {
    pub to: Vec<Address<'a>>,
}

#[derive(Serialize)]
pub struct Address<'a> {
    pub email: &'a str,
    pub name: &'a str,
}

#[derive(Serialize)]
pub struct Content<'a> {
    #[serde(rename = "type")]
    pub mime_type: &'a str,
    pub value: &'a str,
}

impl<'a> EmailRequest<'a> {
    const MAIL_NAME: &'a str = "Question Generator";

    pub fn new(
        sender: &'a str,
        recipient: &'a str,
        subject: &'a str,
        html_part: &'a str,
        text_part: &'a str,
    ) -> Self {
        Self {
            personalizations: vec![Personalization {
                to: vec![Address {
                    email: recipient,
                    name: Self::MAIL_NAME,
                }],
            }],
            from: Address {
                email: sender,
                name: Self::MAIL_NAME,
            },
            subject,
            // the plain text part must precede the html one
            content: vec![
                Content {
                    mime_type: "text/plain",
                    value: text_part,
                },
                Content {
                    mime_type: "text/html",
                    value: html_part,
                },
            ],
        }
    }
}
