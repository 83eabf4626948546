use aws_sdk_sesv2::Client as SesClient;
use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};

/// Outbound mail sender. Enabled when `EMAIL_FROM` is set; otherwise a
/// no-op that logs skipped sends. Failures never propagate to callers.
#[derive(Clone)]
pub struct Mailer {
    ses: Option<SesClient>,
    from: String,
}

impl Mailer {
    /// Build from `EMAIL_FROM` / `EMAIL_REGION` env vars. Loads AWS
    /// credentials from the default provider chain.
    pub async fn from_env() -> Self {
        let Ok(from) = std::env::var("EMAIL_FROM") else {
            log::info!("EMAIL_FROM not set — email notifications disabled");
            return Self::disabled();
        };

        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let ses = if let Ok(region) = std::env::var("EMAIL_REGION") {
            let ses_config = aws_config
                .to_builder()
                .region(aws_config::Region::new(region))
                .build();
            SesClient::new(&ses_config)
        } else {
            SesClient::new(&aws_config)
        };

        log::info!("Email notifications enabled (from {from})");
        Self { ses: Some(ses), from }
    }

    pub fn disabled() -> Self {
        Self {
            ses: None,
            from: String::new(),
        }
    }

    /// Send the booking confirmation. Skips silently when disabled and
    /// logs (but swallows) send failures.
    pub async fn send_booking_confirmation(
        &self,
        to: &str,
        room_name: &str,
        start_time: &str,
        end_time: &str,
        no_of_persons: i64,
    ) {
        let Some(ses) = &self.ses else {
            log::debug!("Email disabled, skipping booking confirmation to {to}");
            return;
        };

        if let Err(e) =
            send_confirmation(ses, &self.from, to, room_name, start_time, end_time, no_of_persons)
                .await
        {
            log::error!("Failed to send booking confirmation to {to}: {e}");
        } else {
            log::info!("Booking confirmation sent to {to}");
        }
    }
}

async fn send_confirmation(
    ses: &SesClient,
    from: &str,
    to: &str,
    room_name: &str,
    start_time: &str,
    end_time: &str,
    no_of_persons: i64,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let subject = Content::builder()
        .data(format!("Booking confirmed: {room_name}"))
        .build()?;

    let body_text = format!(
        "Your booking is confirmed.\n\n\
         Room: {room_name}\n\
         From: {start_time}\n\
         To: {end_time}\n\
         Persons: {no_of_persons}\n"
    );

    let body = Body::builder()
        .text(Content::builder().data(body_text).build()?)
        .build();

    let message = Message::builder().subject(subject).body(body).build();

    ses.send_email()
        .from_email_address(from)
        .destination(Destination::builder().to_addresses(to).build())
        .content(EmailContent::builder().simple(message).build())
        .send()
        .await?;

    Ok(())
}
