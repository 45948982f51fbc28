use std::sync::Arc;

use anyhow::Context;
use codefolio_mail::{MailConfig, RelayState, SmtpRelay, serve};
use env_logger::Env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config =
        MailConfig::from_env().context("failed to read relay configuration")?;
    log::info!(
        "relaying contact submissions to {} via {}:{}",
        config.user,
        config.smtp_host,
        config.smtp_port
    );

    let relay =
        SmtpRelay::new(&config).context("failed to set up SMTP transport")?;
    let state = RelayState::new(Arc::new(relay), config.user.clone());

    serve(config.bind, state)
        .await
        .with_context(|| format!("mail relay on {} stopped", config.bind))
}
