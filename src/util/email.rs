use crate::config::{EmailConfig, ConfigError};
use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{header::ContentType, Mailbox, MultiPart, SinglePart},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
};
use tracing::{error, info, instrument};

/// Email service errors
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    
    #[error("SMTP error: {0}")]
    SmtpError(String),
    
    #[error("Message building error: {0}")]
    MessageError(String),
    
    #[error("Address error: {0}")]
    AddressError(String),
}

impl From<ConfigError> for EmailError {
    fn from(err: ConfigError) -> Self {
        EmailError::ConfigError(err.to_string())
    }
}

/// Email message builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub text_body: Option<String>,
    pub html_body: Option<String>,
}

impl EmailMessage {
    pub fn new(from: String, to: String, subject: String) -> Self {
        Self {
            from,
            to,
            reply_to: None,
            subject,
            text_body: None,
            html_body: None,
        }
    }

    pub fn with_reply_to(mut self, reply_to: String) -> Self {
        self.reply_to = Some(reply_to);
        self
    }

    pub fn with_text_body(mut self, body: String) -> Self {
        self.text_body = Some(body);
        self
    }

    pub fn with_html_body(mut self, body: String) -> Self {
        self.html_body = Some(body);
        self
    }

    /// Build the MIME message
    pub fn to_mime(&self) -> Result<Message, EmailError> {
        let from_mailbox: Mailbox = self.from
            .parse()
            .map_err(|e| EmailError::AddressError(format!("Invalid from address: {}", e)))?;

        let to_mailbox: Mailbox = self.to
            .parse()
            .map_err(|e| EmailError::AddressError(format!("Invalid to address: {}", e)))?;

        let mut message_builder = Message::builder()
            .from(from_mailbox)
            .to(to_mailbox)
            .subject(&self.subject);

        // A reply-to the relay would reject is dropped rather than failing the send
        if let Some(reply_to) = self.reply_to.as_deref().and_then(|r| r.parse::<Mailbox>().ok()) {
            message_builder = message_builder.reply_to(reply_to);
        }

        match (&self.text_body, &self.html_body) {
            (Some(text), Some(html)) => message_builder
                .multipart(
                    MultiPart::alternative()
                        .singlepart(
                            SinglePart::builder()
                                .header(ContentType::TEXT_PLAIN)
                                .body(text.clone()),
                        )
                        .singlepart(
                            SinglePart::builder()
                                .header(ContentType::TEXT_HTML)
                                .body(html.clone()),
                        ),
                )
                .map_err(|e| EmailError::MessageError(format!("Failed to build multipart message: {}", e))),
            (Some(text), None) => message_builder
                .body(text.clone())
                .map_err(|e| EmailError::MessageError(format!("Failed to build text message: {}", e))),
            (None, Some(html)) => message_builder
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(html.clone()),
                )
                .map_err(|e| EmailError::MessageError(format!("Failed to build HTML message: {}", e))),
            (None, None) => Err(EmailError::MessageError("No message body provided".to_string())),
        }
    }
}

/// Anything that can deliver an [`EmailMessage`].
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, message: EmailMessage) -> Result<(), EmailError>;
}

/// SMTP email service implementation
pub struct SmtpEmailService {
    pub config: EmailConfig,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpEmailService {
    /// Create a new SMTP email service
    #[instrument(skip(config), fields(host = %config.smtp_host, port = config.smtp_port))]
    pub fn new(config: EmailConfig) -> Result<Self, EmailError> {
        info!("Initializing SMTP email service");
        
        config.validate().map_err(EmailError::from)?;

        let mut transport_builder = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
            .port(config.smtp_port)
            .timeout(Some(std::time::Duration::from_secs(config.connection_timeout_secs)));

        // Configure TLS settings
        if config.use_tls {
            let tls_parameters = TlsParameters::new(config.smtp_host.clone())
                .map_err(|e| EmailError::ConfigError(format!("TLS configuration error: {}", e)))?;
            
            if config.use_starttls {
                transport_builder = transport_builder.tls(Tls::Required(tls_parameters));
            } else {
                transport_builder = transport_builder.tls(Tls::Wrapper(tls_parameters));
            }
        } else {
            transport_builder = transport_builder.tls(Tls::None);
        }

        if let (Some(username), Some(password)) = (&config.smtp_username, &config.smtp_password) {
            transport_builder = transport_builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        let transport = transport_builder.build();

        info!("SMTP email service initialized successfully");
        Ok(Self { config, transport })
    }
}

#[async_trait]
impl EmailSender for SmtpEmailService {
    #[instrument(skip(self, message), fields(to = %message.to, subject = %message.subject))]
    async fn send_email(&self, message: EmailMessage) -> Result<(), EmailError> {
        info!("Sending email to: {}", message.to);

        let email_message = message.to_mime()?;

        self.transport
            .send(email_message)
            .await
            .map_err(|e| {
                error!("Failed to send email: {}", e);
                EmailError::SmtpError(format!("Failed to send email: {}", e))
            })?;

        info!("Email sent successfully");
        Ok(())
    }
}
