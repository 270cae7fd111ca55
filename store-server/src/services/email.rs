//! Email rendering and delivery.
//!
//! Two messages leave the server: the verification code sent at
//! registration, and the review request sent when an order is marked
//! delivered. Delivery goes through the [`EmailTransport`] trait; the
//! default [`LoggingTransport`] writes the message to the log, which is
//! enough for development and keeps tests hermetic.

use std::fmt::Write as _;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::db::models::Order;
use crate::utils::{AppError, AppResult};

/// A rendered message ready for delivery.
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Delivery seam. Production would put an SMTP client behind this.
#[async_trait]
pub trait EmailTransport: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> AppResult<()>;
}

/// Logs outgoing mail instead of delivering it.
pub struct LoggingTransport;

#[async_trait]
impl EmailTransport for LoggingTransport {
    async fn send(&self, email: &OutgoingEmail) -> AppResult<()> {
        info!(
            to = %email.to,
            subject = %email.subject,
            "outgoing email:\n{}",
            email.text
        );
        Ok(())
    }
}

pub struct EmailService {
    transport: Arc<dyn EmailTransport>,
    from: String,
    site_name: String,
    public_url: String,
}

impl EmailService {
    pub fn new(
        transport: Arc<dyn EmailTransport>,
        from: String,
        site_name: String,
        public_url: String,
    ) -> Self {
        Self {
            transport,
            from,
            site_name,
            public_url,
        }
    }

    /// Send the 6-digit verification code issued at registration.
    pub async fn send_verification_code(&self, to: &str, code: &str) -> AppResult<()> {
        let html = format!(
            "<p>Hello,</p>\n\
             <p>Thank you for registering! Please verify your email by using the code below:</p>\n\
             <h2>{code}</h2>\n\
             <p>If you did not register, please ignore this email.</p>"
        );
        let text = format!(
            "Hello,\n\n\
             Thank you for registering! Please verify your email by using the code below:\n\n\
             {code}\n\n\
             If you did not register, please ignore this email."
        );
        let email = OutgoingEmail {
            to: to.to_string(),
            from: self.from.clone(),
            subject: "Verify Your Email".to_string(),
            html,
            text,
        };
        self.transport.send(&email).await
    }

    /// Ask the customer to review a delivered order, one block per line
    /// item with a deep link into the review form.
    pub async fn send_review_request(&self, order: &Order) -> AppResult<()> {
        if order.items.is_empty() {
            return Err(AppError::invalid("Order has no items to review"));
        }

        let email = OutgoingEmail {
            to: order.customer.email.clone(),
            from: self.from.clone(),
            subject: format!(
                "Review your {} purchase(s) from order {}",
                order.items.len(),
                order.order_id
            ),
            html: self.render_review_html(order),
            text: self.render_review_text(order),
        };
        self.transport.send(&email).await
    }

    fn review_link(&self, order: &Order, product: &str) -> String {
        format!(
            "{}/review?user={}&order={}&product={}",
            self.public_url, order.customer.email, order.order_id, product
        )
    }

    fn render_review_html(&self, order: &Order) -> String {
        let mut cards = String::new();
        for item in &order.items {
            let mut details = format!(
                "<h4 style=\"margin:0;\">{}</h4>\n\
                 <p style=\"margin:4px 0;\">Quantity: {}</p>\n\
                 <p style=\"margin:4px 0;\">Price: {}</p>",
                item.product, item.quantity, item.price
            );
            if let Some(color) = &item.color {
                let _ = write!(details, "\n<p style=\"margin:4px 0;\">Color: {color}</p>");
            }
            if let Some(size) = &item.size {
                let _ = write!(details, "\n<p style=\"margin:4px 0;\">Size: {size}</p>");
            }
            let _ = write!(
                cards,
                "<div class=\"product-card\">\n\
                 <div>{details}</div>\n\
                 <a href=\"{link}\" class=\"button\">Review This Item</a>\n\
                 </div>\n",
                details = details,
                link = self.review_link(order, &item.product),
            );
        }

        format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head>\n\
             <style>\n\
             body {{ font-family: Arial, sans-serif; line-height: 1.6; }}\n\
             .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}\n\
             .header {{ background-color: #f8f9fa; padding: 20px; text-align: center; }}\n\
             .product-card {{ border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px; margin-bottom: 16px; }}\n\
             .button {{ display: inline-block; padding: 10px 20px; background-color: #171717; color: white; text-decoration: none; border-radius: 4px; margin-top: 10px; }}\n\
             </style>\n\
             </head>\n\
             <body>\n\
             <div class=\"container\">\n\
             <div class=\"header\">\n\
             <h1>How was your order?</h1>\n\
             <p>Order #{order_id}</p>\n\
             </div>\n\
             <p>Hello {name},</p>\n\
             <p>We hope you're enjoying your recent purchases! Please take a moment to review each item below.</p>\n\
             <h3>Your Purchases:</h3>\n\
             {cards}\
             <p>Your feedback helps us improve and helps other shoppers make informed decisions.</p>\n\
             </div>\n\
             </body>\n\
             </html>",
            order_id = order.order_id,
            name = order.customer.name,
        )
    }

    fn render_review_text(&self, order: &Order) -> String {
        let mut body = format!(
            "How was your order {}, {}?\n\n\
             We hope you're enjoying your recent purchases. Please review each item:\n\n",
            order.order_id, order.customer.name
        );
        for item in &order.items {
            let _ = write!(
                body,
                "- {}x {} ({})\n  Review: {}\n",
                item.quantity,
                item.product,
                item.price,
                self.review_link(order, &item.product),
            );
        }
        let _ = write!(
            body,
            "\nThank you for your feedback!\nThe {} Team",
            self.site_name
        );
        body
    }
}
