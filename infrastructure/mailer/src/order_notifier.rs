use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use business::domain::kitchen::errors::NotificationError;
use business::domain::kitchen::services::OrderNotifier;

use crate::client::MailerClient;

const ORDER_READY_SUBJECT: &str = "¡Tu pedido está listo para recoger!";

#[derive(Debug, Serialize, PartialEq)]
struct EmailMessage {
    from: String,
    to: Vec<String>,
    subject: String,
    html: String,
}

/// Sends the "ready for pickup" e-mail through the HTTP mail API.
pub struct HttpOrderNotifier {
    client: MailerClient,
}

impl HttpOrderNotifier {
    pub fn new(client: MailerClient) -> Self {
        Self { client }
    }

    fn build_message(from: &str, email: &str, order_id: Uuid) -> EmailMessage {
        let html = format!(
            "<h1>¡Tu pedido está listo!</h1>\
             <p>Hola,</p>\
             <p>Tu pedido con el número <strong>#{}</strong> ya está listo para ser recogido en la cafetería.</p>\
             <p>¡Gracias por tu compra!</p>",
            order_id
        );

        EmailMessage {
            from: from.to_string(),
            to: vec![email.to_string()],
            subject: ORDER_READY_SUBJECT.to_string(),
            html,
        }
    }
}

#[async_trait]
impl OrderNotifier for HttpOrderNotifier {
    async fn notify_order_ready(&self, email: &str, order_id: Uuid) -> Result<(), NotificationError> {
        let message = Self::build_message(&self.client.from_address, email, order_id);

        let response = self
            .client
            .client
            .post(self.client.send_url())
            .header("Authorization", self.client.auth_header())
            .json(&message)
            .send()
            .await
            .map_err(|e| NotificationError::DeliveryFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(NotificationError::DeliveryFailed(format!(
                "mail API answered {}",
                response.status()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_address_ready_message_to_customer() {
        let order_id = Uuid::new_v4();

        let message =
            HttpOrderNotifier::build_message("pedidos@cafe.test", "ana@example.com", order_id);

        assert_eq!(message.to, vec!["ana@example.com".to_string()]);
        assert_eq!(message.from, "pedidos@cafe.test");
        assert_eq!(message.subject, ORDER_READY_SUBJECT);
        assert!(message.html.contains(&format!("#{}", order_id)));
    }

    #[test]
    fn should_serialize_message_as_mail_api_payload() {
        let order_id = Uuid::nil();
        let message = HttpOrderNotifier::build_message("from@cafe.test", "to@cafe.test", order_id);

        let value = serde_json::to_value(&message).unwrap();

        assert_eq!(value["to"][0], "to@cafe.test");
        assert_eq!(value["subject"], ORDER_READY_SUBJECT);
    }

    #[tokio::test]
    async fn should_report_delivery_failure_when_api_unreachable() {
        let notifier = HttpOrderNotifier::new(MailerClient::new(
            "http://127.0.0.1:9".into(),
            "key".into(),
            "from@cafe.test".into(),
        ));

        let result = notifier
            .notify_order_ready("to@cafe.test", Uuid::new_v4())
            .await;

        assert!(matches!(
            result.unwrap_err(),
            NotificationError::DeliveryFailed(_)
        ));
    }
}
