use crate::error::MonitorError;
use crate::sscom::Listing;
use serde::Serialize;
use tracing::info;

const ONESIGNAL_URL: &str = "https://onesignal.com/api/v1/notifications";
const HEADING: &str = "New Audi A7 listing!";
const BRAND_ICON: &str = "https://hiype.id.lv/imgs/sslogo.png";

/// Push delivery seam, one call per new listing.
#[async_trait::async_trait]
pub trait Notify {
    async fn notify(&self, listing: &Listing) -> Result<(), MonitorError>;
}

#[derive(Debug, Serialize)]
struct LocalizedText<'a> {
    en: &'a str,
}

#[derive(Debug, Serialize)]
struct IosAttachments<'a> {
    id: &'a str,
}

/// OneSignal create-notification body. The big picture and attachment slots
/// carry the listing photo; the icon slots carry the fixed brand logo.
#[derive(Debug, Serialize)]
pub struct NotificationPayload<'a> {
    app_id: &'a str,
    included_segments: [&'a str; 1],
    contents: LocalizedText<'a>,
    headings: LocalizedText<'a>,
    big_picture: &'a str,
    chrome_web_image: &'a str,
    ios_attachments: IosAttachments<'a>,
    chrome_web_icon: &'a str,
    android_small_icon: &'a str,
    android_large_icon: &'a str,
    url: &'a str,
}

impl<'a> NotificationPayload<'a> {
    pub fn new(app_id: &'a str, listing: &'a Listing) -> NotificationPayload<'a> {
        NotificationPayload {
            app_id,
            included_segments: ["All"],
            contents: LocalizedText { en: &listing.title },
            headings: LocalizedText { en: HEADING },
            big_picture: &listing.image_url,
            chrome_web_image: &listing.image_url,
            ios_attachments: IosAttachments {
                id: &listing.image_url,
            },
            chrome_web_icon: BRAND_ICON,
            android_small_icon: BRAND_ICON,
            android_large_icon: BRAND_ICON,
            url: &listing.url,
        }
    }
}

pub struct OneSignalNotifier {
    client: reqwest::Client,
    app_id: String,
    api_key: String,
}

impl OneSignalNotifier {
    pub fn new(app_id: String, api_key: String) -> OneSignalNotifier {
        OneSignalNotifier {
            client: reqwest::Client::new(),
            app_id,
            api_key,
        }
    }
}

#[async_trait::async_trait]
impl Notify for OneSignalNotifier {
    async fn notify(&self, listing: &Listing) -> Result<(), MonitorError> {
        let payload = NotificationPayload::new(&self.app_id, listing);
        let response = self
            .client
            .post(ONESIGNAL_URL)
            .header("Authorization", format!("Key {}", self.api_key))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        info!("Notification sent: {}", status.as_u16());

        if !status.is_success() {
            return Err(MonitorError::Notification {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }
        Ok(())
    }
}
