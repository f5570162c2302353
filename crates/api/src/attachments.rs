//! Transaction attachment endpoints (envelope family).

use async_trait::async_trait;
use log::{debug, info};

use finmate_core::attachments::{Attachment, NewAttachment};
use finmate_core::utils::{encode_image_as_data_url, validate_image_asset, ImageAsset, ImageRejection};
use finmate_core::ApiResponse;

use crate::client::ApiClient;
use crate::error::Result;

/// Outcome of an upload attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum AttachmentUpload {
    /// The image failed local validation; nothing was sent.
    Rejected(ImageRejection),
    /// The server answered; inspect `success`.
    Sent(ApiResponse<Attachment>),
}

/// Trait for attachment data access
#[async_trait]
pub trait AttachmentServiceTrait: Send + Sync {
    /// GET /payments/{id}/attachments
    async fn list_attachments(
        &self,
        token: &str,
        transaction_id: i64,
    ) -> Result<ApiResponse<Vec<Attachment>>>;

    /// Validates, encodes and POSTs an image to /payments/{id}/attachments.
    async fn upload_attachment(
        &self,
        token: &str,
        transaction_id: i64,
        asset: &ImageAsset,
    ) -> Result<AttachmentUpload>;
}

#[derive(Debug, Clone)]
pub struct AttachmentService {
    api: ApiClient,
}

impl AttachmentService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AttachmentServiceTrait for AttachmentService {
    async fn list_attachments(
        &self,
        token: &str,
        transaction_id: i64,
    ) -> Result<ApiResponse<Vec<Attachment>>> {
        self.api
            .get_envelope(token, &format!("/payments/{}/attachments", transaction_id))
            .await
    }

    async fn upload_attachment(
        &self,
        token: &str,
        transaction_id: i64,
        asset: &ImageAsset,
    ) -> Result<AttachmentUpload> {
        let validation = validate_image_asset(asset);
        if let Some(reason) = validation.error {
            debug!("Image {} rejected: {}", asset.uri, reason);
            return Ok(AttachmentUpload::Rejected(reason));
        }

        // Fail on the token before reading the file.
        ApiClient::headers(token)?;

        let image =
            encode_image_as_data_url(self.api.http(), &asset.uri, asset.mime_type.as_deref())
                .await?;
        let body = NewAttachment {
            image,
            file_name: asset.file_name.clone(),
        };

        let response = self
            .api
            .post_envelope(
                token,
                &format!("/payments/{}/attachments", transaction_id),
                &body,
            )
            .await?;
        info!(
            "Attachment upload for transaction {} finished (success: {})",
            transaction_id, response.success
        );
        Ok(AttachmentUpload::Sent(response))
    }
}
