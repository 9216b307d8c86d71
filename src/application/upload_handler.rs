/// 商品写真アップロードハンドラー
///
/// リクエストのパース・検証から2つの外部ストアへの書き込み、
/// レスポンス構築までを直列に実行する。オブジェクト書き込みは
/// レコードupsertより必ず先行し、upsert失敗時のロールバックは行わない
/// （元システム互換。孤児オブジェクトが残りうる）。
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::application::response::{failure_response, success_response};
use crate::domain::{PHOTO_CONTENT_TYPE, ProductRecord, UploadRequest, UploadRequestError, object_key, public_url};
use crate::infrastructure::{PhotoStore, PhotoStoreError, ProductRepository, ProductRepositoryError};

/// アップロードハンドラーのエラー型
///
/// 種別は内部で区別するが、レスポンス境界では単一の失敗形状に
/// 集約され、メッセージテキストのみが呼び出し元に渡る。
#[derive(Debug, Error)]
pub enum UploadHandlerError {
    /// リクエストのパース・検証エラー
    #[error(transparent)]
    Request(#[from] UploadRequestError),

    /// imageFileのBase64デコードエラー
    #[error("Invalid base64 image payload: {0}")]
    Decode(String),

    /// オブジェクトストア書き込みエラー
    #[error(transparent)]
    PhotoStore(#[from] PhotoStoreError),

    /// レコードストアupsertエラー
    #[error(transparent)]
    ProductRepository(#[from] ProductRepositoryError),
}

/// アップロードリクエストを処理するハンドラー
///
/// 処理フロー: パース → 検証 → デコード → オブジェクト保存 →
/// URL構築 → レコードupsert → レスポンス返却
pub struct UploadHandler<PS, PR>
where
    PS: PhotoStore,
    PR: ProductRepository,
{
    /// フォトストア
    photo_store: PS,
    /// 商品リポジトリ
    product_repo: PR,
    /// URL構築に使うバケット名
    bucket: String,
}

impl<PS, PR> UploadHandler<PS, PR>
where
    PS: PhotoStore,
    PR: ProductRepository,
{
    /// 新しいUploadHandlerを作成
    pub fn new(photo_store: PS, product_repo: PR, bucket: String) -> Self {
        Self {
            photo_store,
            product_repo,
            bucket,
        }
    }

    /// リクエストボディを処理してレスポンスJSONを返却
    ///
    /// すべてのエラーはここで捕捉され、単一の失敗レスポンス形状に
    /// 変換される。呼び出し元に未処理エラーは伝播しない。
    pub async fn handle(&self, body: &str) -> Value {
        match self.process(body).await {
            Ok(image_url) => {
                info!(image_url = %image_url, "アップロード処理完了");
                success_response(&image_url)
            }
            Err(err) => {
                error!(error = %err, "アップロード処理エラー");
                failure_response(&err.to_string())
            }
        }
    }

    /// アップロード処理の本体
    ///
    /// # 戻り値
    /// * `Ok(String)` - 保存済み画像の導出URL
    /// * `Err(UploadHandlerError)` - 途中で失敗した場合（後続ステップは実行されない）
    async fn process(&self, body: &str) -> Result<String, UploadHandlerError> {
        // パースと必須フィールドの一括検証。
        // 失敗時は外部ストアへの呼び出しを一切行わない。
        let upload = UploadRequest::parse(body)?.validate()?;

        debug!(
            product_id = %upload.product_id,
            item_id = %upload.item_id,
            image_name = %upload.image_name,
            "アップロードリクエスト受理"
        );

        let image_bytes = BASE64_STANDARD
            .decode(upload.image_file.as_bytes())
            .map_err(|e| UploadHandlerError::Decode(e.to_string()))?;

        // imageNameはサニタイズせずそのままキーに使用する
        let key = object_key(&upload.image_name);
        self.photo_store
            .put_photo(&key, image_bytes, PHOTO_CONTENT_TYPE)
            .await?;

        // URLは保存操作の結果に依存せず決定的に構築する
        let image_url = public_url(&self.bucket, &key);

        let record = ProductRecord::from_upload(&upload, image_url.clone());
        self.product_repo.upsert(&record).await?;

        Ok(image_url)
    }
}
