/// 画像バイナリのオブジェクトストレージ保存
///
/// オブジェクトストアへの操作は単一の書き込みのみ。
/// 同一キーへの書き込みは常に上書き（バージョニングなし）。
use async_trait::async_trait;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::primitives::ByteStream;
use thiserror::Error;

/// フォトストア操作のエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PhotoStoreError {
    /// オブジェクトの書き込みに失敗
    #[error("Photo store write error: {0}")]
    WriteError(String),
}

/// 画像バイナリ永続化用トレイト
///
/// 異なる実装を可能にします（実際のS3、テスト用モック）。
#[async_trait]
pub trait PhotoStore: Send + Sync {
    /// 画像バイナリを指定キーで保存
    ///
    /// # 引数
    /// * `key` - ストレージキー（`images/<imageName>`形式）
    /// * `bytes` - デコード済みの生バイト列
    /// * `content_type` - 宣言するコンテンツタイプ
    ///
    /// # 戻り値
    /// * 成功時は`Ok(())`
    /// * 失敗時は`Err(PhotoStoreError)`
    async fn put_photo(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), PhotoStoreError>;
}

/// PhotoStoreのS3実装
#[derive(Debug, Clone)]
pub struct S3PhotoStore {
    /// S3クライアント
    client: S3Client,
    /// バケット名
    bucket: String,
}

impl S3PhotoStore {
    /// 新しいS3PhotoStoreを作成
    ///
    /// # 引数
    /// * `client` - S3クライアント
    /// * `bucket` - 保存先バケット名
    pub fn new(client: S3Client, bucket: String) -> Self {
        Self { client, bucket }
    }

    /// バケット名を取得
    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl PhotoStore for S3PhotoStore {
    async fn put_photo(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), PhotoStoreError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| PhotoStoreError::WriteError(e.into_service_error().to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // PhotoStoreError表示メッセージのテスト
    #[test]
    fn test_photo_store_error_display() {
        let error = PhotoStoreError::WriteError("access denied".to_string());
        assert_eq!(error.to_string(), "Photo store write error: access denied");
    }

    // PhotoStoreError等価性のテスト
    #[test]
    fn test_photo_store_error_equality() {
        assert_eq!(
            PhotoStoreError::WriteError("test".to_string()),
            PhotoStoreError::WriteError("test".to_string())
        );
        assert_ne!(
            PhotoStoreError::WriteError("test1".to_string()),
            PhotoStoreError::WriteError("test2".to_string())
        );
    }
}
