/// AWSクライアントと固定設定
///
/// バケット名・テーブル名・リージョンは元システム互換のためリテラル固定。
/// 環境変数による設定は存在しない。
use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_s3::Client as S3Client;

/// 画像保存先のバケット名（固定）
pub const PHOTO_BUCKET: &str = "photo-to-s3-bucket";

/// 商品テーブル名（固定）
pub const PRODUCTS_TABLE: &str = "Products";

/// ストレージリージョン（固定）
pub const STORAGE_REGION: &str = "us-east-2";

/// 両クライアントと保存先識別子を持つアップロード設定
///
/// クライアントはプロセス起動時に一度だけ構築し、warm start間で
/// 再利用する。並行する呼び出し間で安全に共有できる。
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// S3クライアントインスタンス
    s3_client: S3Client,
    /// DynamoDBクライアントインスタンス
    dynamodb_client: DynamoDbClient,
    /// 画像保存先バケット名
    bucket: String,
    /// 商品テーブル名
    table_name: String,
}

impl UploadConfig {
    /// 固定リージョンでAWS設定を読み込み、新しいUploadConfigを作成
    ///
    /// 認証情報はaws-configにより自動読み込み。
    pub async fn load() -> Self {
        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(STORAGE_REGION))
            .load()
            .await;

        Self {
            s3_client: S3Client::new(&aws_config),
            dynamodb_client: DynamoDbClient::new(&aws_config),
            bucket: PHOTO_BUCKET.to_string(),
            table_name: PRODUCTS_TABLE.to_string(),
        }
    }

    /// 明示的な値で新しいUploadConfigを作成（テスト用）
    pub fn new(
        s3_client: S3Client,
        dynamodb_client: DynamoDbClient,
        bucket: String,
        table_name: String,
    ) -> Self {
        Self {
            s3_client,
            dynamodb_client,
            bucket,
            table_name,
        }
    }

    /// S3クライアントへの参照を取得
    pub fn s3_client(&self) -> &S3Client {
        &self.s3_client
    }

    /// DynamoDBクライアントへの参照を取得
    pub fn dynamodb_client(&self) -> &DynamoDbClient {
        &self.dynamodb_client
    }

    /// バケット名を取得
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// 商品テーブル名を取得
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}
