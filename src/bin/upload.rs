/// 商品写真アップロードLambdaエントリポイント
///
/// HTTPスタイルイベントのボディをUploadHandlerに委譲し、
/// ALB/API Gateway互換のレスポンスJSONを返却する。
use lambda_runtime::{Error, LambdaEvent, service_fn};
use photo_upload::application::UploadHandler;
use photo_upload::infrastructure::{
    DynamoProductRepository, PhotoStore, ProductRepository, S3PhotoStore, UploadConfig,
    init_logging,
};
use serde_json::Value;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("アップロードLambda関数を初期化");

    // クライアントはプロセス起動時に一度だけ構築し、warm start間で再利用する
    let config = UploadConfig::load().await;
    let handler = UploadHandler::new(
        S3PhotoStore::new(config.s3_client().clone(), config.bucket().to_string()),
        DynamoProductRepository::new(
            config.dynamodb_client().clone(),
            config.table_name().to_string(),
        ),
        config.bucket().to_string(),
    );

    // Lambda関数を実行
    lambda_runtime::run(service_fn(|event| handle_event(event, &handler))).await
}

/// Lambda関数のメインハンドラー
///
/// イベントペイロードからボディを取り出してUploadHandlerに渡す。
/// ボディの欠落を含むすべてのエラーはハンドラー内で失敗レスポンスに
/// 変換されるため、ここからErrは返さない。
async fn handle_event<PS, PR>(
    event: LambdaEvent<Value>,
    handler: &UploadHandler<PS, PR>,
) -> Result<Value, Error>
where
    PS: PhotoStore,
    PR: ProductRepository,
{
    let body = event
        .payload
        .get("body")
        .and_then(|b| b.as_str())
        .unwrap_or("");

    info!(body_len = body.len(), "アップロードリクエスト受信");

    Ok(handler.handle(body).await)
}
