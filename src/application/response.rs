/// HTTPスタイルレスポンスの構築
///
/// ALB/API Gateway互換のレスポンスJSONを生成する。
/// 成功・失敗の2形状のみで、失敗はエラー種別を区別しない。
use serde_json::{Value, json};

/// 成功時の固定メッセージ
pub const SUCCESS_MESSAGE: &str = "Image uploaded and product updated successfully";

/// 失敗時の固定メッセージ
pub const FAILURE_MESSAGE: &str = "Error processing request";

/// 成功レスポンスを構築
///
/// ステータス200、CORSヘッダー付き。ボディは導出URLを含むJSON文字列。
pub fn success_response(image_url: &str) -> Value {
    json!({
        "isBase64Encoded": false,
        "statusCode": 200,
        "statusDescription": "200 OK",
        "headers": {
            "Content-Type": "application/json",
            "Access-Control-Allow-Origin": "*",
            "Access-Control-Allow-Methods": "POST, GET, OPTIONS",
        },
        "body": json!({
            "message": SUCCESS_MESSAGE,
            "imageUrl": image_url,
        })
        .to_string(),
    })
}

/// 失敗レスポンスを構築
///
/// ステータス500。ボディにはエラーのメッセージテキストをそのまま含める。
pub fn failure_response(error_message: &str) -> Value {
    json!({
        "isBase64Encoded": false,
        "statusCode": 500,
        "headers": {
            "Content-Type": "application/json",
        },
        "body": json!({
            "message": FAILURE_MESSAGE,
            "error": error_message,
        })
        .to_string(),
    })
}
