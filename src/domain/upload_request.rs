/// 商品写真アップロードリクエストのパースと検証
///
/// リクエストボディのJSONをパースし、必須フィールドの存在を
/// 一括チェックする。検証済みの値は`ValidatedUpload`として取り出す。
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// アップロードリクエストのエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UploadRequestError {
    /// リクエストボディがJSONとしてパースできない
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// 必須フィールドが欠落または空
    ///
    /// どのフィールドが欠けているかは報告しない（一括チェック）。
    #[error("Missing required fields.")]
    MissingRequiredFields,
}

/// パース直後のアップロードリクエスト
///
/// 全フィールドがオプショナル。必須チェックは`validate`で行う。
/// `imageName`はストレージキーの構築に使われるが検証対象外。
/// `price`は数値・文字列どちらも受け付けるため`Value`で保持する。
#[derive(Debug, Clone, Deserialize)]
pub struct UploadRequest {
    #[serde(rename = "productID")]
    pub product_id: Option<String>,

    #[serde(rename = "itemID")]
    pub item_id: Option<String>,

    #[serde(rename = "styleID")]
    pub style_id: Option<String>,

    pub description: Option<String>,

    #[serde(rename = "imageName")]
    pub image_name: Option<String>,

    /// Base64エンコードされた画像バイナリ
    #[serde(rename = "imageFile")]
    pub image_file: Option<String>,

    pub price: Option<Value>,
}

/// 検証済みアップロード
///
/// 必須フィールドがすべて存在し空でないことを型レベルで保証する。
/// `image_name`のみ未指定を許容し、その場合は空文字列になる。
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedUpload {
    pub product_id: String,
    pub item_id: String,
    pub style_id: String,
    pub description: String,
    pub image_name: String,
    pub image_file: String,
    pub price: Value,
}

impl UploadRequest {
    /// リクエストボディをパース
    ///
    /// # 引数
    /// * `body` - JSONエンコードされたリクエストボディ
    ///
    /// # 戻り値
    /// * `Ok(UploadRequest)` - パース成功（必須チェックはまだ行わない）
    /// * `Err(UploadRequestError::InvalidBody)` - JSONとして不正
    pub fn parse(body: &str) -> Result<Self, UploadRequestError> {
        serde_json::from_str(body).map_err(|e| UploadRequestError::InvalidBody(e.to_string()))
    }

    /// 必須フィールドを一括検証し、検証済みの値を取り出す
    ///
    /// `productID`, `itemID`, `styleID`, `description`, `imageFile`, `price`
    /// のいずれかが欠落・空の場合、リクエスト全体を拒否する。
    /// `imageName`は検証しない（未指定時は空文字列）。
    pub fn validate(self) -> Result<ValidatedUpload, UploadRequestError> {
        let required = [
            &self.product_id,
            &self.item_id,
            &self.style_id,
            &self.description,
            &self.image_file,
        ];
        if required.iter().any(|field| is_blank(field)) || is_falsy(&self.price) {
            return Err(UploadRequestError::MissingRequiredFields);
        }

        // is_blank/is_falsyチェック済みのためunwrapは到達しない
        Ok(ValidatedUpload {
            product_id: self.product_id.unwrap_or_default(),
            item_id: self.item_id.unwrap_or_default(),
            style_id: self.style_id.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            image_name: self.image_name.unwrap_or_default(),
            image_file: self.image_file.unwrap_or_default(),
            price: self.price.unwrap_or(Value::Null),
        })
    }
}

/// 文字列フィールドが欠落または空か判定
fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().is_none_or(str::is_empty)
}

/// priceが欠落またはfalsyか判定
///
/// 元システム互換のため、null・false・0・空文字列をすべて拒否する。
/// 型チェックは行わない。
fn is_falsy(price: &Option<Value>) -> bool {
    match price {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}
