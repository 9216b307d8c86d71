/// 商品メタデータレコード
///
/// `(productID, itemID)`の複合キーで識別され、アップロードごとに
/// 6属性すべてを無条件に上書きする（upsertセマンティクス）。
use serde_json::Value;

use crate::domain::upload_request::ValidatedUpload;

/// 永続化される商品レコード
///
/// レコードストア上の属性名は`Image`, `Description`, `Price`,
/// `StyleID`, `ProductID`, `ItemID`の6つ。削除パスは存在しない。
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    /// パーティションキー（PK）
    pub product_id: String,
    /// ソートキー（SK）
    pub item_id: String,
    pub style_id: String,
    pub description: String,
    /// 数値または文字列（型変換しない）
    pub price: Value,
    /// 保存済み画像への導出URL
    pub image_url: String,
}

impl ProductRecord {
    /// 検証済みアップロードと導出URLからレコードを構築
    pub fn from_upload(upload: &ValidatedUpload, image_url: String) -> Self {
        Self {
            product_id: upload.product_id.clone(),
            item_id: upload.item_id.clone(),
            style_id: upload.style_id.clone(),
            description: upload.description.clone(),
            price: upload.price.clone(),
            image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_upload() -> ValidatedUpload {
        ValidatedUpload {
            product_id: "P1".to_string(),
            item_id: "I1".to_string(),
            style_id: "S1".to_string(),
            description: "desc".to_string(),
            image_name: "a.jpg".to_string(),
            image_file: "aGVsbG8=".to_string(),
            price: json!(9.99),
        }
    }

    /// アップロードの値がそのままレコードに写る
    #[test]
    fn test_from_upload() {
        let record = ProductRecord::from_upload(
            &sample_upload(),
            "https://photo-to-s3-bucket.s3.amazonaws.com/images/a.jpg".to_string(),
        );

        assert_eq!(record.product_id, "P1");
        assert_eq!(record.item_id, "I1");
        assert_eq!(record.style_id, "S1");
        assert_eq!(record.description, "desc");
        assert_eq!(record.price, json!(9.99));
        assert_eq!(
            record.image_url,
            "https://photo-to-s3-bucket.s3.amazonaws.com/images/a.jpg"
        );
    }

    /// 文字列priceもそのまま保持される
    #[test]
    fn test_from_upload_string_price() {
        let mut upload = sample_upload();
        upload.price = json!("19.99");

        let record = ProductRecord::from_upload(&upload, "url".to_string());
        assert_eq!(record.price, json!("19.99"));
    }
}
