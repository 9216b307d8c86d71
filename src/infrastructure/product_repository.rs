/// DynamoDBで商品レコードを管理するためのリポジトリ
///
/// 操作はupsert（update-with-upsert）のみ。レコードが存在しなければ
/// 暗黙に作成され、存在すれば6属性が無条件に上書きされる。
use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use serde_json::Value;
use thiserror::Error;

use crate::domain::ProductRecord;

/// 商品リポジトリ操作のエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProductRepositoryError {
    /// DynamoDBへの書き込みに失敗
    #[error("Product record write error: {0}")]
    WriteError(String),
}

/// 商品レコード永続化用トレイト
///
/// 異なる実装を可能にします（実際のDynamoDB、テスト用モック）。
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 複合キー`(productID, itemID)`でレコードをupsert
    ///
    /// 6属性すべてを無条件にセットする。レコードの有無は問わない。
    ///
    /// # 戻り値
    /// * 成功時は`Ok(())`
    /// * 失敗時は`Err(ProductRepositoryError)`
    async fn upsert(&self, record: &ProductRecord) -> Result<(), ProductRepositoryError>;
}

/// ProductRepositoryのDynamoDB実装
#[derive(Debug, Clone)]
pub struct DynamoProductRepository {
    /// DynamoDBクライアント
    client: DynamoDbClient,
    /// 商品テーブル名
    table_name: String,
}

impl DynamoProductRepository {
    /// 新しいDynamoProductRepositoryを作成
    ///
    /// # 引数
    /// * `client` - DynamoDBクライアント
    /// * `table_name` - 商品テーブルの名前
    pub fn new(client: DynamoDbClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// priceをDynamoDB属性値に変換
    ///
    /// 数値は`N`、文字列は`S`にマップする。それ以外の型は
    /// 文字列表現で`S`に落とす（検証済みのため通常到達しない）。
    fn price_attribute(price: &Value) -> AttributeValue {
        match price {
            Value::Number(n) => AttributeValue::N(n.to_string()),
            Value::String(s) => AttributeValue::S(s.clone()),
            other => AttributeValue::S(other.to_string()),
        }
    }
}

#[async_trait]
impl ProductRepository for DynamoProductRepository {
    async fn upsert(&self, record: &ProductRecord) -> Result<(), ProductRepositoryError> {
        self.client
            .update_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(record.product_id.clone()))
            .key("SK", AttributeValue::S(record.item_id.clone()))
            .update_expression(
                "set Image = :url, Description = :description, Price = :price, \
                 StyleID = :styleID, ProductID = :productID, ItemID = :itemID",
            )
            .expression_attribute_values(":url", AttributeValue::S(record.image_url.clone()))
            .expression_attribute_values(
                ":description",
                AttributeValue::S(record.description.clone()),
            )
            .expression_attribute_values(":price", Self::price_attribute(&record.price))
            .expression_attribute_values(":styleID", AttributeValue::S(record.style_id.clone()))
            .expression_attribute_values(":productID", AttributeValue::S(record.product_id.clone()))
            .expression_attribute_values(":itemID", AttributeValue::S(record.item_id.clone()))
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await
            .map_err(|e| ProductRepositoryError::WriteError(e.into_service_error().to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ProductRepositoryError表示メッセージのテスト
    #[test]
    fn test_product_repository_error_display() {
        let error = ProductRepositoryError::WriteError("throughput exceeded".to_string());
        assert_eq!(
            error.to_string(),
            "Product record write error: throughput exceeded"
        );
    }

    // 数値priceはN属性にマップされる
    #[test]
    fn test_price_attribute_number() {
        let attr = DynamoProductRepository::price_attribute(&json!(9.99));
        assert_eq!(attr, AttributeValue::N("9.99".to_string()));
    }

    // 整数priceもN属性にマップされる
    #[test]
    fn test_price_attribute_integer() {
        let attr = DynamoProductRepository::price_attribute(&json!(100));
        assert_eq!(attr, AttributeValue::N("100".to_string()));
    }

    // 文字列priceはS属性にマップされる
    #[test]
    fn test_price_attribute_string() {
        let attr = DynamoProductRepository::price_attribute(&json!("19.99"));
        assert_eq!(attr, AttributeValue::S("19.99".to_string()));
    }
}
