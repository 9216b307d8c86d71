/// 保存先キーと公開URLの構築
///
/// ストレージキーは固定プレフィックス + `imageName`の連結。
/// `imageName`はサニタイズせずそのままキーに使用する（元システム互換）。
/// Virtual-hosted形式のS3 URLを決定的に構築する。

/// 画像キーの固定プレフィックス
pub const IMAGE_KEY_PREFIX: &str = "images/";

/// 保存時に宣言するコンテンツタイプ（固定）
pub const PHOTO_CONTENT_TYPE: &str = "image/jpeg";

/// imageNameからストレージキーを構築
///
/// # 例
/// `a.jpg` → `images/a.jpg`
pub fn object_key(image_name: &str) -> String {
    format!("{IMAGE_KEY_PREFIX}{image_name}")
}

/// バケット名とキーから公開URLを構築
///
/// Virtual-hosted形式: `https://<bucket>.s3.amazonaws.com/<key>`
/// 既存のコンシューマーがこのURL形式を前提とするため、
/// 形式を変更してはならない。
pub fn public_url(bucket: &str, key: &str) -> String {
    format!("https://{bucket}.s3.amazonaws.com/{key}")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// キーは固定プレフィックス + imageName
    #[test]
    fn test_object_key() {
        assert_eq!(object_key("a.jpg"), "images/a.jpg");
    }

    /// 空のimageNameはプレフィックスのみのキーになる
    #[test]
    fn test_object_key_empty_name() {
        assert_eq!(object_key(""), "images/");
    }

    /// imageNameはサニタイズせずそのままキーに入る
    #[test]
    fn test_object_key_passes_path_characters_verbatim() {
        assert_eq!(object_key("../x/y.jpg"), "images/../x/y.jpg");
        assert_eq!(object_key("a b.jpg"), "images/a b.jpg");
    }

    /// URL形式は既存コンシューマー互換で固定
    #[test]
    fn test_public_url_format() {
        assert_eq!(
            public_url("photo-to-s3-bucket", "images/a.jpg"),
            "https://photo-to-s3-bucket.s3.amazonaws.com/images/a.jpg"
        );
    }

    /// URLはキーをそのまま埋め込む（エンコードしない）
    #[test]
    fn test_public_url_no_encoding() {
        assert_eq!(
            public_url("b", "images/a b.jpg"),
            "https://b.s3.amazonaws.com/images/a b.jpg"
        );
    }
}
