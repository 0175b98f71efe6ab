use serde::{Deserialize, Serialize};

/// ユーザーデータモデル
///
/// セッショントークンの管理は扱いません（認証は成否のみを返す
/// 不透明な操作として扱います）。
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub name: String,
}

/// ユーザー登録用DTO
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RegisterUserDto {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl RegisterUserDto {
    /// 登録内容を検証する
    ///
    /// # 戻り値
    /// 有効な場合はOk(())、不正な場合はバリデーションエラー
    pub fn validate(&self) -> crate::shared::errors::AppResult<()> {
        use crate::shared::errors::AppError;

        if self.email.trim().is_empty() {
            return Err(AppError::validation("メールアドレスを入力してください"));
        }
        if self.password.is_empty() {
            return Err(AppError::validation("パスワードを入力してください"));
        }
        if self.name.trim().is_empty() {
            return Err(AppError::validation("名前を入力してください"));
        }

        Ok(())
    }
}
