/// 認証機能モジュール
///
/// このモジュールは、ユーザー認証に関連する機能を提供します：
/// - メールアドレスとパスワードによるログイン
/// - 新規ユーザー登録
pub mod models;
pub mod service;

// 公開インターフェース
pub use models::{RegisterUserDto, User};
pub use service::AuthService;
