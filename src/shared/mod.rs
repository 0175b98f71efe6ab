/// 共有モジュール
///
/// このモジュールは、機能モジュール間で共有されるコンポーネントを提供します：
/// - 統一エラー型
/// - 環境・API設定
/// - 汎用APIクライアント
pub mod api_client;
pub mod config;
pub mod errors;
