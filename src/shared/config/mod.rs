/// 設定モジュール
pub mod environment;
