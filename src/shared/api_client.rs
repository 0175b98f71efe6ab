use crate::shared::config::environment::ApiConfig;
/// 汎用APIクライアント
///
/// APIサーバーとの通信を行う汎用的なクライアント
/// サブスクリプション、ユーザー、その他のAPIエンドポイントで使用可能
///
/// 各リクエストは1回限りのベストエフォートであり、リトライ・バッチ・
/// キャッシュは行いません。失敗はその操作の終了として呼び出し元に返されます。
use crate::shared::errors::{AppError, AppResult};
use log::{info, warn};
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

/// APIクライアント設定
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl ApiClientConfig {
    /// 環境設定からAPIクライアント設定を作成
    pub fn from_env() -> Self {
        let api_config = ApiConfig::from_env();
        Self {
            base_url: api_config.base_url,
            timeout_seconds: api_config.timeout_seconds,
        }
    }
}

/// 汎用APIクライアント
pub struct ApiClient {
    client: Client,
    config: ApiClientConfig,
}

impl ApiClient {
    /// 新しいAPIクライアントを作成
    pub fn new() -> AppResult<Self> {
        let config = ApiClientConfig::from_env();
        Self::new_with_config(config)
    }

    /// 設定を指定してAPIクライアントを作成
    pub fn new_with_config(config: ApiClientConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTPクライアント初期化失敗: {e}")))?;

        Ok(Self { client, config })
    }

    /// GETリクエストを送信
    pub async fn get<T>(&self, endpoint: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        info!("GETリクエスト送信: endpoint={endpoint}");

        let url = format!("{}{endpoint}", self.config.base_url);
        let response = self.client.get(&url).send().await?;

        self.parse_response(response, "GET", endpoint).await
    }

    /// POSTリクエストを送信
    pub async fn post<B, T>(&self, endpoint: &str, body: &B) -> AppResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        info!("POSTリクエスト送信: endpoint={endpoint}");

        let url = format!("{}{endpoint}", self.config.base_url);
        let response = self.client.post(&url).json(body).send().await?;

        self.parse_response(response, "POST", endpoint).await
    }

    /// PUTリクエストを送信
    pub async fn put<B, T>(&self, endpoint: &str, body: &B) -> AppResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        info!("PUTリクエスト送信: endpoint={endpoint}");

        let url = format!("{}{endpoint}", self.config.base_url);
        let response = self.client.put(&url).json(body).send().await?;

        self.parse_response(response, "PUT", endpoint).await
    }

    /// DELETEリクエストを送信
    ///
    /// DELETEリクエストは通常レスポンスボディがないため、成功ステータスのみチェック
    pub async fn delete(&self, endpoint: &str) -> AppResult<bool> {
        let url = format!("{}{endpoint}", self.config.base_url);
        info!("DELETEリクエスト送信: endpoint={endpoint}, url={url}");

        let response = self.client.delete(&url).send().await?;

        if response.status().is_success() {
            info!("DELETEリクエスト成功: endpoint={endpoint}");
            Ok(true)
        } else {
            Err(self.map_error_status(response, "DELETE", endpoint).await)
        }
    }

    /// レスポンスを解析し、成功時はボディをデシリアライズする
    async fn parse_response<T>(&self, response: Response, method: &str, endpoint: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        if response.status().is_success() {
            let result: T = response
                .json()
                .await
                .map_err(|e| AppError::Server(format!("レスポンス解析エラー: {e}")))?;

            info!("{method}リクエスト成功: endpoint={endpoint}");
            Ok(result)
        } else {
            Err(self.map_error_status(response, method, endpoint).await)
        }
    }

    /// エラーステータスをAppErrorへ変換する
    ///
    /// 404はNotFound、それ以外の4xx/5xxはServerエラーとして扱う
    async fn map_error_status(&self, response: Response, method: &str, endpoint: &str) -> AppError {
        let status = response.status();
        let response_text = response
            .text()
            .await
            .unwrap_or_else(|_| "レスポンス読み取り失敗".to_string());

        warn!(
            "{method}リクエスト失敗: endpoint={endpoint}, status={}, body={response_text}",
            status.as_u16()
        );

        match status {
            StatusCode::NOT_FOUND => AppError::not_found("指定されたリソース"),
            _ => AppError::Server(format!(
                "APIサーバーエラー: status={}, body={response_text}",
                status.as_u16()
            )),
        }
    }
}
