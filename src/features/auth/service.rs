/// 認証サービス
///
/// ログインと登録を成否のみを返す不透明な操作として提供します。
/// セッショントークンの管理は扱いません。
use crate::features::auth::models::{RegisterUserDto, User};
use crate::shared::api_client::ApiClient;
use crate::shared::errors::AppResult;
use log::{info, warn};

/// APIサーバー経由の認証サービス
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    /// 環境設定から認証サービスを作成する
    ///
    /// # 戻り値
    /// 認証サービス、または設定不正時はエラー
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            api: ApiClient::new()?,
        })
    }

    /// APIクライアントを指定して認証サービスを作成する
    ///
    /// # 引数
    /// * `api` - 使用するAPIクライアント
    pub fn with_client(api: ApiClient) -> Self {
        Self { api }
    }

    /// メールアドレスとパスワードでログインする
    ///
    /// # 引数
    /// * `email` - メールアドレス
    /// * `password` - パスワード
    ///
    /// # 戻り値
    /// 認証成功時はSome(ユーザー)、認証失敗時はNone、通信失敗時はエラー
    pub async fn login(&self, email: &str, password: &str) -> AppResult<Option<User>> {
        let users: Vec<User> = self.api.get("/users").await?;

        let matched = users
            .into_iter()
            .find(|user| user.email == email && user.password == password);

        match &matched {
            Some(user) => info!("ログイン成功: user_id={}", user.id),
            None => warn!("ログイン失敗: email={email}"),
        }

        Ok(matched)
    }

    /// 新しいユーザーを登録する
    ///
    /// # 引数
    /// * `dto` - 登録内容
    ///
    /// # 戻り値
    /// 登録成功時はtrue、または失敗時はエラー
    /// （不正な内容はAPIサーバーへ送信する前に拒否される）
    pub async fn register(&self, dto: RegisterUserDto) -> AppResult<bool> {
        dto.validate()?;

        let created: User = self.api.post("/users", &dto).await?;

        info!("ユーザー登録成功: user_id={}", created.id);
        Ok(true)
    }
}
