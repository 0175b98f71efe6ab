/// Persistence Gateway
///
/// リモートサービスに対するサブスクリプションのCRUD操作の境界。
/// 各操作は1回限りのベストエフォートであり、失敗はその操作の終了として
/// 呼び出し元へ返されます（リトライ・バッチ・キャッシュは行いません）。
use crate::features::subscriptions::models::{Subscription, SubscriptionDraft};
use crate::shared::api_client::ApiClient;
use crate::shared::errors::AppResult;
use log::info;

/// サブスクリプション永続化の境界インターフェース
///
/// コアはこのトレイト越しにのみリモートと対話します。
/// テストではインメモリ実装に差し替えられます。
#[allow(async_fn_in_trait)]
pub trait SubscriptionGateway {
    /// 指定ユーザーのサブスクリプション一覧を取得する
    ///
    /// # 引数
    /// * `user_id` - 所有ユーザーのID
    ///
    /// # 戻り値
    /// サブスクリプションのリスト、または失敗時はエラー
    async fn list(&self, user_id: i64) -> AppResult<Vec<Subscription>>;

    /// ドラフトから新しいサブスクリプションを作成する
    ///
    /// # 引数
    /// * `draft` - ID未採番のドラフト
    ///
    /// # 戻り値
    /// サーバーがIDを採番した正規レコード、または失敗時はエラー
    async fn create(&self, draft: &SubscriptionDraft) -> AppResult<Subscription>;

    /// 既存のサブスクリプションを更新する
    ///
    /// # 引数
    /// * `id` - 更新対象のID
    /// * `record` - 更新後のレコード全体
    ///
    /// # 戻り値
    /// 更新後の正規レコード、または失敗時はエラー
    /// （対象が存在しない場合はNotFoundエラー）
    async fn update(&self, id: i64, record: &Subscription) -> AppResult<Subscription>;

    /// サブスクリプションを削除する
    ///
    /// # 引数
    /// * `id` - 削除対象のID
    ///
    /// # 戻り値
    /// 削除に成功した場合はtrue、または失敗時はエラー
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// APIサーバー経由のGateway実装
pub struct ApiSubscriptionGateway {
    api: ApiClient,
}

impl ApiSubscriptionGateway {
    /// 環境設定からGatewayを作成する
    ///
    /// # 戻り値
    /// Gatewayインスタンス、または設定不正時はエラー
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            api: ApiClient::new()?,
        })
    }

    /// APIクライアントを指定してGatewayを作成する
    ///
    /// # 引数
    /// * `api` - 使用するAPIクライアント
    pub fn with_client(api: ApiClient) -> Self {
        Self { api }
    }

    fn list_endpoint(user_id: i64) -> String {
        format!("/subscriptions?userId={user_id}")
    }

    fn item_endpoint(id: i64) -> String {
        format!("/subscriptions/{id}")
    }
}

impl SubscriptionGateway for ApiSubscriptionGateway {
    async fn list(&self, user_id: i64) -> AppResult<Vec<Subscription>> {
        let subscriptions: Vec<Subscription> =
            self.api.get(&Self::list_endpoint(user_id)).await?;

        info!(
            "サブスクリプション一覧取得成功: user_id={user_id}, count={}",
            subscriptions.len()
        );
        Ok(subscriptions)
    }

    async fn create(&self, draft: &SubscriptionDraft) -> AppResult<Subscription> {
        let created: Subscription = self.api.post("/subscriptions", draft).await?;

        info!("サブスクリプション作成成功: subscription_id={}", created.id);
        Ok(created)
    }

    async fn update(&self, id: i64, record: &Subscription) -> AppResult<Subscription> {
        let updated: Subscription = self.api.put(&Self::item_endpoint(id), record).await?;

        info!("サブスクリプション更新成功: subscription_id={id}");
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let deleted = self.api.delete(&Self::item_endpoint(id)).await?;

        info!("サブスクリプション削除成功: subscription_id={id}");
        Ok(deleted)
    }
}
