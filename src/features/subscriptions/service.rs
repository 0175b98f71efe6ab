/// サブスクリプションセッションサービス
///
/// 1ユーザーセッション分のストアを所有し、Gateway呼び出しとストア更新を
/// 仲介します。ストアの変更はGateway呼び出しの完了後にのみ行われ、
/// 失敗時は直前の正常な状態を保ちます（楽観的更新は行いません）。
///
/// ユーザーが切り替わった場合は、このサービスごと破棄して作り直します。
use crate::features::subscriptions::engine::{
    compute_totals, filter_subscriptions, CategoryFilter, CostSummary,
};
use crate::features::subscriptions::gateway::SubscriptionGateway;
use crate::features::subscriptions::models::{Subscription, SubscriptionDraft};
use crate::features::subscriptions::store::SubscriptionStore;
use crate::shared::errors::{AppError, AppResult};
use chrono::NaiveDate;
use log::{error, info};

/// 1ユーザーセッションのサブスクリプション操作サービス
pub struct SubscriptionService<G: SubscriptionGateway> {
    gateway: G,
    store: SubscriptionStore,
    user_id: i64,
}

impl<G: SubscriptionGateway> SubscriptionService<G> {
    /// 指定ユーザーのセッションサービスを作成する
    ///
    /// # 引数
    /// * `gateway` - Persistence Gateway
    /// * `user_id` - セッションの所有ユーザーID
    ///
    /// # 戻り値
    /// 空のストアを持つサービス（`load`で初期化する）
    pub fn new(gateway: G, user_id: i64) -> Self {
        Self {
            gateway,
            store: SubscriptionStore::new(),
            user_id,
        }
    }

    /// セッションの所有ユーザーIDを取得する
    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    /// ストアを取得する
    ///
    /// # 戻り値
    /// セッションのサブスクリプションストア
    pub fn store(&self) -> &SubscriptionStore {
        &self.store
    }

    /// 一覧をGatewayから読み込んでストアを初期化する
    ///
    /// 失敗時はストアを空にして失敗フラグを立てます
    /// （古いデータを表示しないため）。
    ///
    /// # 戻り値
    /// 成功時はOk(())、失敗時はエラー
    pub async fn load(&mut self) -> AppResult<()> {
        self.store.begin_load();

        match self.gateway.list(self.user_id).await {
            Ok(subscriptions) => {
                self.store.complete_load(subscriptions);
                Ok(())
            }
            Err(e) => {
                error!("一覧の読み込みに失敗しました: {e}");
                self.store.fail_load();
                Err(e)
            }
        }
    }

    /// ドラフトから新しいサブスクリプションを作成する
    ///
    /// バリデーションはGatewayへの送信前に行われ、不正なドラフトは
    /// リモート呼び出しなしで拒否されます。
    ///
    /// # 引数
    /// * `draft` - ID未採番のドラフト
    ///
    /// # 戻り値
    /// サーバーが採番した正規レコード、または失敗時はエラー
    pub async fn save(&mut self, draft: SubscriptionDraft) -> AppResult<Subscription> {
        draft.validate()?;

        let created = self.gateway.create(&draft).await?;

        info!("サブスクリプションを作成しました: id={}", created.id);
        self.store.insert(created.clone());
        Ok(created)
    }

    /// 既存のサブスクリプションを更新する
    ///
    /// # 引数
    /// * `record` - 更新後のレコード全体（IDを含む）
    ///
    /// # 戻り値
    /// 更新後の正規レコード、または失敗時はエラー
    pub async fn save_existing(&mut self, record: Subscription) -> AppResult<Subscription> {
        record.validate()?;

        let updated = self.gateway.update(record.id, &record).await?;

        info!("サブスクリプションを更新しました: id={}", updated.id);
        self.store.replace(updated.clone());
        Ok(updated)
    }

    /// サブスクリプションを削除する
    ///
    /// # 引数
    /// * `id` - 削除対象のID
    ///
    /// # 戻り値
    /// 成功時はOk(())、失敗時はエラー
    pub async fn remove(&mut self, id: i64) -> AppResult<()> {
        let deleted = self.gateway.delete(id).await?;

        if !deleted {
            return Err(AppError::not_found("サブスクリプション"));
        }

        info!("サブスクリプションを削除しました: id={id}");
        self.store.remove(id);
        Ok(())
    }

    /// 検索条件とカテゴリ選択で表示対象を絞り込む
    ///
    /// # 引数
    /// * `search_term` - 検索文字列
    /// * `selected` - カテゴリフィルタ
    ///
    /// # 戻り値
    /// 条件を満たすサブスクリプションのリスト（ストアの順序を保持）
    pub fn visible(&self, search_term: &str, selected: CategoryFilter) -> Vec<Subscription> {
        filter_subscriptions(self.store.subscriptions(), search_term, selected)
    }

    /// コストサマリを計算する
    ///
    /// # 引数
    /// * `today` - 更新アラート判定の基準日
    ///
    /// # 戻り値
    /// 月額合計・年額合計・まもなく更新される件数
    pub fn totals(&self, today: NaiveDate) -> CostSummary {
        compute_totals(self.store.subscriptions(), today)
    }
}
