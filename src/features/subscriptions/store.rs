/// サブスクリプションストア
///
/// 現在のセッションのサブスクリプション一覧を保持するインメモリの
/// 正規データ置き場。Gateway呼び出しの完了後にのみ更新され、
/// 失敗時は直前の正常な状態を維持します。
use crate::features::subscriptions::models::Subscription;
use log::{debug, info};

/// 読み込み状態
///
/// UIが「空」と「読み込み失敗」を区別できるようにするためのフラグ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// 読み込み中（初期状態）
    Loading,
    /// 読み込み完了
    Loaded,
    /// 読み込み失敗（一覧は空のまま）
    Failed,
}

/// 現在のユーザーセッションが所有するサブスクリプション一覧
///
/// ユーザーが切り替わった場合はストアを破棄して新しく作り直します
/// （モジュールレベルの共有状態は持ちません）。
#[derive(Debug)]
pub struct SubscriptionStore {
    subscriptions: Vec<Subscription>,
    load_state: LoadState,
}

impl SubscriptionStore {
    /// 空のストアを作成する
    ///
    /// # 戻り値
    /// 読み込み中状態の空ストア
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
            load_state: LoadState::Loading,
        }
    }

    /// 保持している一覧を取得する
    ///
    /// # 戻り値
    /// サブスクリプションのスライス（読み込み順）
    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    /// 現在の読み込み状態を取得する
    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// 読み込みを開始する
    ///
    /// 一覧はクリアせず、完了まで直前の内容を保持します。
    pub fn begin_load(&mut self) {
        self.load_state = LoadState::Loading;
    }

    /// 読み込み完了として一覧を差し替える
    ///
    /// # 引数
    /// * `subscriptions` - Gatewayから取得した一覧
    pub fn complete_load(&mut self, subscriptions: Vec<Subscription>) {
        info!("一覧を更新しました: count={}", subscriptions.len());
        self.subscriptions = subscriptions;
        self.load_state = LoadState::Loaded;
    }

    /// 読み込み失敗を記録する
    ///
    /// 古いデータを表示しないよう一覧は空にします。
    pub fn fail_load(&mut self) {
        self.subscriptions.clear();
        self.load_state = LoadState::Failed;
    }

    /// 作成された正規レコードを追加する
    ///
    /// # 引数
    /// * `subscription` - サーバーがIDを採番した正規レコード
    pub fn insert(&mut self, subscription: Subscription) {
        debug!("レコードを追加: id={}", subscription.id);
        self.subscriptions.push(subscription);
    }

    /// IDが一致するレコードを置き換える
    ///
    /// # 引数
    /// * `subscription` - 更新後の正規レコード
    ///
    /// # 戻り値
    /// 置き換えた場合はtrue、IDが見つからなかった場合はfalse
    pub fn replace(&mut self, subscription: Subscription) -> bool {
        match self
            .subscriptions
            .iter_mut()
            .find(|existing| existing.id == subscription.id)
        {
            Some(existing) => {
                debug!("レコードを置換: id={}", subscription.id);
                *existing = subscription;
                true
            }
            None => false,
        }
    }

    /// IDが一致するレコードを削除する
    ///
    /// 一致するレコードのみを取り除き、他のレコードの相対順序は変えません。
    ///
    /// # 引数
    /// * `id` - 削除対象のサブスクリプションID
    ///
    /// # 戻り値
    /// 削除した場合はtrue、IDが見つからなかった場合はfalse
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|sub| sub.id != id);
        let removed = self.subscriptions.len() < before;
        if removed {
            debug!("レコードを削除: id={id}");
        }
        removed
    }
}

impl Default for SubscriptionStore {
    fn default() -> Self {
        Self::new()
    }
}
