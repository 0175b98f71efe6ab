use crate::shared::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// サブスクリプションのカテゴリ
///
/// 固定の列挙型として定義し、未知の値は`Other`へフォールバックします。
/// 旧UIで使われていたスペイン語ラベルは入力時のエイリアスとして受け付けますが、
/// 正規のラベルは英語表記に統一しています。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(alias = "Entretenimiento")]
    Entertainment,
    #[serde(alias = "Musica")]
    Music,
    #[serde(alias = "Diseño")]
    Design,
    #[serde(alias = "Productividad")]
    Productivity,
    Gaming,
    #[serde(alias = "Educacion")]
    Education,
    /// 未知のカテゴリ値のフォールバック先（旧ラベル"Otro"もここに入る）
    #[serde(other)]
    Other,
}

impl Category {
    /// 表示用の正規ラベルを取得
    ///
    /// # 戻り値
    /// カテゴリの表示ラベル
    pub fn label(&self) -> &'static str {
        match self {
            Category::Entertainment => "Entertainment",
            Category::Music => "Music",
            Category::Design => "Design",
            Category::Productivity => "Productivity",
            Category::Gaming => "Gaming",
            Category::Education => "Education",
            Category::Other => "Other",
        }
    }

    /// 選択肢として提示する全カテゴリ
    ///
    /// # 戻り値
    /// カテゴリの一覧（表示順）
    pub fn all() -> &'static [Category] {
        &[
            Category::Entertainment,
            Category::Music,
            Category::Design,
            Category::Productivity,
            Category::Gaming,
            Category::Education,
            Category::Other,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// サブスクリプションの状態
///
/// コスト集計と更新アラートの対象になるのは`Active`のみ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Inactive,
    Cancelled,
}

impl SubscriptionStatus {
    /// アクティブな状態かどうかを判定
    ///
    /// # 戻り値
    /// アクティブな場合はtrue
    pub fn is_active(&self) -> bool {
        matches!(self, SubscriptionStatus::Active)
    }
}

/// サブスクリプションデータモデル
///
/// Persistence Gatewayによって永続化された正規レコード。
/// `id`はサーバーが採番するため、永続化後は必ず存在します。
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: i64,
    pub user_id: i64,                // 所有ユーザーのID、作成後は不変
    pub name: String,                // サービス名（空文字は不可）
    pub cost: f64,                   // 月額、非負
    pub category: Category,          // 未知の値はOtherへフォールバック
    pub renewal_date: NaiveDate,     // 次回更新日（YYYY-MM-DD形式）
    pub status: SubscriptionStatus,  // active / inactive / cancelled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>, // 任意の説明文
}

/// サブスクリプション作成用ドラフト
///
/// 永続化前の一時レコードであり、`id`を持ちません（サーバーが採番）。
/// Gatewayへ送信する前に`validate`で検証されます。
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionDraft {
    pub user_id: i64,
    pub name: String,
    pub cost: f64,
    pub category: Category,
    pub renewal_date: NaiveDate,
    pub status: SubscriptionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SubscriptionDraft {
    /// ドラフトを検証する
    ///
    /// # 戻り値
    /// 有効な場合はOk(())、不正な場合はバリデーションエラー
    ///
    /// # 検証内容
    /// - 名前が空でないこと
    /// - 金額が非負の有限値であること
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("サービス名を入力してください"));
        }

        if !self.cost.is_finite() || self.cost < 0.0 {
            return Err(AppError::validation(
                "月額は0以上の数値である必要があります",
            ));
        }

        Ok(())
    }
}

impl Subscription {
    /// 永続化済みレコードを検証する
    ///
    /// 更新時もドラフトと同じ規則（名前必須、金額は非負の有限値）を適用します。
    ///
    /// # 戻り値
    /// 有効な場合はOk(())、不正な場合はバリデーションエラー
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("サービス名を入力してください"));
        }

        if !self.cost.is_finite() || self.cost < 0.0 {
            return Err(AppError::validation(
                "月額は0以上の数値である必要があります",
            ));
        }

        Ok(())
    }
}
