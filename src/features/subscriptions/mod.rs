/// サブスクリプション機能モジュール
///
/// このモジュールは、サブスクリプション管理に関連するすべての機能を提供します：
/// - サブスクリプションの作成、読み取り、更新、削除（Persistence Gateway経由）
/// - 検索・カテゴリによる絞り込みとコスト集計（フィルタ・集計エンジン）
/// - 更新日ウィンドウの判定
/// - セッション単位のインメモリストア
pub mod engine;
pub mod gateway;
pub mod models;
pub mod renewal;
pub mod service;
pub mod store;

// 公開インターフェース
pub use engine::{compute_totals, filter_subscriptions, CategoryFilter, CostSummary};
pub use gateway::{ApiSubscriptionGateway, SubscriptionGateway};
pub use models::{Category, Subscription, SubscriptionDraft, SubscriptionStatus};
pub use renewal::{is_expiring_soon, RENEWAL_WINDOW_DAYS};
pub use service::SubscriptionService;
pub use store::{LoadState, SubscriptionStore};
