/// SubZenクライアントコア
///
/// サブスクリプション管理アプリのコアライブラリ。Presentation層（UI）から
/// 利用されることを前提とし、以下を提供します：
/// - サブスクリプションのデータモデルとバリデーション
/// - 検索・絞り込み・コスト集計の純粋関数エンジン
/// - セッション単位のインメモリストアと操作サービス
/// - APIサーバーに対するPersistence Gateway
/// - メールアドレスとパスワードによる認証
pub mod features;
pub mod shared;

pub use features::auth::{AuthService, RegisterUserDto, User};
pub use features::subscriptions::{
    compute_totals, filter_subscriptions, is_expiring_soon, ApiSubscriptionGateway, Category,
    CategoryFilter, CostSummary, LoadState, Subscription, SubscriptionDraft, SubscriptionGateway,
    SubscriptionService, SubscriptionStatus, SubscriptionStore,
};
pub use shared::config::environment::{initialize_logging_system, load_environment_variables};
pub use shared::errors::{AppError, AppResult, ErrorSeverity};
