use chrono::NaiveDate;

/// 「まもなく更新」とみなす日数の上限
pub const RENEWAL_WINDOW_DAYS: i64 = 7;

/// サブスクリプションがまもなく更新されるかを判定する
///
/// 基準日は呼び出し側から明示的に渡します（システム時刻を読まないため、
/// 判定は決定的でテスト可能です）。
///
/// # 引数
/// * `renewal_date` - 次回更新日
/// * `today` - 基準日
///
/// # 戻り値
/// 更新日が基準日の翌日から7日後まで（両端含む）の場合はtrue
///
/// # 境界
/// - 更新日が基準日当日 → false（当日は「まもなく」ではない）
/// - 更新日が過去 → false
/// - ちょうど7日後 → true
/// - ちょうど8日後 → false
pub fn is_expiring_soon(renewal_date: NaiveDate, today: NaiveDate) -> bool {
    let diff_days = (renewal_date - today).num_days();
    diff_days > 0 && diff_days <= RENEWAL_WINDOW_DAYS
}
