/// フィルタ・集計エンジン
///
/// ストアが保持するサブスクリプション一覧から、表示対象の部分集合と
/// サマリ統計を導出する純粋関数群。入力を変更せず、同じ入力に対して
/// 常に同じ結果を返します。
use crate::features::subscriptions::models::{Category, Subscription};
use crate::features::subscriptions::renewal::is_expiring_soon;
use chrono::NaiveDate;

/// カテゴリフィルタの選択値
///
/// 「すべて」を表す番兵文字列の代わりに閉じた列挙型で表現します。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    /// カテゴリで絞り込まない
    All,
    /// 指定カテゴリに完全一致するもののみ
    Only(Category),
}

/// コストサマリ
#[derive(Debug, Clone, PartialEq)]
pub struct CostSummary {
    /// アクティブなサブスクリプションの月額合計
    pub monthly_cost: f64,
    /// 年額合計（月額合計の12倍）
    pub yearly_cost: f64,
    /// まもなく更新されるアクティブなサブスクリプションの件数
    pub upcoming_renewal_count: usize,
}

/// 検索条件とカテゴリ選択で一覧を絞り込む
///
/// # 引数
/// * `all` - サブスクリプションの全件（順序付き）
/// * `search_term` - 検索文字列（空の場合は絞り込まない、空白も文字として扱う）
/// * `selected` - カテゴリフィルタ
///
/// # 戻り値
/// 条件を満たすサブスクリプションのリスト（元の順序を保持）
///
/// # 条件
/// - 検索文字列が空、または名前かカテゴリラベルに部分一致（大文字小文字を無視）
/// - かつ、フィルタがAll、またはカテゴリが完全一致（こちらは大文字小文字を区別）
pub fn filter_subscriptions(
    all: &[Subscription],
    search_term: &str,
    selected: CategoryFilter,
) -> Vec<Subscription> {
    let term = search_term.to_lowercase();

    all.iter()
        .filter(|sub| {
            search_term.is_empty()
                || sub.name.to_lowercase().contains(&term)
                || sub.category.label().to_lowercase().contains(&term)
        })
        .filter(|sub| match selected {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => sub.category == category,
        })
        .cloned()
        .collect()
}

/// 全件からコストサマリを計算する
///
/// 集計対象はアクティブなサブスクリプションのみ。基準日は呼び出し側から
/// 明示的に渡します。
///
/// # 引数
/// * `all` - サブスクリプションの全件
/// * `today` - 更新アラート判定の基準日
///
/// # 戻り値
/// 月額合計・年額合計・まもなく更新される件数
pub fn compute_totals(all: &[Subscription], today: NaiveDate) -> CostSummary {
    let monthly_cost = all
        .iter()
        .filter(|sub| sub.status.is_active())
        .fold(0.0, |acc, sub| acc + sub.cost);

    let upcoming_renewal_count = all
        .iter()
        .filter(|sub| sub.status.is_active() && is_expiring_soon(sub.renewal_date, today))
        .count();

    CostSummary {
        monthly_cost,
        yearly_cost: monthly_cost * 12.0,
        upcoming_renewal_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::subscriptions::models::SubscriptionStatus;
    use chrono::Duration;
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;

    const EPSILON: f64 = 1e-9;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 26).unwrap()
    }

    fn subscription(
        id: i64,
        name: &str,
        cost: f64,
        category: Category,
        status: SubscriptionStatus,
        renewal_date: NaiveDate,
    ) -> Subscription {
        Subscription {
            id,
            user_id: 1,
            name: name.to_string(),
            cost,
            category,
            renewal_date,
            status,
            description: None,
        }
    }

    fn sample_list() -> Vec<Subscription> {
        vec![
            subscription(
                1,
                "Netflix",
                15.99,
                Category::Entertainment,
                SubscriptionStatus::Active,
                today() + Duration::days(10),
            ),
            subscription(
                2,
                "Spotify",
                9.99,
                Category::Music,
                SubscriptionStatus::Active,
                today() + Duration::days(3),
            ),
            subscription(
                3,
                "Figma",
                12.0,
                Category::Design,
                SubscriptionStatus::Cancelled,
                today() + Duration::days(2),
            ),
        ]
    }

    #[test]
    fn test_filter_identity() {
        // 空の検索文字列と「すべて」では全件がそのまま返る
        let all = sample_list();
        let filtered = filter_subscriptions(&all, "", CategoryFilter::All);
        assert_eq!(filtered, all);
    }

    #[test]
    fn test_filter_empty_input() {
        let filtered = filter_subscriptions(&[], "netflix", CategoryFilter::All);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_by_category_exact() {
        // カテゴリフィルタは完全一致のみを返す
        let all = sample_list();
        let filtered = filter_subscriptions(&all, "", CategoryFilter::Only(Category::Music));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Spotify");
    }

    #[test]
    fn test_search_case_insensitive() {
        let all = vec![subscription(
            1,
            "Netflix",
            15.99,
            Category::Entertainment,
            SubscriptionStatus::Active,
            today() + Duration::days(30),
        )];

        // 大文字小文字を無視して部分一致する
        let hit = filter_subscriptions(&all, "NET", CategoryFilter::All);
        assert_eq!(hit.len(), 1);

        // 一致しない文字列は除外される
        let miss = filter_subscriptions(&all, "xyz", CategoryFilter::All);
        assert!(miss.is_empty());
    }

    #[test]
    fn test_search_matches_category_label() {
        // 検索はカテゴリラベルにも部分一致する
        let all = sample_list();
        let filtered = filter_subscriptions(&all, "design", CategoryFilter::All);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Figma");
    }

    #[test]
    fn test_search_whitespace_is_literal() {
        // 空白のみの検索文字列はトリムせず文字として扱う
        let all = sample_list();
        let filtered = filter_subscriptions(&all, "   ", CategoryFilter::All);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_search_and_category_combined() {
        // 検索とカテゴリフィルタはAND条件
        let all = sample_list();
        let filtered =
            filter_subscriptions(&all, "spotify", CategoryFilter::Only(Category::Design));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_totals_empty() {
        let summary = compute_totals(&[], today());
        assert_eq!(summary.monthly_cost, 0.0);
        assert_eq!(summary.yearly_cost, 0.0);
        assert_eq!(summary.upcoming_renewal_count, 0);
    }

    #[test]
    fn test_totals_only_active_counted() {
        // アクティブでないサブスクリプションは合計に含まれない
        let all = vec![
            subscription(
                1,
                "A",
                10.0,
                Category::Other,
                SubscriptionStatus::Active,
                today() + Duration::days(30),
            ),
            subscription(
                2,
                "B",
                5.0,
                Category::Other,
                SubscriptionStatus::Cancelled,
                today() + Duration::days(30),
            ),
        ];

        let summary = compute_totals(&all, today());
        assert!((summary.monthly_cost - 10.0).abs() < EPSILON);
        assert!((summary.yearly_cost - 120.0).abs() < EPSILON);
    }

    #[test]
    fn test_totals_end_to_end_scenario() {
        // アクティブなSpotifyのみが合計と更新アラートの対象になる
        let all = vec![
            subscription(
                1,
                "Spotify",
                9.99,
                Category::Music,
                SubscriptionStatus::Active,
                today() + Duration::days(3),
            ),
            subscription(
                2,
                "Adobe",
                52.99,
                Category::Design,
                SubscriptionStatus::Inactive,
                today() + Duration::days(2),
            ),
        ];

        let summary = compute_totals(&all, today());
        assert!((summary.monthly_cost - 9.99).abs() < EPSILON);
        assert!((summary.yearly_cost - 119.88).abs() < EPSILON);
        assert_eq!(summary.upcoming_renewal_count, 1);
    }

    #[test]
    fn test_totals_renewal_count_respects_window() {
        // 更新アラートはアクティブかつ7日以内のもののみ
        let all = vec![
            subscription(
                1,
                "A",
                1.0,
                Category::Other,
                SubscriptionStatus::Active,
                today() + Duration::days(7),
            ),
            subscription(
                2,
                "B",
                1.0,
                Category::Other,
                SubscriptionStatus::Active,
                today() + Duration::days(8),
            ),
            subscription(
                3,
                "C",
                1.0,
                Category::Other,
                SubscriptionStatus::Active,
                today(),
            ),
        ];

        let summary = compute_totals(&all, today());
        assert_eq!(summary.upcoming_renewal_count, 1);
    }

    /// quickcheck用のサブスクリプション生成ラッパー
    #[derive(Debug, Clone)]
    struct ArbSubscription(Subscription);

    impl Arbitrary for ArbSubscription {
        fn arbitrary(g: &mut Gen) -> Self {
            let category = *g
                .choose(Category::all())
                .unwrap_or(&Category::Other);
            let status = *g
                .choose(&[
                    SubscriptionStatus::Active,
                    SubscriptionStatus::Inactive,
                    SubscriptionStatus::Cancelled,
                ])
                .unwrap_or(&SubscriptionStatus::Active);
            let name = *g
                .choose(&["Netflix", "Spotify", "Figma", "Notion", "Steam", ""])
                .unwrap_or(&"");
            let offset = i64::from(u8::arbitrary(g) % 30) - 10;

            ArbSubscription(Subscription {
                id: i64::from(u16::arbitrary(g)),
                user_id: 1,
                name: name.to_string(),
                cost: f64::from(u16::arbitrary(g)) / 100.0,
                category,
                renewal_date: NaiveDate::from_ymd_opt(2026, 8, 26).unwrap()
                    + Duration::days(offset),
                status,
                description: None,
            })
        }
    }

    #[quickcheck]
    fn prop_identity_filter(subs: Vec<ArbSubscription>) -> bool {
        // 空の検索と「すべて」は恒等写像
        let all: Vec<Subscription> = subs.into_iter().map(|s| s.0).collect();
        filter_subscriptions(&all, "", CategoryFilter::All) == all
    }

    #[quickcheck]
    fn prop_filtered_is_ordered_subset(subs: Vec<ArbSubscription>, pick: u8) -> bool {
        // フィルタ結果は元の順序を保った部分集合である
        let all: Vec<Subscription> = subs.into_iter().map(|s| s.0).collect();
        let category = Category::all()[usize::from(pick) % Category::all().len()];
        let filtered = filter_subscriptions(&all, "", CategoryFilter::Only(category));

        // すべて指定カテゴリに一致する
        if !filtered.iter().all(|sub| sub.category == category) {
            return false;
        }

        // 元のリストに同じ順序で現れる
        let mut remaining = all.iter();
        filtered
            .iter()
            .all(|sub| remaining.any(|original| original == sub))
    }

    #[quickcheck]
    fn prop_totals_never_negative(subs: Vec<ArbSubscription>) -> bool {
        // コストが非負なら合計も非負
        let all: Vec<Subscription> = subs.into_iter().map(|s| s.0).collect();
        let summary = compute_totals(&all, NaiveDate::from_ymd_opt(2026, 8, 26).unwrap());
        summary.monthly_cost >= 0.0
            && summary.yearly_cost >= 0.0
            && summary.upcoming_renewal_count <= all.len()
    }
}
