use chrono::{DateTime, Days, NaiveDate, NaiveTime, TimeZone, Utc};
use uuid::Uuid;

use crate::domain::{
    daily_summary::entities::DailySummary, food_entry::entities::FoodEntry,
    profile::entities::NutritionTargets,
};

/// UTC bounds `[start, end)` of a calendar date.
pub fn day_bounds(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
    let end = date
        .checked_add_days(Days::new(1))
        .map(|next| Utc.from_utc_datetime(&next.and_time(NaiveTime::MIN)))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);

    (start, end)
}

/// Sum every entry of `user_id` created on `date` and flag each target met.
///
/// Entries belonging to another user or another date are ignored. Summation
/// runs in `(created_at, id)` order so the result does not depend on the
/// order the store returned rows in.
pub fn summarize(
    user_id: Uuid,
    date: NaiveDate,
    entries: &[FoodEntry],
    targets: &NutritionTargets,
) -> DailySummary {
    let mut day: Vec<&FoodEntry> = entries
        .iter()
        .filter(|e| e.user_id == user_id && e.created_at.date_naive() == date)
        .collect();
    day.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

    let mut summary = DailySummary {
        id: DailySummary::id_for(user_id, date),
        user_id,
        date,
        total_calories: 0.0,
        total_protein_g: 0.0,
        total_carbs_g: 0.0,
        total_fat_g: 0.0,
        total_fiber_g: 0.0,
        total_sugar_g: 0.0,
        total_sodium_mg: 0.0,
        meals_logged: 0,
        goal_calories_met: false,
        goal_protein_met: false,
        goal_carbs_met: false,
        goal_fat_met: false,
    };

    for entry in day {
        summary.total_calories += entry.calories;
        summary.total_protein_g += entry.protein_g.unwrap_or(0.0);
        summary.total_carbs_g += entry.carbs_g.unwrap_or(0.0);
        summary.total_fat_g += entry.fat_g.unwrap_or(0.0);
        summary.total_fiber_g += entry.fiber_g.unwrap_or(0.0);
        summary.total_sugar_g += entry.sugar_g.unwrap_or(0.0);
        summary.total_sodium_mg += entry.sodium_mg.unwrap_or(0.0);
        summary.meals_logged += 1;
    }

    summary.goal_calories_met = summary.total_calories >= targets.calories;
    summary.goal_protein_met = summary.total_protein_g >= targets.protein_g;
    summary.goal_carbs_met = summary.total_carbs_g >= targets.carbs_g;
    summary.goal_fat_met = summary.total_fat_g >= targets.fat_g;

    summary
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::domain::food_entry::entities::MealType;

    fn targets() -> NutritionTargets {
        NutritionTargets {
            calories: 2000.0,
            protein_g: 150.0,
            carbs_g: 225.0,
            fat_g: 65.0,
        }
    }

    fn entry(user_id: Uuid, at: DateTime<Utc>, calories: f64, protein_g: f64) -> FoodEntry {
        FoodEntry {
            id: Uuid::new_v4(),
            user_id,
            image_url: None,
            food_name: "Meal".to_string(),
            description: None,
            calories,
            protein_g: Some(protein_g),
            carbs_g: Some(10.0),
            fat_g: None,
            fiber_g: Some(1.0),
            sugar_g: None,
            sodium_mg: Some(100.0),
            serving_size: None,
            meal_type: MealType::Lunch,
            confidence_score: Some(0.9),
            analyzed_at: at,
            created_at: at,
        }
    }

    fn noon(date: NaiveDate) -> DateTime<Utc> {
        day_bounds(date).0 + Duration::hours(12)
    }

    #[test]
    fn day_bounds_cover_one_utc_day() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let (start, end) = day_bounds(date);
        assert_eq!(end - start, Duration::days(1));
        assert_eq!(start.date_naive(), date);
    }

    #[test]
    fn sums_only_the_users_entries_for_the_date() {
        let user = Uuid::new_v4();
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let yesterday = date.pred_opt().unwrap();

        let entries = vec![
            entry(user, noon(date), 450.0, 20.0),
            entry(user, noon(date) + Duration::hours(6), 700.0, 140.0),
            entry(user, noon(yesterday), 900.0, 50.0),
            entry(Uuid::new_v4(), noon(date), 300.0, 10.0),
        ];

        let summary = summarize(user, date, &entries, &targets());

        assert_eq!(summary.total_calories, 1150.0);
        assert_eq!(summary.total_protein_g, 160.0);
        assert_eq!(summary.total_carbs_g, 20.0);
        assert_eq!(summary.total_fat_g, 0.0);
        assert_eq!(summary.total_sodium_mg, 200.0);
        assert_eq!(summary.meals_logged, 2);
        assert!(!summary.goal_calories_met);
        assert!(summary.goal_protein_met);
        assert!(!summary.goal_fat_met);
    }

    #[test]
    fn recompute_is_idempotent_and_order_independent() {
        let user = Uuid::new_v4();
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let mut entries = vec![
            entry(user, noon(date), 100.1, 3.3),
            entry(user, noon(date) + Duration::minutes(5), 200.2, 4.4),
            entry(user, noon(date) + Duration::minutes(9), 300.3, 5.5),
        ];

        let first = summarize(user, date, &entries, &targets());
        entries.reverse();
        let second = summarize(user, date, &entries, &targets());

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
        assert_eq!(first.id, DailySummary::id_for(user, date));
    }

    #[test]
    fn adding_an_entry_adds_exactly_its_calories() {
        let user = Uuid::new_v4();
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let mut entries = vec![entry(user, noon(date), 450.0, 20.0)];

        let before = summarize(user, date, &entries, &targets());
        entries.push(entry(user, noon(date) + Duration::hours(1), 320.0, 12.0));
        let after = summarize(user, date, &entries, &targets());

        assert_eq!(after.total_calories - before.total_calories, 320.0);
        assert_eq!(after.meals_logged, before.meals_logged + 1);
    }

    #[test]
    fn target_met_when_sum_reaches_target() {
        let user = Uuid::new_v4();
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let entries = vec![entry(user, noon(date), 2000.0, 150.0)];

        let summary = summarize(user, date, &entries, &targets());
        assert!(summary.goal_calories_met);
        assert!(summary.goal_protein_met);
    }

    #[test]
    fn empty_day_is_all_zero() {
        let user = Uuid::new_v4();
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let summary = summarize(user, date, &[], &targets());
        assert_eq!(summary.meals_logged, 0);
        assert_eq!(summary.total_calories, 0.0);
        assert!(!summary.goal_calories_met);
    }
}
