#[cfg(test)]
mod tests {
    use crate::envelope::ApiResponse;
    use crate::goals::{PaymentGoalsList, PaymentGoalsOverview};

    const GOALS_BODY: &str = r##"{
        "success": true,
        "data": {
            "data": [{
                "id": 3,
                "name": "Dana darurat",
                "description": "Enam bulan pengeluaran",
                "amount": 4500000,
                "target_amount": 9000000,
                "progress_percent": 50,
                "status": {"id": 1, "name": "Berjalan", "color": "#3B82F6"},
                "formatted": {
                    "amount": "Rp 4.500.000",
                    "target_amount": "Rp 9.000.000",
                    "progress_percent": "50%"
                }
            }],
            "meta": {"total_records": 1, "total_pages": 1, "has_more_pages": false}
        }
    }"##;

    #[test]
    fn test_goals_list_deserialization() {
        let response: ApiResponse<PaymentGoalsList> = serde_json::from_str(GOALS_BODY).unwrap();
        let list = response.into_result().unwrap();

        assert_eq!(list.data.len(), 1);
        let goal = &list.data[0];
        assert_eq!(goal.status.name, "Berjalan");
        assert_eq!(goal.formatted.target_amount, "Rp 9.000.000");
        assert_eq!(goal.target_date, None);
        assert!((goal.progress_ratio() - 0.5).abs() < f64::EPSILON);
        assert!(!list.meta.has_more_pages);
    }

    #[test]
    fn test_formatted_fields_are_kept_verbatim() {
        let response: ApiResponse<PaymentGoalsList> = serde_json::from_str(GOALS_BODY).unwrap();
        let goal = response.into_result().unwrap().data.remove(0);
        let round_trip = serde_json::to_value(&goal).unwrap();
        assert_eq!(round_trip["formatted"]["progress_percent"], "50%");
        assert_eq!(round_trip["amount"], 4500000.0);
    }

    #[test]
    fn test_progress_ratio_is_clamped() {
        let response: ApiResponse<PaymentGoalsList> = serde_json::from_str(GOALS_BODY).unwrap();
        let mut goal = response.into_result().unwrap().data.remove(0);

        goal.progress_percent = 140.0;
        assert_eq!(goal.progress_ratio(), 1.0);
        goal.progress_percent = -3.0;
        assert_eq!(goal.progress_ratio(), 0.0);
        goal.progress_percent = f64::NAN;
        assert_eq!(goal.progress_ratio(), 0.0);
    }

    #[test]
    fn test_overview_deserialization() {
        let json = r#"{"success": true, "data": {"total_goals": 6, "completed": 4, "success_rate": "66,7%"}}"#;
        let response: ApiResponse<PaymentGoalsOverview> = serde_json::from_str(json).unwrap();
        let overview = response.into_result().unwrap();
        assert_eq!(overview.total_goals, 6);
        assert_eq!(overview.success_rate, "66,7%");
    }
}
