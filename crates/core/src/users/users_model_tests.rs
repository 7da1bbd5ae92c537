//! Tests for the user model: balance, emergency fund and goal operations.

#[cfg(test)]
mod tests {
    use crate::accounts::{Account, Credential};
    use crate::errors::{Error, ValidationError};
    use crate::goals::NewGoal;
    use crate::users::{Transaction, User, SENDER_NAMES};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    const VALID_CODE: &str = "09171234567";

    fn create_test_user() -> User {
        User::new("alice", Credential::new("Str0ng!Pw"))
    }

    fn funded_user(amount: Decimal) -> User {
        let mut user = create_test_user();
        user.add_balance(amount).unwrap();
        user
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    // ==================== Balance Tests ====================

    #[test]
    fn test_new_user_starts_empty() {
        let user = create_test_user();
        assert_eq!(user.username(), "alice");
        assert_eq!(user.balance(), Decimal::ZERO);
        assert_eq!(user.emergency_fund(), Decimal::ZERO);
        assert!(user.goals().is_empty());
        assert!(user.transaction_history().is_empty());
    }

    #[test]
    fn test_verify_credential() {
        let user = create_test_user();
        assert!(user.verify_credential("Str0ng!Pw"));
        assert!(!user.verify_credential("wrong"));
    }

    #[test]
    fn test_add_balance_logs_transaction() {
        let user = funded_user(dec!(100));
        assert_eq!(user.balance(), dec!(100));
        assert_eq!(
            user.transaction_history().entries(),
            &[Transaction::BalanceAdded { amount: dec!(100) }]
        );
    }

    #[test]
    fn test_add_balance_rejects_non_positive_amounts() {
        let mut user = funded_user(dec!(10));
        for amount in [dec!(0), dec!(-25)] {
            let err = user.add_balance(amount).unwrap_err();
            assert!(matches!(
                err,
                Error::Validation(ValidationError::NonPositiveAmount { .. })
            ));
        }
        assert_eq!(user.balance(), dec!(10));
        assert_eq!(user.transaction_history().len(), 1);
    }

    fn assert_amount_too_large(err: Error) {
        assert_eq!(
            err,
            Error::Validation(ValidationError::InvalidInput(
                "Amount is too large".to_string()
            ))
        );
    }

    #[test]
    fn test_add_balance_rejects_overflow() {
        let mut user = funded_user(Decimal::MAX);

        assert_amount_too_large(user.add_balance(Decimal::ONE).unwrap_err());
        assert_eq!(user.balance(), Decimal::MAX);
        assert_eq!(user.transaction_history().len(), 1);
    }

    #[test]
    fn test_add_emergency_fund_rejects_overflow() {
        let mut user = funded_user(Decimal::MAX);
        user.add_emergency_fund(Decimal::ONE).unwrap();
        user.add_balance(Decimal::ONE).unwrap();

        assert_amount_too_large(user.add_emergency_fund(Decimal::MAX).unwrap_err());
        assert_eq!(user.balance(), Decimal::MAX);
        assert_eq!(user.emergency_fund(), Decimal::ONE);
        assert_eq!(user.transaction_history().len(), 3);
    }

    #[test]
    fn test_delete_goal_keeps_goal_when_refund_overflows() {
        let mut user = funded_user(dec!(100));
        user.add_goal(NewGoal::new("Car", dec!(50))).unwrap();
        user.deposit_to_goal("Car", dec!(30)).unwrap();
        user.add_balance(Decimal::MAX - dec!(70)).unwrap();

        assert_amount_too_large(user.delete_goal("Car").unwrap_err());
        assert_eq!(user.balance(), Decimal::MAX);
        assert_eq!(user.find_goal("Car").unwrap().saved_amount(), dec!(30));
    }

    #[test]
    fn test_withdraw_more_than_balance_is_rejected() {
        let mut user = funded_user(dec!(100));
        let err = user
            .withdraw_balance(dec!(150), VALID_CODE, &mut rng())
            .unwrap_err();

        assert_eq!(
            err,
            Error::InsufficientBalance {
                requested: dec!(150),
                available: dec!(100),
            }
        );
        assert_eq!(user.balance(), dec!(100));
        assert!(user.ensure_can_withdraw(dec!(150)).is_err());
    }

    #[test]
    fn test_withdraw_with_valid_code() {
        let mut user = funded_user(dec!(100));
        let withdrawal = user
            .withdraw_balance(dec!(40), VALID_CODE, &mut rng())
            .unwrap();

        assert_eq!(withdrawal.amount, dec!(40));
        assert!(SENDER_NAMES.contains(&withdrawal.sender));
        assert_eq!(user.balance(), dec!(60));
        assert_eq!(
            user.transaction_history().entries().last(),
            Some(&Transaction::BalanceWithdrawn { amount: dec!(40) })
        );
    }

    #[test]
    fn test_withdraw_entire_balance() {
        let mut user = funded_user(dec!(100));
        user.withdraw_balance(dec!(100), VALID_CODE, &mut rng()).unwrap();
        assert_eq!(user.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_withdraw_with_malformed_code_keeps_balance() {
        let mut user = funded_user(dec!(100));
        for code in ["12345", "abcdefghijk", "091712345678"] {
            let err = user.withdraw_balance(dec!(40), code, &mut rng()).unwrap_err();
            assert_eq!(err, Error::VerificationFailed);
        }
        assert_eq!(user.balance(), dec!(100));
        assert_eq!(user.transaction_history().len(), 1);
    }

    #[test]
    fn test_add_emergency_fund_moves_money() {
        let mut user = funded_user(dec!(100));
        user.add_emergency_fund(dec!(25)).unwrap();

        assert_eq!(user.balance(), dec!(75));
        assert_eq!(user.emergency_fund(), dec!(25));
        assert_eq!(
            user.transaction_history().entries().last().unwrap().to_string(),
            "Added 25 to Emergency Fund."
        );
    }

    #[test]
    fn test_add_emergency_fund_rejects_overdraft() {
        let mut user = funded_user(dec!(10));
        let err = user.add_emergency_fund(dec!(10.01)).unwrap_err();
        assert!(matches!(err, Error::InsufficientBalance { .. }));
        assert_eq!(user.balance(), dec!(10));
        assert_eq!(user.emergency_fund(), Decimal::ZERO);
    }

    // ==================== Goal Tests ====================

    #[test]
    fn test_goal_round_trip() {
        let mut user = funded_user(dec!(100));
        user.add_goal(NewGoal::new("Car", dec!(50))).unwrap();

        let deposit = user.deposit_to_goal("Car", dec!(30)).unwrap();
        assert!(!deposit.outcome.is_clamped());
        assert_eq!(user.balance(), dec!(70));
        assert_eq!(user.find_goal("car").unwrap().saved_amount(), dec!(30));

        let deleted = user.delete_goal("Car").unwrap();
        assert_eq!(deleted.saved_amount(), dec!(30));
        assert_eq!(user.balance(), dec!(100));
        assert!(user.goals().is_empty());
    }

    #[test]
    fn test_deposit_beyond_target_still_deducts_full_amount() {
        let mut user = funded_user(dec!(200));
        user.add_goal(NewGoal::new("Trip", dec!(100))).unwrap();

        let deposit = user.deposit_to_goal("Trip", dec!(150)).unwrap();

        assert_eq!(user.find_goal("Trip").unwrap().saved_amount(), dec!(100));
        assert_eq!(user.balance(), dec!(50));
        assert!(deposit.outcome.is_clamped());
        assert_eq!(deposit.outcome.dropped(), dec!(50));
    }

    #[test]
    fn test_deposit_to_missing_goal() {
        let mut user = funded_user(dec!(100));
        let err = user.deposit_to_goal("Boat", dec!(10)).unwrap_err();
        assert_eq!(err, Error::GoalNotFound("Boat".to_string()));
        assert_eq!(user.balance(), dec!(100));
    }

    #[test]
    fn test_deposit_more_than_balance() {
        let mut user = funded_user(dec!(20));
        user.add_goal(NewGoal::new("Car", dec!(50))).unwrap();

        let err = user.deposit_to_goal("car", dec!(30)).unwrap_err();
        assert!(matches!(err, Error::InsufficientBalance { .. }));
        assert_eq!(user.balance(), dec!(20));
        assert_eq!(user.find_goal("Car").unwrap().saved_amount(), Decimal::ZERO);
    }

    #[test]
    fn test_goal_lookup_uses_first_match() {
        let mut user = funded_user(dec!(100));
        user.add_goal(NewGoal::new("Car", dec!(50))).unwrap();
        user.add_goal(NewGoal::new("CAR", dec!(80))).unwrap();

        user.deposit_to_goal("car", dec!(10)).unwrap();

        assert_eq!(user.goals()[0].saved_amount(), dec!(10));
        assert_eq!(user.goals()[1].saved_amount(), Decimal::ZERO);
    }

    #[test]
    fn test_delete_missing_goal() {
        let mut user = funded_user(dec!(100));
        let err = user.delete_goal("Car").unwrap_err();
        assert_eq!(err, Error::GoalNotFound("Car".to_string()));
    }

    #[test]
    fn test_goals_keep_insertion_order() {
        let mut user = create_test_user();
        for name in ["Car", "Trip", "House"] {
            user.add_goal(NewGoal::new(name, dec!(10))).unwrap();
        }
        let names: Vec<&str> = user.goals().iter().map(|g| g.name()).collect();
        assert_eq!(names, vec!["Car", "Trip", "House"]);
    }

    // ==================== Transfer Tests ====================

    fn user_with_two_goals() -> User {
        let mut user = funded_user(dec!(100));
        user.add_goal(NewGoal::new("Car", dec!(50))).unwrap();
        user.add_goal(NewGoal::new("Trip", dec!(40))).unwrap();
        user.deposit_to_goal("Car", dec!(50)).unwrap();
        user
    }

    #[test]
    fn test_transfer_between_goals() {
        let mut user = user_with_two_goals();
        let transfer = user.transfer_between_goals("car", "TRIP", dec!(20)).unwrap();

        assert_eq!(transfer.from, "Car");
        assert_eq!(transfer.to, "Trip");
        assert_eq!(user.find_goal("Car").unwrap().saved_amount(), dec!(30));
        assert_eq!(user.find_goal("Trip").unwrap().saved_amount(), dec!(20));
        assert_eq!(user.balance(), dec!(50));
        assert_eq!(
            user.transaction_history().entries().last().unwrap().to_string(),
            "Transferred 20 from Car to Trip"
        );
    }

    #[test]
    fn test_transfer_clamps_at_target_goal() {
        let mut user = user_with_two_goals();
        let transfer = user.transfer_between_goals("Car", "Trip", dec!(50)).unwrap();

        assert_eq!(user.find_goal("Car").unwrap().saved_amount(), Decimal::ZERO);
        assert_eq!(user.find_goal("Trip").unwrap().saved_amount(), dec!(40));
        assert!(transfer.deposited.is_clamped());
        assert_eq!(transfer.deposited.dropped(), dec!(10));
    }

    #[test]
    fn test_transfer_with_insufficient_goal_funds() {
        let mut user = user_with_two_goals();
        let err = user
            .transfer_between_goals("Trip", "Car", dec!(1))
            .unwrap_err();

        assert_eq!(
            err,
            Error::InsufficientGoalFunds {
                goal: "Trip".to_string(),
                requested: dec!(1),
                available: Decimal::ZERO,
            }
        );
    }

    #[test]
    fn test_transfer_with_missing_goal_changes_nothing() {
        let mut user = user_with_two_goals();
        let history_len = user.transaction_history().len();

        let err = user.transfer_between_goals("Car", "Boat", dec!(10)).unwrap_err();
        assert_eq!(err, Error::GoalNotFound("Boat".to_string()));
        let err = user.transfer_between_goals("Boat", "Car", dec!(10)).unwrap_err();
        assert_eq!(err, Error::GoalNotFound("Boat".to_string()));

        assert_eq!(user.find_goal("Car").unwrap().saved_amount(), dec!(50));
        assert_eq!(user.transaction_history().len(), history_len);
    }

    #[test]
    fn test_transfer_to_same_goal_is_rejected() {
        let mut user = user_with_two_goals();
        let err = user.transfer_between_goals("Car", "car", dec!(10)).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidInput(_))
        ));
        assert_eq!(user.find_goal("Car").unwrap().saved_amount(), dec!(50));
    }

    // ==================== Details & History Tests ====================

    #[test]
    fn test_details_include_goal_savings() {
        let mut user = user_with_two_goals();
        user.add_emergency_fund(dec!(10)).unwrap();

        let details = user.details();
        assert_eq!(details.username, "alice");
        assert_eq!(details.balance, dec!(40));
        assert_eq!(details.emergency_fund, dec!(10));
        assert_eq!(details.goal_count, 2);
        assert_eq!(details.saved_in_goals, dec!(50));
        assert_eq!(details.net_worth(), dec!(100));
    }

    #[test]
    fn test_history_renders_in_order() {
        let user = user_with_two_goals();
        let lines: Vec<String> = user
            .transaction_history()
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(
            lines,
            vec![
                "Added 100 to balance.",
                "Goal 'Car' created with target 50",
                "Goal 'Trip' created with target 40",
                "Deposited 50 to goal: Car",
            ]
        );
    }

    #[test]
    fn test_transaction_serialization_is_tagged() {
        let json = serde_json::to_value(Transaction::GoalDeposit {
            goal: "Car".to_string(),
            amount: dec!(30),
        })
        .unwrap();
        assert_eq!(json["type"], "GOAL_DEPOSIT");
        assert_eq!(json["goal"], "Car");
    }
}
