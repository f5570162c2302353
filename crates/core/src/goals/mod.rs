//! Goals module - payment goal models.

mod goals_model;
mod goals_model_tests;

pub use goals_model::{
    FormattedGoalAmounts, GoalStatus, PaymentGoal, PaymentGoalsList, PaymentGoalsOverview,
};
