use serde::{Deserialize, Serialize};

/// Subscription plans offered on the subscription page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plan {
    Monthly,
    Yearly,
}

impl Plan {
    pub const ALL: [Self; 2] = [Self::Monthly, Self::Yearly];

    /// Price charged at checkout, in dollars.
    #[must_use]
    pub fn amount(self) -> f64 {
        match self {
            Self::Monthly => 9.99,
            Self::Yearly => 99.0,
        }
    }

    /// Billing period suffix, e.g. `/month`.
    #[must_use]
    pub fn period(self) -> &'static str {
        match self {
            Self::Monthly => "/month",
            Self::Yearly => "/year",
        }
    }

    /// Translation key of the plan title.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Self::Monthly => "subscription.plans.monthly",
            Self::Yearly => "subscription.plans.yearly",
        }
    }

    /// Percentage saved by paying yearly instead of twelve monthly charges.
    #[must_use]
    pub fn yearly_savings_percent() -> u32 {
        let monthly_total = Self::Monthly.amount() * 12.0;
        let saved = (monthly_total - Self::Yearly.amount()) / monthly_total * 100.0;
        // Bounded to 0..=100 by construction.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = saved.round() as u32;
        percent
    }
}

/// Body of `POST /create-payment-intent`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentIntentRequest {
    pub amount: f64,
}

impl From<Plan> for PaymentIntentRequest {
    fn from(plan: Plan) -> Self {
        Self {
            amount: plan.amount(),
        }
    }
}

/// Response of `POST /create-payment-intent`: the hosted checkout URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentIntentResponse {
    pub url: String,
}

/// Response of `GET /subscription?email=`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubscriptionRecord {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub next_billing_date: Option<String>,
}

impl SubscriptionRecord {
    /// Whether the record describes a live paid plan.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|status| status.eq_ignore_ascii_case("active"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_amounts() {
        assert!((Plan::Monthly.amount() - 9.99).abs() < f64::EPSILON);
        assert!((Plan::Yearly.amount() - 99.0).abs() < f64::EPSILON);
        assert_eq!(Plan::yearly_savings_percent(), 17);
    }

    #[test]
    fn payment_request_from_plan() {
        let request = PaymentIntentRequest::from(Plan::Yearly);
        assert_eq!(serde_json::to_string(&request).unwrap(), r#"{"amount":99.0}"#);
    }

    #[test]
    fn subscription_record_activity() {
        let record: SubscriptionRecord =
            serde_json::from_str(r#"{"email":"a@b.com","plan":"monthly","status":"Active"}"#)
                .unwrap();
        assert!(record.is_active());
        assert!(!SubscriptionRecord::default().is_active());
    }
}
