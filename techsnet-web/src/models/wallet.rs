use thiserror::Error;

/// Balance the demo wallet opens with, in TNC.
pub const OPENING_BALANCE: i64 = 500;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WalletError {
    #[error("Invalid amount")]
    InvalidAmount,
    #[error("Invalid amount or insufficient balance")]
    InsufficientBalance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdraw,
}

impl TransactionKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Deposit => "Deposit",
            Self::Withdraw => "Withdraw",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub date: String,
    pub kind: TransactionKind,
    pub status: &'static str,
    /// Signed amount; withdrawals are negative.
    pub amount: i64,
}

impl Transaction {
    fn completed(date: &str, kind: TransactionKind, amount: i64) -> Self {
        Self {
            date: date.to_string(),
            kind,
            status: "Completed",
            amount,
        }
    }

    /// `+100 TNC` / `-50 TNC`.
    pub fn signed_amount(&self) -> String {
        if self.amount > 0 {
            format!("+{} TNC", self.amount)
        } else {
            format!("{} TNC", self.amount)
        }
    }
}

/// In-memory wallet, newest transaction first. Nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    pub balance: i64,
    pub transactions: Vec<Transaction>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            balance: OPENING_BALANCE,
            transactions: vec![
                Transaction::completed("2024-05-08", TransactionKind::Deposit, 100),
                Transaction::completed("2024-05-01", TransactionKind::Withdraw, -50),
            ],
        }
    }
}

fn parse_amount(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok().filter(|amount| *amount > 0)
}

impl Ledger {
    pub fn deposit(&mut self, input: &str, today: &str) -> Result<(), WalletError> {
        let amount = parse_amount(input).ok_or(WalletError::InvalidAmount)?;
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(WalletError::InvalidAmount)?;
        self.transactions.insert(
            0,
            Transaction::completed(today, TransactionKind::Deposit, amount),
        );
        Ok(())
    }

    pub fn withdraw(&mut self, input: &str, today: &str) -> Result<(), WalletError> {
        let amount = parse_amount(input)
            .filter(|amount| *amount <= self.balance)
            .ok_or(WalletError::InsufficientBalance)?;
        self.balance -= amount;
        self.transactions.insert(
            0,
            Transaction::completed(today, TransactionKind::Withdraw, -amount),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_with_sample_history() {
        let ledger = Ledger::default();
        assert_eq!(ledger.balance, 500);
        assert_eq!(ledger.transactions.len(), 2);
        assert_eq!(ledger.transactions[0].signed_amount(), "+100 TNC");
        assert_eq!(ledger.transactions[1].signed_amount(), "-50 TNC");
    }

    #[test]
    fn deposit_prepends_and_credits() {
        let mut ledger = Ledger::default();
        ledger.deposit(" 25 ", "2026-01-02").unwrap();
        assert_eq!(ledger.balance, 525);
        assert_eq!(ledger.transactions[0].date, "2026-01-02");
        assert_eq!(ledger.transactions[0].kind, TransactionKind::Deposit);
    }

    #[test]
    fn deposit_rejects_non_positive_or_garbage() {
        let mut ledger = Ledger::default();
        for input in ["0", "-5", "abc", ""] {
            assert_eq!(
                ledger.deposit(input, "2026-01-02"),
                Err(WalletError::InvalidAmount)
            );
        }
        assert_eq!(ledger, Ledger::default());
    }

    #[test]
    fn deposit_that_would_overflow_is_rejected() {
        let mut ledger = Ledger::default();
        assert_eq!(
            ledger.deposit(&i64::MAX.to_string(), "2026-01-02"),
            Err(WalletError::InvalidAmount)
        );
        assert_eq!(ledger, Ledger::default());

        let mut full = Ledger {
            balance: i64::MAX - 1,
            transactions: Vec::new(),
        };
        full.deposit("1", "2026-01-02").unwrap();
        assert_eq!(full.balance, i64::MAX);
    }

    #[test]
    fn withdraw_limited_by_balance() {
        let mut ledger = Ledger::default();
        assert_eq!(
            ledger.withdraw("501", "2026-01-02"),
            Err(WalletError::InsufficientBalance)
        );
        ledger.withdraw("500", "2026-01-02").unwrap();
        assert_eq!(ledger.balance, 0);
        assert_eq!(ledger.transactions[0].signed_amount(), "-500 TNC");
    }
}
