use crate::categories::TransactionType;

/// Default categories seeded once at startup and visible to every user.
pub const DEFAULT_CATEGORIES: [(&str, TransactionType); 7] = [
    ("Salary", TransactionType::Income),
    ("Food", TransactionType::Expense),
    ("Rent", TransactionType::Expense),
    ("Transportation", TransactionType::Expense),
    ("Entertainment", TransactionType::Expense),
    ("Healthcare", TransactionType::Expense),
    ("Utilities", TransactionType::Expense),
];

/// Decimal places kept when rounding a goal's progress percentage.
pub const PERCENTAGE_DECIMAL_PRECISION: u32 = 2;
