//! Арифметические операции над `f64`.
//!
//! Обе операции тотальны: переполнение даёт бесконечность, `NaN` распространяется
//! по обычным правилам IEEE 754.
//!
//! # Примеры
//!
//! ```
//! use math_calculator::arithmetic::{Operation, add, subtract};
//!
//! assert_eq!(add(15.5, 4.5), 20.0);
//! assert_eq!(subtract(10.0, 10.0), 0.0);
//! assert_eq!(Operation::Subtraction.apply(5.0, 3.0), 2.0);
//! ```

/// Сумма двух чисел.
#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Разность двух чисел (`a - b`).
#[must_use]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Операция, выбранная в меню.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Сложение.
    Addition,
    /// Вычитание.
    Subtraction,
}

impl Operation {
    /// Применить операцию к операндам.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Addition => add(a, b),
            Self::Subtraction => subtract(a, b),
        }
    }

    /// Название операции для строки результата.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Addition => "Addition",
            Self::Subtraction => "Subtraction",
        }
    }

    /// Символ оператора.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Addition => '+',
            Self::Subtraction => '-',
        }
    }
}
