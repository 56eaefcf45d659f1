//! # math_calculator
//!
//! Консольный калькулятор со сложением и вычитанием.
//!
//! Поддерживает:
//! - Числа с плавающей точкой (`f64`), включая `inf` и `nan`
//! - Операции: сложение и вычитание
//! - Повторный запрос при некорректном вводе
//!
//! # Пример использования
//!
//! ```
//! use std::io::Cursor;
//!
//! use math_calculator::Session;
//!
//! let mut session = Session::new(Cursor::new("1\n15.5\n4.5\n3\n"), Vec::new());
//! session.run().unwrap();
//!
//! let out = String::from_utf8(session.into_output()).unwrap();
//! assert!(out.contains("15.5 + 4.5 = 20.0"));
//! ```

pub mod arithmetic;
pub mod menu;
pub mod number;
pub mod session;

use std::io;

pub use arithmetic::{Operation, add, subtract};
pub use session::Session;

/// Общий тип ошибки калькулятора.
#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    /// Ошибка чтения или записи.
    #[error("{0}")]
    Io(#[from] io::Error),

    /// Ввод закончился (Ctrl+D).
    #[error("input closed")]
    Interrupted,
}

impl CalcError {
    /// Можно ли продолжить работу после этой ошибки.
    ///
    /// Восстановимой считается только строка, не являющаяся UTF-8: она уже
    /// прочитана, и следующий проход цикла начнётся со следующей строки.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(err) => err.kind() == io::ErrorKind::InvalidData,
            Self::Interrupted => false,
        }
    }
}

/// Запускает калькулятор на stdin/stdout.
///
/// # Ошибки
///
/// Возвращает [`CalcError`], если stdin нельзя прочитать или stdout записать.
pub fn run() -> Result<(), CalcError> {
    Session::new(io::stdin().lock(), io::stdout()).run()
}
