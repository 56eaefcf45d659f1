//! Разбор и отображение чисел.
//!
//! Формат вывода совпадает с кратчайшим представлением, которое печатает
//! исходный калькулятор: целые значения сохраняют `.0`, очень большие и очень
//! маленькие значения выводятся в экспоненциальной записи.
//!
//! # Примеры
//!
//! ```
//! use math_calculator::number::{format_number, parse_number};
//!
//! assert_eq!(parse_number(" 15.5 ").unwrap(), 15.5);
//! assert_eq!(format_number(20.0), "20.0");
//! assert_eq!(format_number(1e16), "1e+16");
//! ```

use std::num::ParseFloatError;

use thiserror::Error;

/// Показатель степени, начиная с которого используется экспоненциальная запись.
const SCIENTIFIC_UPPER_EXP: i32 = 16;
/// Показатель степени, ниже которого используется экспоненциальная запись.
const SCIENTIFIC_LOWER_EXP: i32 = -4;

/// Ошибка разбора числа.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum NumberError {
    /// Пустая строка.
    #[error("empty input")]
    Empty,
    /// Текст не является числом.
    #[error("'{text}' is not a number: {source}")]
    Invalid {
        /// Исходный текст (без пробелов по краям).
        text: String,
        /// Ошибка стандартной библиотеки.
        source: ParseFloatError,
    },
}

/// Разбирает число из строки, игнорируя пробелы по краям.
///
/// Принимает десятичную и экспоненциальную запись, а также `inf`, `infinity`
/// и `nan` в любом регистре.
///
/// # Ошибки
///
/// Возвращает [`NumberError`], если строка пуста или не является числом.
pub fn parse_number(input: &str) -> Result<f64, NumberError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(NumberError::Empty);
    }
    text.parse::<f64>().map_err(|source| NumberError::Invalid {
        text: text.to_owned(),
        source,
    })
}

/// Форматирует число для вывода пользователю.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        let text = if value.is_sign_negative() { "-inf" } else { "inf" };
        return text.to_owned();
    }

    // `{:e}` даёт кратчайшую мантиссу, например `1.5e-5` или `1e16`.
    let scientific = format!("{value:e}");
    let Some((mantissa, exp)) = scientific.split_once('e') else {
        return scientific;
    };
    let exp: i32 = exp.parse().unwrap_or_default();

    if value != 0.0 && !(SCIENTIFIC_LOWER_EXP..SCIENTIFIC_UPPER_EXP).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exp.abs());
    }

    let plain = value.to_string();
    if plain.contains('.') {
        plain
    } else {
        plain + ".0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain() {
        assert_eq!(parse_number("5"), Ok(5.0));
        assert_eq!(parse_number("15.5"), Ok(15.5));
        assert_eq!(parse_number("-4.25"), Ok(-4.25));
        assert_eq!(parse_number("+3"), Ok(3.0));
        assert_eq!(parse_number(".5"), Ok(0.5));
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(parse_number("  10  "), Ok(10.0));
        assert_eq!(parse_number("\t7\n"), Ok(7.0));
    }

    #[test]
    fn parse_exponent_and_specials() {
        assert_eq!(parse_number("1e3"), Ok(1000.0));
        assert_eq!(parse_number("2.5E-2"), Ok(0.025));
        assert_eq!(parse_number("inf"), Ok(f64::INFINITY));
        assert_eq!(parse_number("-Infinity"), Ok(f64::NEG_INFINITY));
        assert!(parse_number("NaN").unwrap().is_nan());
    }

    #[test]
    fn parse_errors() {
        assert_eq!(parse_number(""), Err(NumberError::Empty));
        assert_eq!(parse_number("   "), Err(NumberError::Empty));
        assert!(matches!(
            parse_number("abc"),
            Err(NumberError::Invalid { ref text, .. }) if text == "abc"
        ));
        assert!(parse_number("1 2").is_err());
        assert!(parse_number("1,5").is_err());
    }

    #[test]
    fn format_integral_keeps_decimal() {
        assert_eq!(format_number(20.0), "20.0");
        assert_eq!(format_number(0.0), "0.0");
        assert_eq!(format_number(-0.0), "-0.0");
        assert_eq!(format_number(-8.0), "-8.0");
        assert_eq!(format_number(1.1e15), "1100000000000000.0");
    }

    #[test]
    fn format_fractions() {
        assert_eq!(format_number(15.5), "15.5");
        assert_eq!(format_number(4.5), "4.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(0.0001), "0.0001");
    }

    #[test]
    fn format_scientific() {
        assert_eq!(format_number(1e16), "1e+16");
        assert_eq!(format_number(1.5e-5), "1.5e-05");
        assert_eq!(format_number(-2.5e20), "-2.5e+20");
        assert_eq!(format_number(1e100), "1e+100");
    }

    #[test]
    fn format_non_finite() {
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_number(f64::NAN), "nan");
    }
}
