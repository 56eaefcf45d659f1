//! Главное меню калькулятора и разбор выбора пользователя.

use crate::arithmetic::Operation;

/// Текст меню. Перед ним выводится пустая строка.
pub const MENU: &str = "\
=== Python Math Calculator ===
1. Addition
2. Subtraction
3. Exit
================================";

/// Пункт меню, выбранный пользователем.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Выполнить арифметическую операцию.
    Calculate(Operation),
    /// Завершить работу.
    Exit,
}

impl MenuChoice {
    /// Разбирает ввод пользователя. Пробелы по краям игнорируются.
    ///
    /// Возвращает `None` для любого текста, кроме `1`, `2` и `3`.
    ///
    /// ```
    /// use math_calculator::arithmetic::Operation;
    /// use math_calculator::menu::MenuChoice;
    ///
    /// assert_eq!(MenuChoice::parse(" 1 "), Some(MenuChoice::Calculate(Operation::Addition)));
    /// assert_eq!(MenuChoice::parse("9"), None);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Calculate(Operation::Addition)),
            "2" => Some(Self::Calculate(Operation::Subtraction)),
            "3" => Some(Self::Exit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_choices() {
        assert_eq!(
            MenuChoice::parse("1"),
            Some(MenuChoice::Calculate(Operation::Addition))
        );
        assert_eq!(
            MenuChoice::parse("2\n"),
            Some(MenuChoice::Calculate(Operation::Subtraction))
        );
        assert_eq!(MenuChoice::parse("  3  "), Some(MenuChoice::Exit));
    }

    #[test]
    fn parse_invalid_choices() {
        for input in ["", "0", "4", "9", "1.0", "01", "one", "1 2"] {
            assert_eq!(MenuChoice::parse(input), None, "input: {input:?}");
        }
    }

    #[test]
    fn menu_layout() {
        let lines: Vec<&str> = MENU.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "=== Python Math Calculator ===");
        assert_eq!(lines[4], "================================");
    }
}
