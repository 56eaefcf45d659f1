//! Интерактивный цикл калькулятора.
//!
//! [`Session`] работает с любыми [`BufRead`] и [`Write`], поэтому тесты
//! подставляют `io::Cursor` и `Vec<u8>` вместо консоли.
//!
//! Каждый проход цикла (меню, выбор, операнды, результат) выполняется внутри
//! одной границы ошибок: восстановимые ошибки выводятся пользователю, и цикл
//! продолжается.

use std::io::{BufRead, Write};

use log::{debug, info, warn};

use crate::CalcError;
use crate::arithmetic::Operation;
use crate::menu::{MENU, MenuChoice};
use crate::number::{format_number, parse_number};

/// Приветствие при запуске.
pub const WELCOME: &str = "Welcome to the Python Math Calculator!";
/// Сообщение при выборе пункта «Exit».
pub const FAREWELL: &str = "Thank you for using the Python Math Calculator!";
/// Сообщение при прерывании (Ctrl+C или конец ввода).
pub const GOODBYE: &str = "Exiting calculator. Goodbye!";

pub const CHOICE_PROMPT: &str = "Enter your choice (1-3): ";
pub const FIRST_NUMBER_PROMPT: &str = "Enter the first number: ";
pub const SECOND_NUMBER_PROMPT: &str = "Enter the second number: ";

pub const INVALID_NUMBER: &str = "Invalid input! Please enter a valid number.";
pub const INVALID_CHOICE: &str = "Invalid choice! Please select 1, 2, or 3.";

/// Чем закончился один проход цикла.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
}

/// Сеанс работы с калькулятором поверх произвольного ввода и вывода.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Создаёт сеанс.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Возвращает вывод сеанса.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Запускает цикл до выбора «Exit» или конца ввода.
    ///
    /// # Ошибки
    ///
    /// Возвращает [`CalcError`] только для невосстановимых ошибок ввода-вывода.
    pub fn run(&mut self) -> Result<(), CalcError> {
        writeln!(self.output, "{WELCOME}")?;

        loop {
            match self.cycle() {
                Ok(Step::Continue) => {}
                Ok(Step::Exit) => {
                    info!("exit selected");
                    writeln!(self.output, "{FAREWELL}")?;
                    return Ok(());
                }
                Err(CalcError::Interrupted) => {
                    info!("input closed, leaving");
                    writeln!(self.output, "\n\n{GOODBYE}")?;
                    return Ok(());
                }
                Err(err) if err.is_recoverable() => {
                    warn!("cycle failed: {err}");
                    writeln!(self.output, "An unexpected error occurred: {err}")?;
                    writeln!(self.output, "Please try again.")?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Запрашивает число, пока ввод не будет корректным.
    ///
    /// # Ошибки
    ///
    /// [`CalcError::Interrupted`] при конце ввода, [`CalcError::Io`] при ошибках
    /// чтения или записи.
    pub fn read_number(&mut self, prompt: &str) -> Result<f64, CalcError> {
        loop {
            let line = self.prompt(prompt)?;
            match parse_number(&line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!("rejected number: {err}");
                    writeln!(self.output, "{INVALID_NUMBER}")?;
                }
            }
        }
    }

    fn cycle(&mut self) -> Result<Step, CalcError> {
        writeln!(self.output, "\n{MENU}")?;

        let line = self.prompt(CHOICE_PROMPT)?;
        match MenuChoice::parse(&line) {
            Some(MenuChoice::Exit) => Ok(Step::Exit),
            Some(MenuChoice::Calculate(op)) => {
                self.calculate(op)?;
                Ok(Step::Continue)
            }
            None => {
                debug!("invalid menu choice: {:?}", line.trim());
                writeln!(self.output, "{INVALID_CHOICE}")?;
                Ok(Step::Continue)
            }
        }
    }

    fn calculate(&mut self, op: Operation) -> Result<f64, CalcError> {
        let a = self.read_number(FIRST_NUMBER_PROMPT)?;
        let b = self.read_number(SECOND_NUMBER_PROMPT)?;
        let result = op.apply(a, b);
        debug!("{op:?}({a}, {b}) = {result}");

        writeln!(self.output, "\n{} Result:", op.name())?;
        writeln!(
            self.output,
            "{} {} {} = {}",
            format_number(a),
            op.symbol(),
            format_number(b),
            format_number(result)
        )?;
        Ok(result)
    }

    /// Выводит приглашение и читает одну строку.
    fn prompt(&mut self, prompt: &str) -> Result<String, CalcError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CalcError::Interrupted);
        }
        Ok(line)
    }
}
