use std::io::{BufRead, Write};

use chrono::NaiveDate;
use log::debug;
use tally_client::commands::{add, delete, summary};
use tally_client::{ClientResult, ExpenseBook, Store};

use crate::output::menu_text::{
    ADDED, AMOUNT_PROMPT, CATEGORY_PROMPT, DATE_PROMPT, DELETE_PROMPT, GOODBYE, INVALID_CHOICE,
    MENU, MENU_PROMPT, NO_EXPENSES, NOTHING_TO_DELETE,
};
use crate::output::{render_delete_listing, render_delete_outcome, render_error, render_summary};
use crate::terminal::Terminal;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MenuChoice {
    Add,
    Summary,
    Delete,
    Exit,
}

impl MenuChoice {
    /// Matches the raw answer exactly; surrounding whitespace is not ignored.
    pub fn parse(answer: &str) -> Option<Self> {
        match answer {
            "1" => Some(Self::Add),
            "2" => Some(Self::Summary),
            "3" => Some(Self::Delete),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Flow {
    Continue,
    Exit,
}

/// The menu loop. Owns the book for the lifetime of the session and hands it
/// to each operation by reference.
pub struct Session<R, W> {
    store: Store,
    book: ExpenseBook,
    terminal: Terminal<R, W>,
    today: fn() -> NaiveDate,
}

impl<R, W> Session<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(
        store: Store,
        book: ExpenseBook,
        terminal: Terminal<R, W>,
        today: fn() -> NaiveDate,
    ) -> Self {
        Self {
            store,
            book,
            terminal,
            today,
        }
    }

    /// Runs until the user picks Exit. Input errors are reported and the
    /// menu comes back; any other error ends the session.
    pub fn run(&mut self) -> ClientResult<()> {
        loop {
            self.terminal.write_line(MENU)?;
            let answer = self.terminal.prompt(MENU_PROMPT)?;
            match self.dispatch(&answer) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(error) if error.is_recoverable() => {
                    debug!("operation aborted: {} ({})", error.message, error.code);
                    self.terminal.write_line(&render_error(&error))?;
                }
                Err(error) => return Err(error),
            }
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (ExpenseBook, Terminal<R, W>) {
        (self.book, self.terminal)
    }

    fn dispatch(&mut self, answer: &str) -> ClientResult<Flow> {
        match MenuChoice::parse(answer) {
            Some(MenuChoice::Add) => self.add()?,
            Some(MenuChoice::Summary) => self.summary()?,
            Some(MenuChoice::Delete) => self.delete()?,
            Some(MenuChoice::Exit) => {
                self.terminal.write_line(GOODBYE)?;
                return Ok(Flow::Exit);
            }
            None => self.terminal.write_line(INVALID_CHOICE)?,
        }
        Ok(Flow::Continue)
    }

    fn add(&mut self) -> ClientResult<()> {
        let amount_answer = self.terminal.prompt(AMOUNT_PROMPT)?;
        let amount = add::parse_amount(&amount_answer)?;
        let category = self.terminal.prompt(CATEGORY_PROMPT)?;
        let date = self.terminal.prompt(DATE_PROMPT)?;

        let new_expense = add::NewExpense {
            amount,
            category: &category,
            date: &date,
        };
        add::run(&mut self.book, &self.store, new_expense, (self.today)())?;
        self.terminal.write_line(ADDED)
    }

    fn summary(&mut self) -> ClientResult<()> {
        match summary::run(&self.book) {
            Some(totals) => self.terminal.write_lines(&render_summary(&totals)),
            None => self.terminal.write_line(NO_EXPENSES),
        }
    }

    fn delete(&mut self) -> ClientResult<()> {
        if self.book.is_empty() {
            return self.terminal.write_line(NOTHING_TO_DELETE);
        }

        self.terminal.write_lines(&render_delete_listing(&self.book))?;
        let answer = self.terminal.prompt(DELETE_PROMPT)?;
        let choice = delete::parse_choice(&answer)?;
        let outcome = delete::run(&mut self.book, &self.store, choice)?;
        self.terminal.write_line(&render_delete_outcome(&outcome))
    }
}
