// Input sources for yes/no questions. The workflow only sees the `Prompt`
// trait so it can be driven without a terminal.

use anyhow::{Context, Result};
use dialoguer::Input;
use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal};

/// Answers accepted as "yes" (compared case-insensitively).
pub const AFFIRMATIVE: [&str; 4] = ["o", "oui", "y", "yes"];

pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    AFFIRMATIVE.contains(&answer.as_str())
}

pub trait Prompt {
    /// Ask `question` and return the raw answer.
    fn ask(&mut self, question: &str) -> Result<String>;

    fn confirm(&mut self, question: &str) -> Result<bool> {
        Ok(is_affirmative(&self.ask(question)?))
    }
}

/// Reads from the terminal with `dialoguer`, or a plain line from stdin
/// when input is piped.
#[derive(Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn ask(&mut self, question: &str) -> Result<String> {
        if io::stdin().is_terminal() {
            let answer = Input::<String>::new()
                .with_prompt(question)
                .allow_empty(true)
                .interact_text()
                .context("Failed to read answer")?;
            return Ok(answer);
        }
        println!("{}", question);
        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read answer from stdin")?;
        Ok(line)
    }
}

/// Always answers "yes" (`--yes` on the command line).
pub struct AutoConfirm;

impl Prompt for AutoConfirm {
    fn ask(&mut self, _question: &str) -> Result<String> {
        Ok("yes".into())
    }
}

/// Replays prepared answers in order; an exhausted queue answers "".
#[derive(Default)]
pub struct CannedAnswers {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
}

impl CannedAnswers {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CannedAnswers {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }
}

impl Prompt for CannedAnswers {
    fn ask(&mut self, question: &str) -> Result<String> {
        self.asked.push(question.to_string());
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}
