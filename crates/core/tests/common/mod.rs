//! Scripted stand-ins for git and for the user.

use std::collections::{HashMap, VecDeque};

use gitify_core::error::Result;
use gitify_core::execution::{CommandResult, GitRunner};
use gitify_core::form::{
    ConfirmField, FieldPrompter, MultiSelectField, Prompted, SelectField, TextField,
};

/// Answers git invocations from a table keyed by the joined argument list and
/// records every call. Unscripted invocations succeed with empty output.
#[derive(Default)]
pub struct ScriptedGit {
    responses: HashMap<String, CommandResult>,
    pub calls: Vec<String>,
}

impl ScriptedGit {
    pub fn respond(mut self, args: &str, result: CommandResult) -> Self {
        self.responses.insert(args.to_string(), result);
        self
    }
}

impl GitRunner for ScriptedGit {
    fn run(&mut self, args: &[String]) -> CommandResult {
        let joined = args.join(" ");
        self.calls.push(joined.clone());
        self.responses.get(&joined).cloned().unwrap_or_default()
    }
}

/// Answers prompts in order. Running out of answers cancels.
#[derive(Default)]
pub struct ScriptedUser {
    texts: VecDeque<Prompted<String>>,
    choices: VecDeque<Prompted<String>>,
    selections: VecDeque<Prompted<Vec<String>>>,
    confirms: VecDeque<Prompted<bool>>,
    /// Titles of every field shown, in order.
    pub shown: Vec<String>,
    /// Options offered by the last multi-select.
    pub offered: Vec<String>,
}

impl ScriptedUser {
    pub fn types(mut self, value: &str) -> Self {
        self.texts.push_back(Prompted::Value(value.to_string()));
        self
    }

    pub fn chooses(mut self, value: &str) -> Self {
        self.choices.push_back(Prompted::Value(value.to_string()));
        self
    }

    pub fn selects(mut self, values: &[&str]) -> Self {
        self.selections
            .push_back(Prompted::Value(values.iter().map(ToString::to_string).collect()));
        self
    }

    pub fn confirms(mut self, value: bool) -> Self {
        self.confirms.push_back(Prompted::Value(value));
        self
    }
}

impl FieldPrompter for ScriptedUser {
    fn prompt_text(
        &mut self,
        field: &TextField,
        _previous: Option<(&str, &str)>,
    ) -> Result<Prompted<String>> {
        self.shown.push(field.title.clone());
        Ok(self.texts.pop_front().unwrap_or(Prompted::Cancelled))
    }

    fn prompt_select(&mut self, field: &SelectField) -> Result<Prompted<String>> {
        self.shown.push(field.title.clone());
        Ok(self.choices.pop_front().unwrap_or(Prompted::Cancelled))
    }

    fn prompt_multi_select(&mut self, field: &MultiSelectField) -> Result<Prompted<Vec<String>>> {
        self.shown.push(field.title.clone());
        self.offered = field.options.iter().map(|o| o.value.clone()).collect();
        Ok(self.selections.pop_front().unwrap_or(Prompted::Cancelled))
    }

    fn prompt_confirm(&mut self, field: &ConfirmField) -> Result<Prompted<bool>> {
        self.shown.push(field.title.clone());
        Ok(self.confirms.pop_front().unwrap_or(Prompted::Cancelled))
    }
}
