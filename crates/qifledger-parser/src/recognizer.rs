//! Block recognition.
//!
//! The parser is a state machine driven by one line of lookahead. Each state
//! handles a single kind of block and names the state to move to next:
//!
//! ```text
//! ScanningTop ──!Option:AutoSwitch──▶ InAutoSwitch ──!Account──▶ InAutoSwitchAccount
//!     │  ▲                                 │                            │
//!     │  └──────────!Clear:AutoSwitch──────┴────────────────────────────┘
//!     ├──!Type:Cat──────────────▶ InCategoryRun
//!     ├──!Account [+ !Type:X]───▶ InTransactionRun(account)
//!     └──!Type:X────────────────▶ InTransactionRun(new anonymous account)
//! ```
//!
//! Runs end when the next line is a header or input is exhausted.

use crate::assembler::EntityAssembler;
use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::header::{is_header, should_break, Header};
use crate::line_source::LineSource;
use crate::records::{read_account, read_category, read_transaction};
use crate::result::ParseResult;
use qifledger_core::Account;
use std::collections::HashMap;

/// Index of an account in [`ParseResult::accounts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(usize);

impl AccountId {
    /// Position of the account in the result.
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Recognizer states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ScanningTop,
    InAutoSwitch,
    InAutoSwitchAccount,
    InCategoryRun,
    InTransactionRun(AccountId),
    Done,
}

/// Parser over any [`LineSource`].
pub struct QifParser<'c, S> {
    lines: S,
    config: &'c ParserConfig,
    result: ParseResult,
    assembler: EntityAssembler,
    accounts_by_name: HashMap<String, AccountId>,
    /// An auto-switch region was opened and not yet cleared.
    auto_switch_open: bool,
    /// Latest declaration in the current auto-switch account list.
    last_listed: Option<AccountId>,
}

impl<'c, S: LineSource> QifParser<'c, S> {
    /// Create a parser reading from `lines`.
    pub fn new(lines: S, config: &'c ParserConfig) -> Self {
        Self {
            lines,
            config,
            result: ParseResult::default(),
            assembler: EntityAssembler::new(config.opening_balance_payee.as_str()),
            accounts_by_name: HashMap::new(),
            auto_switch_open: false,
            last_listed: None,
        }
    }

    /// Consume the input and return everything read from it.
    pub fn parse(mut self) -> Result<ParseResult, ParseError> {
        let _span = tracing::debug_span!("qif_parse").entered();

        let mut state = State::ScanningTop;
        while state != State::Done {
            state = match state {
                State::ScanningTop => self.scan_top()?,
                State::InAutoSwitch => self.in_auto_switch()?,
                State::InAutoSwitchAccount => self.in_auto_switch_account()?,
                State::InCategoryRun => self.in_category_run()?,
                State::InTransactionRun(id) => self.in_transaction_run(id)?,
                State::Done => State::Done,
            };
        }

        self.assembler.finish(&mut self.result);
        tracing::debug!(
            accounts = self.result.accounts.len(),
            transactions = self.result.transaction_count(),
            categories = self.result.categories.len(),
            truncated = self.result.truncated,
            "parse complete"
        );
        Ok(self.result)
    }

    /// Skip the current line; it has already been peeked.
    fn consume(&mut self) -> Result<(), ParseError> {
        self.lines.read_line()?;
        Ok(())
    }

    fn next_is_break(&mut self) -> Result<bool, ParseError> {
        Ok(should_break(self.lines.peek_line()?, is_header))
    }

    fn scan_top(&mut self) -> Result<State, ParseError> {
        let header = match self.lines.peek_line()? {
            None if self.auto_switch_open => return Ok(self.truncate()),
            None => return Ok(State::Done),
            Some(line) => Header::classify(line),
        };

        let next = match header {
            Header::AutoSwitch => {
                tracing::debug!("entering auto-switch region");
                self.auto_switch_open = true;
                State::InAutoSwitch
            }
            Header::ClearAutoSwitch => {
                tracing::debug!("leaving auto-switch region");
                self.auto_switch_open = false;
                State::ScanningTop
            }
            Header::Account => {
                self.consume()?;
                let id = self.read_declared_account()?;
                return self.after_account(id);
            }
            Header::Category => {
                tracing::debug!("entering category run");
                State::InCategoryRun
            }
            Header::Records(account_type) => {
                let account_type = account_type.to_string();
                let id = self.push_account(Account::anonymous());
                self.account_mut(id).default_type(&account_type);
                tracing::debug!("transaction run for anonymous {} account", account_type);
                State::InTransactionRun(id)
            }
            Header::Class | Header::Other => {
                tracing::debug!("skipping header at line {}", self.lines.line_number() + 1);
                State::ScanningTop
            }
            Header::Data => State::ScanningTop,
        };
        self.consume()?;
        Ok(next)
    }

    /// After an `!Account` block, a record-type header opens its register.
    fn after_account(&mut self, id: AccountId) -> Result<State, ParseError> {
        let account_type = match self.lines.peek_line()?.map(Header::classify) {
            Some(Header::Records(account_type)) => account_type.to_string(),
            _ => return Ok(State::ScanningTop),
        };
        self.consume()?;
        self.account_mut(id).default_type(&account_type);
        tracing::debug!(
            "transaction run for account '{}'",
            self.result.accounts[id.index()].name
        );
        Ok(State::InTransactionRun(id))
    }

    fn in_auto_switch(&mut self) -> Result<State, ParseError> {
        let Some(line) = self.lines.read_line()? else {
            return Ok(self.truncate());
        };
        Ok(match Header::classify(&line) {
            Header::Account => {
                self.last_listed = None;
                State::InAutoSwitchAccount
            }
            Header::ClearAutoSwitch => {
                tracing::debug!("auto-switch region cleared before any account list");
                self.auto_switch_open = false;
                State::ScanningTop
            }
            _ => State::InAutoSwitch,
        })
    }

    fn in_auto_switch_account(&mut self) -> Result<State, ParseError> {
        let header = match self.lines.peek_line()? {
            None => return Ok(self.truncate()),
            Some(line) => Header::classify(line),
        };
        match header {
            Header::ClearAutoSwitch => {
                self.consume()?;
                tracing::debug!("leaving auto-switch region");
                self.auto_switch_open = false;
                Ok(State::ScanningTop)
            }
            Header::Account => {
                self.consume()?;
                Ok(State::InAutoSwitchAccount)
            }
            Header::Data => {
                self.last_listed = Some(self.read_declared_account()?);
                Ok(State::InAutoSwitchAccount)
            }
            // A register right after a listed account belongs to it.
            Header::Records(_) => match self.last_listed.take() {
                Some(id) => self.after_account(id),
                None => Ok(State::ScanningTop),
            },
            _ => Ok(State::ScanningTop),
        }
    }

    fn in_category_run(&mut self) -> Result<State, ParseError> {
        if self.next_is_break()? {
            return Ok(State::ScanningTop);
        }
        let category = read_category(&mut self.lines)?;
        if !self.result.categories.insert_explicit(category) {
            tracing::debug!("ignoring unnamed or repeated category declaration");
        }
        Ok(State::InCategoryRun)
    }

    fn in_transaction_run(&mut self, id: AccountId) -> Result<State, ParseError> {
        if self.next_is_break()? {
            return Ok(State::ScanningTop);
        }
        let txn = read_transaction(&mut self.lines, self.config)?;
        let account = &mut self.result.accounts[id.index()];
        self.assembler.accept(account, txn);
        Ok(State::InTransactionRun(id))
    }

    fn truncate(&mut self) -> State {
        tracing::warn!("input ended inside an auto-switch region");
        self.result.truncated = true;
        State::Done
    }

    fn read_declared_account(&mut self) -> Result<AccountId, ParseError> {
        let account = read_account(&mut self.lines, self.config)?;
        Ok(self.push_account(account))
    }

    /// Add an account, merging it into an earlier one of the same name.
    fn push_account(&mut self, account: Account) -> AccountId {
        if !account.is_anonymous() {
            if let Some(&id) = self.accounts_by_name.get(&account.name) {
                self.account_mut(id).absorb_declaration(account);
                return id;
            }
        }
        let id = AccountId(self.result.accounts.len());
        if !account.is_anonymous() {
            self.accounts_by_name.insert(account.name.clone(), id);
        }
        self.result.accounts.push(account);
        id
    }

    fn account_mut(&mut self, id: AccountId) -> &mut Account {
        &mut self.result.accounts[id.index()]
    }
}
