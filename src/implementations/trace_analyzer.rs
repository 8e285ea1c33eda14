use std::fs;
use std::path::Path;

use alloy_primitives::U256;
use indexmap::{ IndexMap, IndexSet };
use log::{ debug, info };
use serde_json::Value;

use crate::errors::{ PropError, PropResult };
use crate::implementations::selector::SelectorMatcher;
use crate::models::address::Address;
use crate::models::event::Event;

/// Result of classifying a trace
#[derive(Debug, Clone)]
pub struct TraceAnalysis {
    /// Senders seen in the trace, first-seen order
    pub accounts: IndexSet<Address>,
    /// Token-like contracts and the balance ceiling recorded for each
    pub tokens: IndexMap<Address, U256>,
    /// Events up to and including the last contract creation
    pub init_trace: Vec<Event>,
    /// Events after the last contract creation
    pub sample_trace: Vec<Event>,
}

/// Fold state while walking a trace
#[derive(Debug, Default)]
pub(crate) struct TraceScan {
    pub(crate) accounts: IndexSet<Address>,
    pub(crate) tokens: IndexMap<Address, U256>,
    pub(crate) last_create: Option<usize>,
}

impl TraceScan {
    /// First sighting wins: a token already present keeps its ceiling and
    /// position. Returns whether the token was new.
    pub(crate) fn record_token(&mut self, token: Address, ceiling: U256) -> bool {
        if self.tokens.contains_key(&token) {
            return false;
        }
        self.tokens.insert(token, ceiling);
        true
    }
}

/// Walks a trace once, classifying accounts and token contracts
#[derive(Debug, Clone, Default)]
pub struct TraceAnalyzer {
    matcher: SelectorMatcher,
}

impl TraceAnalyzer {
    pub fn new(matcher: SelectorMatcher) -> Self {
        Self { matcher }
    }

    pub fn analyze(
        &self,
        events: &[Event],
        attacker: &Address,
        ceiling: Option<U256>
    ) -> PropResult<TraceAnalysis> {
        let ceiling = ceiling.unwrap_or(U256::ZERO);

        let scan = events
            .iter()
            .enumerate()
            .try_fold(TraceScan::default(), |mut scan, (index, event)| -> PropResult<TraceScan> {
                match event {
                    Event::ContractCreated { .. } => {
                        scan.accounts.insert(event.sender()?);
                        scan.last_create = Some(index);
                    }
                    Event::FunctionCall { to, data, .. } => {
                        scan.accounts.insert(event.sender()?);
                        if let Some(signature) = self.matcher.matched_signature(data) {
                            let token = Address::parse(to)?;
                            if scan.record_token(token, ceiling) {
                                debug!("Event {} calls {} on {}", index, signature, token);
                            }
                        }
                    }
                }
                Ok(scan)
            })?;

        let split = scan.last_create
            .map(|index| index + 1)
            .ok_or(PropError::MissingContractCreation { events: events.len() })?;
        let (init_trace, sample_trace) = events.split_at(split);

        info!("Found {} accounts", scan.accounts.len());
        for account in &scan.accounts {
            debug!("  account {}", account);
        }
        info!("Found {} token-like contracts", scan.tokens.len());
        for token in scan.tokens.keys() {
            debug!("  token-like contract at {}", token);
        }
        if !scan.accounts.contains(attacker) {
            debug!("Attacker {} does not send any transaction in the trace", attacker);
        }

        Ok(TraceAnalysis {
            accounts: scan.accounts,
            tokens: scan.tokens,
            init_trace: init_trace.to_vec(),
            sample_trace: sample_trace.to_vec(),
        })
    }
}

/// Analyze with the default token selector set
pub fn analyze(
    events: &[Event],
    attacker: &Address,
    ceiling: Option<U256>
) -> PropResult<TraceAnalysis> {
    TraceAnalyzer::default().analyze(events, attacker, ceiling)
}

/// Read a JSON array of events
pub fn load_trace(path: &Path) -> PropResult<Vec<Event>> {
    let contents = fs::read_to_string(path).map_err(|source| PropError::TraceRead {
        path: path.to_path_buf(),
        source,
    })?;
    let events = serde_json::from_str::<Vec<Value>>(&contents)
        .and_then(|raw| raw.into_iter().map(Event::from_json).collect::<serde_json::Result<Vec<_>>>())
        .map_err(|source| PropError::TraceParse {
            path: path.to_path_buf(),
            source,
        })?;
    info!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}
