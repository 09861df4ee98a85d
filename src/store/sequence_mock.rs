//! SequenceMock - Order-verifying snapshot store for tests.

use std::fmt;
use std::sync::{Mutex, MutexGuard};

use serde::{de::DeserializeOwned, Serialize};

use super::{SnapshotStore, StoreError};

/// A snapshot store operation, as recorded in an expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Read,
    Write,
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Call::Read => write!(f, "read"),
            Call::Write => write!(f, "write"),
        }
    }
}

/// The declared result of one expected call.
///
/// `Ok` succeeds through the mock's internal buffer: a `read` decodes the
/// buffer, a `write` replaces it. `Snapshot` makes a `read` return an
/// explicit payload instead of the buffer. `Err` fails the call and leaves
/// the buffer untouched.
#[derive(Debug, Clone)]
pub enum Outcome {
    Ok,
    Snapshot(Vec<u8>),
    Err(StoreError),
}

impl Outcome {
    /// Explicit read payload built from a typed snapshot.
    pub fn snapshot<T: Serialize>(snapshot: &[T]) -> Result<Self, StoreError> {
        let bytes = serde_json::to_vec(snapshot).map_err(|e| StoreError::Serde(e.to_string()))?;
        Ok(Outcome::Snapshot(bytes))
    }
}

struct Expectation {
    call: Call,
    outcome: Outcome,
}

struct State {
    buffer: Vec<u8>,
    expectations: Vec<Expectation>,
    cursor: usize,
}

impl State {
    /// Check the intercepted call against the expectation at the cursor and
    /// advance. Any divergence panics: a wrong sequence must surface at the
    /// exact call that broke it, not at the end of the test.
    fn advance(&mut self, call: Call) -> Outcome {
        let cursor = self.cursor;
        match self.expectations.get(cursor) {
            None => panic!(
                "unexpected {} call: all {} expected calls were already made",
                call,
                self.expectations.len()
            ),
            Some(expectation) if expectation.call != call => panic!(
                "expected a {} call at position {}, got {}",
                expectation.call,
                cursor + 1,
                call
            ),
            Some(_) => {}
        }
        self.cursor += 1;
        self.expectations[cursor].outcome.clone()
    }
}

/// Snapshot store that verifies its calls arrive in a pre-declared order.
///
/// Expectations are recorded up front with [`on`](SequenceMock::on) and
/// consumed strictly in insertion order. Each intercepted `read` or `write`
/// is compared against the expectation at the cursor: on a match the call
/// yields that expectation's [`Outcome`]; on a mismatch — wrong operation,
/// or a call past the last expectation — the mock panics at the point of
/// divergence. A passing test therefore proves the exact sequence of
/// persistence operations the code under test performed, not merely that
/// some calls happened.
///
/// ## Example
///
/// ```ignore
/// let mock = SequenceMock::with_snapshot(&products)?;
/// mock.on(Call::Read);
/// mock.on(Call::Write).returns(Outcome::Err(StoreError::Storage("boom".into())));
///
/// let repo = ProductRepository::new(&mock);
/// assert!(repo.create("CellPhone", "Tech", 3, 52.0).is_err());
/// mock.assert_exhausted();
/// ```
pub struct SequenceMock {
    state: Mutex<State>,
}

impl Default for SequenceMock {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceMock {
    /// Mock whose internal buffer starts as the empty collection.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                buffer: b"[]".to_vec(),
                expectations: Vec::new(),
                cursor: 0,
            }),
        }
    }

    /// Mock whose internal buffer starts as the given snapshot.
    pub fn with_snapshot<T: Serialize>(snapshot: &[T]) -> Result<Self, StoreError> {
        let bytes = serde_json::to_vec(snapshot).map_err(|e| StoreError::Serde(e.to_string()))?;
        let mock = Self::new();
        mock.lock_for_setup().buffer = bytes;
        Ok(mock)
    }

    /// Record the next expected call. The expectation defaults to
    /// [`Outcome::Ok`]; chain [`returns`](Expect::returns) to override.
    pub fn on(&self, call: Call) -> Expect<'_> {
        let mut state = self.lock_for_setup();
        state.expectations.push(Expectation {
            call,
            outcome: Outcome::Ok,
        });
        let index = state.expectations.len() - 1;
        Expect { mock: self, index }
    }

    /// Panic unless every recorded expectation was consumed.
    pub fn assert_exhausted(&self) {
        let state = self.lock_for_setup();
        let remaining = state.expectations.len() - state.cursor;
        if remaining > 0 {
            panic!(
                "{} of {} expected calls were never made",
                remaining,
                state.expectations.len()
            );
        }
    }

    // Declaration-side lock: poisoning here means the test already panicked.
    fn lock_for_setup(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("sequence mock lock poisoned")
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, StoreError> {
        self.state
            .lock()
            .map_err(|_| StoreError::Storage("sequence mock lock poisoned".to_string()))
    }
}

impl SnapshotStore for SequenceMock {
    fn read<T: DeserializeOwned>(&self) -> Result<Vec<T>, StoreError> {
        let mut state = self.lock()?;
        match state.advance(Call::Read) {
            Outcome::Err(err) => Err(err),
            Outcome::Snapshot(bytes) => {
                serde_json::from_slice(&bytes).map_err(|e| StoreError::Serde(e.to_string()))
            }
            Outcome::Ok => {
                serde_json::from_slice(&state.buffer).map_err(|e| StoreError::Serde(e.to_string()))
            }
        }
    }

    fn write<T: Serialize>(&self, snapshot: &[T]) -> Result<(), StoreError> {
        let mut state = self.lock()?;
        match state.advance(Call::Write) {
            Outcome::Err(err) => Err(err),
            // The buffer only changes on a successful write, so a later
            // `Outcome::Ok` read observes previously written state.
            _ => {
                state.buffer =
                    serde_json::to_vec(snapshot).map_err(|e| StoreError::Serde(e.to_string()))?;
                Ok(())
            }
        }
    }
}

/// Handle to one recorded expectation, returned by [`SequenceMock::on`].
pub struct Expect<'a> {
    mock: &'a SequenceMock,
    index: usize,
}

impl Expect<'_> {
    /// Set the declared outcome for this expectation.
    pub fn returns(self, outcome: Outcome) {
        let mut state = self.mock.lock_for_setup();
        state.expectations[self.index].outcome = outcome;
    }
}
