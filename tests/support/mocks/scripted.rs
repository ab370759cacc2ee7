// tests/support/mocks/scripted.rs
use reservafacil_front::application::{ApplicationResult, error::ApplicationError};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone)]
pub enum Outcome<T> {
    Ok(T),
    Rejected(String),
    NotFound(String),
    Transport(String),
    Malformed(String),
}

impl<T: Clone> Outcome<T> {
    fn to_result(&self) -> ApplicationResult<T> {
        match self {
            Outcome::Ok(value) => Ok(value.clone()),
            Outcome::Rejected(msg) => Err(ApplicationError::rejected(msg.clone())),
            Outcome::NotFound(msg) => Err(ApplicationError::not_found(msg.clone())),
            Outcome::Transport(msg) => Err(ApplicationError::transport(msg.clone())),
            Outcome::Malformed(msg) => Err(ApplicationError::malformed(msg.clone())),
        }
    }
}

/// Replays outcomes in order; the last one repeats forever.
pub struct Scripted<T> {
    outcomes: Mutex<VecDeque<Outcome<T>>>,
    calls: AtomicUsize,
}

impl<T: Clone> Scripted<T> {
    pub fn new(outcomes: Vec<Outcome<T>>) -> Self {
        assert!(!outcomes.is_empty(), "script needs at least one outcome");
        Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn once(outcome: Outcome<T>) -> Self {
        Self::new(vec![outcome])
    }

    pub fn next(&self) -> ApplicationResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.len() > 1 {
            outcomes.pop_front().unwrap().to_result()
        } else {
            outcomes.front().unwrap().to_result()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}
