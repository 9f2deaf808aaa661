// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Extensions;
use std::{fmt::{Debug, Formatter},
          mem};

/// Identifies a deferred job. Scheduling a job with a key that is already waiting
/// replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobKey(pub &'static str);

pub type Job = Box<dyn FnOnce(&mut Extensions) + Send>;

/// Jobs that run after the *next* tick, unless they are rescheduled before then.
///
/// A tick is one completed dispatch in the prompt session. There are two queues:
/// - `next` holds what was scheduled during the tick that is ending.
/// - `current` holds what was scheduled during the tick before that, and runs when the
///   ending tick is over.
///
/// Rescheduling a key removes it from `current` and (re)places it in `next`. A job that
/// keeps getting rescheduled every tick therefore never runs, and it runs exactly once
/// after the first tick that doesn't reschedule it. The insert batching for undo uses
/// this to notice the end of a burst of typing.
#[derive(Default)]
pub struct JobQueue {
    current: Vec<(JobKey, Job)>,
    next: Vec<(JobKey, Job)>,
}

impl Debug for JobQueue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let keys = |queue: &[(JobKey, Job)]| queue.iter().map(|(key, _)| *key).collect::<Vec<_>>();
        f.debug_struct("JobQueue")
            .field("current", &keys(&self.current))
            .field("next", &keys(&self.next))
            .finish()
    }
}

impl JobQueue {
    pub fn schedule(&mut self, key: JobKey, job: impl FnOnce(&mut Extensions) + Send + 'static) {
        self.current.retain(|(it, _)| *it != key);
        match self.next.iter_mut().find(|(it, _)| *it == key) {
            Some(slot) => slot.1 = Box::new(job),
            None => self.next.push((key, Box::new(job))),
        }
    }

    /// Run the jobs that are due, then promote the jobs scheduled during this tick.
    pub fn run_tick(&mut self, extensions: &mut Extensions) {
        let due = mem::replace(&mut self.current, mem::take(&mut self.next));
        for (_key, job) in due {
            job(extensions);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.current.is_empty() && self.next.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExtensionKey;
    use pretty_assertions::assert_eq;

    struct Runs;
    impl ExtensionKey for Runs {
        type Value = Vec<&'static str>;
        fn default_value() -> Self::Value { vec![] }
    }

    const A: JobKey = JobKey("a");
    const B: JobKey = JobKey("b");

    fn record(name: &'static str) -> impl FnOnce(&mut Extensions) + Send + 'static {
        move |extensions: &mut Extensions| extensions.update::<Runs>(|it| it.push(name))
    }

    #[test]
    fn test_job_runs_after_the_next_tick() {
        let mut jobs = JobQueue::default();
        let mut extensions = Extensions::default();

        jobs.schedule(A, record("a"));
        jobs.run_tick(&mut extensions);
        assert!(extensions.get::<Runs>().is_empty());
        assert!(!jobs.is_empty());

        jobs.run_tick(&mut extensions);
        assert_eq!(extensions.get::<Runs>(), vec!["a"]);
        assert!(jobs.is_empty());

        jobs.run_tick(&mut extensions);
        assert_eq!(extensions.get::<Runs>(), vec!["a"]);
    }

    #[test]
    fn test_rescheduling_every_tick_defers_the_job() {
        let mut jobs = JobQueue::default();
        let mut extensions = Extensions::default();

        for _ in 0..5 {
            jobs.schedule(A, record("a"));
            jobs.run_tick(&mut extensions);
        }
        assert!(extensions.get::<Runs>().is_empty());

        jobs.run_tick(&mut extensions);
        assert_eq!(extensions.get::<Runs>(), vec!["a"]);
    }

    #[test]
    fn test_rescheduling_in_the_same_tick_overwrites() {
        let mut jobs = JobQueue::default();
        let mut extensions = Extensions::default();

        jobs.schedule(A, record("first"));
        jobs.schedule(B, record("b"));
        jobs.schedule(A, record("second"));
        jobs.run_tick(&mut extensions);
        jobs.run_tick(&mut extensions);
        assert_eq!(extensions.get::<Runs>(), vec!["second", "b"]);
    }
}
