use std::time::Duration;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tokio::sync::broadcast;
use crate::enums::job_mutation::JobMutation;
use crate::errors::{RepoAnalyzerError, RepoAnalyzerResult};
use crate::structs::job::Job;
use crate::structs::job_event::JobEvent;
use crate::structs::job_id::JobId;

const EVENT_CAPACITY: usize = 256;

/// Process-wide job store. Every write goes through [`JobRegistry::update`],
/// which holds the entry lock for the duration of one mutation.
pub struct JobRegistry {
    jobs: DashMap<JobId, Job>,
    events: broadcast::Sender<JobEvent>,
}

impl Default for JobRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl JobRegistry {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            jobs: DashMap::new(),
            events,
        }
    }

    /// Receives a [`JobEvent`] for every job created or updated from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<JobEvent> {
        self.events.subscribe()
    }

    pub fn create(&self, repo_url: &str) -> JobId {
        loop {
            let id = JobId::new();
            if let Entry::Vacant(slot) = self.jobs.entry(id) {
                let job = slot.insert(Job::new(id, repo_url));
                let event = Self::event_for(job.value());
                drop(job);
                log::debug!("📋 Registered job {} for {}", id, repo_url);
                let _ = self.events.send(event);
                return id;
            }
        }
    }

    pub fn get(&self, id: &JobId) -> Option<Job> {
        self.jobs.get(id).map(|job| job.value().clone())
    }

    pub fn update(&self, id: &JobId, mutation: JobMutation) -> RepoAnalyzerResult<()> {
        let event = {
            let mut job = self.jobs
                .get_mut(id)
                .ok_or_else(|| RepoAnalyzerError::unknown_job(&id.to_string()))?;
            job.apply(mutation)?;
            Self::event_for(job.value())
        };
        // No subscribers is the common case.
        let _ = self.events.send(event);
        Ok(())
    }

    fn event_for(job: &Job) -> JobEvent {
        JobEvent {
            job_id: job.id,
            status: job.status,
            progress: job.progress,
        }
    }

    /// Drops finished jobs last touched more than `ttl` ago. Running jobs are
    /// never evicted.
    pub fn evict_terminal_older_than(&self, ttl: Duration) -> usize {
        let Ok(ttl) = chrono::Duration::from_std(ttl) else {
            return 0;
        };
        let Some(cutoff) = Utc::now().checked_sub_signed(ttl) else {
            return 0;
        };

        let mut evicted = 0;
        self.jobs.retain(|_, job| {
            let expired = job.status.is_terminal() && job.updated_at < cutoff;
            if expired {
                evicted += 1;
            }
            !expired
        });

        if evicted > 0 {
            log::info!("🧹 Evicted {} finished job(s)", evicted);
        }
        evicted
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
