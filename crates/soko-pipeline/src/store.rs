//! Investigation and finding persistence.

use chrono::Utc;
use soko_core::{Finding, Investigation, InvestigationStatus, NewFinding};

use crate::error::StoreError;

/// Read/append access to investigations and their findings.
pub trait InvestigationStore {
    /// Create a `pending` investigation for `username`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyUsername`] for a blank username.
    fn create_investigation(&mut self, username: &str) -> Result<Investigation, StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError`] on backend failure.
    fn investigation(&self, id: i64) -> Result<Option<Investigation>, StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError`] on backend failure.
    fn list_investigations(&self) -> Result<Vec<Investigation>, StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError::InvestigationNotFound`] for an unknown id.
    fn set_status(&mut self, id: i64, status: InvestigationStatus) -> Result<(), StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError::InvestigationNotFound`] for an unknown investigation.
    fn append_finding(&mut self, finding: NewFinding) -> Result<Finding, StoreError>;

    /// Findings for one investigation in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on backend failure.
    fn findings_for(&self, investigation_id: i64) -> Result<Vec<Finding>, StoreError>;

    /// Delete an investigation and all of its findings. Returns `false` if
    /// the investigation did not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on backend failure.
    fn delete_investigation(&mut self, id: i64) -> Result<bool, StoreError>;
}

/// Process-local store with sequential ids starting at 1.
#[derive(Debug, Default)]
pub struct MemoryStore {
    investigations: Vec<Investigation>,
    findings: Vec<Finding>,
    next_investigation_id: i64,
    next_finding_id: i64,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn find_mut(&mut self, id: i64) -> Option<&mut Investigation> {
        self.investigations.iter_mut().find(|i| i.id == id)
    }
}

impl InvestigationStore for MemoryStore {
    fn create_investigation(&mut self, username: &str) -> Result<Investigation, StoreError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(StoreError::EmptyUsername);
        }
        self.next_investigation_id += 1;
        let investigation = Investigation {
            id: self.next_investigation_id,
            username: username.to_string(),
            status: InvestigationStatus::Pending,
            created_at: Utc::now(),
        };
        self.investigations.push(investigation.clone());
        Ok(investigation)
    }

    fn investigation(&self, id: i64) -> Result<Option<Investigation>, StoreError> {
        Ok(self.investigations.iter().find(|i| i.id == id).cloned())
    }

    fn list_investigations(&self) -> Result<Vec<Investigation>, StoreError> {
        Ok(self.investigations.clone())
    }

    fn set_status(&mut self, id: i64, status: InvestigationStatus) -> Result<(), StoreError> {
        let investigation = self
            .find_mut(id)
            .ok_or(StoreError::InvestigationNotFound(id))?;
        investigation.status = status;
        Ok(())
    }

    fn append_finding(&mut self, finding: NewFinding) -> Result<Finding, StoreError> {
        if !self
            .investigations
            .iter()
            .any(|i| i.id == finding.investigation_id)
        {
            return Err(StoreError::InvestigationNotFound(finding.investigation_id));
        }
        self.next_finding_id += 1;
        let stored = Finding {
            id: self.next_finding_id,
            investigation_id: finding.investigation_id,
            platform: finding.platform,
            username: finding.username,
            profile_url: finding.profile_url,
            data: finding.data,
            found: finding.found,
            scraped_at: Utc::now(),
        };
        self.findings.push(stored.clone());
        Ok(stored)
    }

    fn findings_for(&self, investigation_id: i64) -> Result<Vec<Finding>, StoreError> {
        Ok(self
            .findings
            .iter()
            .filter(|f| f.investigation_id == investigation_id)
            .cloned()
            .collect())
    }

    fn delete_investigation(&mut self, id: i64) -> Result<bool, StoreError> {
        let before = self.investigations.len();
        self.investigations.retain(|i| i.id != id);
        if self.investigations.len() == before {
            return Ok(false);
        }
        self.findings.retain(|f| f.investigation_id != id);
        Ok(true)
    }
}
