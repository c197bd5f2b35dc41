//! In-memory record store.
//!
//! Holds each user's employers and shifts, enforces the per-user
//! uniqueness rules and validates shifts before they are written. It never
//! prices anything; callers hand its records to the calculation engine.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::calculation::validate_shift;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employer, Shift};

use super::records::{EmployerDraft, ShiftDraft};

const COMPANY: &str = "Company";
const HOURS_LOG: &str = "Hours log";

#[derive(Debug, Default)]
struct UserLedger {
    employers: BTreeMap<i64, Employer>,
    shifts: BTreeMap<i64, Shift>,
}

impl UserLedger {
    fn employer(&self, id: i64) -> EngineResult<&Employer> {
        self.employers.get(&id).ok_or_else(|| not_found(COMPANY, id))
    }

    fn ensure_unique_name(&self, name: &str, except_id: Option<i64>) -> EngineResult<()> {
        let taken = self
            .employers
            .values()
            .any(|e| e.name == name && Some(e.id) != except_id);
        if taken {
            return Err(EngineError::Conflict {
                message: format!("A company named '{}' already exists", name),
            });
        }
        Ok(())
    }

    fn check_shift(&self, shift: &Shift) -> EngineResult<()> {
        self.employer(shift.employer_id)?;
        validate_shift(shift)?;

        let duplicate = self.shifts.values().any(|s| {
            s.employer_id == shift.employer_id && s.work_date == shift.work_date && s.id != shift.id
        });
        if duplicate {
            return Err(EngineError::Conflict {
                message: "Hours already logged for this time period".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
struct StoreState {
    last_employer_id: i64,
    last_shift_id: i64,
    ledgers: HashMap<String, UserLedger>,
}

impl StoreState {
    fn ledger(&self, user_id: &str) -> Option<&UserLedger> {
        self.ledgers.get(user_id)
    }

    /// The user's ledger, created on first successful write.
    fn ledger_entry(&mut self, user_id: &str) -> &mut UserLedger {
        self.ledgers.entry(user_id.to_string()).or_default()
    }

    /// The user's existing ledger. A user with no records has nothing to
    /// find, so the miss is reported against the requested record.
    fn existing_ledger_mut(
        &mut self,
        user_id: &str,
        resource: &str,
        id: i64,
    ) -> EngineResult<&mut UserLedger> {
        self.ledgers
            .get_mut(user_id)
            .ok_or_else(|| not_found(resource, id))
    }
}

fn not_found(resource: &str, id: i64) -> EngineError {
    EngineError::RecordNotFound {
        resource: resource.to_string(),
        id,
    }
}

/// A thread-safe, cloneable store of employers and shifts keyed by user ID.
///
/// IDs are assigned from store-wide counters, so an ID never names records
/// of two different users. Looking up another user's record yields
/// [`EngineError::RecordNotFound`].
///
/// # Example
///
/// ```
/// use shift_pay_engine::store::{EmployerDraft, MemoryStore};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = MemoryStore::new();
/// let employer = store
///     .create_employer("user_1", EmployerDraft {
///         name: "Harbour Cafe".to_string(),
///         job_role: "Barista".to_string(),
///         joining_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
///         day_rate: Decimal::new(2500, 2),
///         night_rate: Decimal::new(3000, 2),
///         saturday_rate: Decimal::new(3250, 2),
///         sunday_rate: Decimal::new(4000, 2),
///     })
///     .await
///     .unwrap();
/// assert_eq!(store.count_employers("user_1").await, 1);
/// assert!(store.get_employer("user_2", employer.id).await.is_err());
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<StoreState>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employer to the user's ledger.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidEmployer`] for a blank name or negative rate
    /// - [`EngineError::Conflict`] when the user already has an employer
    ///   with this name
    pub async fn create_employer(
        &self,
        user_id: &str,
        draft: EmployerDraft,
    ) -> EngineResult<Employer> {
        let mut state = self.state.write().await;

        let employer = draft.into_employer(state.last_employer_id + 1);
        employer.validate()?;
        if let Some(ledger) = state.ledger(user_id) {
            ledger.ensure_unique_name(&employer.name, None)?;
        }

        state.last_employer_id = employer.id;
        state
            .ledger_entry(user_id)
            .employers
            .insert(employer.id, employer.clone());

        debug!(user_id, employer_id = employer.id, "Created company");
        Ok(employer)
    }

    /// Returns the user's employers ordered by ID.
    pub async fn list_employers(&self, user_id: &str) -> Vec<Employer> {
        let state = self.state.read().await;
        state
            .ledger(user_id)
            .map(|ledger| ledger.employers.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Returns the number of employers the user has.
    pub async fn count_employers(&self, user_id: &str) -> usize {
        let state = self.state.read().await;
        state
            .ledger(user_id)
            .map_or(0, |ledger| ledger.employers.len())
    }

    /// Returns one of the user's employers.
    pub async fn get_employer(&self, user_id: &str, id: i64) -> EngineResult<Employer> {
        let state = self.state.read().await;
        state
            .ledger(user_id)
            .ok_or_else(|| not_found(COMPANY, id))?
            .employer(id)
            .cloned()
    }

    /// Replaces the fields of one of the user's employers.
    pub async fn update_employer(
        &self,
        user_id: &str,
        id: i64,
        draft: EmployerDraft,
    ) -> EngineResult<Employer> {
        let mut state = self.state.write().await;
        let ledger = state.existing_ledger_mut(user_id, COMPANY, id)?;

        ledger.employer(id)?;
        let employer = draft.into_employer(id);
        employer.validate()?;
        ledger.ensure_unique_name(&employer.name, Some(id))?;

        ledger.employers.insert(id, employer.clone());
        debug!(user_id, employer_id = id, "Updated company");
        Ok(employer)
    }

    /// Removes one of the user's employers together with its shifts.
    pub async fn delete_employer(&self, user_id: &str, id: i64) -> EngineResult<Employer> {
        let mut state = self.state.write().await;
        let ledger = state.existing_ledger_mut(user_id, COMPANY, id)?;

        let employer = ledger
            .employers
            .remove(&id)
            .ok_or_else(|| not_found(COMPANY, id))?;
        let before = ledger.shifts.len();
        ledger.shifts.retain(|_, shift| shift.employer_id != id);

        debug!(
            user_id,
            employer_id = id,
            removed_shifts = before - ledger.shifts.len(),
            "Deleted company"
        );
        Ok(employer)
    }

    /// Returns the user's employers keyed by ID, as the engine expects them.
    pub async fn employers_by_id(&self, user_id: &str) -> HashMap<i64, Employer> {
        let state = self.state.read().await;
        state
            .ledger(user_id)
            .map(|ledger| {
                ledger
                    .employers
                    .iter()
                    .map(|(id, employer)| (*id, employer.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns the user's shifts and employers read under one lock.
    pub async fn snapshot(&self, user_id: &str) -> (Vec<Shift>, HashMap<i64, Employer>) {
        let state = self.state.read().await;
        match state.ledger(user_id) {
            Some(ledger) => (
                ledger.shifts.values().cloned().collect(),
                ledger
                    .employers
                    .iter()
                    .map(|(id, employer)| (*id, employer.clone()))
                    .collect(),
            ),
            None => (Vec::new(), HashMap::new()),
        }
    }

    /// Returns all of the user's shifts ordered by ID.
    pub async fn shifts_for_user(&self, user_id: &str) -> Vec<Shift> {
        let state = self.state.read().await;
        state
            .ledger(user_id)
            .map(|ledger| ledger.shifts.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Logs a shift for the user.
    ///
    /// # Errors
    ///
    /// - [`EngineError::RecordNotFound`] when the employer is not the user's
    /// - [`EngineError::InvalidTimeFormat`] or [`EngineError::NegativeDuration`]
    ///   when the shift cannot be priced
    /// - [`EngineError::Conflict`] when the user already logged a shift for
    ///   this employer on this work date
    pub async fn create_shift(&self, user_id: &str, draft: ShiftDraft) -> EngineResult<Shift> {
        let mut state = self.state.write().await;

        // Validated under ID 0 so errors do not leak an ID that is never used.
        let candidate = draft.into_shift(0);
        let checked = match state.ledger(user_id) {
            Some(ledger) => ledger.check_shift(&candidate),
            None => Err(not_found(COMPANY, candidate.employer_id)),
        };
        if let Err(err) = checked {
            warn!(user_id, error = %err, "Rejected hours log");
            return Err(err);
        }

        let shift = Shift {
            id: state.last_shift_id + 1,
            ..candidate
        };
        state.last_shift_id = shift.id;
        state
            .ledger_entry(user_id)
            .shifts
            .insert(shift.id, shift.clone());

        debug!(user_id, shift_id = shift.id, "Logged hours");
        Ok(shift)
    }

    /// Returns one of the user's shifts.
    pub async fn get_shift(&self, user_id: &str, id: i64) -> EngineResult<Shift> {
        let state = self.state.read().await;
        state
            .ledger(user_id)
            .and_then(|ledger| ledger.shifts.get(&id))
            .cloned()
            .ok_or_else(|| not_found(HOURS_LOG, id))
    }

    /// Replaces the fields of one of the user's shifts.
    pub async fn update_shift(
        &self,
        user_id: &str,
        id: i64,
        draft: ShiftDraft,
    ) -> EngineResult<Shift> {
        let mut state = self.state.write().await;
        let ledger = state.existing_ledger_mut(user_id, HOURS_LOG, id)?;

        if !ledger.shifts.contains_key(&id) {
            return Err(not_found(HOURS_LOG, id));
        }
        let shift = draft.into_shift(id);
        if let Err(err) = ledger.check_shift(&shift) {
            warn!(user_id, shift_id = id, error = %err, "Rejected hours log update");
            return Err(err);
        }

        ledger.shifts.insert(id, shift.clone());
        debug!(user_id, shift_id = id, "Updated hours");
        Ok(shift)
    }

    /// Removes one of the user's shifts.
    pub async fn delete_shift(&self, user_id: &str, id: i64) -> EngineResult<Shift> {
        let mut state = self.state.write().await;
        let shift = state
            .existing_ledger_mut(user_id, HOURS_LOG, id)?
            .shifts
            .remove(&id)
            .ok_or_else(|| not_found(HOURS_LOG, id))?;

        debug!(user_id, shift_id = id, "Deleted hours");
        Ok(shift)
    }
}
