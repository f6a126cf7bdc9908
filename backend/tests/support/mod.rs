//! Shared helpers for the employee directory integration suites.
//!
//! [`RecordingEmployeeRepository`] keeps rows in memory, counts every call and
//! can be primed to fail, so HTTP tests exercise the real service without a
//! database.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use async_trait::async_trait;

use employee_directory::Trace;
use employee_directory::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use employee_directory::domain::{Employee, EmployeeDirectoryService, EmployeeDraft, EmployeeId};
use employee_directory::inbound::http::employees;
use employee_directory::inbound::http::health::{HealthState, live, ready};
use employee_directory::inbound::http::index::index;
use employee_directory::inbound::http::state::HttpState;
use employee_directory::inbound::http::validation::{json_config, path_config};

struct Rows {
    next_id: i32,
    employees: BTreeMap<i32, Employee>,
}

impl Default for Rows {
    fn default() -> Self {
        Self {
            next_id: 1,
            employees: BTreeMap::new(),
        }
    }
}

/// In-memory employee store recording how often it was called.
#[derive(Default)]
pub struct RecordingEmployeeRepository {
    rows: Mutex<Rows>,
    calls: AtomicUsize,
    failure: Mutex<Option<EmployeeRepositoryError>>,
}

impl RecordingEmployeeRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Number of repository calls observed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make every subsequent call fail with `error`.
    pub fn fail_with(&self, error: EmployeeRepositoryError) {
        *self.failure.lock().expect("failure lock") = Some(error);
    }

    /// Snapshot of the stored rows ordered by id.
    pub fn stored(&self) -> Vec<Employee> {
        self.rows
            .lock()
            .expect("rows lock")
            .employees
            .values()
            .cloned()
            .collect()
    }

    fn enter(&self) -> Result<(), EmployeeRepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.failure
            .lock()
            .expect("failure lock")
            .clone()
            .map_or(Ok(()), Err)
    }
}

#[async_trait]
impl EmployeeRepository for RecordingEmployeeRepository {
    async fn list(&self) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        self.enter()?;
        Ok(self.stored())
    }

    async fn find_by_id(
        &self,
        id: EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        self.enter()?;
        let rows = self.rows.lock().expect("rows lock");
        Ok(rows.employees.get(&id.get()).cloned())
    }

    async fn insert(&self, draft: &EmployeeDraft) -> Result<Employee, EmployeeRepositoryError> {
        self.enter()?;
        let mut rows = self.rows.lock().expect("rows lock");
        let id = rows.next_id;
        rows.next_id += 1;
        let employee = Employee::from_draft(EmployeeId::new(id), draft.clone());
        rows.employees.insert(id, employee.clone());
        Ok(employee)
    }

    async fn update(
        &self,
        id: EmployeeId,
        draft: &EmployeeDraft,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        self.enter()?;
        let mut rows = self.rows.lock().expect("rows lock");
        let Some(slot) = rows.employees.get_mut(&id.get()) else {
            return Ok(None);
        };
        *slot = Employee::from_draft(id, draft.clone());
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: EmployeeId) -> Result<bool, EmployeeRepositoryError> {
        self.enter()?;
        let mut rows = self.rows.lock().expect("rows lock");
        Ok(rows.employees.remove(&id.get()).is_some())
    }
}

/// Full application wired the way the server binary wires it, minus Swagger.
pub fn employee_app(
    repository: Arc<RecordingEmployeeRepository>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let service = Arc::new(EmployeeDirectoryService::new(repository));
    App::new()
        .app_data(health_state)
        .app_data(web::Data::new(HttpState::from_service(service)))
        .app_data(json_config())
        .app_data(path_config())
        .wrap(Trace)
        .service(index)
        .configure(employees::configure)
        .service(ready)
        .service(live)
}
