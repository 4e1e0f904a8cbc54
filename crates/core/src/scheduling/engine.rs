use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::automock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    errors::{SalonError, SalonResult},
    lifecycle,
    models::{
        appointment::{Appointment, AppointmentStatus, CreateAppointmentRequest},
        service::Service,
        user::User,
    },
    scheduling::{calendar, TimeRange},
};

/// A validated appointment ready to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAppointment {
    pub client_name: String,
    pub service_id: Uuid,
    pub employee_id: Uuid,
    pub slot: TimeRange,
}

/// Persistence required by the [`SchedulingEngine`].
#[automock]
#[async_trait]
pub trait SchedulingStore: Send + Sync {
    async fn find_service(&self, id: Uuid) -> SalonResult<Option<Service>>;

    async fn find_user(&self, id: Uuid) -> SalonResult<Option<User>>;

    /// Inserts the appointment in state `agendado` unless another appointment
    /// of the same employee that still occupies its slot overlaps it, in which
    /// case `SalonError::Conflict` is returned.
    ///
    /// The overlap check and the insert must be atomic with respect to other
    /// calls for the same employee.
    async fn insert_if_free(&self, appointment: NewAppointment) -> SalonResult<Appointment>;

    async fn find_appointment(&self, id: Uuid) -> SalonResult<Option<Appointment>>;

    /// Moves the appointment from `expected` to `status`. Returns `None` when
    /// the stored status no longer equals `expected`.
    async fn update_status(
        &self,
        id: Uuid,
        expected: AppointmentStatus,
        status: AppointmentStatus,
    ) -> SalonResult<Option<Appointment>>;

    /// Appointments whose start time falls in `range`, excluding cancelled
    /// ones, ordered by start time.
    async fn active_in_range(
        &self,
        range: TimeRange,
        employee_id: Option<Uuid>,
    ) -> SalonResult<Vec<Appointment>>;
}

/// Books appointments and drives their status lifecycle.
#[derive(Debug, Clone)]
pub struct SchedulingEngine<S> {
    store: S,
}

impl<S: SchedulingStore> SchedulingEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Books a new appointment.
    ///
    /// # Errors
    ///
    /// * `SalonError::Validation` - empty client name, inactive service, or an
    ///   employee that is inactive or not staff
    /// * `SalonError::NotFound` - unknown service or employee
    /// * `SalonError::Conflict` - the employee already has an overlapping
    ///   appointment
    pub async fn create_appointment(
        &self,
        request: CreateAppointmentRequest,
    ) -> SalonResult<Appointment> {
        let client_name = request.client_name.trim();
        if client_name.is_empty() {
            return Err(SalonError::Validation("Client name must not be empty".to_string()));
        }

        let service = self
            .store
            .find_service(request.service_id)
            .await?
            .ok_or_else(|| {
                SalonError::NotFound(format!("Service with ID {} not found", request.service_id))
            })?;
        if !service.active {
            return Err(SalonError::Validation(format!(
                "Service {} is no longer offered",
                service.name
            )));
        }

        let employee = self
            .store
            .find_user(request.employee_id)
            .await?
            .ok_or_else(|| {
                SalonError::NotFound(format!("Employee with ID {} not found", request.employee_id))
            })?;
        if !employee.active || !employee.role.is_staff() {
            return Err(SalonError::Validation(format!(
                "Invalid employee {}: must be an active employee or admin",
                employee.id
            )));
        }

        let slot = TimeRange::for_duration(request.start_time, service.duration_minutes)?;
        debug!(
            "Booking employee={} service={} slot=[{}, {})",
            employee.id, service.id, slot.start, slot.end
        );

        let appointment = self
            .store
            .insert_if_free(NewAppointment {
                client_name: client_name.to_string(),
                service_id: service.id,
                employee_id: employee.id,
                slot,
            })
            .await?;

        info!("Appointment {} booked for employee {}", appointment.id, employee.id);
        Ok(appointment)
    }

    /// Changes the status of an appointment.
    ///
    /// # Errors
    ///
    /// * `SalonError::Validation` - unknown status value or a transition the
    ///   lifecycle forbids
    /// * `SalonError::NotFound` - unknown appointment
    /// * `SalonError::Conflict` - the status changed concurrently
    pub async fn update_status(&self, id: Uuid, status: &str) -> SalonResult<Appointment> {
        let target: AppointmentStatus = status.trim().parse()?;

        let current = self
            .store
            .find_appointment(id)
            .await?
            .ok_or_else(|| SalonError::NotFound(format!("Appointment with ID {} not found", id)))?;

        lifecycle::ensure_transition(current.status, target)?;
        if current.status == target {
            return Ok(current);
        }

        let updated = self
            .store
            .update_status(id, current.status, target)
            .await?
            .ok_or_else(|| {
                SalonError::Conflict(format!("Appointment {} was modified concurrently", id))
            })?;

        info!("Appointment {} moved from {} to {}", id, current.status, target);
        Ok(updated)
    }

    /// Non-cancelled appointments starting within the given calendar month.
    pub async fn appointments_in_month(
        &self,
        year: i32,
        month: u32,
    ) -> SalonResult<Vec<Appointment>> {
        let range = calendar::month_range(year, month)?;
        self.store.active_in_range(range, None).await
    }

    /// Non-cancelled appointments starting on `date`, optionally for one
    /// employee only.
    pub async fn appointments_in_day(
        &self,
        date: NaiveDate,
        employee_id: Option<Uuid>,
    ) -> SalonResult<Vec<Appointment>> {
        let range = calendar::day_range(date)?;
        self.store.active_in_range(range, employee_id).await
    }
}
